//! Disabled-name and disabled-group sets.

use crate::config::{Entry, Scope, Setting};
use crate::rule::RuleRef;
use std::collections::HashSet;

/// Binary admission gate keyed by rule name and rule group.
///
/// # Examples
///
/// ```
/// use u_adaptive_strategy::filter::RuleFilter;
/// use u_adaptive_strategy::rule::RuleApp;
///
/// let mut filter = RuleFilter::new().with_disabled_group("simplify");
///
/// let foo = RuleApp::new("foo").with_groups(["simplify"]);
/// assert!(filter.rejects(&foo));
///
/// // The name is now cached, even for a candidate without group info.
/// assert!(filter.rejects(&RuleApp::new("foo")));
/// assert!(!filter.rejects(&RuleApp::new("bar")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleFilter {
    disabled_names: HashSet<String>,
    disabled_groups: HashSet<String>,
    /// Names in `disabled_names` that were added by a group rejection.
    cached_names: HashSet<String>,
}

impl RuleFilter {
    /// Creates a filter that admits everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables a rule by exact name.
    pub fn with_disabled_rule(mut self, name: impl Into<String>) -> Self {
        self.set_rule_disabled(name, true);
        self
    }

    /// Disables a rule group.
    pub fn with_disabled_group(mut self, group: impl Into<String>) -> Self {
        self.set_group_disabled(group, true);
        self
    }

    /// Returns `true` if the candidate must not be used.
    ///
    /// Group membership is only inspected when at least one group is
    /// disabled.
    pub fn rejects<R: RuleRef + ?Sized>(&mut self, rule: &R) -> bool {
        let name = rule.name();
        if self.disabled_names.contains(name) {
            return true;
        }

        if self.disabled_groups.is_empty() {
            return false;
        }

        let hit = rule.groups().and_then(|groups| {
            groups
                .iter()
                .find(|g| self.disabled_groups.contains(g.as_str()))
        });

        match hit {
            Some(group) => {
                tracing::trace!(rule = name, group = %group, "rule rejected by disabled group");
                self.disabled_names.insert(name.to_owned());
                self.cached_names.insert(name.to_owned());
                true
            }
            None => false,
        }
    }

    /// Enables or disables a rule by exact name.
    pub fn set_rule_disabled(&mut self, name: impl Into<String>, disabled: bool) {
        let name = name.into();
        self.cached_names.remove(&name);
        if disabled {
            self.disabled_names.insert(name);
        } else {
            self.disabled_names.remove(&name);
        }
    }

    /// Enables or disables a rule group.
    ///
    /// Re-enabling a group drops the rejection cache.
    pub fn set_group_disabled(&mut self, group: impl Into<String>, disabled: bool) {
        let group = group.into();
        if disabled {
            self.disabled_groups.insert(group);
        } else if self.disabled_groups.remove(&group) {
            self.invalidate_cache();
        }
    }

    /// Applies a `disabled` entry.
    ///
    /// Returns `false` for entries the filter does not own.
    pub fn apply(&mut self, entry: &Entry) -> bool {
        match (entry.scope, entry.setting) {
            (Scope::Rule, Setting::Disabled(d)) => self.set_rule_disabled(entry.name.clone(), d),
            (Scope::RuleSet, Setting::Disabled(d)) => {
                self.set_group_disabled(entry.name.clone(), d)
            }
            _ => return false,
        }
        true
    }

    /// Returns `true` if `name` is disabled, explicitly or through the cache.
    pub fn is_rule_disabled(&self, name: &str) -> bool {
        self.disabled_names.contains(name)
    }

    /// Returns `true` if `group` is disabled.
    pub fn is_group_disabled(&self, group: &str) -> bool {
        self.disabled_groups.contains(group)
    }

    /// Explicitly disabled rule names, without cached entries.
    pub fn disabled_rules(&self) -> impl Iterator<Item = &str> {
        self.disabled_names
            .iter()
            .filter(|n| !self.cached_names.contains(n.as_str()))
            .map(String::as_str)
    }

    /// Disabled group names.
    pub fn disabled_groups(&self) -> impl Iterator<Item = &str> {
        self.disabled_groups.iter().map(String::as_str)
    }

    /// Names currently held only by the rejection cache.
    pub fn cached_rules(&self) -> impl Iterator<Item = &str> {
        self.cached_names.iter().map(String::as_str)
    }

    /// Lists explicit `disabled` entries.
    pub fn entries(&self) -> Vec<Entry> {
        let rules = self
            .disabled_rules()
            .map(|n| Entry::new(Scope::Rule, n, Setting::Disabled(true)));
        let groups = self
            .disabled_groups()
            .map(|g| Entry::new(Scope::RuleSet, g, Setting::Disabled(true)));
        rules.chain(groups).collect()
    }

    /// Returns `true` if nothing is explicitly disabled.
    pub fn is_empty(&self) -> bool {
        self.disabled_groups.is_empty() && self.disabled_names.len() == self.cached_names.len()
    }

    /// Enables everything and drops the rejection cache.
    pub fn clear(&mut self) {
        self.disabled_names.clear();
        self.disabled_groups.clear();
        self.cached_names.clear();
    }

    fn invalidate_cache(&mut self) {
        if self.cached_names.is_empty() {
            return;
        }
        tracing::debug!(count = self.cached_names.len(), "dropping rejection cache");
        for name in self.cached_names.drain() {
            self.disabled_names.remove(&name);
        }
    }
}
