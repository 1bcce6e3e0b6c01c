//! Adaptable strategy facade.

use super::types::Strategy;
use crate::adapter::{CostAdapter, NameAndGroupCostAdapter};
use crate::config::{Entry, OverrideSnapshot, Scope, Setting};
use crate::filter::RuleFilter;

/// Wraps a base strategy with rule filtering and cost overrides.
///
/// Per candidate, the filter runs first; candidates it does not reject are
/// passed to the base strategy's own admission check. Costs are computed by
/// the base strategy and then adjusted by the group adapter followed by the
/// name adapter.
///
/// A fresh facade behaves exactly like its base strategy. Overrides
/// accumulate through [`load_from`](Self::load_from) and the `set_*`
/// methods until [`reset`](Self::reset).
///
/// One facade owns its override tables exclusively; use one facade per
/// search session.
///
/// # Examples
///
/// ```
/// use u_adaptive_strategy::cost::Cost;
/// use u_adaptive_strategy::rule::RuleApp;
/// use u_adaptive_strategy::strategy::{AdaptableStrategy, Strategy};
///
/// struct Flat;
///
/// impl Strategy for Flat {
///     type Rule = RuleApp;
///     type Cost = Cost;
///     fn name(&self) -> &str { "Flat" }
///     fn is_allowed(&mut self, _rule: &RuleApp) -> bool { true }
///     fn compute_cost(&self, _rule: &RuleApp) -> Cost { Cost::Finite(100) }
/// }
///
/// let mut strategy = AdaptableStrategy::new(Flat).with_properties([
///     ("rule.foo.factor", "2"),
///     ("rule.foo.summand", "10"),
///     ("ruleset.simplify.disabled", "true"),
/// ]);
///
/// let foo = RuleApp::new("foo");
/// assert!(strategy.is_allowed(&foo));
/// assert_eq!(strategy.compute_cost(&foo), Cost::Finite(210));
///
/// let bar = RuleApp::new("bar").with_groups(["simplify"]);
/// assert!(!strategy.is_allowed(&bar));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptableStrategy<S> {
    base: S,
    filter: RuleFilter,
    adapter: NameAndGroupCostAdapter,
    configured: bool,
}

impl<S: Strategy> AdaptableStrategy<S> {
    /// Wraps `base` with empty override tables.
    pub fn new(base: S) -> Self {
        Self {
            base,
            filter: RuleFilter::new(),
            adapter: NameAndGroupCostAdapter::new(),
            configured: false,
        }
    }

    /// Loads flat key/value overrides (see [`load_from`](Self::load_from)).
    pub fn with_properties<I, K, V>(mut self, config: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.load_from(config);
        self
    }

    /// The wrapped strategy.
    pub fn base(&self) -> &S {
        &self.base
    }

    /// Mutable access to the wrapped strategy.
    pub fn base_mut(&mut self) -> &mut S {
        &mut self.base
    }

    /// Unwraps the base strategy, discarding all overrides.
    pub fn into_base(self) -> S {
        self.base
    }

    /// The name and group admission filter.
    pub fn filter(&self) -> &RuleFilter {
        &self.filter
    }

    /// The group and name cost tables.
    pub fn adapter(&self) -> &NameAndGroupCostAdapter {
        &self.adapter
    }

    /// Returns `true` once overrides have been loaded or edited, until
    /// the next [`reset`](Self::reset).
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Merges flat key/value overrides into the current state.
    ///
    /// Keys present in `config` replace earlier values; other keys are left
    /// untouched. Malformed entries and unknown prefixes are skipped.
    /// Returns the number of entries applied.
    pub fn load_from<I, K, V>(&mut self, config: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.configured = true;

        let mut applied = 0;
        let mut skipped = 0;
        for (key, value) in config {
            match Entry::parse(key.as_ref(), value.as_ref()) {
                Ok(entry) => {
                    self.apply(&entry);
                    applied += 1;
                }
                Err(err) => {
                    tracing::debug!(%err, "skipping override entry");
                    skipped += 1;
                }
            }
        }

        tracing::debug!(applied, skipped, "loaded strategy overrides");
        applied
    }

    /// Writes every explicit override as flat key/value pairs.
    ///
    /// Names that are only disabled through the rejection cache are not
    /// written.
    pub fn store_into<E: Extend<(String, String)>>(&self, config: &mut E) {
        self.adapter.store_into(config);
        config.extend(self.filter.entries().iter().map(Entry::to_pair));
    }

    /// Returns a sorted copy of every explicit override.
    pub fn snapshot(&self) -> OverrideSnapshot {
        let group = self.adapter.group();
        let name = self.adapter.name();
        OverrideSnapshot {
            rule_factors: name.factors().iter().map(|(k, &v)| (k.clone(), v)).collect(),
            rule_summands: name.summands().iter().map(|(k, &v)| (k.clone(), v)).collect(),
            group_factors: group.factors().iter().map(|(k, &v)| (k.clone(), v)).collect(),
            group_summands: group.summands().iter().map(|(k, &v)| (k.clone(), v)).collect(),
            disabled_rules: self.filter.disabled_rules().map(str::to_owned).collect(),
            disabled_groups: self.filter.disabled_groups().map(str::to_owned).collect(),
        }
    }

    /// Merges a snapshot into the current state.
    pub fn load_snapshot(&mut self, snapshot: &OverrideSnapshot) {
        self.configured = true;
        for entry in snapshot.entries() {
            self.apply(&entry);
        }
    }

    /// Sets the factor applied to costs of rule `name`.
    pub fn set_rule_factor(&mut self, name: impl Into<String>, factor: i64) {
        self.edit(Entry::new(Scope::Rule, name, Setting::Factor(factor)));
    }

    /// Sets the summand added to costs of rule `name`.
    pub fn set_rule_summand(&mut self, name: impl Into<String>, summand: i64) {
        self.edit(Entry::new(Scope::Rule, name, Setting::Summand(summand)));
    }

    /// Enables or disables rule `name`.
    pub fn set_rule_disabled(&mut self, name: impl Into<String>, disabled: bool) {
        self.edit(Entry::new(Scope::Rule, name, Setting::Disabled(disabled)));
    }

    /// Sets the factor for rules whose primary group is `group`.
    pub fn set_group_factor(&mut self, group: impl Into<String>, factor: i64) {
        self.edit(Entry::new(Scope::RuleSet, group, Setting::Factor(factor)));
    }

    /// Sets the summand for rules whose primary group is `group`.
    pub fn set_group_summand(&mut self, group: impl Into<String>, summand: i64) {
        self.edit(Entry::new(Scope::RuleSet, group, Setting::Summand(summand)));
    }

    /// Enables or disables every rule in `group`.
    ///
    /// Re-enabling a group drops the rejection cache.
    pub fn set_group_disabled(&mut self, group: impl Into<String>, disabled: bool) {
        self.edit(Entry::new(Scope::RuleSet, group, Setting::Disabled(disabled)));
    }

    /// Clears every override and the rejection cache.
    pub fn reset(&mut self) {
        self.filter.clear();
        self.adapter.clear();
        self.configured = false;
    }

    fn edit(&mut self, entry: Entry) {
        self.configured = true;
        self.apply(&entry);
    }

    fn apply(&mut self, entry: &Entry) {
        if !self.adapter.apply(entry) {
            self.filter.apply(entry);
        }
    }
}

impl<S: Strategy> Strategy for AdaptableStrategy<S> {
    type Rule = S::Rule;
    type Cost = S::Cost;

    fn name(&self) -> &str {
        "AdaptableStrategy"
    }

    fn is_allowed(&mut self, rule: &Self::Rule) -> bool {
        if self.filter.rejects(rule) {
            return false;
        }
        self.base.is_allowed(rule)
    }

    fn compute_cost(&self, rule: &Self::Rule) -> Self::Cost {
        self.adapter.compute_cost(self.base.compute_cost(rule), rule)
    }

    fn stop_at_first_non_closable_goal(&self) -> bool {
        self.base.stop_at_first_non_closable_goal()
    }
}
