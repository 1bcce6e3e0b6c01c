//! Group-then-name adapter composition.

use super::linear::LinearCostAdapter;
use super::types::{ByName, ByPrimaryGroup, CostAdapter};
use crate::config::{Entry, Scope, Setting};
use crate::cost::RuleCost;
use crate::rule::RuleRef;

/// Applies the group adapter first, then the name adapter.
///
/// # Examples
///
/// ```
/// use u_adaptive_strategy::adapter::{CostAdapter, NameAndGroupCostAdapter};
/// use u_adaptive_strategy::cost::Cost;
/// use u_adaptive_strategy::rule::RuleApp;
///
/// let adapter = NameAndGroupCostAdapter::from_properties([
///     ("ruleset.simplify.summand", "50"),
///     ("rule.foo.factor", "2"),
/// ]);
///
/// let foo = RuleApp::new("foo").with_groups(["simplify"]);
/// // (100 + 50) * 2
/// assert_eq!(adapter.compute_cost(Cost::Finite(100), &foo), Cost::Finite(300));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameAndGroupCostAdapter {
    group: LinearCostAdapter<ByPrimaryGroup>,
    name: LinearCostAdapter<ByName>,
}

impl NameAndGroupCostAdapter {
    /// Creates an adapter with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an adapter from flat key/value pairs.
    ///
    /// Only factor and summand entries are read; everything else is ignored.
    pub fn from_properties<I, K, V>(config: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut adapter = Self::new();
        for (key, value) in config {
            match Entry::parse(key.as_ref(), value.as_ref()) {
                Ok(entry) => {
                    adapter.apply(&entry);
                }
                Err(err) => tracing::debug!(%err, "skipping override entry"),
            }
        }
        adapter
    }

    /// Table keyed by primary group.
    pub fn group(&self) -> &LinearCostAdapter<ByPrimaryGroup> {
        &self.group
    }

    /// Mutable table keyed by primary group.
    pub fn group_mut(&mut self) -> &mut LinearCostAdapter<ByPrimaryGroup> {
        &mut self.group
    }

    /// Table keyed by rule name.
    pub fn name(&self) -> &LinearCostAdapter<ByName> {
        &self.name
    }

    /// Mutable table keyed by rule name.
    pub fn name_mut(&mut self) -> &mut LinearCostAdapter<ByName> {
        &mut self.name
    }

    /// Applies a factor or summand entry.
    ///
    /// Returns `false` for entries this adapter does not own (`disabled`).
    pub fn apply(&mut self, entry: &Entry) -> bool {
        let name = entry.name.clone();
        match (entry.scope, entry.setting) {
            (Scope::RuleSet, Setting::Factor(v)) => self.group.set_factor(name, v),
            (Scope::RuleSet, Setting::Summand(v)) => self.group.set_summand(name, v),
            (Scope::Rule, Setting::Factor(v)) => self.name.set_factor(name, v),
            (Scope::Rule, Setting::Summand(v)) => self.name.set_summand(name, v),
            (_, Setting::Disabled(_)) => return false,
        }
        true
    }

    /// Lists every configured factor and summand as entries.
    pub fn entries(&self) -> Vec<Entry> {
        let mut out = Vec::new();
        for (k, &v) in self.group.factors() {
            out.push(Entry::new(Scope::RuleSet, k.clone(), Setting::Factor(v)));
        }
        for (k, &v) in self.group.summands() {
            out.push(Entry::new(Scope::RuleSet, k.clone(), Setting::Summand(v)));
        }
        for (k, &v) in self.name.factors() {
            out.push(Entry::new(Scope::Rule, k.clone(), Setting::Factor(v)));
        }
        for (k, &v) in self.name.summands() {
            out.push(Entry::new(Scope::Rule, k.clone(), Setting::Summand(v)));
        }
        out
    }

    /// Writes every configured factor and summand as key/value pairs.
    pub fn store_into<E: Extend<(String, String)>>(&self, config: &mut E) {
        config.extend(self.entries().iter().map(Entry::to_pair));
    }

    /// Returns `true` if neither table has an override.
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.name.is_empty()
    }

    /// Removes all overrides from both tables.
    pub fn clear(&mut self) {
        self.group.clear();
        self.name.clear();
    }
}

impl CostAdapter for NameAndGroupCostAdapter {
    fn compute_cost<C: RuleCost, R: RuleRef + ?Sized>(&self, old_cost: C, rule: &R) -> C {
        self.name
            .compute_cost(self.group.compute_cost(old_cost, rule), rule)
    }
}
