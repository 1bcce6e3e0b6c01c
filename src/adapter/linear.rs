//! Linear cost adapter.

use super::types::{CostAdapter, KeyPolicy};
use crate::cost::RuleCost;
use crate::rule::RuleRef;
use std::collections::HashMap;

/// Computes `old * factor + summand` with per-key overrides.
///
/// Missing keys use `factor = 1` and `summand = 0`. A factor of `0`
/// returns the zero cost and skips the summand.
///
/// # Examples
///
/// ```
/// use u_adaptive_strategy::adapter::{ByName, CostAdapter, LinearCostAdapter};
/// use u_adaptive_strategy::cost::Cost;
/// use u_adaptive_strategy::rule::RuleApp;
///
/// let adapter = LinearCostAdapter::new(ByName)
///     .with_factor("foo", 2)
///     .with_summand("foo", 10);
///
/// let foo = RuleApp::new("foo");
/// assert_eq!(adapter.compute_cost(Cost::Finite(100), &foo), Cost::Finite(210));
///
/// let bar = RuleApp::new("bar");
/// assert_eq!(adapter.compute_cost(Cost::Finite(100), &bar), Cost::Finite(100));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearCostAdapter<K> {
    key_policy: K,
    factors: HashMap<String, i64>,
    summands: HashMap<String, i64>,
}

impl<K: KeyPolicy> LinearCostAdapter<K> {
    /// Creates an adapter with empty override tables.
    pub fn new(key_policy: K) -> Self {
        Self {
            key_policy,
            factors: HashMap::new(),
            summands: HashMap::new(),
        }
    }

    /// Sets the factor for `key`.
    pub fn with_factor(mut self, key: impl Into<String>, factor: i64) -> Self {
        self.set_factor(key, factor);
        self
    }

    /// Sets the summand for `key`.
    pub fn with_summand(mut self, key: impl Into<String>, summand: i64) -> Self {
        self.set_summand(key, summand);
        self
    }

    /// Sets the factor for `key` in place.
    pub fn set_factor(&mut self, key: impl Into<String>, factor: i64) {
        self.factors.insert(key.into(), factor);
    }

    /// Sets the summand for `key` in place.
    pub fn set_summand(&mut self, key: impl Into<String>, summand: i64) {
        self.summands.insert(key.into(), summand);
    }

    /// Returns the factor for `key`, defaulting to 1.
    pub fn factor(&self, key: &str) -> i64 {
        self.factors.get(key).copied().unwrap_or(1)
    }

    /// Returns the summand for `key`, defaulting to 0.
    pub fn summand(&self, key: &str) -> i64 {
        self.summands.get(key).copied().unwrap_or(0)
    }

    /// Explicitly configured factors.
    pub fn factors(&self) -> &HashMap<String, i64> {
        &self.factors
    }

    /// Explicitly configured summands.
    pub fn summands(&self) -> &HashMap<String, i64> {
        &self.summands
    }

    /// Returns `true` if no override is configured.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty() && self.summands.is_empty()
    }

    /// Removes all overrides.
    pub fn clear(&mut self) {
        self.factors.clear();
        self.summands.clear();
    }
}

impl<K: KeyPolicy> CostAdapter for LinearCostAdapter<K> {
    fn compute_cost<C: RuleCost, R: RuleRef + ?Sized>(&self, old_cost: C, rule: &R) -> C {
        if self.is_empty() {
            return old_cost;
        }

        let key = self.key_policy.key_of(rule);
        let factor = self.factor(key);
        if factor == 0 {
            return C::zero();
        }

        let summand = self.summand(key);
        if factor == 1 && summand == 0 {
            return old_cost;
        }

        old_cost
            .multiply(&C::from_integer(factor))
            .add(&C::from_integer(summand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{ByName, ByPrimaryGroup};
    use crate::cost::Cost;
    use crate::rule::RuleApp;

    #[test]
    fn test_defaults() {
        let adapter = LinearCostAdapter::new(ByName);
        assert_eq!(adapter.factor("missing"), 1);
        assert_eq!(adapter.summand("missing"), 0);
        assert!(adapter.is_empty());
    }

    #[test]
    fn test_factor_and_summand() {
        let adapter = LinearCostAdapter::new(ByName)
            .with_factor("foo", 3)
            .with_summand("foo", -5);
        let foo = RuleApp::new("foo");
        assert_eq!(adapter.compute_cost(Cost::Finite(10), &foo), Cost::Finite(25));
        assert_eq!(adapter.compute_cost(10i64, &foo), 25);
    }

    #[test]
    fn test_summand_only() {
        let adapter = LinearCostAdapter::new(ByName).with_summand("foo", 7);
        let foo = RuleApp::new("foo");
        assert_eq!(adapter.compute_cost(Cost::Finite(1), &foo), Cost::Finite(8));
    }

    #[test]
    fn test_zero_factor_suppresses() {
        let adapter = LinearCostAdapter::new(ByName)
            .with_factor("foo", 0)
            .with_summand("foo", 1000);
        let foo = RuleApp::new("foo");
        assert!(adapter.compute_cost(Cost::Finite(999), &foo).is_zero());
        assert!(adapter.compute_cost(Cost::Top, &foo).is_zero());
        assert!(adapter.compute_cost(Cost::zero(), &foo).is_zero());
    }

    #[test]
    fn test_group_key_misses_without_groups() {
        let adapter = LinearCostAdapter::new(ByPrimaryGroup).with_factor("simplify", 4);
        let grouped = RuleApp::new("foo").with_groups(["simplify", "other"]);
        let secondary = RuleApp::new("foo").with_groups(["other", "simplify"]);
        let ungrouped = RuleApp::new("foo");

        assert_eq!(adapter.compute_cost(Cost::Finite(5), &grouped), Cost::Finite(20));
        // only the first group is consulted
        assert_eq!(adapter.compute_cost(Cost::Finite(5), &secondary), Cost::Finite(5));
        assert_eq!(adapter.compute_cost(Cost::Finite(5), &ungrouped), Cost::Finite(5));
    }

    #[test]
    fn test_top_stays_top() {
        let adapter = LinearCostAdapter::new(ByName)
            .with_factor("foo", 2)
            .with_summand("foo", -100);
        let foo = RuleApp::new("foo");
        assert_eq!(adapter.compute_cost(Cost::Top, &foo), Cost::Top);
    }

    #[test]
    fn test_clear() {
        let mut adapter = LinearCostAdapter::new(ByName).with_factor("foo", 2);
        adapter.clear();
        assert!(adapter.is_empty());
        assert_eq!(adapter.factor("foo"), 1);
    }
}
