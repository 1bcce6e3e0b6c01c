//! Core traits for cost adaptation.

use crate::cost::RuleCost;
use crate::rule::RuleRef;

/// Transforms the base cost of a candidate into an adjusted cost.
///
/// Implementations must be pure and total: they never mutate their
/// tables and never fail. Missing overrides mean "leave the cost alone".
pub trait CostAdapter {
    /// Computes the adjusted cost for `rule`, given its base cost.
    fn compute_cost<C: RuleCost, R: RuleRef + ?Sized>(&self, old_cost: C, rule: &R) -> C;
}

/// Extracts the override lookup key from a candidate.
pub trait KeyPolicy {
    /// Returns the lookup key for `rule`.
    fn key_of<'r, R: RuleRef + ?Sized>(&self, rule: &'r R) -> &'r str;
}

/// Looks overrides up by exact rule name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByName;

impl KeyPolicy for ByName {
    fn key_of<'r, R: RuleRef + ?Sized>(&self, rule: &'r R) -> &'r str {
        rule.name()
    }
}

/// Looks overrides up by the first group of the rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByPrimaryGroup;

impl KeyPolicy for ByPrimaryGroup {
    fn key_of<'r, R: RuleRef + ?Sized>(&self, rule: &'r R) -> &'r str {
        rule.primary_group()
    }
}
