//! Structured view of the override state.

use super::key::{Entry, Scope, Setting};
use std::collections::{BTreeMap, BTreeSet};

/// All explicitly configured overrides, in sorted form.
///
/// The rejection cache kept by the filter is not part of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverrideSnapshot {
    pub rule_factors: BTreeMap<String, i64>,
    pub rule_summands: BTreeMap<String, i64>,
    pub group_factors: BTreeMap<String, i64>,
    pub group_summands: BTreeMap<String, i64>,
    pub disabled_rules: BTreeSet<String>,
    pub disabled_groups: BTreeSet<String>,
}

impl OverrideSnapshot {
    /// Returns `true` if no override is recorded.
    pub fn is_empty(&self) -> bool {
        self.rule_factors.is_empty()
            && self.rule_summands.is_empty()
            && self.group_factors.is_empty()
            && self.group_summands.is_empty()
            && self.disabled_rules.is_empty()
            && self.disabled_groups.is_empty()
    }

    /// Lists the snapshot as configuration entries, ordered by table.
    pub fn entries(&self) -> Vec<Entry> {
        let mut out = Vec::new();
        for (name, &v) in &self.group_factors {
            out.push(Entry::new(Scope::RuleSet, name.clone(), Setting::Factor(v)));
        }
        for (name, &v) in &self.group_summands {
            out.push(Entry::new(Scope::RuleSet, name.clone(), Setting::Summand(v)));
        }
        for name in &self.disabled_groups {
            out.push(Entry::new(Scope::RuleSet, name.clone(), Setting::Disabled(true)));
        }
        for (name, &v) in &self.rule_factors {
            out.push(Entry::new(Scope::Rule, name.clone(), Setting::Factor(v)));
        }
        for (name, &v) in &self.rule_summands {
            out.push(Entry::new(Scope::Rule, name.clone(), Setting::Summand(v)));
        }
        for name in &self.disabled_rules {
            out.push(Entry::new(Scope::Rule, name.clone(), Setting::Disabled(true)));
        }
        out
    }

    /// Flattens the snapshot into the key/value format.
    pub fn to_properties(&self) -> BTreeMap<String, String> {
        self.entries().iter().map(Entry::to_pair).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let snap = OverrideSnapshot::default();
        assert!(snap.is_empty());
        assert!(snap.entries().is_empty());
    }

    #[test]
    fn test_to_properties() {
        let mut snap = OverrideSnapshot::default();
        snap.rule_factors.insert("foo".into(), 2);
        snap.group_summands.insert("simplify".into(), 50);
        snap.disabled_groups.insert("expand".into());

        let props = snap.to_properties();
        assert_eq!(props.len(), 3);
        assert_eq!(props["rule.foo.factor"], "2");
        assert_eq!(props["ruleset.simplify.summand"], "50");
        assert_eq!(props["ruleset.expand.disabled"], "true");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json() {
        let mut snap = OverrideSnapshot::default();
        snap.rule_summands.insert("bar".into(), -3);
        snap.disabled_rules.insert("cut".into());

        let json = serde_json::to_string(&snap).unwrap();
        let back: OverrideSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
