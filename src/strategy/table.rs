//! Override table rows for editors.

use super::adaptable::AdaptableStrategy;
use super::types::Strategy;
use crate::rule::RuleRef;
use std::collections::BTreeSet;

/// Sorted, distinct rule and group names seen in a set of candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub rule_names: Vec<String>,
    pub group_names: Vec<String>,
}

impl Catalog {
    /// Collects names from candidates. Rules without group metadata
    /// contribute only their name.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_adaptive_strategy::rule::RuleApp;
    /// use u_adaptive_strategy::strategy::Catalog;
    ///
    /// let apps = [
    ///     RuleApp::new("impRight").with_groups(["alpha"]),
    ///     RuleApp::new("andLeft").with_groups(["alpha", "simplify"]),
    ///     RuleApp::new("cut"),
    /// ];
    /// let catalog = Catalog::collect(&apps);
    /// assert_eq!(catalog.rule_names, ["andLeft", "cut", "impRight"]);
    /// assert_eq!(catalog.group_names, ["alpha", "simplify"]);
    /// ```
    pub fn collect<'a, R, I>(rules: I) -> Self
    where
        R: RuleRef + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut names = BTreeSet::new();
        let mut groups = BTreeSet::new();
        for rule in rules {
            names.insert(rule.name().to_owned());
            if let Some(gs) = rule.groups() {
                groups.extend(gs.iter().cloned());
            }
        }
        Self {
            rule_names: names.into_iter().collect(),
            group_names: groups.into_iter().collect(),
        }
    }
}

/// One editable row: the effective override values for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverrideRow {
    pub key: String,
    pub factor: i64,
    pub summand: i64,
    pub disabled: bool,
}

impl<S: Strategy> AdaptableStrategy<S> {
    /// Rows for rule names, with defaults filled in.
    ///
    /// `disabled` reports the effective state, so names rejected through a
    /// disabled group show as disabled once they have been seen.
    pub fn rule_rows<I, N>(&self, names: I) -> Vec<OverrideRow>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let table = self.adapter().name();
        names
            .into_iter()
            .map(|n| {
                let key = n.as_ref();
                OverrideRow {
                    key: key.to_owned(),
                    factor: table.factor(key),
                    summand: table.summand(key),
                    disabled: self.filter().is_rule_disabled(key),
                }
            })
            .collect()
    }

    /// Rows for group names, with defaults filled in.
    pub fn group_rows<I, N>(&self, names: I) -> Vec<OverrideRow>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let table = self.adapter().group();
        names
            .into_iter()
            .map(|n| {
                let key = n.as_ref();
                OverrideRow {
                    key: key.to_owned(),
                    factor: table.factor(key),
                    summand: table.summand(key),
                    disabled: self.filter().is_group_disabled(key),
                }
            })
            .collect()
    }

    /// Writes an edited rule row back.
    ///
    /// Only fields that differ from the current effective values are
    /// written, so writing back an unedited row leaves the stored overrides
    /// unchanged and never promotes a cached rejection to an explicit entry.
    pub fn apply_rule_row(&mut self, row: &OverrideRow) {
        let table = self.adapter().name();
        let factor_changed = table.factor(&row.key) != row.factor;
        let summand_changed = table.summand(&row.key) != row.summand;
        let disabled_changed = self.filter().is_rule_disabled(&row.key) != row.disabled;

        if factor_changed {
            self.set_rule_factor(row.key.clone(), row.factor);
        }
        if summand_changed {
            self.set_rule_summand(row.key.clone(), row.summand);
        }
        if disabled_changed {
            self.set_rule_disabled(row.key.clone(), row.disabled);
        }
    }

    /// Writes an edited group row back. Unchanged fields are not written.
    pub fn apply_group_row(&mut self, row: &OverrideRow) {
        let table = self.adapter().group();
        let factor_changed = table.factor(&row.key) != row.factor;
        let summand_changed = table.summand(&row.key) != row.summand;
        let disabled_changed = self.filter().is_group_disabled(&row.key) != row.disabled;

        if factor_changed {
            self.set_group_factor(row.key.clone(), row.factor);
        }
        if summand_changed {
            self.set_group_summand(row.key.clone(), row.summand);
        }
        if disabled_changed {
            self.set_group_disabled(row.key.clone(), row.disabled);
        }
    }
}
