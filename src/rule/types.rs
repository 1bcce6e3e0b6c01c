//! Core trait for candidate rule applications.

/// Read-only view of a candidate rule application.
///
/// # Examples
///
/// ```ignore
/// // A rewriting engine whose rules may or may not be grouped.
/// impl RuleRef for TacletApp {
///     fn name(&self) -> &str { self.taclet.name() }
///     fn groups(&self) -> Option<&[String]> {
///         self.taclet.rule_sets()
///     }
/// }
/// ```
pub trait RuleRef {
    /// Returns the rule name.
    fn name(&self) -> &str;

    /// Returns the groups this rule belongs to, in declaration order.
    ///
    /// Rules that do not carry group metadata return `None` (the default).
    fn groups(&self) -> Option<&[String]> {
        None
    }

    /// Returns the first group, or `""` when the rule has none.
    fn primary_group(&self) -> &str {
        self.groups()
            .and_then(|g| g.first())
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl<R: RuleRef + ?Sized> RuleRef for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn groups(&self) -> Option<&[String]> {
        (**self).groups()
    }
}

/// An owned candidate record.
///
/// Engines that do not want to implement [`RuleRef`] on their own types
/// can hand these over instead.
///
/// # Examples
///
/// ```
/// use u_adaptive_strategy::rule::{RuleApp, RuleRef};
///
/// let app = RuleApp::new("andLeft").with_groups(["alpha", "simplify"]);
/// assert_eq!(app.name(), "andLeft");
/// assert_eq!(app.primary_group(), "alpha");
///
/// let builtin = RuleApp::new("oneStepSimplifier");
/// assert!(builtin.groups().is_none());
/// assert_eq!(builtin.primary_group(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleApp {
    /// Rule name.
    pub name: String,

    /// Group memberships, or `None` when the rule carries no group metadata.
    pub groups: Option<Vec<String>>,
}

impl RuleApp {
    /// Creates a candidate without group metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: None,
        }
    }

    /// Attaches group memberships.
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }
}

impl RuleRef for RuleApp {
    fn name(&self) -> &str {
        &self.name
    }

    fn groups(&self) -> Option<&[String]> {
        self.groups.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rule type that never carries groups
    struct Builtin(&'static str);

    impl RuleRef for Builtin {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_default_groups_is_none() {
        let rule = Builtin("cut");
        assert!(rule.groups().is_none());
        assert_eq!(rule.primary_group(), "");
    }

    #[test]
    fn test_primary_group_is_first() {
        let app = RuleApp::new("impRight").with_groups(["beta", "alpha"]);
        assert_eq!(app.primary_group(), "beta");
    }

    #[test]
    fn test_empty_group_list() {
        let app = RuleApp::new("close").with_groups(Vec::<String>::new());
        assert_eq!(app.groups(), Some(&[][..]));
        assert_eq!(app.primary_group(), "");
    }

    #[test]
    fn test_reference_forwards() {
        let app = RuleApp::new("eqSymm").with_groups(["order_terms"]);
        let by_ref = &app;
        assert_eq!(RuleRef::name(&by_ref), "eqSymm");
        assert_eq!(by_ref.primary_group(), "order_terms");
    }
}
