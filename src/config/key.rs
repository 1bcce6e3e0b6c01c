//! Key grammar and value parsing.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while reading a single configuration entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown key prefix: {0}")]
    UnknownScope(String),

    #[error("key has no field segment: {0}")]
    MissingField(String),

    #[error("unknown field `{field}` in key {key}")]
    UnknownField { key: String, field: String },

    #[error("empty name in key {0}")]
    EmptyName(String),

    #[error("invalid integer `{value}` for {key}: {source}")]
    InvalidInteger {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid boolean `{value}` for {key}")]
    InvalidBool { key: String, value: String },
}

/// Which override table a key addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Exact rule name (`rule.` prefix).
    Rule,

    /// Rule group (`ruleset.` prefix).
    RuleSet,
}

impl Scope {
    /// Returns the key prefix, including the trailing dot.
    pub fn prefix(self) -> &'static str {
        match self {
            Scope::Rule => "rule.",
            Scope::RuleSet => "ruleset.",
        }
    }
}

/// Which value of an override a key addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Factor,
    Summand,
    Disabled,
}

impl Field {
    /// Returns the key suffix, without the leading dot.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Factor => "factor",
            Field::Summand => "summand",
            Field::Disabled => "disabled",
        }
    }
}

/// A parsed configuration key such as `ruleset.simplify.factor`.
///
/// # Examples
///
/// ```
/// use u_adaptive_strategy::config::{Field, OverrideKey, Scope};
///
/// let key: OverrideKey = "rule.apply_eq.boolean.disabled".parse().unwrap();
/// assert_eq!(key.scope, Scope::Rule);
/// assert_eq!(key.name, "apply_eq.boolean");
/// assert_eq!(key.field, Field::Disabled);
/// assert_eq!(key.to_string(), "rule.apply_eq.boolean.disabled");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverrideKey {
    pub scope: Scope,
    pub name: String,
    pub field: Field,
}

impl OverrideKey {
    /// Creates a key for `name` in the given table.
    pub fn new(scope: Scope, name: impl Into<String>, field: Field) -> Self {
        Self {
            scope,
            name: name.into(),
            field,
        }
    }
}

impl FromStr for OverrideKey {
    type Err = ConfigError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let (scope, rest) = if let Some(rest) = key.strip_prefix(Scope::RuleSet.prefix()) {
            (Scope::RuleSet, rest)
        } else if let Some(rest) = key.strip_prefix(Scope::Rule.prefix()) {
            (Scope::Rule, rest)
        } else {
            return Err(ConfigError::UnknownScope(key.to_owned()));
        };

        let (name, field) = rest
            .rsplit_once('.')
            .ok_or_else(|| ConfigError::MissingField(key.to_owned()))?;

        let field = match field {
            "factor" => Field::Factor,
            "summand" => Field::Summand,
            "disabled" => Field::Disabled,
            other => {
                return Err(ConfigError::UnknownField {
                    key: key.to_owned(),
                    field: other.to_owned(),
                })
            }
        };

        if name.is_empty() {
            return Err(ConfigError::EmptyName(key.to_owned()));
        }

        Ok(Self::new(scope, name, field))
    }
}

impl fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{}", self.scope.prefix(), self.name, self.field.as_str())
    }
}

/// A typed override value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Factor(i64),
    Summand(i64),
    Disabled(bool),
}

impl Setting {
    /// The field this value belongs to.
    pub fn field(self) -> Field {
        match self {
            Setting::Factor(_) => Field::Factor,
            Setting::Summand(_) => Field::Summand,
            Setting::Disabled(_) => Field::Disabled,
        }
    }

    fn value_string(self) -> String {
        match self {
            Setting::Factor(v) | Setting::Summand(v) => v.to_string(),
            Setting::Disabled(b) => b.to_string(),
        }
    }
}

/// One fully parsed configuration entry.
///
/// # Examples
///
/// ```
/// use u_adaptive_strategy::config::{Entry, Scope, Setting};
///
/// let entry = Entry::parse("ruleset.simplify.summand", " -15 ").unwrap();
/// assert_eq!(entry.scope, Scope::RuleSet);
/// assert_eq!(entry.name, "simplify");
/// assert_eq!(entry.setting, Setting::Summand(-15));
///
/// assert!(Entry::parse("rule.foo.factor", "twice").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub scope: Scope,
    pub name: String,
    pub setting: Setting,
}

impl Entry {
    /// Creates an entry from its parts.
    pub fn new(scope: Scope, name: impl Into<String>, setting: Setting) -> Self {
        Self {
            scope,
            name: name.into(),
            setting,
        }
    }

    /// Parses a key/value pair.
    pub fn parse(key: &str, value: &str) -> Result<Self, ConfigError> {
        let parsed: OverrideKey = key.parse()?;
        let raw = value.trim();

        let setting = match parsed.field {
            Field::Factor | Field::Summand => {
                let v = raw
                    .parse::<i64>()
                    .map_err(|source| ConfigError::InvalidInteger {
                        key: key.to_owned(),
                        value: value.to_owned(),
                        source,
                    })?;
                if parsed.field == Field::Factor {
                    Setting::Factor(v)
                } else {
                    Setting::Summand(v)
                }
            }
            Field::Disabled => {
                if raw.eq_ignore_ascii_case("true") {
                    Setting::Disabled(true)
                } else if raw.eq_ignore_ascii_case("false") {
                    Setting::Disabled(false)
                } else {
                    return Err(ConfigError::InvalidBool {
                        key: key.to_owned(),
                        value: value.to_owned(),
                    });
                }
            }
        };

        Ok(Self::new(parsed.scope, parsed.name, setting))
    }

    /// Returns the key this entry is stored under.
    pub fn key(&self) -> OverrideKey {
        OverrideKey::new(self.scope, self.name.clone(), self.setting.field())
    }

    /// Renders the entry back into a key/value pair.
    pub fn to_pair(&self) -> (String, String) {
        (self.key().to_string(), self.setting.value_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_fields() {
        for (key, scope, field) in [
            ("rule.a.factor", Scope::Rule, Field::Factor),
            ("rule.a.summand", Scope::Rule, Field::Summand),
            ("rule.a.disabled", Scope::Rule, Field::Disabled),
            ("ruleset.a.factor", Scope::RuleSet, Field::Factor),
            ("ruleset.a.summand", Scope::RuleSet, Field::Summand),
            ("ruleset.a.disabled", Scope::RuleSet, Field::Disabled),
        ] {
            let parsed: OverrideKey = key.parse().unwrap();
            assert_eq!(parsed, OverrideKey::new(scope, "a", field));
            assert_eq!(parsed.to_string(), key);
        }
    }

    #[test]
    fn test_dotted_names() {
        let parsed: OverrideKey = "ruleset.java.lang.factor".parse().unwrap();
        assert_eq!(parsed.name, "java.lang");
    }

    #[test]
    fn test_malformed_keys() {
        assert_eq!(
            "strategy.foo.factor".parse::<OverrideKey>(),
            Err(ConfigError::UnknownScope("strategy.foo.factor".into()))
        );
        assert_eq!(
            "rule.foo".parse::<OverrideKey>(),
            Err(ConfigError::MissingField("rule.foo".into()))
        );
        assert_eq!(
            "rule..factor".parse::<OverrideKey>(),
            Err(ConfigError::EmptyName("rule..factor".into()))
        );
        assert!(matches!(
            "rule.foo.weight".parse::<OverrideKey>(),
            Err(ConfigError::UnknownField { .. })
        ));
        // `rules.` is not `rule.`
        assert!("rules.foo.factor".parse::<OverrideKey>().is_err());
    }

    #[test]
    fn test_bool_values() {
        let on = Entry::parse("rule.x.disabled", "TRUE").unwrap();
        assert_eq!(on.setting, Setting::Disabled(true));
        let off = Entry::parse("ruleset.x.disabled", " false").unwrap();
        assert_eq!(off.setting, Setting::Disabled(false));
        assert!(matches!(
            Entry::parse("rule.x.disabled", "yes"),
            Err(ConfigError::InvalidBool { .. })
        ));
    }

    #[test]
    fn test_integer_errors() {
        assert!(matches!(
            Entry::parse("rule.x.factor", "1.5"),
            Err(ConfigError::InvalidInteger { .. })
        ));
        assert!(matches!(
            Entry::parse("rule.x.summand", ""),
            Err(ConfigError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_to_pair() {
        let entry = Entry::new(Scope::RuleSet, "simplify", Setting::Disabled(true));
        assert_eq!(
            entry.to_pair(),
            ("ruleset.simplify.disabled".to_string(), "true".to_string())
        );
        let entry = Entry::new(Scope::Rule, "foo", Setting::Factor(-2));
        assert_eq!(
            entry.to_pair(),
            ("rule.foo.factor".to_string(), "-2".to_string())
        );
    }

    #[test]
    fn test_error_messages() {
        let err = Entry::parse("rule.x.factor", "abc").unwrap_err();
        assert!(err.to_string().starts_with("invalid integer `abc` for rule.x.factor"));
    }
}
