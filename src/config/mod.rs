//! Flat key/value override configuration.
//!
//! Overrides are exchanged as a flat string map:
//!
//! | Key | Value |
//! |---|---|
//! | `rule.<name>.factor` | integer factor for an exact rule name |
//! | `rule.<name>.summand` | integer summand for an exact rule name |
//! | `rule.<name>.disabled` | `true` / `false` |
//! | `ruleset.<group>.factor` | integer factor for a rule group |
//! | `ruleset.<group>.summand` | integer summand for a rule group |
//! | `ruleset.<group>.disabled` | `true` / `false` |
//!
//! Names may contain dots; the field is always the last segment.
//! [`properties`] reads and writes the map as `key=value` lines.

mod key;
pub mod properties;
mod snapshot;

pub use key::{ConfigError, Entry, Field, OverrideKey, Scope, Setting};
pub use snapshot::OverrideSnapshot;
