//! Configurable rule filtering and cost adaptation for search strategies.
//!
//! Layers externally configured overrides over an opaque base strategy of a
//! rule-based search engine (a prover or term rewriter), without touching
//! the engine itself:
//!
//! - **Filter**: rejects candidates by rule name or rule group.
//! - **Cost adapters**: `new = old * factor + summand`, keyed by rule name
//!   or by the rule's primary group, group first and name last.
//! - **Facade**: [`strategy::AdaptableStrategy`] wraps the base strategy,
//!   applies the filter and adapters, and loads/stores its overrides as a
//!   flat key/value map.
//!
//! # Architecture
//!
//! The crate contains no engine concepts beyond a rule name, an ordered
//! list of rule groups and a numeric cost. Engines plug in by implementing
//! [`rule::RuleRef`], [`cost::RuleCost`] and [`strategy::Strategy`].
//!
//! # Examples
//!
//! ```
//! use u_adaptive_strategy::config::properties;
//! use u_adaptive_strategy::cost::Cost;
//! use u_adaptive_strategy::rule::RuleApp;
//! use u_adaptive_strategy::strategy::{AdaptableStrategy, Strategy};
//!
//! struct Depth;
//!
//! impl Strategy for Depth {
//!     type Rule = RuleApp;
//!     type Cost = Cost;
//!     fn name(&self) -> &str { "Depth" }
//!     fn is_allowed(&mut self, _rule: &RuleApp) -> bool { true }
//!     fn compute_cost(&self, _rule: &RuleApp) -> Cost { Cost::Finite(999) }
//! }
//!
//! let overrides = properties::parse(
//!     "ruleset.simplify.summand=50\n\
//!      rule.foo.factor=0\n",
//! );
//! let mut strategy = AdaptableStrategy::new(Depth).with_properties(&overrides);
//!
//! let foo = RuleApp::new("foo").with_groups(["simplify"]);
//! assert!(strategy.is_allowed(&foo));
//! assert_eq!(strategy.compute_cost(&foo), Cost::Finite(0));
//! ```

pub mod adapter;
pub mod config;
pub mod cost;
pub mod filter;
pub mod rule;
pub mod strategy;
