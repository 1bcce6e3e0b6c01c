//! Rule admission filter.
//!
//! Rejects candidates whose rule name is disabled, or any of whose groups
//! is disabled. Rejections only ever narrow what the base strategy
//! accepts; the filter never admits a candidate on its own.
//!
//! # Rejection cache
//!
//! When a candidate is rejected through one of its groups, its name is
//! recorded so later candidates of the same rule are rejected by a single
//! name lookup. The cache is a lower bound: correctness never depends on
//! it being populated, and it is dropped whenever a group is re-enabled.

mod rules;

pub use rules::RuleFilter;
