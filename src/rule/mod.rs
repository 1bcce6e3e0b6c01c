//! Candidate rule applications.
//!
//! The host search engine produces one candidate per possible next step.
//! This crate only reads two things from a candidate: the rule name and
//! the ordered list of rule groups the rule belongs to.
//!
//! Group membership is a capability, not a guarantee: some rules carry no
//! group metadata at all. [`RuleRef::groups`] returns `None` for those, and
//! every consumer treats that the same as an empty membership.

mod types;

pub use types::{RuleApp, RuleRef};
