//! Rule application costs.
//!
//! The host engine owns the numeric cost type. This module defines the
//! minimal algebra the adapters need ([`RuleCost`]) and ships one
//! ready-made cost type, [`Cost`], with saturating arithmetic and an
//! unbounded value.
//!
//! # Zero cost
//!
//! The zero cost is the suppression sentinel: a candidate whose cost is
//! zero is never selected by the host engine. Multiplying by zero always
//! yields zero, even when the other operand is unbounded.

mod types;

pub use types::{Cost, RuleCost};
