//! Cost adapters.
//!
//! An adapter maps the base cost of a candidate to an adjusted cost. The
//! linear adapter computes `old * factor + summand`, with `factor` and
//! `summand` looked up under a key extracted from the candidate:
//!
//! - [`ByName`]: the exact rule name.
//! - [`ByPrimaryGroup`]: the first group of the rule, or `""` when it has
//!   none (which misses every lookup).
//!
//! [`NameAndGroupCostAdapter`] chains a group adapter and a name adapter,
//! group first, so name overrides adjust what the group override produced.
//!
//! # Suppression
//!
//! A factor of `0` yields the zero cost regardless of the summand. The
//! host engine never selects a zero-cost candidate.

mod combined;
mod linear;
mod types;

pub use combined::NameAndGroupCostAdapter;
pub use linear::LinearCostAdapter;
pub use types::{ByName, ByPrimaryGroup, CostAdapter, KeyPolicy};
