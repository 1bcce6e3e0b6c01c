//! Adaptable search strategy.
//!
//! [`AdaptableStrategy`] wraps the host engine's own [`Strategy`] and is
//! itself a [`Strategy`], so it can be installed wherever the base was and
//! removed again with [`AdaptableStrategy::into_base`]. Per candidate:
//!
//! 1. [`is_allowed`](Strategy::is_allowed): disabled names, then disabled
//!    groups, then the base strategy's own check.
//! 2. [`compute_cost`](Strategy::compute_cost): the base cost, adjusted by
//!    the group override and then the name override.
//!
//! Everything else is passed through to the base strategy unchanged.
//!
//! # Concurrency
//!
//! The facade is driven by a single search loop. Configuration changes
//! (`load_from`, `set_*`, `reset`) take `&mut self`, so they cannot overlap
//! with cost computation on the same instance.

mod adaptable;
mod table;
mod types;

pub use adaptable::AdaptableStrategy;
pub use table::{Catalog, OverrideRow};
pub use types::Strategy;
