//! Core trait for search strategies.

use crate::cost::RuleCost;
use crate::rule::RuleRef;

/// The decision interface a host search engine consults per candidate.
///
/// The engine discards candidates for which [`is_allowed`](Strategy::is_allowed)
/// returns `false` and orders the rest by [`compute_cost`](Strategy::compute_cost).
///
/// # Examples
///
/// ```ignore
/// struct DefaultStrategy;
///
/// impl Strategy for DefaultStrategy {
///     type Rule = TacletApp;
///     type Cost = Cost;
///
///     fn name(&self) -> &str { "Default" }
///     fn is_allowed(&mut self, app: &TacletApp) -> bool { app.is_sound() }
///     fn compute_cost(&self, app: &TacletApp) -> Cost {
///         Cost::Finite(app.depth() as i64)
///     }
/// }
/// ```
pub trait Strategy {
    /// The candidate type produced by the engine.
    type Rule: RuleRef;

    /// The engine's numeric cost type.
    type Cost: RuleCost;

    /// Returns the strategy name.
    fn name(&self) -> &str;

    /// Returns `true` if the candidate may be used at all.
    fn is_allowed(&mut self, rule: &Self::Rule) -> bool;

    /// Computes the priority of an admitted candidate.
    fn compute_cost(&self, rule: &Self::Rule) -> Self::Cost;

    /// Whether the engine stops at the first goal it cannot close.
    fn stop_at_first_non_closable_goal(&self) -> bool {
        false
    }
}
