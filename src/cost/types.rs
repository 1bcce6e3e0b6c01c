//! Cost algebra.

use std::fmt;

/// Numeric cost of a rule application.
///
/// Implementations may saturate, be symbolic or contain unbounded values.
/// Adapters only ever compose costs as `base.multiply(factor).add(summand)`.
pub trait RuleCost: Clone + fmt::Debug {
    /// The zero cost (suppression sentinel).
    fn zero() -> Self;

    /// Lifts an integer override value into the cost domain.
    fn from_integer(value: i64) -> Self;

    /// Multiplies two costs. Zero on either side yields zero.
    fn multiply(&self, other: &Self) -> Self;

    /// Adds two costs.
    fn add(&self, other: &Self) -> Self;

    /// Returns `true` if this is the zero cost.
    fn is_zero(&self) -> bool;
}

impl RuleCost for i64 {
    fn zero() -> Self {
        0
    }

    fn from_integer(value: i64) -> Self {
        value
    }

    fn multiply(&self, other: &Self) -> Self {
        self.saturating_mul(*other)
    }

    fn add(&self, other: &Self) -> Self {
        self.saturating_add(*other)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}

/// Saturating integer cost with an unbounded value.
///
/// Ordering places every finite cost below [`Cost::Top`].
///
/// # Examples
///
/// ```
/// use u_adaptive_strategy::cost::{Cost, RuleCost};
///
/// let base = Cost::Finite(100);
/// let adjusted = base.multiply(&Cost::from_integer(2)).add(&Cost::from_integer(10));
/// assert_eq!(adjusted, Cost::Finite(210));
///
/// // Zero absorbs even the unbounded cost.
/// assert!(Cost::Top.multiply(&Cost::zero()).is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cost {
    /// A finite cost. Arithmetic saturates at the `i64` bounds.
    Finite(i64),

    /// The unbounded cost.
    Top,
}

impl Cost {
    /// Returns the finite value, or `None` for [`Cost::Top`].
    pub fn value(self) -> Option<i64> {
        match self {
            Cost::Finite(v) => Some(v),
            Cost::Top => None,
        }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::Finite(0)
    }
}

impl From<i64> for Cost {
    fn from(value: i64) -> Self {
        Cost::Finite(value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{v}"),
            Cost::Top => f.write_str("top"),
        }
    }
}

impl RuleCost for Cost {
    fn zero() -> Self {
        Cost::Finite(0)
    }

    fn from_integer(value: i64) -> Self {
        Cost::Finite(value)
    }

    fn multiply(&self, other: &Self) -> Self {
        match (*self, *other) {
            (Cost::Finite(0), _) | (_, Cost::Finite(0)) => Cost::Finite(0),
            (Cost::Top, _) | (_, Cost::Top) => Cost::Top,
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a.saturating_mul(b)),
        }
    }

    fn add(&self, other: &Self) -> Self {
        match (*self, *other) {
            (Cost::Top, _) | (_, Cost::Top) => Cost::Top,
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a.saturating_add(b)),
        }
    }

    fn is_zero(&self) -> bool {
        matches!(self, Cost::Finite(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_composition() {
        let c = Cost::Finite(100)
            .multiply(&Cost::from_integer(2))
            .add(&Cost::from_integer(10));
        assert_eq!(c, Cost::Finite(210));
    }

    #[test]
    fn test_zero_absorbs_top() {
        assert_eq!(Cost::Top.multiply(&Cost::zero()), Cost::zero());
        assert_eq!(Cost::zero().multiply(&Cost::Top), Cost::zero());
    }

    #[test]
    fn test_top_dominates_addition() {
        assert_eq!(Cost::Top.add(&Cost::Finite(-5)), Cost::Top);
        assert_eq!(Cost::Finite(7).multiply(&Cost::Top), Cost::Top);
    }

    #[test]
    fn test_saturation() {
        let big = Cost::Finite(i64::MAX);
        assert_eq!(big.add(&Cost::Finite(1)), Cost::Finite(i64::MAX));
        assert_eq!(big.multiply(&Cost::Finite(3)), Cost::Finite(i64::MAX));
        assert_eq!(i64::MIN.multiply(&2), i64::MIN);
    }

    #[test]
    fn test_ordering() {
        assert!(Cost::Finite(i64::MAX) < Cost::Top);
        assert!(Cost::Finite(-1) < Cost::Finite(0));
    }

    #[test]
    fn test_value_and_display() {
        assert_eq!(Cost::Finite(42).value(), Some(42));
        assert_eq!(Cost::Top.value(), None);
        assert_eq!(Cost::Top.to_string(), "top");
        assert_eq!(Cost::from(-3).to_string(), "-3");
    }
}
