//! Non-negative product quantity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A non-negative product quantity.
///
/// Quantities appear on pantry items and shopping-list entries. They can
/// never go below zero; decrementing saturates instead of wrapping.
///
/// ## Examples
///
/// ```
/// use estoca_core::Quantity;
///
/// let qty = Quantity::new(2);
/// assert_eq!(qty.increment().get(), 3);
/// assert_eq!(Quantity::ZERO.decrement(), Quantity::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Zero items.
    pub const ZERO: Self = Self(0);

    /// One item, the stepper default.
    pub const ONE: Self = Self(1);

    /// Create a quantity from a raw count.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Increase by one, saturating at `u32::MAX`.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Decrease by one, saturating at zero.
    #[must_use]
    pub const fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Quantity {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

impl From<Quantity> for u32 {
    fn from(qty: Quantity) -> Self {
        qty.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_increment() {
        assert_eq!(Quantity::new(1).increment(), Quantity::new(2));
        assert_eq!(Quantity::new(u32::MAX).increment().get(), u32::MAX);
    }

    #[test]
    fn test_decrement_saturates_at_zero() {
        assert_eq!(Quantity::new(1).decrement(), Quantity::ZERO);
        assert_eq!(Quantity::ZERO.decrement(), Quantity::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Quantity::new(7)), "7");
    }

    #[test]
    fn test_serde_transparent() {
        let qty = Quantity::new(3);
        assert_eq!(serde_json::to_string(&qty).unwrap(), "3");
        let parsed: Quantity = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, qty);
    }

    #[test]
    fn test_ordering() {
        assert!(Quantity::ONE > Quantity::ZERO);
    }
}
