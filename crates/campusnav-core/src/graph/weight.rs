//! Edge weight abstraction
//!
//! The graph is generic over its weight type: anything copyable,
//! orderable, closed under addition and subtraction, and printable
//! can serve as an edge cost.

use std::fmt;
use std::ops::{Add, Sub};

/// Numeric weight usable as an edge cost.
///
/// `is_valid` rejects values Dijkstra cannot handle: negative weights
/// and non-finite floats. Costs along a predecessor chain are
/// non-decreasing, so `Sub` is only ever applied to a record cost and
/// its (smaller or equal) predecessor cost.
pub trait EdgeWeight:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + fmt::Display
{
    /// Additive identity, the cost of an empty path.
    const ZERO: Self;

    /// True when the weight is finite and non-negative.
    fn is_valid(&self) -> bool;
}

impl EdgeWeight for f64 {
    const ZERO: Self = 0.0;

    fn is_valid(&self) -> bool {
        self.is_finite() && *self >= 0.0
    }
}

impl EdgeWeight for f32 {
    const ZERO: Self = 0.0;

    fn is_valid(&self) -> bool {
        self.is_finite() && *self >= 0.0
    }
}

impl EdgeWeight for u32 {
    const ZERO: Self = 0;

    fn is_valid(&self) -> bool {
        true
    }
}

impl EdgeWeight for u64 {
    const ZERO: Self = 0;

    fn is_valid(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_validity() {
        assert!(1.5f64.is_valid());
        assert!(0.0f64.is_valid());
        assert!(!(-1.0f64).is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
    }

    #[test]
    fn test_unsigned_always_valid() {
        assert!(0u32.is_valid());
        assert!(u64::MAX.is_valid());
    }

    #[test]
    fn test_zero_is_additive_identity() {
        assert_eq!(f64::ZERO + 3.5, 3.5);
        assert_eq!(u32::ZERO + 7, 7);
    }
}
