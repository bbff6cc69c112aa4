//! Element types accepted by the statistics functions.
//!
//! Dense sequences are plain slices of a [`Numeric`] type. Sparse sequences are
//! slices of `Option<T>`, where `None` marks a missing entry. Only the functions
//! that document sparse tolerance accept them; they are generic over [`Entry`],
//! which maps a missing entry to zero.

use std::{cmp::Ordering, fmt::Debug, ops::Mul};

/// A numeric value that can appear in a sequence.
///
/// Implemented for the primitive integer and float types. Every statistic that
/// divides promotes its values to `f64` through [`Numeric::to_f64`].
pub trait Numeric: Copy + PartialEq + PartialOrd + Debug + Mul<Output = Self> {
    /// The additive identity, substituted for missing entries.
    const ZERO: Self;

    /// Promotes the value to `f64`.
    fn to_f64(self) -> f64;

    /// Total order used when sorting a sequence.
    ///
    /// Integers use [`Ord::cmp`], floats use `total_cmp`.
    fn total_order(&self, other: &Self) -> Ordering;
}

/// A sequence element that may be missing.
///
/// Every [`Numeric`] type is an entry that is never missing. `Option<T>` is an
/// entry whose `None` reads as zero.
///
/// # Examples
///
/// ```
/// use tally_stats::numeric::Entry;
///
/// assert_eq!(Entry::or_zero(7_u32), 7);
/// assert_eq!(Some(7_u32).or_zero(), 7);
/// assert_eq!(None::<u32>.or_zero(), 0);
/// ```
pub trait Entry: Copy {
    /// The numeric type behind the entry.
    type Value: Numeric;

    /// Returns the value, or zero when the entry is missing.
    fn or_zero(self) -> Self::Value;
}

macro_rules! impl_entry {
    ($ty:ty) => {
        impl Entry for $ty {
            type Value = $ty;

            fn or_zero(self) -> $ty {
                self
            }
        }

        impl Entry for Option<$ty> {
            type Value = $ty;

            fn or_zero(self) -> $ty {
                self.unwrap_or(<$ty as Numeric>::ZERO)
            }
        }
    };
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {$(
        impl Numeric for $ty {
            const ZERO: Self = 0;

            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn total_order(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }

        impl_entry!($ty);
    )*};
}

// 64-bit integers do not fit in an f64 mantissa.
macro_rules! impl_wide_integer {
    ($($ty:ty),*) => {$(
        impl Numeric for $ty {
            const ZERO: Self = 0;

            #[expect(clippy::cast_precision_loss)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn total_order(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }

        impl_entry!($ty);
    )*};
}

impl_integer!(i8, i16, i32, u8, u16, u32);
impl_wide_integer!(i64, isize, u64, usize);

impl Numeric for f32 {
    const ZERO: Self = 0.0;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn total_order(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;

    fn to_f64(self) -> f64 {
        self
    }

    fn total_order(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

impl_entry!(f32);
impl_entry!(f64);

/// Returns `x * x` in the caller's numeric type.
///
/// # Examples
///
/// ```
/// use tally_stats::square;
///
/// assert_eq!(square(-4), 16);
/// assert_eq!(square(1.5), 2.25);
/// ```
#[must_use]
pub fn square<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_keeps_type() {
        let squared: u8 = square(12_u8);
        assert_eq!(squared, 144);
        assert_eq!(square(-3_i64), 9);
        assert!((square(0.1_f32) - 0.01).abs() < 1e-7);
    }

    #[test]
    fn test_to_f64_promotion() {
        assert_eq!((-5_i8).to_f64(), -5.0);
        assert_eq!(u32::MAX.to_f64(), 4_294_967_295.0);
        assert_eq!(0.5_f32.to_f64(), 0.5);
        assert_eq!(42_usize.to_f64(), 42.0);
    }

    #[test]
    fn test_total_order_on_floats() {
        assert_eq!(1.0_f64.total_order(&2.0), Ordering::Less);
        assert_eq!((-0.0_f64).total_order(&0.0), Ordering::Less);
        assert_eq!(f64::NAN.total_order(&f64::INFINITY), Ordering::Greater);
    }

    #[test]
    fn test_missing_entry_reads_as_zero() {
        assert_eq!(None::<i32>.or_zero(), 0);
        assert_eq!(None::<f64>.or_zero(), 0.0);
        assert_eq!(Some(-2_i16).or_zero(), -2);
        assert_eq!(Entry::or_zero(3.5_f64), 3.5);
    }
}
