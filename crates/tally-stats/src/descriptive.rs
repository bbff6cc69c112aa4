//! Aggregate statistics: sums, mean and the population dispersion measures.

use crate::{
    StatsError,
    numeric::{Numeric, square},
};

/// Sums the values after promoting each one to `f64`.
///
/// Returns `0.0` for an empty sequence.
///
/// # Examples
///
/// ```
/// # use tally_stats::sum;
/// assert_eq!(sum(&[1, 2, 3]), 6.0);
/// assert_eq!(sum::<f32>(&[]), 0.0);
/// ```
#[must_use]
pub fn sum<T>(nums: &[T]) -> f64
where
    T: Numeric,
{
    nums.iter().fold(0.0, |acc, x| acc + x.to_f64())
}

/// Sums the squares of the values, squared as `f64`.
///
/// # Examples
///
/// ```
/// # use tally_stats::squares;
/// assert_eq!(squares(&[1, 2, 3]), 14.0);
/// ```
#[must_use]
pub fn squares<T>(nums: &[T]) -> f64
where
    T: Numeric,
{
    nums.iter().fold(0.0, |acc, x| acc + square(x.to_f64()))
}

/// Arithmetic mean: `sum(nums) / len(nums)`.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `nums` is empty.
///
/// # Examples
///
/// ```
/// # use tally_stats::{mean, StatsError};
/// assert_eq!(mean(&[1, 2, 3, 4]), Ok(2.5));
/// assert_eq!(mean::<i32>(&[]), Err(StatsError::EmptyInput));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn mean<T>(nums: &[T]) -> Result<f64, StatsError>
where
    T: Numeric,
{
    if nums.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    Ok(sum(nums) / nums.len() as f64)
}

/// Population variance.
///
/// Computed as the mean of squares minus the square of the mean. This single
/// pass identity loses precision when the values are large relative to their
/// spread, and can even come out slightly negative.
///
/// # Examples
///
/// ```
/// # use tally_stats::variance;
/// assert_eq!(variance(&[2, 4, 4, 4, 5, 5, 7, 9]), Ok(4.0));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn variance<T>(nums: &[T]) -> Result<f64, StatsError>
where
    T: Numeric,
{
    let mean = mean(nums)?;
    Ok(squares(nums) / nums.len() as f64 - square(mean))
}

/// Population standard deviation, the square root of [`variance`].
///
/// A variance pushed below zero by cancellation yields `NaN`.
///
/// # Examples
///
/// ```
/// # use tally_stats::deviation;
/// assert_eq!(deviation(&[2, 4, 4, 4, 5, 5, 7, 9]), Ok(2.0));
/// ```
pub fn deviation<T>(nums: &[T]) -> Result<f64, StatsError>
where
    T: Numeric,
{
    variance(nums).map(f64::sqrt)
}

/// Index of dispersion (Fano factor): `variance / mean`.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] for an empty sequence and
/// [`StatsError::ZeroMean`] when the mean is zero.
///
/// # Examples
///
/// ```
/// # use tally_stats::{dispersion, StatsError};
/// assert_eq!(dispersion(&[2, 4, 4, 4, 5, 5, 7, 9]), Ok(0.8));
/// assert_eq!(dispersion(&[-1, 1]), Err(StatsError::ZeroMean));
/// ```
pub fn dispersion<T>(nums: &[T]) -> Result<f64, StatsError>
where
    T: Numeric,
{
    let variance = variance(nums)?;
    let mean = mean(nums)?;
    if mean == 0.0 {
        return Err(StatsError::ZeroMean);
    }
    Ok(variance / mean)
}
