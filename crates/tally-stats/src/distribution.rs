//! Range, normalisation and the complementary cumulative distribution.
//!
//! [`range`] and [`ccd`] accept sparse sequences (`&[Option<T>]`); missing
//! entries are read as zero before anything else happens.

use crate::{
    StatsError,
    numeric::{Entry, Numeric},
};

/// Smallest and largest value, as `(min, max)`.
///
/// Missing entries count as zero.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] if `nums` is empty.
///
/// # Examples
///
/// ```
/// # use tally_stats::range;
/// assert_eq!(range(&[3, 7, 1]), Ok((1, 7)));
/// assert_eq!(range(&[Some(3), None, Some(1), Some(5)]), Ok((0, 5)));
/// ```
pub fn range<E>(nums: &[E]) -> Result<(E::Value, E::Value), StatsError>
where
    E: Entry,
{
    let mut values = nums.iter().map(|entry| entry.or_zero());
    let first = values.next().ok_or(StatsError::EmptyInput)?;
    Ok(values.fold((first, first), |(min, max), value| {
        (
            if value.total_order(&min).is_lt() {
                value
            } else {
                min
            },
            if value.total_order(&max).is_gt() {
                value
            } else {
                max
            },
        )
    }))
}

/// Divides every value by the maximum, so the largest maps to `1.0`.
///
/// Shorthand for [`normalise_to`] with `to = 1.0`.
///
/// # Examples
///
/// ```
/// # use tally_stats::normalise;
/// assert_eq!(normalise(&[1, 2, 4]), Ok(vec![0.25, 0.5, 1.0]));
/// ```
pub fn normalise<T>(nums: &[T]) -> Result<Vec<f64>, StatsError>
where
    T: Numeric,
{
    normalise_to(nums, 1.0)
}

/// Divides every value by the maximum, then scales by `to`.
///
/// The result keeps the length and order of the input. An empty sequence
/// normalises to an empty vector.
///
/// # Errors
///
/// Returns [`StatsError::ZeroMaximum`] if the largest value is zero.
///
/// # Examples
///
/// ```
/// # use tally_stats::{normalise_to, StatsError};
/// assert_eq!(normalise_to(&[5, 10, 20], 100.0), Ok(vec![25.0, 50.0, 100.0]));
/// assert_eq!(normalise_to(&[-3, 0], 1.0), Err(StatsError::ZeroMaximum));
/// ```
pub fn normalise_to<T>(nums: &[T], to: f64) -> Result<Vec<f64>, StatsError>
where
    T: Numeric,
{
    let Some(max) = nums.iter().copied().max_by(T::total_order) else {
        return Ok(vec![]);
    };
    let max = max.to_f64();
    if max == 0.0 {
        return Err(StatsError::ZeroMaximum);
    }
    Ok(nums.iter().map(|x| x.to_f64() / max * to).collect())
}

/// Complementary cumulative distribution.
///
/// For the value at each position, returns the fraction of the sequence that is
/// greater than or equal to it. The output is aligned with the input: element
/// `i` describes input element `i`. Missing entries count as zero.
///
/// Every value is compared against the whole sequence, so this is quadratic in
/// the input length.
///
/// # Examples
///
/// ```
/// # use tally_stats::ccd;
/// assert_eq!(ccd(&[3, 1, 2]), vec![1.0 / 3.0, 1.0, 2.0 / 3.0]);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn ccd<E>(nums: &[E]) -> Vec<f64>
where
    E: Entry,
{
    let values = nums.iter().map(|entry| entry.or_zero()).collect::<Vec<_>>();
    let n = values.len() as f64;
    values
        .iter()
        .map(|value| {
            let count = values.iter().filter(|&other| other >= value).count();
            count as f64 / n
        })
        .collect()
}
