//! Order statistics: median and mode.

use crate::{descriptive::mean, frequency::Frequency, numeric::Numeric};

/// Median of an unsorted sequence.
///
/// Odd-length input yields the middle value; even-length input yields the mean
/// of the two values straddling the midpoint. Empty input yields `None` rather
/// than an error, unlike [`mean`].
///
/// # Examples
///
/// ```
/// # use tally_stats::median;
/// assert_eq!(median(&[5, 1, 3]), Some(3.0));
/// assert_eq!(median(&[4, 1, 3, 2]), Some(2.5));
/// assert_eq!(median::<i32>(&[]), None);
/// ```
#[must_use]
pub fn median<T>(nums: &[T]) -> Option<f64>
where
    T: Numeric,
{
    let mut sorted = nums.to_vec();
    sorted.sort_by(T::total_order);
    median_sorted(&sorted)
}

/// Median of a sequence already sorted in ascending order.
///
/// # Panics
///
/// Panics if `sorted_values` is not sorted in ascending order.
#[must_use]
pub fn median_sorted<T>(sorted_values: &[T]) -> Option<f64>
where
    T: Numeric,
{
    assert!(
        sorted_values.is_sorted_by(|a, b| a.total_order(b).is_le()),
        "values must be sorted in ascending order"
    );

    let n = sorted_values.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(sorted_values[n / 2].to_f64())
    } else {
        mean(&sorted_values[n / 2 - 1..=n / 2]).ok()
    }
}

/// Most frequent values, in ascending order.
///
/// Every value tied at the highest count is returned, so a sequence of distinct
/// values returns all of them. Empty input returns an empty vector.
///
/// # Examples
///
/// ```
/// # use tally_stats::mode;
/// assert_eq!(mode(&[1, 2, 2, 3]), vec![2]);
/// assert_eq!(mode(&[1, 2, 3]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn mode<T>(nums: &[T]) -> Vec<T>
where
    T: Numeric,
{
    Frequency::new(nums).modes()
}
