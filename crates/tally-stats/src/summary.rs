use serde::Serialize;

use crate::{
    descriptive::{dispersion, mean, sum, variance},
    frequency::Frequency,
    numeric::Numeric,
    order::median_sorted,
};

/// Scalar statistics of a single sequence, computed in one call.
///
/// Every field is produced by the corresponding free function, so a summary
/// always agrees with calling those functions one by one.
///
/// # Examples
///
/// ```
/// use tally_stats::Summary;
///
/// let summary = Summary::new(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
/// assert_eq!(summary.count, 8);
/// assert_eq!(summary.min, 2);
/// assert_eq!(summary.max, 9);
/// assert_eq!(summary.mean, 5.0);
/// assert_eq!(summary.median, 4.5);
/// assert_eq!(summary.variance, 4.0);
/// assert_eq!(summary.deviation, 2.0);
/// assert_eq!(summary.modes, vec![4]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary<T> {
    /// Number of values.
    pub count: usize,
    /// Sum of the values.
    pub sum: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median value.
    pub median: f64,
    /// The smallest value.
    pub min: T,
    /// The largest value.
    pub max: T,
    /// Population variance.
    pub variance: f64,
    /// Population standard deviation. `NaN` if the variance came out negative.
    pub deviation: f64,
    /// Index of dispersion, or `None` when the mean is zero.
    pub dispersion: Option<f64>,
    /// The most frequent values in ascending order.
    pub modes: Vec<T>,
}

impl<T> Summary<T>
where
    T: Numeric,
{
    /// Summarizes `nums`.
    ///
    /// # Returns
    ///
    /// * `Some(Summary)` - if the sequence contains at least one value
    /// * `None` - if the sequence is empty
    #[must_use]
    pub fn new(nums: &[T]) -> Option<Self> {
        let mean = mean(nums).ok()?;
        let variance = variance(nums).ok()?;

        // Order statistics come from one sorted copy; the sums keep input order.
        let mut sorted = nums.to_vec();
        sorted.sort_by(T::total_order);
        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let median = median_sorted(&sorted)?;
        let modes = Frequency::from_sorted(&sorted).modes();

        Some(Self {
            count: nums.len(),
            sum: sum(nums),
            mean,
            median,
            min,
            max,
            variance,
            deviation: variance.sqrt(),
            dispersion: dispersion(nums).ok(),
            modes,
        })
    }
}
