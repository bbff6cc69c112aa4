use serde::Serialize;

use crate::numeric::Numeric;

/// Occurrence count of every distinct value in a sequence.
///
/// Entries are kept in ascending order of value, so iteration reports the
/// smallest value first. Values that compare equal with `==` share one entry.
///
/// Serializes as a list of `[value, count]` pairs.
///
/// # Examples
///
/// ```
/// use tally_stats::frequency::Frequency;
///
/// let freq = Frequency::new(&[3, 1, 2, 1]);
/// assert_eq!(freq.as_slice(), &[(1, 2), (2, 1), (3, 1)]);
/// assert_eq!(freq.get(1), Some(2));
/// assert_eq!(freq.get(4), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frequency<T> {
    /// `(value, count)` pairs in ascending order of value.
    entries: Vec<(T, usize)>,
}

impl<T> Frequency<T>
where
    T: Numeric,
{
    /// Counts values from an unsorted sequence.
    ///
    /// The values are copied and sorted internally.
    #[must_use]
    pub fn new(values: &[T]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(T::total_order);
        Self::from_sorted(&sorted)
    }

    /// Counts values from a sequence already sorted in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tally_stats::frequency::Frequency;
    /// let freq = Frequency::from_sorted(&[0.5, 0.5, 2.0]);
    /// assert_eq!(freq.keys().collect::<Vec<_>>(), vec![0.5, 2.0]);
    /// ```
    #[must_use]
    pub fn from_sorted(sorted_values: &[T]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a.total_order(b).is_le()),
            "values must be sorted in ascending order"
        );

        let mut entries: Vec<(T, usize)> = vec![];
        for &value in sorted_values {
            match entries.last_mut() {
                Some((last, count)) if *last == value => *count += 1,
                _ => entries.push((value, 1)),
            }
        }
        Self { entries }
    }

    /// Returns the count of `value`, or `None` if it never occurs.
    #[must_use]
    pub fn get(&self, value: T) -> Option<usize> {
        self.entries
            .iter()
            .find_map(|&(v, count)| (v == value).then_some(count))
    }

    /// Returns an iterator over `(value, count)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns an iterator over the distinct values in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().map(|&(value, _)| value)
    }

    /// Returns all `(value, count)` pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[(T, usize)] {
        &self.entries
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of values counted, duplicates included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// The highest count, or `None` if nothing was counted.
    #[must_use]
    pub fn max_count(&self) -> Option<usize> {
        self.entries.iter().map(|&(_, count)| count).max()
    }

    /// Every value whose count equals [`Self::max_count`], in ascending order.
    ///
    /// When all values are distinct, every value is returned.
    #[must_use]
    pub fn modes(&self) -> Vec<T> {
        let Some(max) = self.max_count() else {
            return vec![];
        };
        self.entries
            .iter()
            .filter(|&&(_, count)| count == max)
            .map(|&(value, _)| value)
            .collect()
    }
}

/// Builds the frequency mapping of `nums`.
///
/// # Examples
///
/// ```
/// # use tally_stats::frequency;
/// let freq = frequency(&[3, 1, 2, 1]);
/// assert_eq!(freq.keys().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(freq.get(1), Some(2));
/// ```
#[must_use]
pub fn frequency<T>(nums: &[T]) -> Frequency<T>
where
    T: Numeric,
{
    Frequency::new(nums)
}
