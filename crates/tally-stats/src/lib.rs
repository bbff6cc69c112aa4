//! Elementary descriptive statistics over numeric sequences.
//!
//! Every function is pure: it borrows its input, never mutates it, and returns a
//! freshly built result. Values of any primitive numeric type are accepted and
//! promoted to `f64` wherever a division is involved.
//!
//! - **Central tendency**: [`mean`], [`median`], [`mode`]
//! - **Dispersion**: [`variance`], [`deviation`], [`dispersion`]
//! - **Distribution shape**: [`frequency`], [`ccd`], [`range`]
//! - **Scaling**: [`normalise`], [`normalise_to`]
//! - **Correlation**: [`pearson`]
//! - **Primitives**: [`sum`], [`squares`], [`square`]
//!
//! [`Summary`] bundles the scalar statistics of one sequence.
//!
//! # Missing entries
//!
//! [`range`] and [`ccd`] tolerate sparse input given as `Option<T>` slices and
//! treat `None` as zero. The other functions only take dense slices.
//!
//! # Examples
//!
//! ```
//! use tally_stats::{StatsError, mean, median, mode, pearson, range};
//!
//! let values = [2, 4, 4, 4, 5, 5, 7, 9];
//! assert_eq!(mean(&values)?, 5.0);
//! assert_eq!(median(&values), Some(4.5));
//! assert_eq!(mode(&values), vec![4]);
//!
//! assert_eq!(range(&[Some(3), None, Some(1), Some(5)])?, (0, 5));
//! assert_eq!(pearson(&[1, 2, 3], &[3, 2, 1])?, -1.0);
//! # Ok::<(), StatsError>(())
//! ```

pub use self::{
    correlation::pearson,
    descriptive::{deviation, dispersion, mean, squares, sum, variance},
    distribution::{ccd, normalise, normalise_to, range},
    frequency::{Frequency, frequency},
    numeric::{Entry, Numeric, square},
    order::{median, median_sorted, mode},
    summary::Summary,
};

pub mod correlation;
pub mod descriptive;
pub mod distribution;
pub mod frequency;
pub mod numeric;
pub mod order;
pub mod summary;

/// Errors raised when a statistic is undefined for its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The sequence has no elements.
    #[display("statistic is undefined for an empty sequence")]
    EmptyInput,
    /// Normalisation would divide by a maximum of zero.
    #[display("cannot normalise a sequence whose maximum is zero")]
    ZeroMaximum,
    /// The index of dispersion would divide by a mean of zero.
    #[display("index of dispersion is undefined for a zero mean")]
    ZeroMean,
    /// Paired sequences differ in length.
    #[display("paired sequences differ in length ({x_len} vs {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
}
