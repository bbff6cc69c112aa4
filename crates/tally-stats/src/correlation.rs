use crate::{
    StatsError,
    descriptive::{squares, sum},
    numeric::{Numeric, square},
};

/// Pearson correlation coefficient (r) of two paired sequences.
///
/// The result lies in `[-1, 1]` for well-formed input. It is not clamped, so
/// rounding can push it marginally outside that interval.
///
/// When either sequence has zero variance the denominator is exactly zero and
/// the coefficient is reported as `0.0` (no correlation). The comparison is
/// exact, so a near-constant sequence still divides.
///
/// # Errors
///
/// Returns [`StatsError::LengthMismatch`] if `x` and `y` differ in length and
/// [`StatsError::EmptyInput`] if both are empty.
///
/// # Examples
///
/// ```
/// # use tally_stats::pearson;
/// assert_eq!(pearson(&[1, 2, 3], &[1, 2, 3]), Ok(1.0));
/// assert_eq!(pearson(&[1, 2, 3], &[3, 2, 1]), Ok(-1.0));
/// assert_eq!(pearson(&[1, 1, 1], &[1, 2, 3]), Ok(0.0));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn pearson<T, U>(x: &[T], y: &[U]) -> Result<f64, StatsError>
where
    T: Numeric,
    U: Numeric,
{
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let n = x.len() as f64;
    let product_sum = x
        .iter()
        .zip(y)
        .fold(0.0, |acc, (a, b)| acc + a.to_f64() * b.to_f64());
    let x = Sums::of(x);
    let y = Sums::of(y);

    let num = product_sum - x.sum * y.sum / n;
    let den = (x.centered(n) * y.centered(n)).sqrt();
    if den == 0.0 {
        return Ok(0.0);
    }
    Ok(num / den)
}

#[derive(Debug, Clone, Copy)]
struct Sums {
    sum: f64,
    squares: f64,
}

impl Sums {
    fn of<T>(values: &[T]) -> Self
    where
        T: Numeric,
    {
        Self {
            sum: sum(values),
            squares: squares(values),
        }
    }

    /// Sum of squared deviations from the mean, `Σv² - (Σv)²/n`.
    fn centered(self, n: f64) -> f64 {
        self.squares - square(self.sum) / n
    }
}
