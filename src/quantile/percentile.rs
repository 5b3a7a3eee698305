use std::cmp::Ordering;

use itertools::Itertools;

use crate::misc::FloatingPoint;

/// Percentile ranks (in percent) of `nbreaks` equally spaced cut points.
///
/// # Example
/// ```
/// use darbellay::prelude::quantile_ranks;
/// assert_eq!(quantile_ranks(1), vec![50.]);
/// assert_eq!(quantile_ranks(3), vec![25., 50., 75.]);
/// ```
pub fn quantile_ranks(nbreaks: usize) -> Vec<f64> {
    let denom = (nbreaks + 1) as f64;
    (0..nbreaks)
        .map(|i| 100. * (i + 1) as f64 / denom)
        .collect()
}

/// Sort values in ascending order. Inputs are expected to be finite.
pub fn sort_values<T: FloatingPoint>(values: &[T]) -> Vec<T> {
    values
        .iter()
        .copied()
        .sorted_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .collect()
}

/// Estimate the `p`-th percentile (`0 < p <= 100`) of ascending sorted values.
///
/// The estimate is interpolated at position `p * (n + 1) / 100` between order statistics,
/// clamped to the minimum below the first position and to the maximum past the last.
///
/// # Example
/// ```
/// use darbellay::prelude::percentile;
/// let sorted = vec![1., 1., 2., 2., 10., 10., 11., 11.];
/// assert_eq!(percentile(&sorted, 50.), 6.);
/// assert_eq!(percentile(&sorted, 5.), 1.);
/// assert_eq!(percentile(&sorted, 99.), 11.);
/// ```
pub fn percentile<T: FloatingPoint>(sorted: &[T], p: f64) -> T {
    let n = sorted.len();
    debug_assert!(n > 0, "percentile of an empty sample");
    if n == 1 {
        return sorted[0];
    }

    let pos = p * (n + 1) as f64 / 100.;
    if pos < 1. {
        return sorted[0];
    }
    if pos >= n as f64 {
        return sorted[n - 1];
    }

    let fpos = pos.floor();
    let lower = sorted[fpos as usize - 1];
    let upper = sorted[fpos as usize];
    lower + T::from_f64_lossy(pos - fpos) * (upper - lower)
}
