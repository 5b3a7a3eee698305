use crate::misc::ConfigurationError;

use super::{critical_value, degrees_of_freedom};

/// Goodness-of-fit check of cell occupancy counts against a uniform spread.
///
/// The statistic is `T = sum((expected - n_c)^2)` with `expected = N / nchild`,
/// compared against a chi-squared critical value. A region is uniform iff `T < critical value`.
/// This is a heuristic; the counts are not rescaled by the expected value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformityTest {
    nbreaks: usize,
    pcrit: f64,
    critical_value: f64,
}

/// Diagnostics of one uniformity decision
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformityStatistic {
    /// Total number of points over all cells
    pub total: usize,
    /// Expected count per cell under uniformity
    pub expected: f64,
    /// Sum of squared deviations from the expected count
    pub statistic: f64,
    pub critical_value: f64,
    pub degrees_of_freedom: usize,
}

impl UniformityStatistic {
    pub fn is_uniform(&self) -> bool {
        self.statistic < self.critical_value
    }
}

/// Sum of squared deviations of the cell counts from their mean.
/// The mean is a real division, so it is exact for any total.
///
/// # Example
/// ```
/// use darbellay::prelude::uniformity_statistic;
/// assert_eq!(uniformity_statistic(&[2, 2, 2, 2]), 0.);
/// assert_eq!(uniformity_statistic(&[4, 0, 0, 4]), 16.);
/// assert_eq!(uniformity_statistic(&[1, 0, 0, 0]), 0.75);
/// ```
pub fn uniformity_statistic(cell_sizes: &[usize]) -> f64 {
    if cell_sizes.is_empty() {
        return 0.;
    }
    let total: usize = cell_sizes.iter().sum();
    let expected = total as f64 / cell_sizes.len() as f64;
    cell_sizes
        .iter()
        .map(|&n| {
            let diff = expected - n as f64;
            diff * diff
        })
        .sum()
}

impl UniformityTest {
    /// Create a test for splits with `nbreaks` cut points per axis,
    /// computing the critical value once.
    pub fn try_new(nbreaks: usize, pcrit: f64) -> anyhow::Result<Self> {
        let critical_value = critical_value(nbreaks, pcrit)?;
        Ok(Self {
            nbreaks,
            pcrit,
            critical_value,
        })
    }

    /// Create a test from a precomputed critical value
    /// (e.g. one taken from a [`CriticalValueTable`](super::CriticalValueTable)).
    pub fn with_critical_value(
        nbreaks: usize,
        pcrit: f64,
        critical_value: f64,
    ) -> anyhow::Result<Self> {
        if nbreaks < 1 {
            return Err(ConfigurationError::InvalidBreaks(nbreaks).into());
        }
        if !(pcrit > 0. && pcrit < 1.) {
            return Err(ConfigurationError::InvalidConfidence(pcrit).into());
        }
        anyhow::ensure!(
            critical_value.is_finite(),
            "Critical value must be finite, got {}",
            critical_value
        );
        Ok(Self {
            nbreaks,
            pcrit,
            critical_value,
        })
    }

    pub fn nbreaks(&self) -> usize {
        self.nbreaks
    }

    pub fn pcrit(&self) -> f64 {
        self.pcrit
    }

    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    pub fn degrees_of_freedom(&self) -> usize {
        degrees_of_freedom(self.nbreaks)
    }

    /// Evaluate the statistic of the cell counts
    pub fn evaluate(&self, cell_sizes: &[usize]) -> UniformityStatistic {
        let total: usize = cell_sizes.iter().sum();
        let expected = if cell_sizes.is_empty() {
            0.
        } else {
            total as f64 / cell_sizes.len() as f64
        };
        UniformityStatistic {
            total,
            expected,
            statistic: uniformity_statistic(cell_sizes),
            critical_value: self.critical_value,
            degrees_of_freedom: self.degrees_of_freedom(),
        }
    }

    pub fn is_uniform(&self, cell_sizes: &[usize]) -> bool {
        self.evaluate(cell_sizes).is_uniform()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{uniformity_statistic, UniformityTest};

    #[test]
    fn real_mean() {
        // expected = 5 / 4 = 1.25, not 1
        let t = uniformity_statistic(&[2, 1, 1, 1]);
        assert_relative_eq!(t, 0.75 * 0.75 + 3. * 0.25 * 0.25);
    }

    #[test]
    fn even_spread_is_uniform() {
        let test = UniformityTest::try_new(1, 0.99).unwrap();
        let stat = test.evaluate(&[2, 2, 2, 2]);
        assert_eq!(stat.statistic, 0.);
        assert_eq!(stat.expected, 2.);
        assert_eq!(stat.total, 8);
        assert_eq!(stat.degrees_of_freedom, 3);
        assert!(stat.is_uniform());
    }

    #[test]
    fn sparse_even_spread_is_uniform() {
        // fewer points than cells, each in its own cell
        let test = UniformityTest::try_new(2, 0.5).unwrap();
        assert!(test.is_uniform(&[1, 0, 1, 0, 1, 0, 1, 0, 0]));
        assert!(test.is_uniform(&[1; 9]));
    }

    #[test]
    fn concentrated_is_not_uniform() {
        let test = UniformityTest::try_new(1, 0.99).unwrap();
        let stat = test.evaluate(&[8, 0, 0, 0]);
        assert_eq!(stat.statistic, 48.);
        assert!(stat.statistic > test.critical_value());
        assert!(!stat.is_uniform());
    }

    #[test]
    fn two_clusters_are_not_uniform() {
        let test = UniformityTest::try_new(1, 0.99).unwrap();
        assert!(!test.is_uniform(&[4, 0, 0, 4]));
    }

    #[test]
    fn precomputed_critical_value() {
        let test = UniformityTest::with_critical_value(1, 0.9, 1.).unwrap();
        assert!(test.is_uniform(&[1, 1, 1, 2]));
        assert!(!test.is_uniform(&[2, 0, 1, 1]));
        assert!(UniformityTest::with_critical_value(1, 0.9, f64::NAN).is_err());
    }
}
