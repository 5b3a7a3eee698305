use argmin::{
    core::{CostFunction, Executor, State},
    solver::brent::BrentRoot,
};

use super::gamma::regularized_gamma_p;

const BRACKET_EXPANSIONS: usize = 64;

/// Cumulative distribution function of the chi-squared distribution
pub fn chi_squared_cdf(x: f64, degrees_of_freedom: usize) -> f64 {
    if x <= 0. {
        return 0.;
    }
    regularized_gamma_p(degrees_of_freedom as f64 / 2., x / 2.)
}

/// Root of `cdf(x) - probability`
struct ChiSquaredQuantileProblem {
    degrees_of_freedom: usize,
    probability: f64,
}

impl CostFunction for ChiSquaredQuantileProblem {
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        Ok(chi_squared_cdf(*x, self.degrees_of_freedom) - self.probability)
    }
}

/// Inverse cumulative distribution function of the chi-squared distribution.
///
/// # Example
/// ```
/// use approx::assert_relative_eq;
/// use darbellay::prelude::chi_squared_quantile;
///
/// let x = chi_squared_quantile(0.99, 3).unwrap();
/// assert_relative_eq!(x, 11.3449, epsilon = 1e-4);
/// ```
pub fn chi_squared_quantile(probability: f64, degrees_of_freedom: usize) -> anyhow::Result<f64> {
    anyhow::ensure!(
        probability > 0. && probability < 1.,
        "Probability must be in (0, 1), got {}",
        probability
    );
    anyhow::ensure!(
        degrees_of_freedom > 0,
        "Degrees of freedom must be positive"
    );

    let problem = ChiSquaredQuantileProblem {
        degrees_of_freedom,
        probability,
    };

    let mut upper = degrees_of_freedom.max(1) as f64;
    let mut expansions = 0;
    while problem.cost(&upper)? < 0. {
        anyhow::ensure!(
            expansions < BRACKET_EXPANSIONS,
            "Failed to bracket the chi-squared quantile for p = {}",
            probability
        );
        upper *= 2.;
        expansions += 1;
    }

    let solver = BrentRoot::new(0., upper, 1e-12);
    let res = Executor::new(problem, solver)
        .configure(|state| state.max_iters(200))
        .run()?;

    let state = res.state();
    state
        .get_best_param()
        .or_else(|| state.get_param())
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Chi-squared quantile solver returned no parameter"))
}
