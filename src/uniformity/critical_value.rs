use std::collections::HashMap;

use crate::misc::ConfigurationError;

use super::chi_squared_quantile;

/// Degrees of freedom of the uniformity test for a split with `nbreaks` cut points per axis
pub fn degrees_of_freedom(nbreaks: usize) -> usize {
    (nbreaks + 1) * (nbreaks + 1) - 1
}

/// Critical value of the uniformity test:
/// the `pcrit` quantile of a chi-squared distribution with `(nbreaks + 1)^2 - 1` degrees of freedom.
pub fn critical_value(nbreaks: usize, pcrit: f64) -> anyhow::Result<f64> {
    if nbreaks < 1 {
        return Err(ConfigurationError::InvalidBreaks(nbreaks).into());
    }
    if !(pcrit > 0. && pcrit < 1.) {
        return Err(ConfigurationError::InvalidConfidence(pcrit).into());
    }
    chi_squared_quantile(pcrit, degrees_of_freedom(nbreaks))
}

/// Memoized critical values keyed by `(nbreaks, pcrit)`.
/// The value does not depend on the data, so repeated runs with the same configuration share it.
#[derive(Clone, Debug, Default)]
pub struct CriticalValueTable {
    values: HashMap<(usize, u64), f64>,
}

impl CriticalValueTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, nbreaks: usize, pcrit: f64) -> anyhow::Result<f64> {
        let key = (nbreaks, pcrit.to_bits());
        if let Some(value) = self.values.get(&key) {
            return Ok(*value);
        }
        let value = critical_value(nbreaks, pcrit)?;
        self.values.insert(key, value);
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
