use crate::misc::ConfigurationError;

/// Options for the recursive uniform partitioning
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartitionOptions {
    /// Number of quantile cut points per axis; a split yields `(nbreaks + 1)^2` cells
    pub nbreaks: usize,
    /// Probability for the critical value of the uniformity test, e.g. 0.95 or 0.99
    pub pcrit: f64,
    /// Maximum recursion depth; a subset reaching it is kept as a region
    pub max_depth: Option<usize>,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            nbreaks: 3,
            pcrit: 0.99,
            max_depth: None,
        }
    }
}

impl PartitionOptions {
    pub fn new(nbreaks: usize, pcrit: f64) -> Self {
        Self {
            nbreaks,
            pcrit,
            ..Default::default()
        }
    }

    pub fn with_nbreaks(mut self, nbreaks: usize) -> Self {
        self.nbreaks = nbreaks;
        self
    }

    pub fn with_pcrit(mut self, pcrit: f64) -> Self {
        self.pcrit = pcrit;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.nbreaks < 1 {
            return Err(ConfigurationError::InvalidBreaks(self.nbreaks));
        }
        if !(self.pcrit > 0. && self.pcrit < 1.) {
            return Err(ConfigurationError::InvalidConfidence(self.pcrit));
        }
        Ok(())
    }
}
