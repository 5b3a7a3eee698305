use crate::{
    misc::FloatingPoint,
    point_set::IndexSubset,
    quantile::QuantileTable,
    uniformity::UniformityStatistic,
};

/// Receives the intermediate steps of a partitioning run.
/// Observers only watch; they cannot change the computed partition.
pub trait PartitionObserver<T: FloatingPoint> {
    /// Called right after a subset has been binned
    fn on_binning(&mut self, subset: &IndexSubset, table: &QuantileTable<T>);

    /// Called once the uniformity of a binned subset has been decided
    fn on_decision(&mut self, _subset: &IndexSubset, _statistic: &UniformityStatistic) {}
}

impl<T: FloatingPoint, F> PartitionObserver<T> for F
where
    F: FnMut(&IndexSubset, &QuantileTable<T>),
{
    fn on_binning(&mut self, subset: &IndexSubset, table: &QuantileTable<T>) {
        self(subset, table)
    }
}

/// One binning step recorded by [`SplitRecorder`]
#[derive(Clone, Debug, PartialEq)]
pub struct SplitStep<T: FloatingPoint> {
    pub subset: IndexSubset,
    pub table: QuantileTable<T>,
    pub statistic: Option<UniformityStatistic>,
}

/// Records every step of a run in order, e.g. to replay split boundaries one at a time
#[derive(Clone, Debug)]
pub struct SplitRecorder<T: FloatingPoint> {
    steps: Vec<SplitStep<T>>,
}

impl<T: FloatingPoint> SplitRecorder<T> {
    pub fn new() -> Self {
        Self { steps: vec![] }
    }

    pub fn steps(&self) -> &[SplitStep<T>] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<SplitStep<T>> {
        self.steps
    }
}

impl<T: FloatingPoint> Default for SplitRecorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatingPoint> PartitionObserver<T> for SplitRecorder<T> {
    fn on_binning(&mut self, subset: &IndexSubset, table: &QuantileTable<T>) {
        self.steps.push(SplitStep {
            subset: subset.clone(),
            table: table.clone(),
            statistic: None,
        });
    }

    fn on_decision(&mut self, subset: &IndexSubset, statistic: &UniformityStatistic) {
        if let Some(step) = self
            .steps
            .iter_mut()
            .rev()
            .find(|s| s.statistic.is_none() && &s.subset == subset)
        {
            step.statistic = Some(*statistic);
        }
    }
}
