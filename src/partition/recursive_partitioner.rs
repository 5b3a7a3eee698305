use crate::{
    misc::FloatingPoint,
    point_set::{IndexSubset, PointSet},
    quantile::QuantileBinner,
    uniformity::UniformityTest,
};

use super::{Partition, PartitionObserver, PartitionOptions, Region};

/// Recursively splits point subsets into quantile grids until each piece looks uniform.
///
/// A subset whose cell counts pass the [`UniformityTest`] becomes a [`Region`].
/// Otherwise every cell holding more than one point is partitioned again,
/// and cells with at most one point are dropped.
pub struct RecursivePartitioner<'a, T: FloatingPoint> {
    points: &'a PointSet<T>,
    binner: QuantileBinner,
    test: UniformityTest,
    max_depth: Option<usize>,
    observer: Option<&'a mut dyn PartitionObserver<T>>,
}

impl<'a, T: FloatingPoint> RecursivePartitioner<'a, T> {
    /// Create a partitioner, validating the options and computing the critical value once
    pub fn try_new(points: &'a PointSet<T>, options: &PartitionOptions) -> anyhow::Result<Self> {
        options.validate()?;
        let test = UniformityTest::try_new(options.nbreaks, options.pcrit)?;
        Self::with_test(points, test, options.max_depth)
    }

    /// Create a partitioner from a prepared test (e.g. with a memoized critical value)
    pub fn with_test(
        points: &'a PointSet<T>,
        test: UniformityTest,
        max_depth: Option<usize>,
    ) -> anyhow::Result<Self> {
        let binner = QuantileBinner::try_new(test.nbreaks())?;
        Ok(Self {
            points,
            binner,
            test,
            max_depth,
            observer: None,
        })
    }

    /// Attach an observer notified after every binning step and decision
    pub fn with_observer(mut self, observer: &'a mut dyn PartitionObserver<T>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn test(&self) -> &UniformityTest {
        &self.test
    }

    /// Partition the whole point set
    pub fn run(&mut self) -> anyhow::Result<Partition> {
        let subset = self.points.full_subset();
        let partition = self.partition(subset, 0)?;
        log::debug!(
            "partitioned {} points into {} regions ({} dropped)",
            self.points.len(),
            partition.region_count(),
            partition.dropped().len()
        );
        Ok(partition)
    }

    /// Partition a non-empty subset found at recursion depth `depth`
    pub fn partition(&mut self, subset: IndexSubset, depth: usize) -> anyhow::Result<Partition> {
        let binning = self.binner.bin(self.points, &subset)?;
        log::trace!("quantiles at depth {}: {:?}", depth, binning.table().quantiles());
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_binning(&subset, binning.table());
        }

        let sizes = binning.cell_sizes();
        let statistic = self.test.evaluate(&sizes);
        log::debug!(
            "depth {}: {} points, cells {:?}, T = {}, critical value = {}",
            depth,
            subset.len(),
            sizes,
            statistic.statistic,
            statistic.critical_value
        );
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_decision(&subset, &statistic);
        }

        if statistic.is_uniform() {
            return Ok(Partition::single(Region::new(subset)));
        }

        if binning.is_stalled() {
            // one cell received every point, so the split made no progress
            log::debug!("depth {}: split stalled, keeping {} points", depth, subset.len());
            return Ok(Partition::single(Region::new(subset)));
        }

        if self.max_depth.is_some_and(|max| depth >= max) {
            log::debug!("depth {}: depth limit reached", depth);
            return Ok(Partition::single(Region::new(subset)));
        }

        let mut partition = Partition::default();
        for cell in binning.into_cells() {
            if cell.len() > 1 {
                partition.extend(self.partition(cell, depth + 1)?);
            } else {
                partition.drop_indices(&cell);
            }
        }
        Ok(partition)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{
        partition::{PartitionOptions, SplitRecorder},
        point_set::{IndexSubset, PointSet},
        quantile::QuantileTable,
    };

    use super::RecursivePartitioner;

    fn two_clusters() -> PointSet<f64> {
        PointSet::try_from_rows(&[
            [1., 1.],
            [1., 2.],
            [2., 1.],
            [2., 2.],
            [10., 10.],
            [10., 11.],
            [11., 10.],
            [11., 12.],
        ])
        .unwrap()
    }

    #[test]
    fn splits_two_clusters() {
        let points = two_clusters();
        let mut partitioner =
            RecursivePartitioner::try_new(&points, &PartitionOptions::new(1, 0.99)).unwrap();
        let partition = partitioner.run().unwrap();
        let regions = partition
            .regions()
            .iter()
            .map(|r| r.indices().to_vec())
            .collect_vec();
        assert_eq!(regions, vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7]]);
        assert!(partition.dropped().is_empty());
    }

    #[test]
    fn observer_sees_every_binning() {
        let points = two_clusters();
        let mut recorder = SplitRecorder::<f64>::new();
        {
            let mut partitioner =
                RecursivePartitioner::try_new(&points, &PartitionOptions::new(1, 0.99))
                    .unwrap()
                    .with_observer(&mut recorder);
            partitioner.run().unwrap();
        }
        let steps = recorder.steps();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].subset.len(), 8);
        assert_eq!(steps[0].table.quantiles(), &[[6., 6.]]);
        let root = steps[0].statistic.unwrap();
        assert_eq!(root.statistic, 16.);
        assert!(!root.is_uniform());
        assert_eq!(steps[1].table.quantiles(), &[[1.5, 1.5]]);
        assert_eq!(steps[2].table.quantiles(), &[[10.5, 10.5]]);
        assert!(steps[1..].iter().all(|s| s.statistic.unwrap().is_uniform()));
    }

    #[test]
    fn closure_observer() {
        let points = two_clusters();
        let mut sizes = vec![];
        let mut observer =
            |subset: &IndexSubset, _table: &QuantileTable<f64>| sizes.push(subset.len());
        RecursivePartitioner::try_new(&points, &PartitionOptions::new(1, 0.99))
            .unwrap()
            .with_observer(&mut observer)
            .run()
            .unwrap();
        assert_eq!(sizes, vec![8, 4, 4]);
    }

    #[test]
    fn duplicates_terminate() {
        let points = PointSet::try_from_rows(&[[3., 3.]; 10]).unwrap();
        let mut partitioner =
            RecursivePartitioner::try_new(&points, &PartitionOptions::new(1, 0.99)).unwrap();
        let partition = partitioner.run().unwrap();
        assert_eq!(partition.region_count(), 1);
        assert_eq!(partition.regions()[0].len(), 10);
    }

    #[test]
    fn quantiles_at_maximum_stall() {
        // median equals the maximum, so every point lands in the first cell
        let points = PointSet::try_from_rows(&[[0., 0.], [5., 5.], [5., 5.], [5., 5.]]).unwrap();
        let mut recorder = SplitRecorder::<f64>::new();
        let partition = RecursivePartitioner::try_new(&points, &PartitionOptions::new(1, 0.99))
            .unwrap()
            .with_observer(&mut recorder)
            .run()
            .unwrap();
        assert_eq!(recorder.steps().len(), 1);
        assert!(!recorder.steps()[0].statistic.unwrap().is_uniform());
        assert_eq!(partition.region_count(), 1);
        assert_eq!(partition.regions()[0].indices().to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn depth_limit() {
        let points = two_clusters();
        let options = PartitionOptions::new(1, 0.99).with_max_depth(0);
        let partition = RecursivePartitioner::try_new(&points, &options)
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(partition.region_count(), 1);
        assert_eq!(partition.labeled_count(), 8);
    }

    #[test]
    fn drops_singletons() {
        // one outlier per corner cell around a dense cluster
        let mut rows = vec![[0., 0.], [100., 0.], [0., 100.]];
        rows.extend((0..6).map(|i| [60. + i as f64, 60. + i as f64]));
        let points = PointSet::try_from_rows(&rows).unwrap();
        let partition = RecursivePartitioner::try_new(&points, &PartitionOptions::new(1, 0.99))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(
            partition.labeled_count() + partition.dropped().len(),
            points.len()
        );
    }

    #[test]
    fn invalid_options() {
        let points = two_clusters();
        assert!(RecursivePartitioner::try_new(&points, &PartitionOptions::new(0, 0.9)).is_err());
        assert!(RecursivePartitioner::try_new(&points, &PartitionOptions::new(1, 1.5)).is_err());
    }
}
