pub mod label;
pub mod observer;
pub mod partition_option;
pub mod recursive_partitioner;
pub mod region;

pub use label::*;
pub use observer::*;
pub use partition_option::*;
pub use recursive_partitioner::*;
pub use region::*;

use crate::{misc::FloatingPoint, point_set::PointSet};

/// Trait for partitioning a geometry into uniform regions
pub trait UniformPartition<T: FloatingPoint> {
    type Output;

    fn uniform_partition(&self, options: &PartitionOptions) -> Self::Output;
}

impl<T: FloatingPoint> UniformPartition<T> for PointSet<T> {
    type Output = anyhow::Result<Partition>;

    /// Partition the point set into regions that pass the uniformity test.
    ///
    /// # Example
    /// ```
    /// use darbellay::prelude::*;
    ///
    /// let points = PointSet::try_from_rows(&[
    ///     [1., 1.], [1., 2.], [2., 1.], [2., 2.],
    ///     [10., 10.], [10., 11.], [11., 10.], [11., 12.],
    /// ]).unwrap();
    /// let partition = points.uniform_partition(&PartitionOptions::new(1, 0.99)).unwrap();
    /// assert_eq!(partition.region_count(), 2);
    /// ```
    fn uniform_partition(&self, options: &PartitionOptions) -> Self::Output {
        RecursivePartitioner::try_new(self, options)?.run()
    }
}

/// Label every point with the ordinal of its uniform region (`0` for unassigned points).
///
/// `points` holds one row per point and must have exactly 2 columns.
///
/// # Example
/// ```
/// use darbellay::prelude::partition_uniform_regions;
///
/// let points = vec![
///     vec![1., 1.], vec![1., 2.], vec![2., 1.], vec![2., 2.],
///     vec![10., 10.], vec![10., 11.], vec![11., 10.], vec![11., 12.],
/// ];
/// let labels = partition_uniform_regions(&points, 1, 0.99).unwrap();
/// assert_eq!(labels.labels(), &[1, 1, 1, 1, 2, 2, 2, 2]);
/// ```
pub fn partition_uniform_regions<T: FloatingPoint, R: AsRef<[T]>>(
    points: &[R],
    nbreaks: usize,
    pcrit: f64,
) -> anyhow::Result<LabelArray> {
    let options = PartitionOptions::new(nbreaks, pcrit);
    options.validate()?;
    let points = PointSet::try_from_rows(points)?;
    let partition = points.uniform_partition(&options)?;
    Ok(LabelArray::assemble(&partition, points.len()))
}
