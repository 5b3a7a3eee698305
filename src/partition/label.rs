use std::ops::Index;

use itertools::Itertools;

use super::Partition;

/// Label reserved for points that belong to no region
pub const UNASSIGNED: usize = 0;

/// Per-point region labels aligned with the input ordering.
/// `0` means unassigned; `1..=K` is the ordinal of the region in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelArray(Vec<usize>);

impl LabelArray {
    /// Assign 1-based region ordinals to the points of `partition`.
    /// Indices outside `0..len` are ignored.
    ///
    /// # Example
    /// ```
    /// use darbellay::prelude::*;
    ///
    /// let partition = Partition::new(
    ///     vec![Region::new(vec![0, 2].into()), Region::new(vec![3].into())],
    ///     vec![1],
    /// );
    /// let labels = LabelArray::assemble(&partition, 5);
    /// assert_eq!(labels.labels(), &[1, 0, 1, 2, 0]);
    /// assert_eq!(labels.unassigned(), vec![1, 4]);
    /// ```
    pub fn assemble(partition: &Partition, len: usize) -> Self {
        let mut labels = vec![UNASSIGNED; len];
        for (k, region) in partition.regions().iter().enumerate() {
            for &i in region.indices() {
                if let Some(label) = labels.get_mut(i) {
                    *label = k + 1;
                }
            }
        }
        Self(labels)
    }

    pub fn labels(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct regions referenced by the labels
    pub fn region_count(&self) -> usize {
        self.0.iter().filter(|&&l| l != UNASSIGNED).unique().count()
    }

    /// Indices of points without a region
    pub fn unassigned(&self) -> Vec<usize> {
        self.region(UNASSIGNED)
    }

    /// Indices of points carrying `label`
    pub fn region(&self, label: usize) -> Vec<usize> {
        self.0.iter().positions(|&l| l == label).collect()
    }
}

impl Index<usize> for LabelArray {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
