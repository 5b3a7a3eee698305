use crate::point_set::IndexSubset;

/// A subset of points accepted as uniformly distributed; a leaf of the partition
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region(IndexSubset);

impl Region {
    pub fn new(indices: IndexSubset) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &IndexSubset {
        &self.0
    }

    pub fn into_indices(self) -> IndexSubset {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered, pairwise disjoint regions plus the indices dropped on the way.
/// Points end up dropped when they are alone (or absent) in a cell of a rejected split.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    regions: Vec<Region>,
    dropped: Vec<usize>,
}

impl Partition {
    pub fn new(regions: Vec<Region>, dropped: Vec<usize>) -> Self {
        Self { regions, dropped }
    }

    /// Partition made of a single region
    pub fn single(region: Region) -> Self {
        Self {
            regions: vec![region],
            dropped: vec![],
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }

    pub fn dropped(&self) -> &[usize] {
        &self.dropped
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of points assigned to a region
    pub fn labeled_count(&self) -> usize {
        self.regions.iter().map(Region::len).sum()
    }

    /// Append the regions and dropped indices of a child partition, keeping order
    pub fn extend(&mut self, other: Partition) {
        self.regions.extend(other.regions);
        self.dropped.extend(other.dropped);
    }

    pub fn drop_indices<'a, I: IntoIterator<Item = &'a usize>>(&mut self, indices: I) {
        self.dropped.extend(indices);
    }
}
