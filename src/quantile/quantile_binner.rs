use crate::{
    misc::{ConfigurationError, FloatingPoint},
    point_set::{IndexSubset, PointSet},
};

use super::{percentile, quantile_ranks, sort_values, QuantileTable};

/// Splits a point subset into a `(nbreaks + 1) x (nbreaks + 1)` grid of cells
/// whose edges are the per-axis quantiles of the subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantileBinner {
    nbreaks: usize,
}

/// Result of binning a subset: the child cells and the quantiles that defined them.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantileBinning<T: FloatingPoint> {
    cells: Vec<IndexSubset>,
    table: QuantileTable<T>,
}

impl QuantileBinner {
    pub fn try_new(nbreaks: usize) -> anyhow::Result<Self> {
        if nbreaks < 1 {
            return Err(ConfigurationError::InvalidBreaks(nbreaks).into());
        }
        Ok(Self { nbreaks })
    }

    pub fn nbreaks(&self) -> usize {
        self.nbreaks
    }

    /// Number of cells per axis
    pub fn divisions(&self) -> usize {
        self.nbreaks + 1
    }

    /// Number of child cells produced by a split
    pub fn cell_count(&self) -> usize {
        self.divisions() * self.divisions()
    }

    /// Flattened cell id of the `j`-th x interval and `k`-th y interval.
    /// Equivalent to `j + k * nbreaks + k`.
    pub fn cell_index(&self, j: usize, k: usize) -> usize {
        j + k * self.divisions()
    }

    /// Compute the quantile table of a non-empty subset
    pub fn quantile_table<T: FloatingPoint>(
        &self,
        points: &PointSet<T>,
        subset: &IndexSubset,
    ) -> anyhow::Result<QuantileTable<T>> {
        anyhow::ensure!(!subset.is_empty(), "Cannot compute quantiles of an empty subset");

        let ranks = quantile_ranks(self.nbreaks);
        let sorted = [
            sort_values(&points.axis_values(subset, 0)),
            sort_values(&points.axis_values(subset, 1)),
        ];

        let quantiles = ranks
            .iter()
            .map(|&p| [percentile(&sorted[0], p), percentile(&sorted[1], p)])
            .collect();
        let minima = [sorted[0][0], sorted[1][0]];
        let maxima = [
            sorted[0][sorted[0].len() - 1],
            sorted[1][sorted[1].len() - 1],
        ];

        Ok(QuantileTable::new(quantiles, minima, maxima))
    }

    /// Assign every point of the subset to exactly one grid cell.
    ///
    /// # Example
    /// ```
    /// use darbellay::prelude::*;
    ///
    /// let points = PointSet::try_from_rows(&[[0., 0.], [0., 3.], [3., 0.], [3., 3.]]).unwrap();
    /// let binner = QuantileBinner::try_new(1).unwrap();
    /// let binning = binner.bin(&points, &points.full_subset()).unwrap();
    /// assert_eq!(binning.cell_sizes(), vec![1, 1, 1, 1]);
    /// assert_eq!(binning.cells()[binner.cell_index(0, 1)].to_vec(), vec![1]);
    /// ```
    pub fn bin<T: FloatingPoint>(
        &self,
        points: &PointSet<T>,
        subset: &IndexSubset,
    ) -> anyhow::Result<QuantileBinning<T>> {
        let table = self.quantile_table(points, subset)?;

        let mut cells = vec![IndexSubset::default(); self.cell_count()];
        for &index in subset {
            let p = points.point(index);
            let j = table.locate(p.x, 0);
            let k = table.locate(p.y, 1);
            cells[self.cell_index(j, k)].push(index);
        }

        Ok(QuantileBinning { cells, table })
    }
}

impl<T: FloatingPoint> QuantileBinning<T> {
    pub fn cells(&self) -> &[IndexSubset] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<IndexSubset> {
        self.cells
    }

    pub fn table(&self) -> &QuantileTable<T> {
        &self.table
    }

    pub fn cell_sizes(&self) -> Vec<usize> {
        self.cells.iter().map(IndexSubset::len).collect()
    }

    /// Check whether one cell received every point, i.e. the split made no progress
    pub fn is_stalled(&self) -> bool {
        self.cells.iter().filter(|c| !c.is_empty()).count() <= 1
    }
}
