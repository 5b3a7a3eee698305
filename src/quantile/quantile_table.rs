use nalgebra::{Point2, Vector2};

use crate::{bounding_box::BoundingBox, misc::FloatingPoint};

/// Per-axis quantile cut points of a subset, plus the per-axis extrema.
/// The axis maximum acts as the implicit final boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct QuantileTable<T: FloatingPoint> {
    /// `nbreaks` rows of `[x, y]` quantile values
    quantiles: Vec<[T; 2]>,
    minima: [T; 2],
    maxima: [T; 2],
}

impl<T: FloatingPoint> QuantileTable<T> {
    pub fn new(quantiles: Vec<[T; 2]>, minima: [T; 2], maxima: [T; 2]) -> Self {
        Self {
            quantiles,
            minima,
            maxima,
        }
    }

    pub fn nbreaks(&self) -> usize {
        self.quantiles.len()
    }

    pub fn quantiles(&self) -> &[[T; 2]] {
        &self.quantiles
    }

    pub fn quantile(&self, index: usize, axis: usize) -> T {
        self.quantiles[index][axis]
    }

    pub fn minima(&self) -> &[T; 2] {
        &self.minima
    }

    pub fn maxima(&self) -> &[T; 2] {
        &self.maxima
    }

    /// Upper boundary of the `index`-th interval along `axis`.
    /// `index == nbreaks` refers to the axis maximum.
    pub fn boundary(&self, index: usize, axis: usize) -> T {
        if index < self.quantiles.len() {
            self.quantiles[index][axis]
        } else {
            self.maxima[axis]
        }
    }

    /// All `nbreaks + 1` upper boundaries along `axis`
    pub fn boundaries(&self, axis: usize) -> Vec<T> {
        (0..=self.nbreaks())
            .map(|i| self.boundary(i, axis))
            .collect()
    }

    /// Find the smallest interval index whose upper boundary is `>= value`.
    /// Boundaries are inclusive, so a value on a cut point belongs to the lower interval.
    /// Values above the maximum fall into the last interval.
    pub fn locate(&self, value: T, axis: usize) -> usize {
        (0..self.nbreaks())
            .find(|&i| value <= self.quantiles[i][axis])
            .unwrap_or(self.nbreaks())
    }

    /// Extent of the subset the table was computed from
    pub fn bounding_box(&self) -> BoundingBox<T> {
        BoundingBox::new(
            Vector2::new(self.minima[0], self.minima[1]),
            Vector2::new(self.maxima[0], self.maxima[1]),
        )
    }

    /// Split boundaries as drawable segments spanning the subset extent:
    /// one vertical line per x quantile followed by one horizontal line per y quantile.
    pub fn split_lines(&self) -> Vec<(Point2<T>, Point2<T>)> {
        let bb = self.bounding_box();
        let vertical = self.quantiles.iter().map(|q| bb.vertical_line(q[0]));
        let horizontal = self.quantiles.iter().map(|q| bb.horizontal_line(q[1]));
        vertical.chain(horizontal).collect()
    }
}
