use nalgebra::{DMatrix, Point2};
use simba::scalar::SupersetOf;

use crate::misc::{ConfigurationError, FloatingPoint};

use super::IndexSubset;

/// Immutable set of 2D points.
/// Recursion nodes never copy coordinates; they refer to points by index.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet<T: FloatingPoint> {
    points: Vec<Point2<T>>,
}

impl<T: FloatingPoint> PointSet<T> {
    /// Create a point set, rejecting an empty input or non-finite coordinates.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::Point2;
    /// use darbellay::prelude::PointSet;
    ///
    /// let points = PointSet::try_new(vec![Point2::new(0., 1.), Point2::new(2., 3.)]).unwrap();
    /// assert_eq!(points.len(), 2);
    /// assert!(PointSet::<f64>::try_new(vec![]).is_err());
    /// assert!(PointSet::try_new(vec![Point2::new(f64::NAN, 0.)]).is_err());
    /// ```
    pub fn try_new(points: Vec<Point2<T>>) -> anyhow::Result<Self> {
        if points.is_empty() {
            return Err(ConfigurationError::EmptyPointSet.into());
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite_value() && p.y.is_finite_value()))
        {
            return Err(ConfigurationError::NonFiniteCoordinate { index }.into());
        }
        Ok(Self { points })
    }

    /// Create a point set from a matrix with examples on rows.
    /// The matrix must have exactly 2 columns.
    pub fn try_from_matrix(matrix: &DMatrix<T>) -> anyhow::Result<Self> {
        if matrix.ncols() != 2 {
            return Err(ConfigurationError::InvalidDimension(matrix.ncols()).into());
        }
        let points = matrix
            .row_iter()
            .map(|row| Point2::new(row[0], row[1]))
            .collect();
        Self::try_new(points)
    }

    /// Create a point set from rows of coordinates.
    /// Every row must have exactly 2 entries.
    pub fn try_from_rows<R: AsRef<[T]>>(rows: &[R]) -> anyhow::Result<Self> {
        let points = rows
            .iter()
            .map(|row| match row.as_ref() {
                [x, y] => Ok(Point2::new(*x, *y)),
                other => Err(ConfigurationError::InvalidDimension(other.len())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    pub fn point(&self, index: usize) -> &Point2<T> {
        &self.points[index]
    }

    /// Subset containing every point in input order
    pub fn full_subset(&self) -> IndexSubset {
        (0..self.points.len()).collect()
    }

    /// Coordinates of the subset along one axis (0 = x, 1 = y)
    pub fn axis_values(&self, subset: &IndexSubset, axis: usize) -> Vec<T> {
        subset.iter().map(|&i| self.points[i][axis]).collect()
    }

    /// Cast the point set to another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> PointSet<F> {
        PointSet {
            points: self.points.iter().cloned().map(|p| p.cast::<F>()).collect(),
        }
    }
}

impl<T: FloatingPoint> AsRef<[Point2<T>]> for PointSet<T> {
    fn as_ref(&self) -> &[Point2<T>] {
        &self.points
    }
}
