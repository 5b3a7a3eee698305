use nalgebra::{Point2, Vector2};

use crate::misc::FloatingPoint;

/// A struct representing an axis-aligned bounding box in 2D space.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox<T: FloatingPoint> {
    min: Vector2<T>,
    max: Vector2<T>,
}

impl<T: FloatingPoint> BoundingBox<T> {
    /// Create a new bounding box from a minimum and maximum point.
    pub fn new(min: Vector2<T>, max: Vector2<T>) -> Self {
        Self {
            min: min.inf(&max),
            max: max.sup(&min),
        }
    }

    /// Create a new bounding box from point iterator.
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::{Point2, Vector2};
    /// use darbellay::prelude::BoundingBox;
    ///
    /// let bb = BoundingBox::new_with_points(vec![
    ///     Point2::new(1., 4.),
    ///     Point2::new(-2., 0.5),
    ///     Point2::new(3., 2.),
    /// ])
    /// .unwrap();
    /// assert_eq!(bb.min(), &Vector2::new(-2., 0.5));
    /// assert_eq!(bb.max(), &Vector2::new(3., 4.));
    /// ```
    pub fn new_with_points<I: IntoIterator<Item = Point2<T>>>(iter: I) -> Option<Self> {
        let mut iter = iter.into_iter();
        let first = iter.next()?.coords;
        let (min, max) = iter.fold((first, first), |(min, max), p| {
            (min.inf(&p.coords), max.sup(&p.coords))
        });
        Some(Self { min, max })
    }

    pub fn min(&self) -> &Vector2<T> {
        &self.min
    }

    pub fn max(&self) -> &Vector2<T> {
        &self.max
    }

    pub fn center(&self) -> Vector2<T> {
        (self.min + self.max) * T::from_f64_lossy(0.5)
    }

    pub fn size(&self) -> Vector2<T> {
        self.max - self.min
    }

    /// Check if the bounding box contains a point (boundaries inclusive).
    /// # Examples
    /// ```
    /// use nalgebra::{Point2, Vector2};
    /// use darbellay::prelude::BoundingBox;
    /// let bb = BoundingBox::new(Vector2::new(0., 0.), Vector2::new(1., 1.));
    /// assert!(bb.contains(&Point2::new(0.5, 1.0)));
    /// assert!(!bb.contains(&Point2::new(-1e-8, 0.5)));
    /// ```
    pub fn contains(&self, point: &Point2<T>) -> bool {
        (0..2).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Vertical segment at `x` spanning the box height
    pub fn vertical_line(&self, x: T) -> (Point2<T>, Point2<T>) {
        (Point2::new(x, self.min.y), Point2::new(x, self.max.y))
    }

    /// Horizontal segment at `y` spanning the box width
    pub fn horizontal_line(&self, y: T) -> (Point2<T>, Point2<T>) {
        (Point2::new(self.min.x, y), Point2::new(self.max.x, y))
    }
}
