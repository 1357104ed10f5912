//! Geometry and math library.
//!
//! Game coordinates are integral "canvas units": x increases to the right and
//! y increases downwards, with the origin at the upper-left corner of the
//! canvas.

use std::ops::Mul;

use num::Signed;
use num::Zero;

mod impls;

/// A two-dimensional point.
///
/// `Point<T>` values may be added and subtracted componentwise, and scaled by
/// a scalar.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Point<T = i64>([T; 2]);

impl<T> Point<T> {
  /// Creates a new `Point` with the given coordinates.
  #[inline]
  pub fn new(x: T, y: T) -> Self {
    Self([x, y])
  }

  /// Creates a new `Point` representing the origin.
  #[inline]
  pub fn zero() -> Self
  where
    T: Zero + Copy,
  {
    Zero::zero()
  }

  /// Returns this `Point`'s coordinates as an array.
  #[inline]
  pub fn coords(self) -> [T; 2] {
    self.0
  }

  /// Returns the `x` coordinate.
  #[inline]
  pub fn x(self) -> T
  where
    T: Copy,
  {
    self.0[0]
  }

  /// Returns the `y` coordinate.
  #[inline]
  pub fn y(self) -> T
  where
    T: Copy,
  {
    self.0[1]
  }

  /// Returns a copy of this `Point` with each coordinate multiplied by
  /// `factor`.
  #[inline]
  pub fn scale(self, factor: T) -> Self
  where
    T: Mul<Output = T> + Copy,
  {
    self * factor
  }

  /// Returns whether both coordinates lie strictly between `-reach` and
  /// `reach`.
  ///
  /// This is an axis-aligned box test; the boundary itself is excluded.
  #[inline]
  pub fn within(self, reach: T) -> bool
  where
    T: Signed + PartialOrd + Copy,
  {
    self.x().abs() < reach && self.y().abs() < reach
  }
}

/// A rectangle, represented as a pair of [`Point`] values.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Rect<T = i64>(Point<T>, Point<T>);

// Invariant: rect.0.x <= rect.1.x and rect.0.y <= rect.1.y.
impl<T: Signed + Copy + PartialOrd> Rect<T> {
  /// Creates a new `Rect` of the given dimensions with one corner at the
  /// origin.
  #[inline]
  pub fn with_dims(width: T, height: T) -> Self {
    Self(Point::zero(), Point::new(width.abs(), height.abs()))
  }

  /// Returns the upper-left corner of this `Rect`.
  #[inline]
  pub fn upper_left(self) -> Point<T> {
    self.0
  }

  /// Returns the width of this `Rect`.
  #[inline]
  pub fn width(self) -> T {
    self.1.x() - self.0.x()
  }

  /// Returns the height of this `Rect`.
  #[inline]
  pub fn height(self) -> T {
    self.1.y() - self.0.y()
  }

  /// Returns the area of this `Rect`.
  #[inline]
  pub fn area(self) -> T {
    self.width() * self.height()
  }

  /// Returns whether this `Rect` contains a given point.
  ///
  /// Note that the points in a rectangle form an "exclusive" range; points
  /// colinear with the lower-right corner are *not* part of the rectangle.
  #[inline]
  pub fn contains(self, p: Point<T>) -> bool {
    (self.0.x()..self.1.x()).contains(&p.x())
      && (self.0.y()..self.1.y()).contains(&p.y())
  }
}

impl Rect<i64> {
  /// Returns an iterator over all points in this rectangle.
  ///
  /// Points are traversed in row-major order.
  pub fn points(self) -> impl Iterator<Item = Point> {
    let [x1, y1] = self.0.coords();
    let [x2, y2] = self.1.coords();

    (y1..y2).flat_map(move |y| (x1..x2).map(move |x| Point::new(x, y)))
  }
}

/// A rectangle with associated data at each point.
// Invariant: self.1.len() == self.0.area()
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct RectVec<T>(Rect<i64>, Box<[T]>);

impl<T: Clone> RectVec<T> {
  /// Creates a new, empty `RectVec` with degenerate coordinates.
  pub fn empty() -> Self {
    RectVec(Rect::with_dims(0, 0), Vec::new().into_boxed_slice())
  }

  /// Creates a new `RectVec` with the requested dimensions and filled with the
  /// given value.
  pub fn new(rect: Rect<i64>, val: T) -> Self {
    RectVec(rect, vec![val; rect.area() as usize].into_boxed_slice())
  }

  /// Returns this `RectVec`'s dimensions.
  pub fn dims(&self) -> Rect<i64> {
    self.0
  }

  /// Returns this `RectVec`'s data as a linear slice.
  pub fn data(&self) -> &[T] {
    &self.1
  }

  /// Overwrites every value in this `RectVec` with `val`.
  pub fn fill(&mut self, val: T) {
    for x in self.1.iter_mut() {
      *x = val.clone();
    }
  }

  /// Gets a reference to the data value associated with `p`.
  ///
  /// Returns `None` if `p` is out-of-bounds.
  pub fn get(&self, p: Point<i64>) -> Option<&T> {
    let index = self.index_of(p)?;
    self.1.get(index)
  }

  /// Gets a mutable reference to the data value associated with `p`.
  ///
  /// Returns `None` if `p` is out-of-bounds.
  pub fn get_mut(&mut self, p: Point<i64>) -> Option<&mut T> {
    let index = self.index_of(p)?;
    self.1.get_mut(index)
  }

  /// Returns an iterator over the points of this `RectVec` and their associated
  /// values.
  pub fn points(&self) -> impl Iterator<Item = (Point<i64>, &T)> + '_ {
    self.dims().points().zip(self.1.iter())
  }

  fn index_of(&self, p: Point<i64>) -> Option<usize> {
    if !self.dims().contains(p) {
      return None;
    }
    let rel = p - self.dims().upper_left();
    Some((rel.x() + rel.y() * self.dims().width()) as usize)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_point_add_and_scale() {
    let p = Point::new(3, 4) + Point::new(0, 1);
    assert_eq!(p, Point::new(3, 5));
    assert_eq!(Point::new(59, 5).scale(15), Point::new(885, 75));
    assert_eq!(Point::new(2, -3) - Point::new(5, 5), Point::new(-3, -8));
  }

  #[test]
  fn test_point_within_is_exclusive() {
    assert!(Point::new(5, 5).within(10));
    assert!(Point::new(-9, 9).within(10));
    assert!(!Point::new(10, 0).within(10));
    assert!(!Point::new(0, -10).within(10));
  }

  #[test]
  fn test_rect_contains_and_points() {
    let r = Rect::with_dims(3, 2);
    assert!(r.contains(Point::new(0, 0)));
    assert!(r.contains(Point::new(2, 1)));
    assert!(!r.contains(Point::new(3, 1)));
    assert!(!r.contains(Point::new(-1, 0)));

    let pts = r.points().collect::<Vec<_>>();
    assert_eq!(pts.len(), 6);
    assert_eq!(pts[0], Point::new(0, 0));
    assert_eq!(pts[3], Point::new(0, 1));
  }

  #[test]
  fn test_rect_vec_indexing() {
    let mut v = RectVec::new(Rect::with_dims(4, 3), 0u8);
    *v.get_mut(Point::new(1, 2)).unwrap() = 7;
    assert_eq!(v.data()[9], 7);
    assert_eq!(v.get(Point::new(1, 2)), Some(&7));
    assert_eq!(v.get(Point::new(4, 0)), None);

    v.fill(1);
    assert!(v.data().iter().all(|&x| x == 1));
  }
}
