//! Operator overloads.

use std::ops::Add;
use std::ops::Mul;
use std::ops::Sub;

use num::Zero;

use crate::geo::Point;

impl<T: Zero + Copy> Zero for Point<T> {
  #[inline]
  fn zero() -> Self {
    Self::new(T::zero(), T::zero())
  }

  #[inline]
  fn is_zero(&self) -> bool {
    self.x().is_zero() && self.y().is_zero()
  }
}

impl<T: Add<Output = T> + Copy> Add for Point<T> {
  type Output = Self;
  #[inline]
  fn add(self, other: Self) -> Self {
    Self::new(self.x() + other.x(), self.y() + other.y())
  }
}

impl<T: Sub<Output = T> + Copy> Sub for Point<T> {
  type Output = Self;
  #[inline]
  fn sub(self, other: Self) -> Self {
    Self::new(self.x() - other.x(), self.y() - other.y())
  }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Point<T> {
  type Output = Self;
  #[inline]
  fn mul(self, factor: T) -> Self {
    Self::new(self.x() * factor, self.y() * factor)
  }
}
