//! The player's robot.

use serde::Deserialize;
use serde::Serialize;

use crate::actor::Actor;
use crate::actor::Role;
use crate::geo::Point;
use crate::render::texel::colors;

/// The text the robot is drawn as.
pub const GLYPH: &str = "#";

/// Creates a new white robot at `position`.
pub fn new(position: Point, font_size: i64) -> Actor {
  Actor::new(Role::Robot)
    .with_text(GLYPH)
    .with_color(colors::WHITE)
    .with_position(position)
    .with_font_size(font_size)
}

/// A horizontal strip of the canvas that the robot wraps around in.
///
/// Leaving through the top puts the robot just above the bottom edge, and
/// vice versa. The robot is teleported rather than clamped, so a robot
/// sitting exactly on either edge is left alone.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Band {
  /// The upper edge.
  pub top: i64,
  /// The lower edge.
  pub bottom: i64,
}

impl Default for Band {
  fn default() -> Self {
    Self {
      top: 450,
      bottom: 560,
    }
  }
}

impl Band {
  /// Wraps the vertical coordinate `y` into this band.
  pub fn wrap(self, y: i64) -> i64 {
    if y < self.top {
      self.bottom - 1
    } else if y > self.bottom {
      self.top + 1
    } else {
      y
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_band_wrap() {
    let band = Band::default();
    assert_eq!(band.wrap(449), 559);
    assert_eq!(band.wrap(561), 451);
    assert_eq!(band.wrap(500), 500);
    assert_eq!(band.wrap(450), 450);
    assert_eq!(band.wrap(560), 560);
    assert_eq!(band.wrap(-30), 559);
  }

  #[test]
  fn test_new_robot() {
    let r = new(Point::new(450, 300), 15);
    assert_eq!(r.text(), "#");
    assert_eq!(r.role(), &Role::Robot);
    assert_eq!(r.position(), Point::new(450, 300));
  }
}
