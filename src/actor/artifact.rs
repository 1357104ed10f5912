//! Falling artifacts: gems to catch and rocks to dodge.

use rand::distributions::Distribution as _;
use rand::distributions::Uniform;
use rand::Rng;

use crate::actor::Actor;
use crate::actor::Role;
use crate::geo::Point;
use crate::render::texel::Color;
use crate::settings::Settings;

/// The two kinds of artifact.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum ArtifactKind {
  /// A hazard, drawn as `o`; catching one costs a point.
  Rock,
  /// A reward, drawn as `*`; catching one earns a point.
  Gem,
}

impl ArtifactKind {
  /// Returns the text an artifact of this kind is drawn as.
  pub fn glyph(self) -> &'static str {
    match self {
      Self::Rock => "o",
      Self::Gem => "*",
    }
  }

  /// Returns the change in score for catching an artifact of this kind.
  pub fn score(self) -> i64 {
    match self {
      Self::Rock => -1,
      Self::Gem => 1,
    }
  }

  /// Recovers an artifact kind from an actor's text.
  pub fn from_text(text: &str) -> Option<Self> {
    match text {
      "o" => Some(Self::Rock),
      "*" => Some(Self::Gem),
      _ => None,
    }
  }
}

/// Returns the change in score for catching an actor drawn as `text`.
///
/// Text that doesn't name an artifact kind is worth nothing.
pub fn score_for(text: &str) -> i64 {
  ArtifactKind::from_text(text).map_or(0, ArtifactKind::score)
}

/// Creates a new artifact of the given kind, with no message.
pub fn new(kind: ArtifactKind) -> Actor {
  Actor::new(Role::Artifact {
    message: String::new(),
  })
  .with_text(kind.glyph())
}

/// Creates a new randomly-placed, randomly-colored artifact near the top of
/// the canvas.
///
/// The artifact is placed on a grid cell in columns `1..cols` and rows
/// `0..=spawn_rows`.
pub fn spawn(rng: &mut impl Rng, settings: &Settings) -> Actor {
  let kind = if rng.gen_bool(0.5) {
    ArtifactKind::Rock
  } else {
    ArtifactKind::Gem
  };

  let col = Uniform::new(1, settings.cols()).sample(rng);
  let row = Uniform::new_inclusive(0, settings.spawn_rows).sample(rng);
  let position = Point::new(col, row).scale(settings.cell_size);

  let color = Color::new(rng.gen(), rng.gen(), rng.gen());

  new(kind)
    .with_position(position)
    .with_color(color)
    .with_font_size(settings.font_size)
}
