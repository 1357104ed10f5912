//! Actors: the positioned, drawable entities of the game.
//!
//! Every entity on screen is an [`Actor`]. What distinguishes the player's
//! robot from a falling artifact or the score banner is its [`Role`]; the
//! fields that drawing and movement care about are shared by all of them.

use crate::geo::Point;
use crate::render::texel::colors;
use crate::render::texel::Color;

pub mod artifact;
pub mod robot;

/// The font size actors are created with.
pub const DEFAULT_FONT_SIZE: i64 = 15;

/// A handle identifying an actor within a [`Cast`](crate::cast::Cast).
///
/// Handles are assigned by the cast when an actor is added, and are never
/// reused within that cast.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct ActorId(pub(crate) u64);

/// What part an [`Actor`] plays in the game.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Role {
  /// Scenery with no behavior of its own, such as a banner.
  Prop,
  /// The player-controlled robot.
  Robot,
  /// A falling gem or rock.
  Artifact {
    /// Free-form text attached to the artifact; nothing reads it during
    /// play.
    message: String,
  },
}

/// A visible, movable game entity.
#[derive(Clone, PartialEq, Debug)]
pub struct Actor {
  pub(crate) id: Option<ActorId>,
  role: Role,
  position: Point,
  velocity: Point,
  color: Color,
  text: String,
  font_size: i64,
}

impl Actor {
  /// Creates a new white, empty, stationary `Actor` at the origin.
  pub fn new(role: Role) -> Self {
    Self {
      id: None,
      role,
      position: Point::zero(),
      velocity: Point::zero(),
      color: colors::WHITE,
      text: String::new(),
      font_size: DEFAULT_FONT_SIZE,
    }
  }

  /// Creates a new [`Role::Prop`] actor.
  pub fn prop() -> Self {
    Self::new(Role::Prop)
  }

  /// Returns the handle assigned to this actor by a cast, if it has been
  /// added to one.
  pub fn id(&self) -> Option<ActorId> {
    self.id
  }

  /// Returns this actor's role.
  pub fn role(&self) -> &Role {
    &self.role
  }

  /// Returns this actor's position.
  pub fn position(&self) -> Point {
    self.position
  }

  /// Sets this actor's position.
  pub fn set_position(&mut self, position: Point) {
    self.position = position;
  }

  /// Returns a copy of this actor at the given position.
  pub fn with_position(mut self, position: Point) -> Self {
    self.position = position;
    self
  }

  /// Returns this actor's velocity, in canvas units per frame.
  pub fn velocity(&self) -> Point {
    self.velocity
  }

  /// Sets this actor's velocity.
  pub fn set_velocity(&mut self, velocity: Point) {
    self.velocity = velocity;
  }

  /// Returns this actor's color.
  pub fn color(&self) -> Color {
    self.color
  }

  /// Sets this actor's color.
  pub fn set_color(&mut self, color: Color) {
    self.color = color;
  }

  /// Returns a copy of this actor with the given color.
  pub fn with_color(mut self, color: Color) -> Self {
    self.color = color;
    self
  }

  /// Returns the text this actor is drawn as.
  pub fn text(&self) -> &str {
    &self.text
  }

  /// Sets the text this actor is drawn as.
  pub fn set_text(&mut self, text: impl Into<String>) {
    self.text = text.into();
  }

  /// Returns a copy of this actor with the given text.
  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.text = text.into();
    self
  }

  /// Returns this actor's font size.
  pub fn font_size(&self) -> i64 {
    self.font_size
  }

  /// Sets this actor's font size.
  pub fn set_font_size(&mut self, font_size: i64) {
    self.font_size = font_size;
  }

  /// Returns a copy of this actor with the given font size.
  pub fn with_font_size(mut self, font_size: i64) -> Self {
    self.font_size = font_size;
    self
  }

  /// Returns the message attached to this actor, if it is an artifact.
  pub fn message(&self) -> Option<&str> {
    match &self.role {
      Role::Artifact { message } => Some(message),
      _ => None,
    }
  }

  /// Attaches a message to this actor.
  ///
  /// Only artifacts carry messages; for any other role this does nothing.
  pub fn set_message(&mut self, text: impl Into<String>) {
    if let Role::Artifact { message } = &mut self.role {
      *message = text.into();
    }
  }

  /// Moves this actor by its velocity, wrapping around the edges of a
  /// `max_x` by `max_y` canvas.
  pub fn move_next(&mut self, max_x: i64, max_y: i64) {
    let next = self.position + self.velocity;
    self.position =
      Point::new(next.x().rem_euclid(max_x), next.y().rem_euclid(max_y));
  }
}
