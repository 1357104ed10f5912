//! The cast: every actor in play, sorted into named groups.

use crate::actor::robot;
use crate::actor::Actor;
use crate::actor::ActorId;
use crate::error::GameError;
use crate::geo::Point;
use crate::settings::Settings;

/// The group holding the player's robot.
pub const ROBOTS: &str = "robots";
/// The group holding the score banner.
pub const BANNERS: &str = "banners";
/// The group holding falling artifacts.
pub const ARTIFACTS: &str = "artifacts";

/// A collection of actors grouped by role.
///
/// Groups are kept in the order they were first added to, and actors within a
/// group are kept in insertion order; [`Cast::all_actors()`] walks them in
/// that order, which is also the draw order.
#[derive(Clone, Debug, Default)]
pub struct Cast {
  groups: Vec<(String, Vec<Actor>)>,
  next_id: u64,
}

impl Cast {
  /// Creates a new, empty `Cast`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates the cast a game starts with: a blank banner in the upper-left
  /// corner and the robot in the middle of the canvas.
  pub fn opening(settings: &Settings) -> Self {
    let mut cast = Self::new();
    cast.add_actor(
      BANNERS,
      Actor::prop()
        .with_position(Point::new(settings.cell_size, 0))
        .with_font_size(settings.font_size),
    );
    cast.add_actor(
      ROBOTS,
      robot::new(
        Point::new(settings.width / 2, settings.height / 2),
        settings.font_size,
      ),
    );
    cast
  }

  /// Adds `actor` to the end of `group`, creating the group if needed.
  ///
  /// Returns the handle the actor can later be removed by.
  pub fn add_actor(&mut self, group: &str, mut actor: Actor) -> ActorId {
    let id = ActorId(self.next_id);
    self.next_id += 1;
    actor.id = Some(id);

    match self.groups.iter_mut().find(|(name, _)| name == group) {
      Some((_, actors)) => actors.push(actor),
      None => self.groups.push((group.to_string(), vec![actor])),
    }
    id
  }

  /// Removes the actor with handle `id` from `group`, returning it.
  ///
  /// Removing an actor that isn't in the group does nothing.
  pub fn remove_actor(&mut self, group: &str, id: ActorId) -> Option<Actor> {
    let actors = self.group_mut(group)?;
    let index = actors.iter().position(|a| a.id == Some(id))?;
    Some(actors.remove(index))
  }

  /// Returns the actors in `group`; a group that doesn't exist is empty.
  pub fn actors(&self, group: &str) -> &[Actor] {
    self
      .groups
      .iter()
      .find(|(name, _)| name == group)
      .map(|(_, actors)| actors.as_slice())
      .unwrap_or(&[])
  }

  /// Returns the actors in `group` for modification.
  pub fn actors_mut(&mut self, group: &str) -> &mut [Actor] {
    match self.group_mut(group) {
      Some(actors) => actors.as_mut_slice(),
      None => &mut [],
    }
  }

  /// Returns the first actor in `group`.
  ///
  /// # Errors
  ///
  /// Returns [`GameError::NotFound`] if the group is empty or doesn't exist.
  pub fn first_actor(&self, group: &str) -> Result<&Actor, GameError> {
    self.actors(group).first().ok_or_else(|| not_found(group))
  }

  /// Returns the first actor in `group` for modification.
  ///
  /// # Errors
  ///
  /// Returns [`GameError::NotFound`] if the group is empty or doesn't exist.
  pub fn first_actor_mut(
    &mut self,
    group: &str,
  ) -> Result<&mut Actor, GameError> {
    self.actors_mut(group).first_mut().ok_or_else(|| not_found(group))
  }

  /// Returns an iterator over every actor, in draw order.
  pub fn all_actors(&self) -> impl Iterator<Item = &Actor> + '_ {
    self.groups.iter().flat_map(|(_, actors)| actors.iter())
  }

  fn group_mut(&mut self, group: &str) -> Option<&mut Vec<Actor>> {
    self
      .groups
      .iter_mut()
      .find(|(name, _)| name == group)
      .map(|(_, actors)| actors)
  }
}

fn not_found(group: &str) -> GameError {
  GameError::NotFound {
    group: group.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_add_and_remove() {
    let mut cast = Cast::new();
    let a = cast.add_actor(ARTIFACTS, Actor::prop().with_text("a"));
    let b = cast.add_actor(ARTIFACTS, Actor::prop().with_text("b"));
    assert_ne!(a, b);
    assert_eq!(cast.actors(ARTIFACTS).len(), 2);

    let removed = cast.remove_actor(ARTIFACTS, a).unwrap();
    assert_eq!(removed.text(), "a");
    assert_eq!(cast.actors(ARTIFACTS).len(), 1);
    assert_eq!(cast.actors(ARTIFACTS)[0].id(), Some(b));
  }

  #[test]
  fn test_remove_is_idempotent() {
    let mut cast = Cast::new();
    let a = cast.add_actor(ARTIFACTS, Actor::prop());
    assert!(cast.remove_actor(ARTIFACTS, a).is_some());
    assert!(cast.remove_actor(ARTIFACTS, a).is_none());
    assert!(cast.remove_actor("nowhere", a).is_none());
    assert!(cast.actors(ARTIFACTS).is_empty());
  }

  #[test]
  fn test_absent_group_is_empty() {
    let mut cast = Cast::new();
    assert!(cast.actors("nowhere").is_empty());
    assert!(cast.actors_mut("nowhere").is_empty());
  }

  #[test]
  fn test_first_actor_not_found() {
    let mut cast = Cast::new();
    assert!(matches!(
      cast.first_actor(ROBOTS),
      Err(GameError::NotFound { ref group }) if group == ROBOTS
    ));

    let id = cast.add_actor(ROBOTS, Actor::prop());
    assert_eq!(cast.first_actor(ROBOTS).unwrap().id(), Some(id));

    cast.remove_actor(ROBOTS, id);
    assert!(cast.first_actor_mut(ROBOTS).is_err());
  }

  #[test]
  fn test_all_actors_draw_order() {
    let mut cast = Cast::new();
    cast.add_actor(BANNERS, Actor::prop().with_text("1"));
    cast.add_actor(ROBOTS, Actor::prop().with_text("2"));
    cast.add_actor(BANNERS, Actor::prop().with_text("3"));
    cast.add_actor(ARTIFACTS, Actor::prop().with_text("4"));

    let order = cast.all_actors().map(|a| a.text()).collect::<Vec<_>>();
    assert_eq!(order, ["1", "3", "2", "4"]);
  }

  #[test]
  fn test_opening_cast() {
    let cast = Cast::opening(&Settings::default());
    let robot = cast.first_actor(ROBOTS).unwrap();
    assert_eq!(robot.text(), "#");
    assert_eq!(robot.position(), Point::new(450, 300));

    let banner = cast.first_actor(BANNERS).unwrap();
    assert_eq!(banner.position(), Point::new(15, 0));
    assert_eq!(banner.text(), "");
    assert!(cast.actors(ARTIFACTS).is_empty());
  }
}
