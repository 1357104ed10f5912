//! The director: runs the game one frame at a time.
//!
//! A frame is four steps, always in this order:
//! 1. [`spawn_step()`]: artifacts fall, land, and are replenished.
//! 2. [`input_step()`]: the keyboard steers the robot.
//! 3. [`update_step()`]: the robot moves and catches artifacts.
//! 4. [`render_step()`]: everything is drawn.
//!
//! Each step is a plain function over the game state so it can be driven
//! directly; [`Director`] wraps them in `legion` systems and runs them as a
//! schedule, with the [`Cast`], [`Score`] and services held as resources.

use legion::Resources;
use legion::Schedule;
use legion::World;
use rand::Rng;
use rand_pcg::Pcg64;

use crate::actor::artifact;
use crate::actor::robot::Band;
use crate::cast::Cast;
use crate::cast::ARTIFACTS;
use crate::cast::BANNERS;
use crate::cast::ROBOTS;
use crate::error::GameError;
use crate::geo::Point;
use crate::input::KeyboardService;
use crate::render::VideoService;
use crate::settings::Settings;

/// How close, on each axis, the robot must be to an artifact to catch it.
/// The bound is exclusive.
pub const CATCH_REACH: i64 = 10;

/// The player's running score.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Score(pub i64);

/// Holds the first error raised by a step during the current frame.
///
/// Systems can't return errors, so they park them here for the [`Director`]
/// to pick up once the frame's schedule has run.
#[derive(Debug, Default)]
pub struct Fault(Option<GameError>);

impl Fault {
  fn record(&mut self, result: Result<(), GameError>) {
    if let Err(e) = result {
      log::error!("frame step failed: {}", e);
      if self.0.is_none() {
        self.0 = Some(e);
      }
    }
  }
}

/// Advances every artifact one unit downwards, removes those that land on the
/// bottom edge, and spawns one new artifact if there is room.
///
/// Landing is an exact test against the canvas height: an artifact that is
/// moved past the edge without ever sitting on it keeps falling.
pub fn spawn_step(cast: &mut Cast, settings: &Settings, rng: &mut impl Rng) {
  let mut landed = Vec::new();
  for artifact in cast.actors_mut(ARTIFACTS) {
    artifact.set_position(artifact.position() + Point::new(0, 1));
    if artifact.position().y() == settings.height {
      landed.extend(artifact.id());
    }
  }
  for id in landed {
    log::trace!("artifact {:?} landed", id);
    cast.remove_actor(ARTIFACTS, id);
  }

  if cast.actors(ARTIFACTS).len() < settings.max_artifacts {
    let artifact = artifact::spawn(rng, settings);
    log::trace!(
      "spawned {:?} at {:?}",
      artifact.text(),
      artifact.position()
    );
    cast.add_actor(ARTIFACTS, artifact);
  }
}

/// Hands the keyboard's direction to the robot as its velocity, and wraps the
/// robot back into `band`.
///
/// # Errors
///
/// Fails if there is no robot, or if the keyboard can't be read.
pub fn input_step(
  cast: &mut Cast,
  keyboard: &mut dyn KeyboardService,
  band: Band,
) -> Result<(), GameError> {
  let robot = cast.first_actor_mut(ROBOTS)?;
  robot.set_velocity(keyboard.get_direction()?);

  let pos = robot.position();
  robot.set_position(Point::new(pos.x(), band.wrap(pos.y())));
  Ok(())
}

/// Moves the robot, resolves its collisions with artifacts, and updates the
/// banner with the score.
///
/// Every artifact within [`CATCH_REACH`] of the robot is caught in the same
/// frame, and removed whatever it was worth.
///
/// # Errors
///
/// Fails if there is no robot or no banner.
pub fn update_step(
  cast: &mut Cast,
  score: &mut Score,
  max_x: i64,
  max_y: i64,
) -> Result<(), GameError> {
  cast.first_actor_mut(BANNERS)?.set_text("");

  let robot = cast.first_actor_mut(ROBOTS)?;
  robot.move_next(max_x, max_y);
  let pos = robot.position();

  let caught = cast
    .actors(ARTIFACTS)
    .iter()
    .filter(|a| (pos - a.position()).within(CATCH_REACH))
    .filter_map(|a| Some((a.id()?, artifact::score_for(a.text()))))
    .collect::<Vec<_>>();
  for (id, points) in caught {
    score.0 += points;
    cast.remove_actor(ARTIFACTS, id);
    log::debug!("caught {:?} for {:+}, score {}", id, points, score.0);
  }

  cast
    .first_actor_mut(BANNERS)?
    .set_text(format!("Score: {}", score.0));
  Ok(())
}

/// Redraws every actor in the cast.
///
/// # Errors
///
/// Fails if the frame can't be presented.
pub fn render_step(
  cast: &Cast,
  video: &mut dyn VideoService,
) -> Result<(), GameError> {
  video.clear_buffer();
  let actors = cast.all_actors().collect::<Vec<_>>();
  video.draw_actors(&actors);
  video.flush_buffer()
}

#[legion::system]
fn spawn(
  #[resource] cast: &mut Cast,
  #[resource] settings: &Settings,
  #[resource] rng: &mut Pcg64,
) {
  spawn_step(cast, settings, rng);
}

#[legion::system]
fn input(
  #[resource] cast: &mut Cast,
  #[resource] keyboard: &mut Box<dyn KeyboardService>,
  #[resource] settings: &Settings,
  #[resource] fault: &mut Fault,
) {
  fault.record(input_step(cast, &mut **keyboard, settings.robot_band));
}

#[legion::system]
fn update(
  #[resource] cast: &mut Cast,
  #[resource] score: &mut Score,
  #[resource] video: &mut Box<dyn VideoService>,
  #[resource] fault: &mut Fault,
) {
  let video: &dyn VideoService = &**video;
  let (max_x, max_y) = (video.width(), video.height());
  fault.record(update_step(cast, score, max_x, max_y));
}

#[legion::system]
fn render(
  #[resource] cast: &Cast,
  #[resource] video: &mut Box<dyn VideoService>,
  #[resource] fault: &mut Fault,
) {
  fault.record(render_step(cast, &mut **video));
}

/// Runs the game loop.
///
/// Actors live in the [`Cast`] resource; the legion world carries no
/// entities and only exists to execute the schedule against.
pub struct Director {
  world: World,
  resources: Resources,
  schedule: Schedule,
}

impl Director {
  /// Creates a new `Director` that reads from `keyboard`, draws to `video`,
  /// and spawns artifacts using `rng`.
  pub fn new(
    keyboard: Box<dyn KeyboardService>,
    video: Box<dyn VideoService>,
    settings: Settings,
    rng: Pcg64,
  ) -> Self {
    let mut resources = Resources::default();
    resources.insert(keyboard);
    resources.insert(video);
    resources.insert(settings);
    resources.insert(rng);
    resources.insert(Score::default());
    resources.insert(Fault::default());

    // Every step writes the cast, so the schedule runs them one after another
    // in the order they are added.
    let schedule = Schedule::builder()
      .add_system(spawn_system())
      .add_system(input_system())
      .add_system(update_system())
      .add_system(render_system())
      .build();

    Self {
      world: World::default(),
      resources,
      schedule,
    }
  }

  /// Returns the current score.
  pub fn score(&self) -> Score {
    self.resources.get::<Score>().map(|s| *s).unwrap_or_default()
  }

  /// Plays a game with `cast` until the window is closed.
  ///
  /// The window is closed on the way out even if a frame fails. Returns the
  /// final score.
  pub fn start_game(&mut self, cast: Cast) -> Result<Score, GameError> {
    self.resources.insert(cast);
    self.video(|v| v.open_window())??;
    log::info!("game started");

    let played = self.play();
    let closed = self.video(|v| v.close_window())?;
    played?;
    closed?;

    let score = self.score();
    log::info!("game over, final score {}", score.0);
    Ok(score)
  }

  /// Runs a single frame.
  ///
  /// # Errors
  ///
  /// Returns the first error raised by any step in the frame.
  pub fn frame(&mut self) -> Result<(), GameError> {
    if !self.resources.contains::<Cast>() {
      return Err(GameError::MissingResource("cast"));
    }
    self.schedule.execute(&mut self.world, &mut self.resources);

    let fault = self
      .resources
      .get_mut::<Fault>()
      .and_then(|mut fault| fault.0.take());
    match fault {
      Some(e) => Err(e),
      None => Ok(()),
    }
  }

  fn play(&mut self) -> Result<(), GameError> {
    while self.video(|v| v.is_window_open())? {
      self.frame()?;
    }
    Ok(())
  }

  fn video<T>(
    &mut self,
    f: impl FnOnce(&mut dyn VideoService) -> T,
  ) -> Result<T, GameError> {
    let mut video = self
      .resources
      .get_mut::<Box<dyn VideoService>>()
      .ok_or(GameError::MissingResource("video"))?;
    Ok(f(&mut **video))
  }
}
