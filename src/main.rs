//! Greed: catch the gems, dodge the rocks.
//!
//! Steer the robot (`#`) along the bottom of the screen with the arrow keys or
//! WASD. Gems (`*`) are worth a point and rocks (`o`) cost one. Press `q` or
//! Esc to quit.

#![deny(unused)]
#![deny(warnings)]

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Context as _;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

pub mod actor;
pub mod cast;
pub mod director;
pub mod error;
pub mod geo;
pub mod input;
pub mod render;
pub mod settings;
pub mod timing;

use crate::cast::Cast;
use crate::director::Director;
use crate::input::TerminalKeyboard;
use crate::render::TerminalVideo;
use crate::settings::Settings;

/// Sets up `env_logger`, honoring `RUST_LOG`.
///
/// The terminal is owned by the game while it runs, so logs only go to
/// `stderr` when explicitly requested; normally they go to the settings'
/// `log_file`, if any.
fn init_logging(settings: &Settings) -> anyhow::Result<()> {
  let default = if settings.log_file.is_some() {
    "info"
  } else {
    "off"
  };
  let mut builder = env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or(default),
  );
  builder.format_timestamp_millis();
  if let Some(path) = &settings.log_file {
    let file = File::create(path)
      .with_context(|| format!("failed to create log file {:?}", path))?;
    builder.target(env_logger::Target::Pipe(Box::new(file)));
  }
  builder
    .try_init()
    .context("failed to initialise logging")?;
  Ok(())
}

fn load_settings() -> anyhow::Result<Settings> {
  match env::var_os(settings::CONFIG_VAR) {
    Some(path) => {
      let path = PathBuf::from(path);
      Settings::load(&path)
        .with_context(|| format!("failed to load settings from {:?}", path))
    }
    None => Ok(Settings::default()),
  }
}

fn main() -> anyhow::Result<()> {
  let settings = load_settings()?;
  init_logging(&settings)?;
  log::info!("starting with {:?}", settings);

  let rng = match settings.seed {
    Some(seed) => Pcg64::seed_from_u64(seed),
    None => Pcg64::from_entropy(),
  };

  let close_requested = Arc::new(AtomicBool::new(false));
  let keyboard =
    TerminalKeyboard::new(settings.cell_size, close_requested.clone());
  let video = TerminalVideo::new(&settings, close_requested);

  let cast = Cast::opening(&settings);
  let mut director =
    Director::new(Box::new(keyboard), Box::new(video), settings, rng);
  let score = director.start_game(cast).context("game aborted")?;

  println!("Final score: {}", score.0);
  Ok(())
}
