//! Game settings.
//!
//! Settings are read from an optional JSON file; any field missing from the
//! file keeps its default value.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::actor::robot::Band;
use crate::error::GameError;

/// Environment variable naming a JSON settings file.
pub const CONFIG_VAR: &str = "GREED_CONFIG";

/// Tunable game parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// The window title.
  pub caption: String,
  /// Canvas width, in canvas units.
  pub width: i64,
  /// Canvas height, in canvas units. Artifacts landing exactly on this
  /// coordinate are removed.
  pub height: i64,
  /// The size of one grid cell, in canvas units.
  pub cell_size: i64,
  /// Font size given to spawned actors.
  pub font_size: i64,
  /// Target frames per second.
  pub frame_rate: u32,
  /// The most artifacts allowed on screen at once.
  pub max_artifacts: usize,
  /// Artifacts spawn in grid rows `0..=spawn_rows`.
  pub spawn_rows: i64,
  /// The vertical band the robot is kept in.
  pub robot_band: Band,
  /// Seed for the artifact spawner; `None` seeds from entropy.
  pub seed: Option<u64>,
  /// File to write logs to.
  pub log_file: Option<PathBuf>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      caption: "Greed".into(),
      width: 900,
      height: 600,
      cell_size: 15,
      font_size: 15,
      frame_rate: 12,
      max_artifacts: 50,
      spawn_rows: 5,
      robot_band: Band::default(),
      seed: None,
      log_file: None,
    }
  }
}

impl Settings {
  /// Parses settings from a JSON string, validating the result.
  pub fn from_json(json: &str) -> Result<Self, GameError> {
    let settings: Settings = serde_json::from_str(json)?;
    settings.validate()?;
    Ok(settings)
  }

  /// Loads settings from the JSON file at `path`.
  pub fn load(path: &Path) -> Result<Self, GameError> {
    Self::from_json(&fs::read_to_string(path)?)
  }

  /// Returns the number of grid columns on the canvas.
  pub fn cols(&self) -> i64 {
    self.width / self.cell_size
  }

  /// Returns the number of grid rows on the canvas.
  pub fn rows(&self) -> i64 {
    self.height / self.cell_size
  }

  /// Checks that every value is in a usable range.
  pub fn validate(&self) -> Result<(), GameError> {
    let positive = [
      ("width", self.width),
      ("height", self.height),
      ("cell_size", self.cell_size),
      ("frame_rate", self.frame_rate as i64),
    ];
    for &(name, value) in &positive {
      if value <= 0 {
        return Err(GameError::Config(format!(
          "{} must be positive, got {}",
          name, value
        )));
      }
    }
    if self.cols() < 2 {
      return Err(GameError::Config(format!(
        "width {} leaves no room to spawn artifacts",
        self.width
      )));
    }
    if self.spawn_rows < 0 {
      return Err(GameError::Config(format!(
        "spawn_rows must not be negative, got {}",
        self.spawn_rows
      )));
    }
    if self.robot_band.top >= self.robot_band.bottom {
      return Err(GameError::Config(format!(
        "robot_band top {} must be above bottom {}",
        self.robot_band.top, self.robot_band.bottom
      )));
    }
    Ok(())
  }
}
