//! Error types.

use std::error::Error;
use std::fmt;
use std::io;

/// An error raised while setting up or running the game.
#[derive(Debug)]
pub enum GameError {
  /// A cast group that must have at least one actor was empty.
  NotFound {
    /// The name of the empty group.
    group: String,
  },
  /// A resource the frame schedule depends on was never inserted.
  MissingResource(&'static str),
  /// The terminal or a file could not be read or written.
  Io(io::Error),
  /// A settings file was not valid JSON.
  Parse(serde_json::Error),
  /// A settings value was out of range.
  Config(String),
}

impl fmt::Display for GameError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NotFound { group } => write!(f, "no actors in group {:?}", group),
      Self::MissingResource(name) => write!(f, "missing resource: {}", name),
      Self::Io(e) => write!(f, "i/o error: {}", e),
      Self::Parse(e) => write!(f, "invalid settings: {}", e),
      Self::Config(msg) => write!(f, "invalid settings: {}", msg),
    }
  }
}

impl Error for GameError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::Parse(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for GameError {
  fn from(e: io::Error) -> Self {
    Self::Io(e)
  }
}

impl From<serde_json::Error> for GameError {
  fn from(e: serde_json::Error) -> Self {
    Self::Parse(e)
  }
}
