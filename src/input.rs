//! Input processing utilties.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;

use crate::error::GameError;
use crate::geo::Point;

/// A source of directional input.
pub trait KeyboardService: Send + Sync {
  /// Returns the direction the player is currently steering in, already
  /// scaled to canvas units, or zero if no direction key is pressed.
  fn get_direction(&mut self) -> Result<Point, GameError>;
}

bitflags::bitflags! {
  /// The set of game keys pressed during a frame.
  pub struct Held: u8 {
    const LEFT = 1 << 0;
    const RIGHT = 1 << 1;
    const UP = 1 << 2;
    const DOWN = 1 << 3;
    const QUIT = 1 << 7;
  }
}

impl Held {
  /// Maps a key press onto the game key it stands for.
  ///
  /// Both the arrow keys and WASD steer; `q`, Esc and Ctrl-C quit.
  pub fn from_key(key: KeyEvent) -> Self {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
      KeyCode::Char('c') if ctrl => Self::QUIT,
      KeyCode::Left => Self::LEFT,
      KeyCode::Right => Self::RIGHT,
      KeyCode::Up => Self::UP,
      KeyCode::Down => Self::DOWN,
      KeyCode::Esc => Self::QUIT,
      KeyCode::Char(c) => match c.to_ascii_lowercase() {
        'a' => Self::LEFT,
        'd' => Self::RIGHT,
        'w' => Self::UP,
        's' => Self::DOWN,
        'q' => Self::QUIT,
        _ => Self::empty(),
      },
      _ => Self::empty(),
    }
  }

  /// Returns the unit direction these keys point in.
  ///
  /// Opposing keys cancel out.
  pub fn direction(self) -> Point {
    let axis = |neg: Held, pos: Held| {
      self.contains(pos) as i64 - self.contains(neg) as i64
    };
    Point::new(axis(Self::LEFT, Self::RIGHT), axis(Self::UP, Self::DOWN))
  }
}

/// A [`KeyboardService`] reading key presses from the terminal.
///
/// Due to the nature of teletype terminals, the only inputs we can really
/// capture are key-presses as recorded by the VT100 emulator; there are no
/// key-release events. A key therefore steers the robot for the one frame in
/// which its press arrives.
pub struct TerminalKeyboard {
  cell_size: i64,
  close_requested: Arc<AtomicBool>,
}

impl TerminalKeyboard {
  /// Creates a new `TerminalKeyboard` that moves one cell per key press.
  ///
  /// When a quit key is pressed, `true` is stored into `close_requested`.
  pub fn new(cell_size: i64, close_requested: Arc<AtomicBool>) -> Self {
    Self {
      cell_size,
      close_requested,
    }
  }

  /// Drains every pending terminal event, collecting the game keys pressed.
  fn poll(&mut self) -> Result<Held, GameError> {
    let mut held = Held::empty();
    while event::poll(Duration::default())? {
      if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Release {
          held |= Held::from_key(key);
        }
      }
    }
    Ok(held)
  }
}

impl KeyboardService for TerminalKeyboard {
  fn get_direction(&mut self) -> Result<Point, GameError> {
    let held = self.poll()?;
    if held.contains(Held::QUIT) {
      log::info!("quit requested");
      self.close_requested.store(true, Ordering::Relaxed);
    }
    Ok(held.direction().scale(self.cell_size))
  }
}
