//! Video output.
//!
//! The game draws through the [`VideoService`] trait. [`TerminalVideo`] is the
//! implementation used by the binary: it lays the canvas out as a grid of
//! `cell_size` squares and prints each actor's text into those cells.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use crate::actor::Actor;
use crate::error::GameError;
use crate::geo::Point;
use crate::geo::Rect;
use crate::geo::RectVec;
use crate::render::curses::Curses;
use crate::render::curses::DrawCall;
use crate::render::texel::Texel;
use crate::settings::Settings;
use crate::timing::FramePacer;

pub mod curses;
pub mod texel;

/// A window the game can be drawn into.
///
/// Drawing is double-buffered: [`draw_actors()`](Self::draw_actors) only
/// touches an off-screen buffer, which [`flush_buffer()`](Self::flush_buffer)
/// presents. Implementations are expected to pace the game by blocking in
/// `flush_buffer()`.
pub trait VideoService: Send + Sync {
  /// Opens the window.
  fn open_window(&mut self) -> Result<(), GameError>;

  /// Closes the window.
  fn close_window(&mut self) -> Result<(), GameError>;

  /// Returns whether the window is open and hasn't been asked to close.
  fn is_window_open(&self) -> bool;

  /// Returns the width of the canvas, in canvas units.
  fn width(&self) -> i64;

  /// Returns the height of the canvas, in canvas units.
  fn height(&self) -> i64;

  /// Clears the off-screen buffer.
  fn clear_buffer(&mut self);

  /// Draws each of `actors` into the off-screen buffer, in order.
  fn draw_actors(&mut self, actors: &[&Actor]);

  /// Presents the off-screen buffer.
  fn flush_buffer(&mut self) -> Result<(), GameError>;
}

/// A [`VideoService`] that draws to the terminal.
pub struct TerminalVideo {
  curses: Curses,
  settings: Settings,
  close_requested: Arc<AtomicBool>,

  frame: RectVec<Texel>,
  shown: RectVec<Texel>,
  pacer: FramePacer,
}

impl TerminalVideo {
  /// Creates a new `TerminalVideo`.
  ///
  /// Storing `true` into `close_requested` (usually done by the keyboard)
  /// makes [`VideoService::is_window_open()`] return false.
  pub fn new(settings: &Settings, close_requested: Arc<AtomicBool>) -> Self {
    let grid = Rect::with_dims(settings.cols(), settings.rows());
    Self {
      curses: Curses::stdout(),
      settings: settings.clone(),
      close_requested,
      frame: RectVec::new(grid, Texel::blank()),
      shown: RectVec::empty(),
      pacer: FramePacer::new(settings.frame_rate),
    }
  }

  /// Returns the grid cell that the canvas point `p` falls in.
  fn cell_of(&self, p: Point) -> Point {
    let size = self.settings.cell_size;
    Point::new(p.x().div_euclid(size), p.y().div_euclid(size))
  }
}

impl VideoService for TerminalVideo {
  fn open_window(&mut self) -> Result<(), GameError> {
    // Cells past the edge of a small terminal are never drawn.
    let (rows, cols) = curses::dims()?;
    let grid = Rect::with_dims(
      self.settings.cols().min(cols as i64),
      self.settings.rows().min(rows as i64),
    );
    self.frame = RectVec::new(grid, Texel::blank());
    self.shown = RectVec::empty();

    self.curses.enter(&self.settings.caption)?;
    log::info!(
      "opened {}x{} window ({}x{} terminal)",
      grid.width(),
      grid.height(),
      cols,
      rows
    );
    Ok(())
  }

  fn close_window(&mut self) -> Result<(), GameError> {
    self.curses.leave()?;
    log::info!("closed window after {} frames", self.pacer.frames());
    Ok(())
  }

  fn is_window_open(&self) -> bool {
    self.curses.is_active() && !self.close_requested.load(Ordering::Relaxed)
  }

  fn width(&self) -> i64 {
    self.settings.width
  }

  fn height(&self) -> i64 {
    self.settings.height
  }

  fn clear_buffer(&mut self) {
    self.frame.fill(Texel::blank());
  }

  fn draw_actors(&mut self, actors: &[&Actor]) {
    for actor in actors {
      let cell = self.cell_of(actor.position());
      let bold = actor.font_size() > self.settings.cell_size;
      for (i, c) in actor.text().chars().enumerate() {
        let p = cell + Point::new(i as i64, 0);
        if let Some(tx) = self.frame.get_mut(p) {
          *tx = Texel::new(c).with_fg(actor.color()).with_bold(bold);
        }
      }
    }
  }

  fn flush_buffer(&mut self) -> Result<(), GameError> {
    let redraw_all = self.shown.dims() != self.frame.dims();
    let origin = self.frame.dims().upper_left();
    for (i, (p, tx)) in self.frame.points().enumerate() {
      if !redraw_all && self.shown.data()[i] == *tx {
        continue;
      }
      let rel = p - origin;
      self.curses.draw(DrawCall {
        row: rel.y() as usize,
        col: rel.x() as usize,
        texel: *tx,
      })?;
    }
    self.curses.flush()?;

    self.shown = self.frame.clone();

    self.pacer.tick();
    log::trace!(
      "frame {} ({:.1} fps)",
      self.pacer.frames(),
      self.pacer.fps(Duration::from_secs(1))
    );
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::actor::artifact;
  use crate::actor::artifact::ArtifactKind;
  use crate::render::texel::colors;

  fn video() -> TerminalVideo {
    TerminalVideo::new(&Settings::default(), Arc::new(AtomicBool::new(false)))
  }

  #[test]
  fn test_canvas_dims() {
    let v = video();
    assert_eq!((v.width(), v.height()), (900, 600));
    assert_eq!(v.frame.dims(), Rect::with_dims(60, 40));
    assert!(!v.is_window_open());
  }

  #[test]
  fn test_draw_actors_into_cells() {
    let mut v = video();
    let banner = Actor::prop()
      .with_text("Score: 3")
      .with_position(Point::new(15, 0));
    let gem = artifact::new(ArtifactKind::Gem)
      .with_position(Point::new(885, 599))
      .with_color(colors::GOLD);
    let offscreen = Actor::prop()
      .with_text("x")
      .with_position(Point::new(0, 900));

    v.draw_actors(&[&banner, &gem, &offscreen]);

    let row0 = (0..10)
      .map(|x| v.frame.get(Point::new(x, 0)).unwrap().glyph())
      .collect::<String>();
    assert_eq!(row0, " Score: 3 ");

    let tx = v.frame.get(Point::new(59, 39)).unwrap();
    assert_eq!(tx.glyph(), '*');
    assert_eq!(tx.fg(), Some(colors::GOLD));
    assert!(!tx.bold());

    v.clear_buffer();
    assert!(v.frame.data().iter().all(|&tx| tx == Texel::blank()));
  }

  #[test]
  fn test_large_fonts_are_bold() {
    let mut v = video();
    let big = Actor::prop().with_text("#").with_font_size(30);
    v.draw_actors(&[&big]);
    assert!(v.frame.get(Point::zero()).unwrap().bold());
  }
}
