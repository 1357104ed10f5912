//! `curses` helper library.
//!
//! Note that this module doesn't *actually* use `libcurses`, and merely
//! emulates its behavior at a high level in terms of `crossterm`.

use std::io;

use crossterm::cursor;
use crossterm::style;
use crossterm::terminal;

use crate::render::texel::Texel;

/// Returns the current dimensions of the terminal window, as `(rows, cols)`.
pub fn dims() -> io::Result<(usize, usize)> {
  let (cols, rows) = terminal::size()?;
  Ok((rows as _, cols as _))
}

/// Arguments for a draw call.
///
/// See [`Curses::draw()`].
#[allow(missing_docs)]
pub struct DrawCall {
  pub row: usize,
  pub col: usize,
  pub texel: Texel,
}

/// A low-level curses context.
///
/// The terminal is only switched into the alternate screen and raw mode once
/// [`Curses::enter()`] is called; dropping the context restores it.
pub struct Curses<W: io::Write = io::Stdout> {
  w: W,
  active: bool,
}

impl Curses {
  /// Creates a `curses` context that writes to `stdout`.
  pub fn stdout() -> Curses {
    Curses::with(io::stdout())
  }
}

impl<W: io::Write> Curses<W> {
  /// Creates a `curses` context that writes to `w`.
  pub fn with(w: W) -> Curses<W> {
    Curses { w, active: false }
  }

  /// Returns whether the terminal is currently set up for drawing.
  pub fn is_active(&self) -> bool {
    self.active
  }

  /// Switches the terminal to a blank alternate screen in raw mode, and sets
  /// the window title.
  pub fn enter(&mut self, title: &str) -> io::Result<()> {
    crossterm::execute!(
      self.w,
      terminal::EnterAlternateScreen,
      terminal::SetTitle(title),
      terminal::Clear(terminal::ClearType::All),
      cursor::Hide,
      terminal::DisableLineWrap,
    )?;
    terminal::enable_raw_mode()?;
    self.active = true;
    Ok(())
  }

  /// Queues a draw of a single texel.
  ///
  /// Nothing reaches the terminal until [`Curses::flush()`] is called.
  pub fn draw(&mut self, call: DrawCall) -> io::Result<()> {
    let fg = match call.texel.fg() {
      Some(rgb) => style::Color::Rgb {
        r: rgb.red,
        g: rgb.green,
        b: rgb.blue,
      },
      None => style::Color::Reset,
    };
    let weight = if call.texel.bold() {
      style::Attribute::Bold
    } else {
      style::Attribute::NormalIntensity
    };

    crossterm::queue!(
      self.w,
      cursor::MoveTo(call.col as _, call.row as _),
      style::SetAttribute(weight),
      style::SetForegroundColor(fg),
      style::Print(call.texel.glyph()),
    )
  }

  /// Flushes all queued draws to the terminal.
  pub fn flush(&mut self) -> io::Result<()> {
    self.w.flush()
  }

  /// Clean up whatever mess the terminal made.
  pub fn leave(&mut self) -> io::Result<()> {
    if !self.active {
      return Ok(());
    }
    self.active = false;
    crossterm::execute!(
      self.w,
      style::ResetColor,
      terminal::LeaveAlternateScreen,
      cursor::Show,
      terminal::EnableLineWrap,
    )?;
    terminal::disable_raw_mode()?;
    self.w.flush()
  }
}

impl<W: io::Write> Drop for Curses<W> {
  fn drop(&mut self) {
    let _ = self.leave();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::render::texel::colors;

  #[test]
  fn test_draw_queues_glyph() {
    let mut curses = Curses::with(Vec::new());
    curses
      .draw(DrawCall {
        row: 2,
        col: 3,
        texel: Texel::new('*').with_fg(colors::RED).with_bold(true),
      })
      .unwrap();
    curses.flush().unwrap();

    let out = String::from_utf8(curses.w.clone()).unwrap();
    assert!(out.ends_with('*'));
    assert!(!curses.is_active());
  }
}
