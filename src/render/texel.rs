//! Texels, terminal elements.
//!
//! A *texel* is Greed's abstraction for a cell in a terminal: a glyph plus the
//! styling it is printed with. See the [`Texel`] type for more info.

pub use palette::named as colors;

/// A color used by a [`Texel`], and by actors generally.
pub type Color = palette::Srgb<u8>;

/// A "terminal element", analogous to a pixel or voxel.
///
/// A texel consists of a "glyph" (a printable character), an optional
/// foreground color, and a weight.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Texel {
  glyph: char,
  fg: Option<Color>,
  bold: bool,
}

impl Texel {
  /// Creates a new blank texel, which clears whatever cell it is drawn to.
  #[inline]
  pub fn blank() -> Self {
    Self::new(' ')
  }

  /// Creates a new colorless texel with the given glyph.
  #[inline]
  pub fn new(glyph: char) -> Self {
    Self {
      glyph,
      fg: None,
      bold: false,
    }
  }

  /// Returns a copy of this texel with the given foreground color.
  #[inline]
  pub fn with_fg(mut self, fg: Color) -> Self {
    self.fg = Some(fg);
    self
  }

  /// Returns a copy of this texel with the given weight.
  #[inline]
  pub fn with_bold(mut self, bold: bool) -> Self {
    self.bold = bold;
    self
  }

  /// Returns the glyph.
  #[inline]
  pub fn glyph(self) -> char {
    self.glyph
  }

  /// Returns the foreground color, if one is present.
  #[inline]
  pub fn fg(self) -> Option<Color> {
    self.fg
  }

  /// Returns whether this texel is printed in bold.
  #[inline]
  pub fn bold(self) -> bool {
    self.bold
  }
}
