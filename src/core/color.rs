//! Opaque color values for rendered lines
//!
//! The core never interprets colors; it only resolves which one a line
//! carries and hands it to the display sink. Sinks decide how (or whether)
//! to render it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Engine default for debug lines.
    pub const MEDIUM_BLUE: Color = Color::rgb(0, 0, 205);
    /// Engine default for info lines.
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Engine default for warning lines.
    pub const GOLDENROD: Color = Color::rgb(218, 165, 32);
    /// Engine default for error lines.
    pub const DARK_RED: Color = Color::rgb(139, 0, 0);
    /// Engine default for custom lines.
    pub const LIME_GREEN: Color = Color::rgb(50, 205, 50);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to a truecolor value for terminal rendering.
    #[cfg(feature = "terminal")]
    #[must_use]
    pub fn to_terminal(self) -> colored::Color {
        colored::Color::TrueColor {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
