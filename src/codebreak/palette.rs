//! The six-color palette shared by secrets and guesses

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownName;

/// A palette color, in fixed palette order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    #[default]
    Red,
    Green,
    Yellow,
    Purple,
    White,
}

impl Color {
    /// All colors in palette order
    pub const PALETTE: [Color; crate::consts::PALETTE_SIZE] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::White,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::White => "white",
        }
    }

    /// 24-bit RGB used by the host to paint pegs
    pub fn hex(&self) -> u32 {
        match self {
            Color::Blue => 0x0066ff,
            Color::Red => 0xff0000,
            Color::Green => 0x00cc00,
            Color::Yellow => 0xffcc00,
            Color::Purple => 0xcc00cc,
            Color::White => 0xffffff,
        }
    }

    /// Position in [`Color::PALETTE`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::PALETTE.get(index).copied()
    }

    /// Palette shortcut: digit keys `1`..=`6` pick colors in palette order
    pub fn from_key(key: char) -> Option<Self> {
        let digit = key.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(Self::from_index)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::PALETTE
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| UnknownName::new("color", s))
    }
}
