/*
  gridchess, a variable-board-size chess rules engine.
  Copyright (C) 2022 The gridchess Authors (see AUTHORS.md file)

  gridchess is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  gridchess is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! The two sides of the board.

use std::ops::Not;

use crate::error::ChessError;

/// A player color. `White` moves up the board (increasing row), `Black` moves down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Constructs a `Color` from the wire convention `White = +1`, `Black = -1`.
    pub fn from_sign(value: i64) -> Result<Color, ChessError> {
        match value {
            1 => Ok(Color::White),
            -1 => Ok(Color::Black),
            found => Err(ChessError::InvalidColor { found }),
        }
    }

    /// The wire convention: `White = +1`, `Black = -1`.
    #[must_use]
    pub const fn sign(self) -> i64 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The direction a pawn of this color advances: `+1` for White, `-1` for Black.
    #[must_use]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Index into two-element, White-then-Black arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_sign_roundtrips() {
        assert_eq!(Color::from_sign(1).unwrap(), Color::White);
        assert_eq!(Color::from_sign(-1).unwrap(), Color::Black);
        assert_eq!(Color::White.sign(), 1);
        assert_eq!(Color::Black.sign(), -1);
    }

    #[test]
    fn from_sign_rejects_anything_else() {
        assert_eq!(
            Color::from_sign(0).unwrap_err(),
            ChessError::InvalidColor { found: 0 }
        );
        assert!(Color::from_sign(2).is_err());
    }

    #[test]
    fn not_flips() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }
}
