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

//! Castling rights: four independent booleans, one per (color, side).

use crate::color::Color;

/// Which corner a castling move approaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

/// The four castling rights, tracked independently. Rights only ever clear; once
/// false they cannot become true again for the lifetime of a `Game` (a freshly
/// loaded FEN is the one exception, since it starts a new rights state outright).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl CastlingRights {
    /// All four rights set, the standard starting position.
    #[must_use]
    pub const fn all() -> CastlingRights {
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    /// All four rights permanently cleared.
    #[must_use]
    pub const fn none() -> CastlingRights {
        CastlingRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    #[must_use]
    pub const fn get(self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::King) => self.white_kingside,
            (Color::White, CastleSide::Queen) => self.white_queenside,
            (Color::Black, CastleSide::King) => self.black_kingside,
            (Color::Black, CastleSide::Queen) => self.black_queenside,
        }
    }

    pub fn clear(&mut self, color: Color, side: CastleSide) {
        let slot = match (color, side) {
            (Color::White, CastleSide::King) => &mut self.white_kingside,
            (Color::White, CastleSide::Queen) => &mut self.white_queenside,
            (Color::Black, CastleSide::King) => &mut self.black_kingside,
            (Color::Black, CastleSide::Queen) => &mut self.black_queenside,
        };
        *slot = false;
    }

    pub fn set(&mut self, color: Color, side: CastleSide, value: bool) {
        let slot = match (color, side) {
            (Color::White, CastleSide::King) => &mut self.white_kingside,
            (Color::White, CastleSide::Queen) => &mut self.white_queenside,
            (Color::Black, CastleSide::King) => &mut self.black_kingside,
            (Color::Black, CastleSide::Queen) => &mut self.black_queenside,
        };
        *slot = value;
    }

    /// Clears both rights for `color`, e.g. when that color's king moves.
    pub fn clear_color(&mut self, color: Color) {
        self.clear(color, CastleSide::King);
        self.clear(color, CastleSide::Queen);
    }

    /// Parses the FEN castling-availability field (`"-"` or a subset of `"KQkq"` in
    /// that fixed order). Unknown characters are rejected by the caller before this
    /// is invoked; this just flips the four bits.
    #[must_use]
    pub fn from_fen_chars(chars: &str) -> CastlingRights {
        let mut rights = CastlingRights::none();
        for c in chars.chars() {
            match c {
                'K' => rights.white_kingside = true,
                'Q' => rights.white_queenside = true,
                'k' => rights.black_kingside = true,
                'q' => rights.black_queenside = true,
                _ => {}
            }
        }
        rights
    }

    /// Emits the FEN castling-availability field: `"-"` if no rights, else the
    /// subset of `"KQkq"` that are set, in that fixed order.
    #[must_use]
    pub fn to_fen_field(self) -> String {
        let mut field = String::new();
        if self.white_kingside {
            field.push('K');
        }
        if self.white_queenside {
            field.push('Q');
        }
        if self.black_kingside {
            field.push('k');
        }
        if self.black_queenside {
            field.push('q');
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_has_every_right() {
        let rights = CastlingRights::all();
        assert!(rights.get(Color::White, CastleSide::King));
        assert!(rights.get(Color::White, CastleSide::Queen));
        assert!(rights.get(Color::Black, CastleSide::King));
        assert!(rights.get(Color::Black, CastleSide::Queen));
    }

    #[test]
    fn clear_color_only_affects_that_color() {
        let mut rights = CastlingRights::all();
        rights.clear_color(Color::White);
        assert!(!rights.get(Color::White, CastleSide::King));
        assert!(!rights.get(Color::White, CastleSide::Queen));
        assert!(rights.get(Color::Black, CastleSide::King));
        assert!(rights.get(Color::Black, CastleSide::Queen));
    }

    #[test]
    fn fen_field_roundtrips() {
        assert_eq!(CastlingRights::none().to_fen_field(), "-");
        assert_eq!(CastlingRights::all().to_fen_field(), "KQkq");
        let partial = CastlingRights::from_fen_chars("Kq");
        assert_eq!(partial.to_fen_field(), "Kq");
        assert!(partial.get(Color::White, CastleSide::King));
        assert!(!partial.get(Color::White, CastleSide::Queen));
        assert!(!partial.get(Color::Black, CastleSide::King));
        assert!(partial.get(Color::Black, CastleSide::Queen));
    }

    #[test]
    fn from_fen_chars_ignores_dash() {
        assert_eq!(CastlingRights::from_fen_chars("-"), CastlingRights::none());
    }
}
