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

//! Piece kinds and the `(kind, color)` pair that occupies a board cell.

use crate::color::Color;
use crate::error::ChessError;

/// The six kinds of chess piece, closed over the legal promotion targets too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Parses the lowercase kind names used at the API boundary.
    pub fn from_name(name: &str) -> Result<PieceKind, ChessError> {
        match name {
            "king" => Ok(PieceKind::King),
            "queen" => Ok(PieceKind::Queen),
            "rook" => Ok(PieceKind::Rook),
            "bishop" => Ok(PieceKind::Bishop),
            "knight" => Ok(PieceKind::Knight),
            "pawn" => Ok(PieceKind::Pawn),
            found => Err(ChessError::InvalidKind {
                found: found.to_string(),
            }),
        }
    }

    /// The uppercase FEN/symbol letter for this kind (White's case; lowercase for Black
    /// is the caller's job via [`Piece::symbol`]).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    /// Parses an uppercase FEN letter into a kind, or `None` if it is not one of KQRBNP.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<PieceKind> {
        match letter {
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// The lowercase promotion letter used in LAN (`q`, `r`, `b`, `n`), if this kind can
    /// be promoted to.
    #[must_use]
    pub const fn promotion_letter(self) -> Option<char> {
        match self {
            PieceKind::Queen => Some('q'),
            PieceKind::Rook => Some('r'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Knight => Some('n'),
            PieceKind::King | PieceKind::Pawn => None,
        }
    }

    /// Parses a lowercase LAN promotion letter into a kind.
    #[must_use]
    pub fn from_promotion_letter(letter: char) -> Option<PieceKind> {
        match letter {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => None,
        }
    }

    /// The four kinds a pawn may promote to, in the order promotions are emitted.
    pub const PROMOTION_KINDS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
}

/// A piece sitting on a board cell: a kind and a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    /// Constructs a piece from a lowercase kind name and a `±1` color.
    pub fn new(kind_name: &str, color: i64) -> Result<Piece, ChessError> {
        Ok(Piece {
            kind: PieceKind::from_name(kind_name)?,
            color: Color::from_sign(color)?,
        })
    }

    /// Constructs a piece directly from its parts. Infallible: both fields are already
    /// validated types.
    #[must_use]
    pub const fn of(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// The FEN symbol: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Parses a FEN symbol (`K`, `p`, ...) into a piece.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Piece> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = PieceKind::from_letter(symbol.to_ascii_uppercase())?;
        Some(Piece { kind, color })
    }
}
