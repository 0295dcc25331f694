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

//! The error boundary. Every fallible constructor in this crate returns one
//! of these variants; no other part of the public API raises.

use std::fmt;

/// All the ways a value can fail to be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// `width` or `height` fell outside `1..=32`.
    #[error("invalid board dimensions: width={width}, height={height} (must be 1..=32)")]
    InvalidDimensions {
        /// The requested width.
        width: i64,
        /// The requested height.
        height: i64,
    },
    /// A FEN string was malformed or internally inconsistent.
    #[error("invalid FEN: {reason}")]
    InvalidFen {
        /// Human-readable description of what was wrong.
        reason: String,
    },
    /// A LAN move string could not be parsed for the given board size.
    #[error("invalid LAN move string {found:?}: {reason}")]
    InvalidLan {
        /// The offending string.
        found: String,
        /// Human-readable description of what was wrong.
        reason: String,
    },
    /// An unrecognized piece-kind name was given.
    #[error("invalid piece kind: {found:?} (expected one of king/queen/rook/bishop/knight/pawn)")]
    InvalidKind {
        /// The offending string.
        found: String,
    },
    /// A color value other than +1 or -1 was given.
    #[error("invalid color: {found} (expected +1 or -1)")]
    InvalidColor {
        /// The offending value.
        found: i64,
    },
}

impl ChessError {
    pub(crate) fn invalid_fen(reason: impl fmt::Display) -> ChessError {
        ChessError::InvalidFen {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn invalid_lan(found: &str, reason: impl fmt::Display) -> ChessError {
        ChessError::InvalidLan {
            found: found.to_string(),
            reason: reason.to_string(),
        }
    }
}
