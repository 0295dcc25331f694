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

//! `gridchess` is a chess rules engine for rectangular boards of side length
//! 1 to 32: board representation with make/unmake, pseudo-legal move
//! generation, a king-safety legality filter with castling and en passant,
//! and a FEN codec compatible with the canonical 8x8 convention.
//!
//! This crate has no notion of search, evaluation, or time control; it only
//! answers "what are the legal moves here" and "what happens if I play one of
//! them." [`Game`] is the type most callers want; [`Board`], [`Piece`], and
//! [`Move`] are its building blocks and are also exposed directly for
//! callers that want to construct positions by hand.

mod attacks;
mod board;
mod castling;
mod color;
mod error;
mod fen;
mod game;
mod movegen;
mod moves;
#[cfg(test)]
mod perft;
mod piece;

pub use board::Board;
pub use castling::CastleSide;
pub use color::Color;
pub use error::ChessError;
pub use game::{Game, STANDARD_FEN};
pub use moves::Move;
pub use piece::{Piece, PieceKind};

/// The wire-convention sign for White: `+1`.
pub const WHITE: i64 = 1;
/// The wire-convention sign for Black: `-1`.
pub const BLACK: i64 = -1;
