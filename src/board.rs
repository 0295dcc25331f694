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

//! The board: a dense grid of optional pieces, addressed `(col, row)`, plus a
//! cached king square per color.
//!
//! Boards up to 32×32 (1,024 squares) rule out a fixed-width bitboard; this is
//! a mailbox representation instead, one `Option<Piece>` per cell in a flat
//! `Vec` indexed `row * width + col`.

use crate::color::Color;
use crate::error::ChessError;
use crate::moves::Move;
use crate::piece::{Piece, PieceKind};

/// Smallest and largest board side length this crate will construct.
pub(crate) const MIN_DIMENSION: u8 = 1;
pub(crate) const MAX_DIMENSION: u8 = 32;

/// The result of mechanically applying a move to a board: everything needed
/// to reverse it later, recorded once so both the legality filter's
/// simulate-then-revert step and `Game::make_move` can share one code path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEffect {
    /// The piece that was captured, and the square it was captured on (this
    /// differs from `dst` for an en passant capture).
    pub captured: Option<(Piece, (u8, u8))>,
    /// The rook's `(src, dst)` motion, if this move was a castle.
    pub rook_move: Option<((u8, u8), (u8, u8))>,
    /// Whether the captured piece was taken en passant.
    pub is_en_passant: bool,
    /// Whether the moved piece was a pawn (relevant for the halfmove clock).
    pub is_pawn_move: bool,
    /// Whether the move was a promotion (the piece placed at `dst` is not
    /// the one that was at `src`).
    pub promoted: bool,
}

/// A rectangular chess board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<Option<Piece>>,
    king_square: [Option<(u8, u8)>; 2],
}

impl Board {
    /// Constructs an empty board of the given dimensions. Fails if either
    /// dimension is outside `1..=32`.
    pub fn empty(width: u32, height: u32) -> Result<Board, ChessError> {
        if width < MIN_DIMENSION as u32
            || width > MAX_DIMENSION as u32
            || height < MIN_DIMENSION as u32
            || height > MAX_DIMENSION as u32
        {
            return Err(ChessError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        Ok(Board {
            width: width as u8,
            height: height as u8,
            cells: vec![None; width as usize * height as usize],
            king_square: [None, None],
        })
    }

    /// The standard 8×8 board with the conventional starting array.
    #[must_use]
    pub fn standard() -> Board {
        let mut board = Board::empty(8, 8).expect("8x8 is always in range");
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.set(col as u8, 0, Some(Piece::of(kind, Color::White)));
            board.set(col as u8, 7, Some(Piece::of(kind, Color::Black)));
        }
        for col in 0..8u8 {
            board.set(col, 1, Some(Piece::of(PieceKind::Pawn, Color::White)));
            board.set(col, 6, Some(Piece::of(PieceKind::Pawn, Color::Black)));
        }
        board
    }

    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    #[must_use]
    pub const fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < self.width as i32 && row < self.height as i32
    }

    fn index(&self, col: u8, row: u8) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Returns the piece at `(col, row)`, or `None` if the cell is empty or
    /// out of bounds.
    #[must_use]
    pub fn get(&self, col: u8, row: u8) -> Option<Piece> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells[self.index(col, row)]
    }

    /// Writes (or clears) the cell at `(col, row)`. Out-of-bounds coordinates
    /// are silently ignored. Maintains the king-square cache: if a king is
    /// written, its square becomes the cache; if a cell holding the cached
    /// king square is overwritten with something else, the board is rescanned
    /// for that color's king.
    pub fn set(&mut self, col: u8, row: u8, piece: Option<Piece>) {
        if col >= self.width || row >= self.height {
            return;
        }
        let idx = self.index(col, row);
        let previous = self.cells[idx];
        self.cells[idx] = piece;

        if let Some(p) = piece {
            if p.kind() == PieceKind::King {
                self.king_square[p.color().index()] = Some((col, row));
            }
        }
        if let Some(prev) = previous {
            if prev.kind() == PieceKind::King
                && self.king_square[prev.color().index()] == Some((col, row))
                && piece.map(|p| p.kind() != PieceKind::King).unwrap_or(true)
            {
                self.king_square[prev.color().index()] = self.rescan_king(prev.color());
            }
        }
    }

    fn rescan_king(&self, color: Color) -> Option<(u8, u8)> {
        for row in 0..self.height {
            for col in 0..self.width {
                if let Some(p) = self.get(col, row) {
                    if p.kind() == PieceKind::King && p.color() == color {
                        return Some((col, row));
                    }
                }
            }
        }
        None
    }

    /// The cached king square for `color`, or `None` if that color has no king.
    #[must_use]
    pub const fn king_square(&self, color: Color) -> Option<(u8, u8)> {
        self.king_square[color.index()]
    }

    /// Iterates over every occupied cell as `((col, row), piece)`.
    pub fn occupied(&self) -> impl Iterator<Item = ((u8, u8), Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|piece| {
                let col = (idx % self.width as usize) as u8;
                let row = (idx / self.width as usize) as u8;
                ((col, row), piece)
            })
        })
    }

    /// Mechanically applies `mv` to the board: moves the piece, resolves
    /// captures (ordinary or en passant, using `ep_target` to recognize the
    /// latter), promotes if `mv` carries a promotion kind, and moves the rook
    /// too if this is a castle (recognized as a king moving two columns).
    /// Does not check legality or even that a piece exists at `src`.
    pub fn apply_move(&mut self, mv: Move, ep_target: Option<(u8, u8)>) -> MoveEffect {
        let (src_col, src_row) = mv.src_square();
        let (dst_col, dst_row) = mv.dst_square();
        let moving = self.get(src_col, src_row);
        let is_pawn_move = moving.map(|p| p.kind() == PieceKind::Pawn).unwrap_or(false);

        let mut is_en_passant = false;
        let mut captured = None;

        if let Some(victim) = self.get(dst_col, dst_row) {
            captured = Some((victim, (dst_col, dst_row)));
            self.set(dst_col, dst_row, None);
        } else if is_pawn_move && src_col != dst_col && Some((dst_col, dst_row)) == ep_target {
            is_en_passant = true;
            let captured_square = (dst_col, src_row);
            if let Some(victim) = self.get(captured_square.0, captured_square.1) {
                captured = Some((victim, captured_square));
                self.set(captured_square.0, captured_square.1, None);
            }
        }

        self.set(src_col, src_row, None);
        let promoted = mv.promotion().is_some();
        let placed = match (moving, mv.promotion()) {
            (Some(piece), Some(promotion_kind)) => Some(Piece::of(promotion_kind, piece.color())),
            (piece, _) => piece,
        };
        self.set(dst_col, dst_row, placed);

        let rook_move = if moving.map(|p| p.kind() == PieceKind::King).unwrap_or(false)
            && (dst_col as i32 - src_col as i32).abs() == 2
        {
            let kingside = dst_col > src_col;
            let rook_src_col = if kingside { self.width - 1 } else { 0 };
            let rook_dst_col = if kingside { dst_col - 1 } else { dst_col + 1 };
            let rook = self.get(rook_src_col, src_row);
            self.set(rook_src_col, src_row, None);
            self.set(rook_dst_col, src_row, rook);
            Some(((rook_src_col, src_row), (rook_dst_col, src_row)))
        } else {
            None
        };

        MoveEffect {
            captured,
            rook_move,
            is_en_passant,
            is_pawn_move,
            promoted,
        }
    }

    /// Reverses a move previously applied with [`Board::apply_move`], given
    /// the effect it returned.
    pub fn unapply_move(&mut self, mv: Move, effect: &MoveEffect) {
        let (src_col, src_row) = mv.src_square();
        let (dst_col, dst_row) = mv.dst_square();

        let moved = self.get(dst_col, dst_row);
        self.set(dst_col, dst_row, None);
        let restored = match (moved, effect.promoted) {
            (Some(piece), true) => Some(Piece::of(PieceKind::Pawn, piece.color())),
            (piece, _) => piece,
        };
        self.set(src_col, src_row, restored);

        if let Some((rook_src, rook_dst)) = effect.rook_move {
            let rook = self.get(rook_dst.0, rook_dst.1);
            self.set(rook_dst.0, rook_dst.1, None);
            self.set(rook_src.0, rook_src.1, rook);
        }

        if let Some((piece, square)) = effect.captured {
            self.set(square.0, square.1, Some(piece));
        }
    }
}
