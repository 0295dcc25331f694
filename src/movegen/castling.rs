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

//! Castling candidate generation.
//!
//! Castling is pinned to absolute squares regardless of board size: the king
//! starts on column 4, the rooks on columns 0 (queenside) and `width - 1`
//! (kingside), on the mover's home rank. On boards where those squares don't
//! hold the right pieces the corresponding right is simply unreachable, which
//! falls out of these checks naturally rather than needing special-casing.

use crate::attacks;
use crate::board::Board;
use crate::castling::{CastleSide, CastlingRights};
use crate::color::Color;
use crate::moves::Move;
use crate::piece::PieceKind;

const KING_HOME_COL: u8 = 4;

pub(crate) fn castling_candidates(
    board: &Board,
    color: Color,
    rights: CastlingRights,
    out: &mut Vec<Move>,
) {
    let home_row = match color {
        Color::White => 0,
        Color::Black => board.height().saturating_sub(1),
    };

    let Some(king) = board.get(KING_HOME_COL, home_row) else {
        return;
    };
    if king.kind() != PieceKind::King || king.color() != color {
        return;
    }
    if board.king_square(color) != Some((KING_HOME_COL, home_row)) {
        return;
    }

    if rights.get(color, CastleSide::King)
        && can_castle(board, color, home_row, board.width() - 1, true)
    {
        out.push(Move::from_rowcol(
            KING_HOME_COL,
            home_row,
            KING_HOME_COL + 2,
            home_row,
        ));
    }

    if rights.get(color, CastleSide::Queen) && can_castle(board, color, home_row, 0, false) {
        out.push(Move::from_rowcol(
            KING_HOME_COL,
            home_row,
            KING_HOME_COL - 2,
            home_row,
        ));
    }
}

fn can_castle(board: &Board, color: Color, home_row: u8, rook_col: u8, kingside: bool) -> bool {
    match board.get(rook_col, home_row) {
        Some(piece) if piece.kind() == PieceKind::Rook && piece.color() == color => {}
        _ => return false,
    }

    let (low, high) = if rook_col < KING_HOME_COL {
        (rook_col + 1, KING_HOME_COL - 1)
    } else {
        (KING_HOME_COL + 1, rook_col - 1)
    };
    for col in low..=high {
        if board.get(col, home_row).is_some() {
            return false;
        }
    }

    let opponent = !color;
    if attacks::is_attacked(board, (KING_HOME_COL, home_row), opponent) {
        return false;
    }

    // Kingside: both squares the king crosses (K+1, K+2) must be unattacked.
    // Queenside: only the king's own path (K-1, K-2); the rook may cross an
    // attacked square.
    let path: &[u8] = if kingside {
        &[KING_HOME_COL + 1, KING_HOME_COL + 2]
    } else {
        &[KING_HOME_COL - 1, KING_HOME_COL - 2]
    };
    for &col in path {
        if attacks::is_attacked(board, (col, home_row), opponent) {
            return false;
        }
    }

    true
}
