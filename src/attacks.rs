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

//! Attack detection: "is square S attacked by color C?", used for check
//! detection and for validating castling paths.
//!
//! Implemented by casting rays and probing knight/king offsets outward from
//! `S` itself, rather than generating every pseudo-legal move for `C` and
//! testing set membership — the reverse direction does the same amount of
//! work only around the one square that matters.

use crate::board::Board;
use crate::color::Color;
use crate::piece::PieceKind;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const ORTHOGONAL_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Returns true iff some piece of color `by_color` could capture on
/// `(col, row)` with a pseudo-legal move, ignoring king-safety and castling.
/// Correct even when `(col, row)` is empty, which is what castling-path
/// checks need.
#[must_use]
pub fn is_attacked(board: &Board, square: (u8, u8), by_color: Color) -> bool {
    let (col, row) = (square.0 as i32, square.1 as i32);

    for &(dc, dr) in &KNIGHT_OFFSETS {
        if let Some(piece) = piece_at(board, col + dc, row + dr) {
            if piece.color() == by_color && piece.kind() == PieceKind::Knight {
                return true;
            }
        }
    }

    for &(dc, dr) in &KING_OFFSETS {
        if let Some(piece) = piece_at(board, col + dc, row + dr) {
            if piece.color() == by_color && piece.kind() == PieceKind::King {
                return true;
            }
        }
    }

    // A pawn of `by_color` attacks (col, row) from the square diagonally
    // behind it relative to its own advance direction.
    let behind = -by_color.pawn_direction();
    for dc in [-1, 1] {
        if let Some(piece) = piece_at(board, col + dc, row + behind) {
            if piece.color() == by_color && piece.kind() == PieceKind::Pawn {
                return true;
            }
        }
    }

    for &(dc, dr) in &ORTHOGONAL_DIRECTIONS {
        if ray_hits(board, col, row, dc, dr, by_color, &[PieceKind::Rook, PieceKind::Queen]) {
            return true;
        }
    }

    for &(dc, dr) in &DIAGONAL_DIRECTIONS {
        if ray_hits(board, col, row, dc, dr, by_color, &[PieceKind::Bishop, PieceKind::Queen]) {
            return true;
        }
    }

    false
}

fn piece_at(board: &Board, col: i32, row: i32) -> Option<crate::piece::Piece> {
    if !board.in_bounds(col, row) {
        return None;
    }
    board.get(col as u8, row as u8)
}

fn ray_hits(
    board: &Board,
    col: i32,
    row: i32,
    dc: i32,
    dr: i32,
    by_color: Color,
    kinds: &[PieceKind],
) -> bool {
    let (mut c, mut r) = (col + dc, row + dr);
    while board.in_bounds(c, r) {
        if let Some(piece) = board.get(c as u8, r as u8) {
            return piece.color() == by_color && kinds.contains(&piece.kind());
        }
        c += dc;
        r += dr;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    #[test]
    fn rook_attacks_along_rank() {
        let mut board = Board::empty(8, 8).unwrap();
        board.set(0, 0, Some(Piece::of(PieceKind::Rook, Color::Black)));
        assert!(is_attacked(&board, (7, 0), Color::Black));
        assert!(!is_attacked(&board, (7, 1), Color::Black));
    }

    #[test]
    fn rook_attack_blocked_by_intervening_piece() {
        let mut board = Board::empty(8, 8).unwrap();
        board.set(0, 0, Some(Piece::of(PieceKind::Rook, Color::Black)));
        board.set(3, 0, Some(Piece::of(PieceKind::Pawn, Color::White)));
        assert!(!is_attacked(&board, (7, 0), Color::Black));
        assert!(is_attacked(&board, (3, 0), Color::Black));
    }

    #[test]
    fn pawn_attacks_only_diagonally_never_the_push_square() {
        let mut board = Board::empty(8, 8).unwrap();
        board.set(4, 4, Some(Piece::of(PieceKind::Pawn, Color::White)));
        assert!(is_attacked(&board, (3, 5), Color::White));
        assert!(is_attacked(&board, (5, 5), Color::White));
        assert!(!is_attacked(&board, (4, 5), Color::White));
    }

    #[test]
    fn knight_attacks_l_shape() {
        let mut board = Board::empty(8, 8).unwrap();
        board.set(4, 4, Some(Piece::of(PieceKind::Knight, Color::White)));
        assert!(is_attacked(&board, (6, 5), Color::White));
        assert!(!is_attacked(&board, (6, 4), Color::White));
    }

    #[test]
    fn is_attacked_is_correct_for_empty_square() {
        let board = Board::standard();
        assert!(!is_attacked(&board, (4, 4), Color::White));
    }
}
