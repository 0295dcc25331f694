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

//! Pawn moves: pushes, the starting-rank double push, diagonal captures, en
//! passant, and promotion on the far rank. The "starting rank" and "far rank"
//! are always the second and last ranks relative to the mover, on any board
//! height.

use crate::board::Board;
use crate::color::Color;
use crate::moves::Move;
use crate::piece::PieceKind;

pub(super) fn generate(
    board: &Board,
    col: u8,
    row: u8,
    color: Color,
    en_passant: Option<(u8, u8)>,
    out: &mut Vec<Move>,
) {
    let direction = color.pawn_direction();
    let height = board.height() as i32;
    let starting_row = match color {
        Color::White => 1,
        Color::Black => height - 2,
    };
    let last_row = match color {
        Color::White => height - 1,
        Color::Black => 0,
    };

    let one_step_row = row as i32 + direction;
    if board.in_bounds(col as i32, one_step_row) && board.get(col, one_step_row as u8).is_none() {
        push(col, row, col, one_step_row as u8, last_row, out);

        let two_step_row = row as i32 + 2 * direction;
        if row as i32 == starting_row
            && board.in_bounds(col as i32, two_step_row)
            && board.get(col, two_step_row as u8).is_none()
        {
            out.push(Move::from_rowcol(col, row, col, two_step_row as u8));
        }
    }

    for dc in [-1, 1] {
        let dst_col = col as i32 + dc;
        let dst_row = row as i32 + direction;
        if !board.in_bounds(dst_col, dst_row) {
            continue;
        }
        let dst = (dst_col as u8, dst_row as u8);
        if let Some(victim) = board.get(dst.0, dst.1) {
            if victim.color() != color {
                push(col, row, dst.0, dst.1, last_row, out);
            }
        } else if en_passant == Some(dst) {
            out.push(Move::from_rowcol(col, row, dst.0, dst.1));
        }
    }
}

fn push(src_col: u8, src_row: u8, dst_col: u8, dst_row: u8, last_row: i32, out: &mut Vec<Move>) {
    if dst_row as i32 == last_row {
        for kind in PieceKind::PROMOTION_KINDS {
            out.push(Move::promoting(src_col, src_row, dst_col, dst_row, kind));
        }
    } else {
        out.push(Move::from_rowcol(src_col, src_row, dst_col, dst_row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    #[test]
    fn pawn_on_starting_rank_can_push_one_or_two() {
        let mut board = Board::empty(8, 8).unwrap();
        board.set(4, 1, Some(Piece::of(PieceKind::Pawn, Color::White)));
        let mut moves = Vec::new();
        generate(&board, 4, 1, Color::White, None, &mut moves);
        let dsts: Vec<_> = moves.iter().map(|m| m.dst_square()).collect();
        assert!(dsts.contains(&(4, 2)));
        assert!(dsts.contains(&(4, 3)));
    }

    #[test]
    fn pawn_not_on_starting_rank_cannot_double_push() {
        let mut board = Board::empty(8, 8).unwrap();
        board.set(4, 2, Some(Piece::of(PieceKind::Pawn, Color::White)));
        let mut moves = Vec::new();
        generate(&board, 4, 2, Color::White, None, &mut moves);
        let dsts: Vec<_> = moves.iter().map(|m| m.dst_square()).collect();
        assert_eq!(dsts, vec![(4, 3)]);
    }

    #[test]
    fn pawn_promotes_on_last_rank_with_four_kinds() {
        let mut board = Board::empty(8, 8).unwrap();
        board.set(0, 6, Some(Piece::of(PieceKind::Pawn, Color::White)));
        let mut moves = Vec::new();
        generate(&board, 0, 6, Color::White, None, &mut moves);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.dst_square() == (0, 7)));
    }

    #[test]
    fn pawn_en_passant_capture_recognized() {
        let mut board = Board::empty(8, 8).unwrap();
        board.set(4, 4, Some(Piece::of(PieceKind::Pawn, Color::White)));
        board.set(3, 4, Some(Piece::of(PieceKind::Pawn, Color::Black)));
        let mut moves = Vec::new();
        generate(&board, 4, 4, Color::White, Some((3, 5)), &mut moves);
        assert!(moves.iter().any(|m| m.dst_square() == (3, 5)));
    }

    #[test]
    fn black_starting_rank_is_height_minus_two() {
        let mut board = Board::empty(8, 10).unwrap();
        board.set(4, 8, Some(Piece::of(PieceKind::Pawn, Color::Black)));
        let mut moves = Vec::new();
        generate(&board, 4, 8, Color::Black, None, &mut moves);
        let dsts: Vec<_> = moves.iter().map(|m| m.dst_square()).collect();
        assert!(dsts.contains(&(4, 7)));
        assert!(dsts.contains(&(4, 6)));
    }
}
