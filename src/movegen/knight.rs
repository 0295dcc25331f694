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

//! Knight moves: the eight L-shaped offsets.

use crate::board::Board;
use crate::color::Color;
use crate::moves::Move;

const OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(super) fn generate(board: &Board, col: u8, row: u8, color: Color, out: &mut Vec<Move>) {
    for &(dc, dr) in &OFFSETS {
        let (dst_col, dst_row) = (col as i32 + dc, row as i32 + dr);
        if !board.in_bounds(dst_col, dst_row) {
            continue;
        }
        match board.get(dst_col as u8, dst_row as u8) {
            Some(piece) if piece.color() == color => continue,
            _ => out.push(Move::from_rowcol(col, row, dst_col as u8, dst_row as u8)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Piece, PieceKind};

    #[test]
    fn knight_in_center_has_eight_moves() {
        let mut board = Board::empty(8, 8).unwrap();
        board.set(4, 4, Some(Piece::of(PieceKind::Knight, Color::White)));
        let mut moves = Vec::new();
        generate(&board, 4, 4, Color::White, &mut moves);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_moves() {
        let mut board = Board::empty(8, 8).unwrap();
        board.set(0, 0, Some(Piece::of(PieceKind::Knight, Color::White)));
        let mut moves = Vec::new();
        generate(&board, 0, 0, Color::White, &mut moves);
        assert_eq!(moves.len(), 2);
    }
}
