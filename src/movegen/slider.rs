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

//! Rook, bishop, and queen moves: slide along a fixed set of directions
//! until off-board, blocked by a friendly piece, or a capture is made.

use crate::board::Board;
use crate::color::Color;
use crate::moves::Move;

pub(super) const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(super) const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(super) const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(super) fn generate(
    board: &Board,
    col: u8,
    row: u8,
    color: Color,
    directions: &[(i32, i32)],
    out: &mut Vec<Move>,
) {
    for &(dc, dr) in directions {
        let (mut c, mut r) = (col as i32 + dc, row as i32 + dr);
        while board.in_bounds(c, r) {
            match board.get(c as u8, r as u8) {
                None => {
                    out.push(Move::from_rowcol(col, row, c as u8, r as u8));
                }
                Some(piece) if piece.color() != color => {
                    out.push(Move::from_rowcol(col, row, c as u8, r as u8));
                    break;
                }
                Some(_) => break,
            }
            c += dc;
            r += dr;
        }
    }
}
