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

//! King moves: the eight unit steps. Castling is generated separately, in
//! [`super::castling`], since it needs rights and path-attack checks this
//! module has no access to.

use crate::board::Board;
use crate::color::Color;
use crate::moves::Move;

const UNIT_STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(super) fn generate(board: &Board, col: u8, row: u8, color: Color, out: &mut Vec<Move>) {
    for &(dc, dr) in &UNIT_STEPS {
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
