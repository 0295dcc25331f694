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

//! Forsyth-Edwards Notation: parsing and emission, dimension-agnostic so it
//! works identically on an 8x8 board and on anything from 1x1 to 32x32.

use crate::board::Board;
use crate::castling::CastlingRights;
use crate::color::Color;
use crate::error::ChessError;
use crate::piece::{Piece, PieceKind};

/// Everything a FEN string encodes, parsed into typed fields.
pub(crate) struct ParsedFen {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<(u8, u8)>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

/// Parses a FEN string against a board of the given dimensions. All six
/// fields are required; any structural inconsistency fails with
/// `InvalidFen`. An en-passant square with no pawn able to capture to it is
/// *not* rejected here — it is silently normalized away by the caller once
/// the board exists (see [`enemy_pawn_can_capture`]).
pub(crate) fn parse(fen: &str, width: u32, height: u32) -> Result<ParsedFen, ChessError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(ChessError::invalid_fen(format!(
            "expected 6 whitespace-separated fields, found {}",
            fields.len()
        )));
    }
    let [placement, active_color, castling, en_passant, halfmove, fullmove] = [
        fields[0], fields[1], fields[2], fields[3], fields[4], fields[5],
    ];

    let board = parse_placement(placement, width, height)?;

    let side_to_move = match active_color {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(ChessError::invalid_fen(format!(
                "unrecognized active color {other:?}"
            )))
        }
    };

    if castling != "-" && !castling.chars().all(|c| "KQkq".contains(c)) {
        return Err(ChessError::invalid_fen(format!(
            "castling field {castling:?} contains characters outside KQkq"
        )));
    }
    let castling_rights = CastlingRights::from_fen_chars(castling);

    let en_passant_square = parse_en_passant(en_passant, board.width(), board.height())?;

    let halfmove_clock: u32 = halfmove
        .parse()
        .map_err(|_| ChessError::invalid_fen(format!("halfmove clock {halfmove:?} is not a non-negative integer")))?;
    let fullmove_number: u32 = fullmove
        .parse()
        .map_err(|_| ChessError::invalid_fen(format!("fullmove number {fullmove:?} is not a non-negative integer")))?;

    Ok(ParsedFen {
        board,
        side_to_move,
        castling: castling_rights,
        en_passant: en_passant_square,
        halfmove_clock,
        fullmove_number,
    })
}

fn parse_placement(placement: &str, width: u32, height: u32) -> Result<Board, ChessError> {
    let mut board = Board::empty(width, height)?;
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != height as usize {
        return Err(ChessError::invalid_fen(format!(
            "piece placement has {} ranks, expected {}",
            ranks.len(),
            height
        )));
    }

    for (rank_from_top, rank_str) in ranks.iter().enumerate() {
        let row = height - 1 - rank_from_top as u32;
        let mut col: u32 = 0;
        for c in rank_str.chars() {
            if let Some(empty_run) = c.to_digit(10) {
                col += empty_run;
            } else if let Some(piece) = Piece::from_symbol(c) {
                if col >= width {
                    return Err(ChessError::invalid_fen(format!(
                        "rank {rank_str:?} overflows board width {width}"
                    )));
                }
                board.set(col as u8, row as u8, Some(piece));
                col += 1;
            } else {
                return Err(ChessError::invalid_fen(format!(
                    "unrecognized piece placement character {c:?}"
                )));
            }
        }
        if col != width {
            return Err(ChessError::invalid_fen(format!(
                "rank {rank_str:?} totals {col} squares, expected {width}"
            )));
        }
    }

    Ok(board)
}

fn parse_en_passant(field: &str, width: u8, height: u8) -> Result<Option<(u8, u8)>, ChessError> {
    if field == "-" {
        return Ok(None);
    }
    let mut chars = field.chars();
    let file = chars
        .next()
        .ok_or_else(|| ChessError::invalid_fen(format!("malformed en passant field {field:?}")))?;
    let rank_digits: String = chars.collect();
    if !file.is_ascii_lowercase() || rank_digits.is_empty() {
        return Err(ChessError::invalid_fen(format!(
            "malformed en passant field {field:?}"
        )));
    }
    let col = file as u32 - 'a' as u32;
    let row: u32 = rank_digits
        .parse()
        .map_err(|_| ChessError::invalid_fen(format!("malformed en passant field {field:?}")))?;
    if col >= width as u32 || row == 0 || row > height as u32 {
        return Err(ChessError::invalid_fen(format!(
            "en passant square {field:?} out of range"
        )));
    }
    Ok(Some((col as u8, (row - 1) as u8)))
}

/// Whether a pawn of `side_to_move` sits where it could legally capture en
/// passant to `target`. Used both to normalize a freshly loaded FEN's
/// en-passant field and to decide whether to emit one at all.
pub(crate) fn enemy_pawn_can_capture(board: &Board, target: (u8, u8), side_to_move: Color) -> bool {
    let capture_direction = side_to_move.pawn_direction();
    let capturing_row = target.1 as i32 - capture_direction;
    if capturing_row < 0 {
        return false;
    }
    for dc in [-1, 1] {
        let capturing_col = target.0 as i32 + dc;
        if !board.in_bounds(capturing_col, capturing_row) {
            continue;
        }
        if let Some(piece) = board.get(capturing_col as u8, capturing_row as u8) {
            if piece.kind() == PieceKind::Pawn && piece.color() == side_to_move {
                return true;
            }
        }
    }
    false
}

/// Emits a FEN string for the given state.
pub(crate) fn emit(
    board: &Board,
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<(u8, u8)>,
    halfmove_clock: u32,
    fullmove_number: u32,
) -> String {
    let mut placement = String::new();
    for rank_from_top in 0..board.height() {
        let row = board.height() - 1 - rank_from_top;
        let mut empty_run = 0u32;
        for col in 0..board.width() {
            match board.get(col, row) {
                Some(piece) => {
                    if empty_run > 0 {
                        placement.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    placement.push(piece.symbol());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            placement.push_str(&empty_run.to_string());
        }
        if rank_from_top + 1 < board.height() {
            placement.push('/');
        }
    }

    let active_color = match side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };

    let en_passant_field = en_passant
        .filter(|&square| enemy_pawn_can_capture(board, square, side_to_move))
        .map(|(col, row)| format!("{}{}", (b'a' + col) as char, row as u32 + 1))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{} {} {} {} {} {}",
        placement,
        active_color,
        castling.to_fen_field(),
        en_passant_field,
        halfmove_clock,
        fullmove_number
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD_START: &str =
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn parses_and_re_emits_standard_start_identically() {
        let parsed = parse(STANDARD_START, 8, 8).unwrap();
        let emitted = emit(
            &parsed.board,
            parsed.side_to_move,
            parsed.castling,
            parsed.en_passant,
            parsed.halfmove_clock,
            parsed.fullmove_number,
        );
        assert_eq!(emitted, STANDARD_START);
    }

    #[test]
    fn rejects_missing_field() {
        let truncated = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0";
        assert!(parse(truncated, 8, 8).is_err());
    }

    #[test]
    fn rejects_unrecognized_active_color() {
        let bad = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1";
        assert!(parse(bad, 8, 8).is_err());
    }

    #[test]
    fn rejects_rank_that_overflows_width() {
        let bad = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNRR w KQkq - 0 1";
        assert!(parse(bad, 8, 8).is_err());
    }

    #[test]
    fn accepts_custom_six_by_six_board() {
        let custom = "rnbkqr/pppppp/6/6/PPPPPP/RNBKQR w - - 0 1";
        let parsed = parse(custom, 6, 6).unwrap();
        assert_eq!(parsed.board.width(), 6);
        let emitted = emit(
            &parsed.board,
            parsed.side_to_move,
            parsed.castling,
            parsed.en_passant,
            parsed.halfmove_clock,
            parsed.fullmove_number,
        );
        assert_eq!(emitted, custom);
    }

    #[test]
    fn multi_digit_empty_runs_parse_as_sequential_digits() {
        // "12" on a 12-wide board means a run of 1 then a run of 2, totaling
        // 3, not a single run of twelve.
        let wide = parse("p11/12/12/12/12/12/12/12 w - - 0 1", 12, 8);
        assert!(wide.is_err(), "p11 totals only 3 squares on a 12-wide rank");
    }

    #[test]
    fn en_passant_with_no_capturer_normalizes_to_dash_on_emit() {
        // e5 pawn target but no black pawn adjacent to capture it.
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let parsed = parse(fen, 8, 8).unwrap();
        assert_eq!(parsed.en_passant, Some((3, 5)));
        assert!(enemy_pawn_can_capture(
            &parsed.board,
            (3, 5),
            parsed.side_to_move
        ));

        let no_capturer = "8/8/8/3p4/8/8/8/4K2k w - d6 0 1";
        let parsed = parse(no_capturer, 8, 8).unwrap();
        let emitted = emit(
            &parsed.board,
            parsed.side_to_move,
            parsed.castling,
            parsed.en_passant,
            parsed.halfmove_clock,
            parsed.fullmove_number,
        );
        assert!(emitted.contains(" - 0 1"));
    }
}
