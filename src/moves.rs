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

//! Moves: `(src, dst, promotion)` value types, plus their LAN encoding.
//!
//! A `Move` never records whether it is a castle, an en passant capture, or a
//! promotion as a separate flag bit the way a packed representation might; the
//! board and game state determine that contextually at application time. Only
//! the promotion kind, which cannot be inferred from src/dst alone, is carried
//! explicitly.

use crate::error::ChessError;
use crate::piece::PieceKind;

/// A single chess move: the square moved from, the square moved to, and an
/// optional promotion kind. Equality and hashing consider all three fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    src: (u8, u8),
    dst: (u8, u8),
    promotion: Option<PieceKind>,
}

impl Move {
    /// Builds a move from raw `(col, row)` coordinates. This never fails: a
    /// move with `src == dst`, or one that is otherwise nonsensical, is only
    /// rejected later, at `Game::make_move` time, against the legal-move set.
    #[must_use]
    pub const fn from_rowcol(
        src_col: u8,
        src_row: u8,
        dst_col: u8,
        dst_row: u8,
    ) -> Move {
        Move {
            src: (src_col, src_row),
            dst: (dst_col, dst_row),
            promotion: None,
        }
    }

    /// As [`Move::from_rowcol`], with an explicit promotion kind.
    #[must_use]
    pub const fn promoting(
        src_col: u8,
        src_row: u8,
        dst_col: u8,
        dst_row: u8,
        promotion: PieceKind,
    ) -> Move {
        Move {
            src: (src_col, src_row),
            dst: (dst_col, dst_row),
            promotion: Some(promotion),
        }
    }

    /// Parses a LAN string (`"e2e4"`, `"a7a8q"`) against a board of the given
    /// dimensions, which are needed to validate file/rank bounds and to decode
    /// ranks beyond single digits on tall boards.
    pub fn from_lan(s: &str, width: u8, height: u8) -> Result<Move, ChessError> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(ChessError::invalid_lan(s, "empty move string"));
        }

        let promotion_letter = bytes
            .last()
            .copied()
            .filter(|b| b.is_ascii_alphabetic() && PieceKind::from_promotion_letter(*b as char).is_some());

        let (square_part, promotion) = match promotion_letter {
            Some(letter) => (&s[..s.len() - 1], PieceKind::from_promotion_letter(letter as char)),
            None => (s, None),
        };

        let (src, rest) = parse_square(square_part, width, height, s)?;
        let (dst, rest) = parse_square(rest, width, height, s)?;
        if !rest.is_empty() {
            return Err(ChessError::invalid_lan(s, "trailing characters"));
        }

        Ok(Move {
            src,
            dst,
            promotion,
        })
    }

    /// Emits this move's LAN string: file letters `a+col`, decimal rank digits
    /// `1+row` (more than one digit when the board is taller than nine ranks),
    /// and a trailing lowercase promotion letter if any.
    #[must_use]
    pub fn to_lan(self) -> String {
        let mut out = String::new();
        push_square(&mut out, self.src);
        push_square(&mut out, self.dst);
        if let Some(kind) = self.promotion {
            if let Some(letter) = kind.promotion_letter() {
                out.push(letter);
            }
        }
        out
    }

    #[must_use]
    pub const fn src_square(self) -> (u8, u8) {
        self.src
    }

    #[must_use]
    pub const fn dst_square(self) -> (u8, u8) {
        self.dst
    }

    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// The lowercase LAN promotion letter, if this move promotes.
    #[must_use]
    pub fn promotion_letter(self) -> Option<char> {
        self.promotion.and_then(PieceKind::promotion_letter)
    }
}

fn push_square(out: &mut String, (col, row): (u8, u8)) {
    out.push((b'a' + col) as char);
    out.push_str(&(row as u32 + 1).to_string());
}

/// Parses one leading `(file-letter)(rank-digits)` square off `input`,
/// returning the parsed coordinate and the unconsumed remainder.
fn parse_square<'a>(
    input: &'a str,
    width: u8,
    height: u8,
    whole: &str,
) -> Result<((u8, u8), &'a str), ChessError> {
    let mut chars = input.char_indices();
    let (_, file_char) = chars
        .next()
        .ok_or_else(|| ChessError::invalid_lan(whole, "expected a file letter"))?;
    if !file_char.is_ascii_alphabetic() {
        return Err(ChessError::invalid_lan(whole, "expected a file letter"));
    }
    let col = (file_char.to_ascii_lowercase() as u32).wrapping_sub('a' as u32);
    if col >= width as u32 {
        return Err(ChessError::invalid_lan(whole, "file out of range"));
    }

    let digit_start = file_char.len_utf8();
    let rest = &input[digit_start..];
    let digit_len = rest
        .as_bytes()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_len == 0 {
        return Err(ChessError::invalid_lan(whole, "expected a rank number"));
    }
    let (digits, remainder) = rest.split_at(digit_len);
    let rank: u32 = digits
        .parse()
        .map_err(|_| ChessError::invalid_lan(whole, "rank is not a valid number"))?;
    if rank == 0 || rank > height as u32 {
        return Err(ChessError::invalid_lan(whole, "rank out of range"));
    }

    Ok(((col as u8, (rank - 1) as u8), remainder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rowcol_never_fails_even_for_src_equal_dst() {
        let mv = Move::from_rowcol(4, 4, 4, 4);
        assert_eq!(mv.src_square(), mv.dst_square());
    }

    #[test]
    fn lan_roundtrips_simple_move() {
        let mv = Move::from_lan("e2e4", 8, 8).unwrap();
        assert_eq!(mv.src_square(), (4, 1));
        assert_eq!(mv.dst_square(), (4, 3));
        assert_eq!(mv.to_lan(), "e2e4");
    }

    #[test]
    fn lan_roundtrips_promotion() {
        let mv = Move::from_lan("a7a8q", 8, 8).unwrap();
        assert_eq!(mv.promotion(), Some(PieceKind::Queen));
        assert_eq!(mv.to_lan(), "a7a8q");
    }

    #[test]
    fn lan_handles_tall_boards_with_multi_digit_ranks() {
        let mv = Move::from_lan("a1a12", 8, 16).unwrap();
        assert_eq!(mv.src_square(), (0, 0));
        assert_eq!(mv.dst_square(), (0, 11));
        assert_eq!(mv.to_lan(), "a1a12");
    }

    #[test]
    fn lan_rejects_out_of_range_file() {
        assert!(Move::from_lan("i1i2", 8, 8).is_err());
    }

    #[test]
    fn lan_rejects_out_of_range_rank() {
        assert!(Move::from_lan("a1a9", 8, 8).is_err());
    }

    #[test]
    fn lan_rejects_garbage() {
        assert!(Move::from_lan("", 8, 8).is_err());
        assert!(Move::from_lan("zz", 8, 8).is_err());
    }

    #[test]
    fn equality_and_hash_consider_promotion() {
        let a = Move::from_rowcol(1, 1, 1, 7);
        let b = Move::promoting(1, 1, 1, 7, PieceKind::Queen);
        assert_ne!(a, b);
    }
}
