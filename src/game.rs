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

//! `Game`: the state machine wrapping a [`Board`] with side-to-move, castling
//! rights, en-passant target, move clocks, and a reversible move history.
//! This is the crate's main entry point.

use tracing::instrument;

use crate::attacks;
use crate::board::{Board, MoveEffect};
use crate::castling::{CastleSide, CastlingRights};
use crate::color::Color;
use crate::error::ChessError;
use crate::fen;
use crate::moves::Move;
use crate::movegen;
use crate::piece::PieceKind;

const QUEENSIDE_ROOK_COL: u8 = 0;

/// The standard starting position's FEN.
pub const STANDARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A single reversible record of one made move: enough state to restore the
/// game exactly on [`Game::unmake_move`], without snapshotting the whole
/// board.
#[derive(Clone, Debug)]
struct HistoryFrame {
    mv: Move,
    effect: MoveEffect,
    prior_castling: CastlingRights,
    prior_en_passant: Option<(u8, u8)>,
    prior_halfmove_clock: u32,
    prior_fullmove_number: u32,
}

/// The chess game state machine: a board plus everything needed to generate
/// legal moves, apply them, and reverse them.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    castling: CastlingRights,
    castling_enabled: bool,
    en_passant: Option<(u8, u8)>,
    halfmove_clock: u32,
    fullmove_number: u32,
    history: Vec<HistoryFrame>,
}

impl Game {
    /// The standard 8x8 starting position, with castling enabled.
    #[must_use]
    pub fn standard() -> Game {
        Game::new(8, 8, STANDARD_FEN, true).expect("the standard FEN is always well-formed")
    }

    /// Constructs a game of the given dimensions from a FEN string. Fails if
    /// the dimensions are out of range or the FEN is malformed or
    /// inconsistent with them.
    #[instrument(skip(fen_str), fields(width, height))]
    pub fn new(width: u32, height: u32, fen_str: &str, castling_enabled: bool) -> Result<Game, ChessError> {
        let parsed = fen::parse(fen_str, width, height)?;

        let castling = if castling_enabled {
            parsed.castling
        } else {
            CastlingRights::none()
        };

        let en_passant = parsed.en_passant.filter(|&square| {
            fen::enemy_pawn_can_capture(&parsed.board, square, parsed.side_to_move)
        });

        tracing::debug!(width, height, "game constructed from FEN");

        Ok(Game {
            board: parsed.board,
            side_to_move: parsed.side_to_move,
            castling,
            castling_enabled,
            en_passant,
            halfmove_clock: parsed.halfmove_clock,
            fullmove_number: parsed.fullmove_number,
            history: Vec::new(),
        })
    }

    /// Emits the current position as a FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        fen::emit(
            &self.board,
            self.side_to_move,
            self.castling,
            self.en_passant,
            self.halfmove_clock,
            self.fullmove_number,
        )
    }

    /// The side to move, as `White = +1` / `Black = -1`.
    #[must_use]
    pub const fn turn(&self) -> i64 {
        self.side_to_move.sign()
    }

    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn has_kingside_castling_rights(&self, color: Color) -> bool {
        self.castling.get(color, CastleSide::King)
    }

    #[must_use]
    pub fn has_queenside_castling_rights(&self, color: Color) -> bool {
        self.castling.get(color, CastleSide::Queen)
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for_color(self.side_to_move)
    }

    /// Legal moves originating from `(col, row)`. Empty if that square holds
    /// nothing, or holds the opponent's piece.
    #[must_use]
    pub fn legal_moves_for_position(&self, col: u8, row: u8) -> Vec<Move> {
        match self.board.get(col, row) {
            Some(piece) if piece.color() == self.side_to_move => {}
            _ => return Vec::new(),
        }

        let mut candidates =
            movegen::pseudo_legal_moves_for(&self.board, col, row, self.side_to_move, self.en_passant);
        if self.castling_enabled {
            let mut castle_candidates = Vec::new();
            movegen::castling_candidates(&self.board, self.side_to_move, self.castling, &mut castle_candidates);
            candidates.extend(castle_candidates.into_iter().filter(|mv| mv.src_square() == (col, row)));
        }
        self.filter_legal(candidates, self.side_to_move)
    }

    fn legal_moves_for_color(&self, color: Color) -> Vec<Move> {
        let mut candidates = movegen::pseudo_legal_moves(&self.board, color, self.en_passant);
        if self.castling_enabled {
            movegen::castling_candidates(&self.board, color, self.castling, &mut candidates);
        }
        self.filter_legal(candidates, color)
    }

    fn filter_legal(&self, candidates: Vec<Move>, color: Color) -> Vec<Move> {
        let mut board = self.board.clone();
        candidates
            .into_iter()
            .filter(|&mv| {
                let effect = board.apply_move(mv, self.en_passant);
                let safe = match board.king_square(color) {
                    Some(king_square) => !attacks::is_attacked(&board, king_square, !color),
                    None => true,
                };
                board.unapply_move(mv, &effect);
                safe
            })
            .collect()
    }

    /// Parses a LAN move string at this game's dimensions.
    pub fn move_from_lan(&self, s: &str) -> Result<Move, ChessError> {
        Move::from_lan(s, self.board.width(), self.board.height())
    }

    /// Applies `mv` if it is in the current legal-move set. Returns whether
    /// it was applied; a move absent from the legal set does not mutate
    /// anything.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, mv: Move) -> bool {
        if !self.legal_moves().contains(&mv) {
            return false;
        }

        let prior_castling = self.castling;
        let prior_en_passant = self.en_passant;
        let prior_halfmove_clock = self.halfmove_clock;
        let prior_fullmove_number = self.fullmove_number;

        let moving_piece = self.board.get(mv.src_square().0, mv.src_square().1);
        let effect = self.board.apply_move(mv, self.en_passant);

        self.update_castling_rights(mv, moving_piece, &effect);

        self.en_passant = moving_piece
            .filter(|p| p.kind() == PieceKind::Pawn)
            .filter(|_| mv.src_square().1.abs_diff(mv.dst_square().1) == 2)
            .map(|_| {
                let src_row = mv.src_square().1;
                let dst_row = mv.dst_square().1;
                let skipped_row = (src_row + dst_row) / 2;
                (mv.src_square().0, skipped_row)
            });

        self.halfmove_clock = if effect.is_pawn_move || effect.captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }

        self.history.push(HistoryFrame {
            mv,
            effect,
            prior_castling,
            prior_en_passant,
            prior_halfmove_clock,
            prior_fullmove_number,
        });

        self.side_to_move = !self.side_to_move;
        tracing::trace!(mv = %mv.to_lan(), "move applied");
        true
    }

    fn update_castling_rights(&mut self, mv: Move, moving_piece: Option<crate::piece::Piece>, effect: &MoveEffect) {
        if let Some(piece) = moving_piece {
            if piece.kind() == PieceKind::King {
                self.castling.clear_color(piece.color());
            } else if piece.kind() == PieceKind::Rook {
                self.clear_right_for_rook_square(piece.color(), mv.src_square());
            }
        }
        if let Some((captured, square)) = effect.captured {
            if captured.kind() == PieceKind::Rook {
                self.clear_right_for_rook_square(captured.color(), square);
            }
        }
    }

    fn clear_right_for_rook_square(&mut self, color: Color, square: (u8, u8)) {
        let home_row = home_row(color, self.board.height());
        if square.1 != home_row {
            return;
        }
        if square.0 == QUEENSIDE_ROOK_COL {
            self.castling.clear(color, CastleSide::Queen);
        } else if square.0 == self.board.width() - 1 {
            self.castling.clear(color, CastleSide::King);
        }
    }

    /// Reverses the most recently made move. Returns `false` if there is
    /// nothing to reverse.
    #[instrument(skip(self))]
    pub fn unmake_move(&mut self) -> bool {
        let Some(frame) = self.history.pop() else {
            return false;
        };
        self.board.unapply_move(frame.mv, &frame.effect);
        self.castling = frame.prior_castling;
        self.en_passant = frame.prior_en_passant;
        self.halfmove_clock = frame.prior_halfmove_clock;
        self.fullmove_number = frame.prior_fullmove_number;
        self.side_to_move = !self.side_to_move;
        tracing::trace!(mv = %frame.mv.to_lan(), "move reversed");
        true
    }

    /// Whether the side to move's king is currently attacked.
    #[must_use]
    pub fn is_check(&self) -> bool {
        match self.board.king_square(self.side_to_move) {
            Some(square) => attacks::is_attacked(&self.board, square, !self.side_to_move),
            None => false,
        }
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_check() && self.legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && self.legal_moves().is_empty()
    }

    /// True for K-vs-K, K+B-vs-K, K+N-vs-K, and K+B-vs-K+B with both bishops
    /// on the same square color. No other draw conditions are considered.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minor_pieces: Vec<(PieceKind, Color, (u8, u8))> = Vec::new();
        for (square, piece) in self.board.occupied() {
            match piece.kind() {
                PieceKind::King => {}
                PieceKind::Bishop | PieceKind::Knight => minor_pieces.push((piece.kind(), piece.color(), square)),
                _ => return false,
            }
        }

        match minor_pieces.as_slice() {
            [] => true,
            [(PieceKind::Bishop, _, _)] | [(PieceKind::Knight, _, _)] => true,
            [(PieceKind::Bishop, color_a, square_a), (PieceKind::Bishop, color_b, square_b)] => {
                color_a != color_b && square_color(*square_a) == square_color(*square_b)
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_checkmate()
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.halfmove_clock >= 100
    }
}

const fn home_row(color: Color, height: u8) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => height - 1,
    }
}

const fn square_color((col, row): (u8, u8)) -> bool {
    (col as u32 + row as u32) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_start_has_twenty_legal_moves() {
        let game = Game::standard();
        assert_eq!(game.legal_moves().len(), 20);
    }

    #[test]
    fn e2e4_updates_fen_as_expected() {
        let mut game = Game::standard();
        let mv = game.move_from_lan("e2e4").unwrap();
        assert!(game.make_move(mv));
        // No black pawn sits on d5 or f5, so no enemy pawn could capture en
        // passant on e3; the field is normalized to "-", not "e3".
        assert_eq!(
            game.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
    }

    #[test]
    fn make_then_unmake_restores_fen_exactly() {
        let mut game = Game::standard();
        let before = game.to_fen();
        let mv = game.move_from_lan("g1f3").unwrap();
        assert!(game.make_move(mv));
        assert!(game.unmake_move());
        assert_eq!(game.to_fen(), before);
    }

    #[test]
    fn turn_flips_on_make_and_restores_on_unmake() {
        let mut game = Game::standard();
        assert_eq!(game.turn(), 1);
        let mv = game.move_from_lan("e2e4").unwrap();
        game.make_move(mv);
        assert_eq!(game.turn(), -1);
        game.unmake_move();
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn italian_game_sequence_tracks_legal_move_counts() {
        let mut game = Game::standard();
        // (lan, legal move count for the side to move *before* playing lan).
        let plies = [
            ("e2e4", 20),
            ("e7e5", 20),
            ("g1f3", 29),
            ("b8c6", 29),
            ("f1c4", 29),
            ("f8c5", 33),
            ("d2d3", 35),
            ("g8f6", 38),
            ("c1g5", 40),
            ("h7h6", 37),
            ("g5h4", 42),
            ("d7d6", 38),
        ];
        for (lan, expected_legal_moves) in plies {
            assert_eq!(
                game.legal_moves().len(),
                expected_legal_moves,
                "before {lan}"
            );
            let mv = game.move_from_lan(lan).unwrap();
            assert!(game.make_move(mv), "{lan} should have been legal");
        }
        assert!(!game.legal_moves().is_empty());
    }

    #[test]
    fn castling_rights_both_sides_available_from_fen() {
        let game = Game::new(8, 8, "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1", true).unwrap();
        let moves = game.legal_moves();
        assert!(moves.iter().any(|m| m.src_square() == (4, 0) && m.dst_square() == (6, 0)));
        assert!(moves.iter().any(|m| m.src_square() == (4, 0) && m.dst_square() == (2, 0)));
    }

    #[test]
    fn en_passant_capture_is_legal_and_clears_the_target_after() {
        let mut game = Game::new(
            8,
            8,
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
            true,
        )
        .unwrap();
        let mv = game.move_from_lan("e5d6").unwrap();
        assert!(game.make_move(mv));
        assert!(game.to_fen().contains(" - 0"));
        assert!(game.board().get(3, 4).is_none());
    }

    #[test]
    fn bare_kings_are_insufficient_material() {
        let game = Game::new(8, 8, "8/8/8/8/8/8/8/4K2k w - - 0 1", true).unwrap();
        assert!(game.is_insufficient_material());
        assert!(!game.legal_moves().is_empty());
    }

    #[test]
    fn custom_board_size_zero_and_oversize_fail() {
        assert!(Game::new(0, 8, STANDARD_FEN, true).is_err());
        assert!(Game::new(33, 8, STANDARD_FEN, true).is_err());
        assert!(Game::new(32, 32, "8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8/8 w - - 0 1", true).is_ok());
    }

    #[test]
    fn checkmate_and_stalemate_predicates_agree_with_check_state() {
        // Fool's mate.
        let mut game = Game::standard();
        for lan in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            let mv = game.move_from_lan(lan).unwrap();
            assert!(game.make_move(mv));
        }
        assert!(game.is_checkmate());
        assert!(!game.is_stalemate());
    }

    #[test]
    fn castling_rights_only_decrease_never_increase() {
        let mut game = Game::new(8, 8, "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", true).unwrap();
        assert!(game.has_kingside_castling_rights(Color::White));
        let mv = game.move_from_lan("h1h2").unwrap();
        assert!(game.make_move(mv));
        assert!(!game.has_kingside_castling_rights(Color::White));
        assert!(game.has_queenside_castling_rights(Color::White));
        game.unmake_move();
        // Unmake restores the prior rights; it does not grant new ones.
        assert!(game.has_kingside_castling_rights(Color::White));
    }

    #[test]
    fn legal_moves_for_position_is_empty_for_empty_and_opponent_squares() {
        let game = Game::standard();
        assert!(game.legal_moves_for_position(4, 4).is_empty());
        assert!(game.legal_moves_for_position(4, 6).is_empty());
        assert_eq!(game.legal_moves_for_position(4, 1).len(), 2);
    }

    #[test]
    fn disabling_castling_at_construction_locks_all_rights_false() {
        let game = Game::new(8, 8, STANDARD_FEN, false).unwrap();
        assert!(!game.has_kingside_castling_rights(Color::White));
        assert!(!game.has_queenside_castling_rights(Color::Black));
    }
}
