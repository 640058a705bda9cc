//! Game-state classification.
//!
//! The arbiter decides, after every ply, whether the game continues and if
//! not, the precise outcome. It is a pure function of the position snapshot
//! plus the external move generator's two outputs (legal move set, in-check
//! flag): no internal state, no I/O, safe to call concurrently for
//! different games.

use std::collections::HashMap;

use crate::arbiter::game_result::GameResult;
use crate::board::board_helper::is_light_square;
use crate::board::board_state::BoardState;
use crate::board::chess_move::Move;

/// Plies since the last pawn move or capture at which the fifty-move rule
/// triggers (50 full moves).
pub const FIFTY_MOVE_PLY_LIMIT: u16 = 100;

/// Seam for the external move generator. `in_check` reflects the state
/// after the most recent `generate_moves` call for the side to move.
pub trait MoveSource {
    fn generate_moves(&mut self, board: &BoardState) -> Vec<Move>;
    fn in_check(&self) -> bool;
}

/// Classify the current position, asking `move_source` for the side to
/// move's legal moves and check status.
pub fn get_game_state<M: MoveSource>(board: &BoardState, move_source: &mut M) -> GameResult {
    let moves = move_source.generate_moves(board);
    let in_check = move_source.in_check();
    classify_position(board, &moves, in_check)
}

/// Classification core. Evaluation order is significant: earlier conditions
/// pre-empt later ones.
pub fn classify_position(board: &BoardState, legal_moves: &[Move], in_check: bool) -> GameResult {
    if legal_moves.is_empty() {
        if in_check {
            return if board.is_white_to_move() {
                GameResult::WhiteIsMated
            } else {
                GameResult::BlackIsMated
            };
        }
        return GameResult::Stalemate;
    }

    if board.fifty_move_count >= FIFTY_MOVE_PLY_LIMIT {
        return GameResult::FiftyMoveRule;
    }

    if insufficient_material(board) {
        return GameResult::InsufficientMaterial;
    }

    if repetition(board) {
        return GameResult::Repetition;
    }

    GameResult::InProgress
}

/// Tally the full position-hash history (current position included) and
/// report a repetition the first time any hash reaches three occurrences.
fn repetition(board: &BoardState) -> bool {
    let mut repetition_count: HashMap<u64, u32> = HashMap::new();
    let history = board.repetition_position_history.clone();
    for key in history {
        let count = repetition_count.entry(key).or_insert(0);
        *count += 1;
        if *count == 3 {
            return true;
        }
    }
    false
}

// Test for insufficient material. Deliberately conservative: only the
// listed dead-position cases are covered. Two knights, or bishop plus
// knight, are not flagged even when theoretically drawn.
fn insufficient_material(board: &BoardState) -> bool {
    if board.pawns(BoardState::WHITE_INDEX).count_ones() > 0
        || board.pawns(BoardState::BLACK_INDEX).count_ones() > 0
    {
        return false;
    }

    if board.friendly_orthogonal_sliders() != 0 || board.enemy_orthogonal_sliders() != 0 {
        return false;
    }

    // No pawns, queens, or rooks on the board; consider knight and bishop
    // cases.
    let num_white_bishops = board.bishops(BoardState::WHITE_INDEX).count_ones();
    let num_black_bishops = board.bishops(BoardState::BLACK_INDEX).count_ones();
    let num_white_knights = board.knights(BoardState::WHITE_INDEX).count_ones();
    let num_black_knights = board.knights(BoardState::BLACK_INDEX).count_ones();
    let num_minors =
        num_white_bishops + num_black_bishops + num_white_knights + num_black_knights;

    // Lone kings, or king vs king plus a single minor: insufficient.
    if num_minors <= 1 {
        return true;
    }

    // Bishop vs bishop: insufficient when both sit on the same colour
    // complex.
    if num_minors == 2 && num_white_bishops == 1 && num_black_bishops == 1 {
        let white_bishop_square =
            board.bishops(BoardState::WHITE_INDEX).trailing_zeros() as u8;
        let black_bishop_square =
            board.bishops(BoardState::BLACK_INDEX).trailing_zeros() as u8;
        return is_light_square(white_bishop_square) == is_light_square(black_bishop_square);
    }

    false
}

pub fn is_draw_result(result: GameResult) -> bool {
    result == GameResult::DrawByArbiter
        || result == GameResult::FiftyMoveRule
        || result == GameResult::Repetition
        || result == GameResult::Stalemate
        || result == GameResult::InsufficientMaterial
        || result == GameResult::DrawByAgreement
}

pub fn is_win_result(result: GameResult) -> bool {
    is_white_win_result(result) || is_black_win_result(result)
}

pub fn is_white_win_result(result: GameResult) -> bool {
    result == GameResult::BlackIsMated || result == GameResult::BlackResigned
}

pub fn is_black_win_result(result: GameResult) -> bool {
    result == GameResult::WhiteIsMated || result == GameResult::WhiteResigned
}

/// Human-readable description of a terminal result. Non-terminal and
/// lifecycle-only values map to an empty string.
pub fn get_result_description(result: GameResult) -> &'static str {
    match result {
        GameResult::DrawByArbiter => "Draw by arbiter",
        GameResult::FiftyMoveRule => "Draw by fifty move rule",
        GameResult::Repetition => "Draw by repetition",
        GameResult::Stalemate => "Draw by stalemate",
        GameResult::InsufficientMaterial => "Draw due to insufficient material",
        GameResult::DrawByAgreement => "Draw by agreement",
        GameResult::BlackResigned => "White won by resignation",
        GameResult::BlackIsMated => "White won by checkmate",
        GameResult::WhiteResigned => "Black won by resignation",
        GameResult::WhiteIsMated => "Black won by checkmate",
        _ => "",
    }
}
