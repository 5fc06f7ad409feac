//! Move validation against the mandatory-capture rules

use crate::search::legal_plies;
use crate::types::*;

/// Check if a move is legal for `player`
///
/// A move is legal when it starts one of the player's legal plies:
/// - Plain moves are illegal while any capture is available
/// - A jump is illegal when it does not start a maximal capture sequence
/// - The `captured` square must match the generated jump
///
/// # Examples
///
/// ```
/// use draughts_engine::{is_legal_move, Board, Move, Player, Position};
///
/// let board = Board::initial();
/// let mv = Move::new(Position::new(5, 0), Position::new(4, 1));
/// assert!(is_legal_move(&board, Player::White, &mv));
/// ```
pub fn is_legal_move(board: &Board, player: Player, mv: &Move) -> bool {
    if !mv.is_well_formed() {
        return false;
    }

    legal_plies(board, player)
        .iter()
        .any(|ply| ply.first_move() == *mv)
}
