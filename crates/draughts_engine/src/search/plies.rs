//! Candidate generation for the side to move

use crate::captures::resolve_captures;
use crate::move_gen::get_all_possible_moves_for_player;
use crate::types::*;

/// Every legal ply for `player`
///
/// When any capture exists only the maximal capture sequences are legal;
/// otherwise each plain move is its own ply. An empty result means the
/// player cannot move and has lost.
///
/// The player's moves are generated once per call and shared between the
/// capture resolver and the plain-move fallback.
pub fn legal_plies(board: &Board, player: Player) -> Vec<Ply> {
    let PieceMoves { moves, captures } = get_all_possible_moves_for_player(board, player);

    let forced = resolve_captures(board, player, captures);
    if !forced.is_empty() {
        return forced.into_iter().map(Ply::Capture).collect();
    }

    moves.into_iter().map(Ply::Quiet).collect()
}
