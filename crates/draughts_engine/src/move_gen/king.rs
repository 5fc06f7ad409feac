//! King move generation
//!
//! Kings are sliding pieces: they move along all four diagonals across any
//! number of empty squares, and capture from a distance.
//!
//! ## Algorithm
//!
//! Each diagonal is scanned outward one square at a time:
//! 1. Empty squares before any opponent piece are plain-move landings
//! 2. The first opponent piece becomes the pending capture target
//! 3. Every empty square after the target is a capture landing for it
//! 4. A second piece after the target, or a friendly piece before one,
//!    ends the scan in that direction
//!
//! A king therefore captures at most one piece per direction per call and
//! never jumps two pieces in a row. Chaining further jumps is the resolver's
//! job.

use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Generate the moves of a king of `player` standing on `from`
pub(super) fn generate_king_moves(
    board: &Board,
    from: Position,
    player: Player,
    forced_only: bool,
    out: &mut PieceMoves,
) {
    for &(d_row, d_col) in &KING_DIRS {
        let mut pending: Option<Position> = None;
        let mut current = from.offset(d_row, d_col);

        while let Some(cell) = board.get(current) {
            match (cell, pending) {
                (Cell::Empty, None) => {
                    if !forced_only {
                        out.moves.push(Move::new(from, current));
                    }
                }
                (Cell::Empty, Some(captured)) => {
                    out.captures.push(Move::capture(from, current, captured));
                }
                (piece, None) if is_player_piece(piece, player.opponent()) => {
                    pending = Some(current);
                }
                // Friendly piece, or a second piece behind the target
                _ => break,
            }
            current = current.offset(d_row, d_col);
        }
    }
}
