//! Man move generation
//!
//! ## Man Movement Rules
//!
//! - **Plain move**: one square diagonally forward (toward the opponent) onto an empty square
//! - **Capture**: jump an adjacent opponent piece diagonally forward, landing on the empty
//!   square directly behind it
//! - Men never move or capture backwards
//! - **Promotion**: handled by the move applier when a man lands on the far row

use crate::board::*;
use crate::constants::*;
use crate::types::*;

/// Generate the moves of a man of `player` standing on `from`
pub(super) fn generate_man_moves(
    board: &Board,
    from: Position,
    player: Player,
    forced_only: bool,
    out: &mut PieceMoves,
) {
    let dirs = match player {
        Player::White => &WHITE_MAN_DIRS,
        Player::Black => &BLACK_MAN_DIRS,
    };

    for &(d_row, d_col) in dirs {
        let step = from.offset(d_row, d_col);
        let Some(target) = board.get(step) else {
            continue;
        };

        if target == Cell::Empty {
            if !forced_only {
                out.moves.push(Move::new(from, step));
            }
        } else if is_player_piece(target, player.opponent()) {
            let landing = step.offset(d_row, d_col);
            if board.is_empty_at(landing) {
                out.captures.push(Move::capture(from, landing, step));
            }
        }
    }
}
