//! Forced-capture resolution
//!
//! If any capture is available the mover must capture, and must pick one of
//! the sequences taking the greatest number of pieces.
//!
//! ## Algorithm
//!
//! Every single jump available to the player starts a sequence. The jump is
//! applied to a copy of the board and the piece that just landed (possibly
//! crowned by that jump) is asked for further captures *from its landing
//! square only*. Each continuation is explored depth-first. A sequence ends
//! when the landing piece has no further capture.
//!
//! Terminal sequences are folded into a `LongestCaptures` accumulator that
//! is passed down and handed back by every recursive call: longer sequences
//! replace the current set, equal ones join it, shorter ones are dropped.
//!
//! Captured pieces are removed as soon as they are jumped, so a chain can
//! never jump the same piece twice and always terminates.

use crate::board::*;
use crate::make_move::try_apply_move;
use crate::move_gen::*;
use crate::types::*;
use tracing::{trace, warn};

/// Running result of the sequence search
#[derive(Debug, Default)]
struct LongestCaptures {
    len: usize,
    sequences: Vec<Vec<Move>>,
}

impl LongestCaptures {
    fn record(mut self, path: &[Move]) -> Self {
        if path.len() > self.len {
            self.len = path.len();
            self.sequences.clear();
            self.sequences.push(path.to_vec());
        } else if path.len() == self.len {
            self.sequences.push(path.to_vec());
        }
        self
    }
}

/// Find every maximal-length capture sequence available to `player`
///
/// Returns an empty vector when the player has no capture at all, in which
/// case plain moves are legal this ply.
pub fn find_forced_captures(board: &Board, player: Player) -> Vec<CaptureSequence> {
    let jumps = get_all_possible_moves_for_player(board, player).captures;
    resolve_captures(board, player, jumps)
}

/// Extend already generated single `jumps` of `player` into maximal sequences
pub(crate) fn resolve_captures(
    board: &Board,
    player: Player,
    jumps: Vec<Move>,
) -> Vec<CaptureSequence> {
    if jumps.is_empty() {
        return Vec::new();
    }

    let longest = jumps
        .into_iter()
        .fold(LongestCaptures::default(), |best, jump| {
            extend_sequence(board, player, vec![jump], best)
        });

    trace!(
        "find_forced_captures: {} sequence(s) of length {} for {}",
        longest.sequences.len(),
        longest.len,
        player
    );

    longest
        .sequences
        .into_iter()
        .filter_map(|moves| match CaptureSequence::new(moves) {
            Ok(sequence) => Some(sequence),
            Err(e) => {
                warn!("find_forced_captures: dropping sequence: {}", e);
                None
            }
        })
        .collect()
}

/// Play the last jump of `path` on `board` and explore every continuation
///
/// `board` is the position *before* that jump.
fn extend_sequence(
    board: &Board,
    player: Player,
    path: Vec<Move>,
    best: LongestCaptures,
) -> LongestCaptures {
    let Some(&jump) = path.last() else {
        return best;
    };

    let after = match try_apply_move(board, &jump) {
        Ok(after) => after,
        Err(e) => {
            warn!("extend_sequence: skipping capture {}: {}", jump, e);
            return best;
        }
    };

    let landed = after.get(jump.to).unwrap_or(Cell::Empty);
    if !is_player_piece(landed, player) {
        return best.record(&path);
    }

    let continuations = get_possible_moves(&after, jump.to.row, jump.to.col, true).captures;
    if continuations.is_empty() {
        return best.record(&path);
    }

    continuations.into_iter().fold(best, |best, next| {
        let mut extended = path.clone();
        extended.push(next);
        extend_sequence(&after, player, extended, best)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_no_capture_returns_empty() {
        assert!(find_forced_captures(&Board::initial(), Player::White).is_empty());
    }

    #[test]
    fn test_single_jump_sequence() {
        let board = Board::empty()
            .with_piece(pos(5, 3), Cell::WhiteMan)
            .with_piece(pos(4, 2), Cell::BlackMan);
        let sequences = find_forced_captures(&board, Player::White);

        assert_eq!(sequences.len(), 1);
        assert_eq!(
            sequences[0].moves(),
            &[Move::capture(pos(5, 3), pos(3, 1), pos(4, 2))]
        );
    }

    #[test]
    fn test_longest_sequence_wins() {
        //! Man on (6,1) can double-jump via (4,3); man on (3,0) can only take
        //! one piece. Only the double jump is legal.
        let board = Board::empty()
            .with_piece(pos(6, 1), Cell::WhiteMan)
            .with_piece(pos(5, 2), Cell::BlackMan)
            .with_piece(pos(3, 4), Cell::BlackMan)
            .with_piece(pos(3, 0), Cell::WhiteMan)
            .with_piece(pos(2, 1), Cell::BlackMan);
        let sequences = find_forced_captures(&board, Player::White);

        assert_eq!(sequences.len(), 1, "Single jump must be excluded");
        assert_eq!(sequences[0].len(), 2);
        assert_eq!(sequences[0].first().from, pos(6, 1));
        assert_eq!(sequences[0].landing(), pos(2, 5));
    }

    #[test]
    fn test_equal_length_sequences_are_all_kept() {
        let board = Board::empty()
            .with_piece(pos(5, 3), Cell::WhiteMan)
            .with_piece(pos(4, 2), Cell::BlackMan)
            .with_piece(pos(4, 4), Cell::BlackMan);
        let sequences = find_forced_captures(&board, Player::White);

        assert_eq!(sequences.len(), 2);
        assert!(sequences.iter().all(|s| s.len() == 1));
    }

    #[test]
    fn test_chain_continues_with_same_piece_only() {
        //! After (5,1)x(4,2) the man lands on (3,3); the other white man on
        //! (5,5) could take (4,6) but must not be spliced into the chain.
        let board = Board::empty()
            .with_piece(pos(5, 1), Cell::WhiteMan)
            .with_piece(pos(4, 2), Cell::BlackMan)
            .with_piece(pos(5, 5), Cell::WhiteMan)
            .with_piece(pos(4, 6), Cell::BlackMan);
        let sequences = find_forced_captures(&board, Player::White);

        assert_eq!(sequences.len(), 2);
        for sequence in &sequences {
            assert_eq!(sequence.len(), 1);
        }
    }

    #[test]
    fn test_promotion_mid_sequence_continues_as_king() {
        //! Black man jumps (6,3) landing on row 7 and is crowned; as a king it
        //! can immediately jump back over (6,5).
        let board = Board::empty()
            .with_piece(pos(5, 2), Cell::BlackMan)
            .with_piece(pos(6, 3), Cell::WhiteMan)
            .with_piece(pos(6, 5), Cell::WhiteMan);
        let sequences = find_forced_captures(&board, Player::Black);

        assert!(!sequences.is_empty());
        assert!(sequences.iter().all(|s| s.len() == 2));
        assert!(sequences
            .iter()
            .all(|s| s.captured().collect::<Vec<_>>() == vec![pos(6, 3), pos(6, 5)]));
    }

    #[test]
    fn test_king_multi_jump_lists_every_landing() {
        //! King on (7,0) takes (5,2) and may land anywhere from (4,3) to (0,7).
        //! Only (4,3) continues, over (3,2), landing on (2,1) or (1,0).
        let board = Board::empty()
            .with_piece(pos(7, 0), Cell::WhiteKing)
            .with_piece(pos(5, 2), Cell::BlackMan)
            .with_piece(pos(3, 2), Cell::BlackMan);
        let sequences = find_forced_captures(&board, Player::White);

        assert!(sequences.iter().all(|s| s.len() == 2));
        assert!(sequences.iter().all(|s| s.first().to == pos(4, 3)));
        let landings: Vec<Position> = sequences.iter().map(|s| s.landing()).collect();
        assert_eq!(landings, vec![pos(2, 1), pos(1, 0)]);
    }
}
