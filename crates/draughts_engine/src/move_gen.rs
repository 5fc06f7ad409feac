//! Move generation
//!
//! Enumerates the single-step moves and single jumps available to one piece,
//! and unions them over every piece of a player.
//!
//! Men and kings follow different rules and live in their own submodules:
//! - `man` - one diagonal step forward, or a short jump over an adjacent opponent
//! - `king` - sliding moves along all four diagonals and long-range jumps
//!
//! Nothing here enforces mandatory capture: the generator reports plain moves
//! even when captures exist. The capture obligation is applied by
//! [`crate::captures::find_forced_captures`] and the search.

mod king;
mod man;

use super::board::*;
use super::types::*;

/// Generate the moves of the piece on `(row, col)`
///
/// With `forced_only` set, plain moves are skipped and only captures are
/// computed; the capture resolver uses this when extending a jump chain.
/// Empty or off-board squares yield no moves.
///
/// # Examples
///
/// ```rust
/// use draughts_engine::{get_possible_moves, Board, Cell, Position};
///
/// let board = Board::empty()
///     .with_piece(Position::new(5, 3), Cell::WhiteMan)
///     .with_piece(Position::new(4, 2), Cell::BlackMan);
///
/// let moves = get_possible_moves(&board, 5, 3, false);
/// assert_eq!(moves.captures.len(), 1);
/// assert_eq!(moves.captures[0].to, Position::new(3, 1));
/// ```
pub fn get_possible_moves(board: &Board, row: i8, col: i8, forced_only: bool) -> PieceMoves {
    let from = Position::new(row, col);
    let mut out = PieceMoves::default();

    let Some(piece) = board.get(from) else {
        return out;
    };
    let Some(owner) = piece.owner() else {
        return out;
    };

    if is_king(piece) {
        king::generate_king_moves(board, from, owner, forced_only, &mut out);
    } else {
        man::generate_man_moves(board, from, owner, forced_only, &mut out);
    }

    out
}

/// Generate every plain move and single jump available to `player`
///
/// Squares are scanned row by row, column by column; each piece's moves keep
/// the generator's order.
pub fn get_all_possible_moves_for_player(board: &Board, player: Player) -> PieceMoves {
    let mut all = PieceMoves::default();

    for (pos, cell) in board.pieces() {
        if is_player_piece(cell, player) {
            all.extend(get_possible_moves(board, pos.row, pos.col, false));
        }
    }

    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[((i8, i8), Cell)]) -> Board {
        pieces.iter().fold(Board::empty(), |board, &((row, col), cell)| {
            board.with_piece(Position::new(row, col), cell)
        })
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::initial();
        assert!(get_possible_moves(&board, 4, 4, false).is_empty());
        assert!(get_possible_moves(&board, 9, 9, false).is_empty());
    }

    #[test]
    fn test_man_capture_and_plain_move_reported_together() {
        //! The raw generator lists the plain move even when a capture exists;
        //! the capture obligation is enforced later by the resolver.
        let board = board_with(&[((5, 3), Cell::WhiteMan), ((4, 2), Cell::BlackMan)]);
        let moves = get_possible_moves(&board, 5, 3, false);

        assert_eq!(
            moves.captures,
            vec![Move::capture(
                Position::new(5, 3),
                Position::new(3, 1),
                Position::new(4, 2)
            )]
        );
        assert_eq!(
            moves.moves,
            vec![Move::new(Position::new(5, 3), Position::new(4, 4))]
        );
    }

    #[test]
    fn test_forced_only_suppresses_plain_moves() {
        let board = board_with(&[((5, 3), Cell::WhiteMan), ((4, 2), Cell::BlackMan)]);
        let moves = get_possible_moves(&board, 5, 3, true);

        assert!(moves.moves.is_empty(), "Plain moves should be skipped");
        assert_eq!(moves.captures.len(), 1);
    }

    #[test]
    fn test_aggregator_only_includes_own_pieces() {
        let board = Board::initial();
        let white = get_all_possible_moves_for_player(&board, Player::White);
        let black = get_all_possible_moves_for_player(&board, Player::Black);

        // Only the front row of each side can move: 4 men, 7 diagonals in total
        assert_eq!(white.moves.len(), 7);
        assert_eq!(black.moves.len(), 7);
        assert!(white.captures.is_empty() && black.captures.is_empty());
        assert!(white
            .moves
            .iter()
            .all(|mv| is_player_piece(board.get(mv.from).unwrap(), Player::White)));
    }

    #[test]
    fn test_aggregator_preserves_scan_order() {
        let board = board_with(&[((2, 1), Cell::BlackMan), ((6, 5), Cell::BlackMan)]);
        let moves = get_all_possible_moves_for_player(&board, Player::Black);

        let origins: Vec<Position> = moves.moves.iter().map(|mv| mv.from).collect();
        assert_eq!(
            origins,
            vec![
                Position::new(2, 1),
                Position::new(2, 1),
                Position::new(6, 5),
                Position::new(6, 5)
            ]
        );
    }
}
