//! Board transitions
//!
//! Pure functions turning a board and a move (or a whole ply) into the next
//! board. The input board is never touched; every call returns a fresh copy.
//! The same functions drive real moves and the positions simulated by the
//! search.

use crate::board::*;
use crate::error::{DraughtsError, DraughtsResult};
use crate::types::*;
use tracing::error;

/// Apply `mv` to `board`, failing on a malformed move or an empty source square
///
/// The piece on `from` moves to `to`, the captured square (if any) is
/// cleared, and a man landing on the opponent's back rank is crowned in the
/// same transition.
///
/// # Errors
///
/// Returns [`DraughtsError::OffBoard`] or [`DraughtsError::InvalidMove`] for
/// structurally invalid moves and [`DraughtsError::NoPieceAt`] when `from` is
/// empty. Legality on this board is not checked.
pub fn try_apply_move(board: &Board, mv: &Move) -> DraughtsResult<Board> {
    mv.validate()?;

    let piece = board
        .get(mv.from)
        .filter(|cell| *cell != Cell::Empty)
        .ok_or(DraughtsError::NoPieceAt { position: mv.from })?;

    let mut next = *board;
    next.set(mv.from, Cell::Empty);
    if let Some(captured) = mv.captured {
        next.set(captured, Cell::Empty);
    }

    let promotes = !is_king(piece)
        && piece
            .owner()
            .is_some_and(|owner| mv.to.row == owner.promotion_row());
    next.set(mv.to, if promotes { piece.crowned() } else { piece });

    Ok(next)
}

/// Apply `mv` to `board`, returning an unmodified copy if the move is invalid
///
/// Callers that need to know whether the transition happened should use
/// [`try_apply_move`] instead.
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    try_apply_move(board, mv).unwrap_or_else(|e| {
        error!("apply_move: ignoring {}: {}", mv, e);
        *board
    })
}

/// Apply every step of `ply` in order
///
/// If any step fails, the whole ply is abandoned and a copy of the pre-ply
/// board is returned.
pub fn apply_ply(board: &Board, ply: &Ply) -> Board {
    ply.moves()
        .iter()
        .try_fold(*board, |current, mv| try_apply_move(&current, mv))
        .unwrap_or_else(|e| {
            error!("apply_ply: abandoning [{}]: {}", ply, e);
            *board
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_plain_move_relocates_piece() {
        let board = Board::empty().with_piece(pos(5, 2), Cell::WhiteMan);
        let next = apply_move(&board, &Move::new(pos(5, 2), pos(4, 3)));

        assert_eq!(next.get(pos(5, 2)), Some(Cell::Empty));
        assert_eq!(next.get(pos(4, 3)), Some(Cell::WhiteMan));
        assert_eq!(board.get(pos(5, 2)), Some(Cell::WhiteMan), "Input untouched");
    }

    #[test]
    fn test_capture_removes_jumped_piece() {
        let board = Board::empty()
            .with_piece(pos(5, 3), Cell::WhiteMan)
            .with_piece(pos(4, 2), Cell::BlackMan);
        let next = apply_move(&board, &Move::capture(pos(5, 3), pos(3, 1), pos(4, 2)));

        assert_eq!(next.get(pos(5, 3)), Some(Cell::Empty));
        assert_eq!(next.get(pos(4, 2)), Some(Cell::Empty));
        assert_eq!(next.get(pos(3, 1)), Some(Cell::WhiteMan), "Not promoted on row 3");
    }

    #[test]
    fn test_white_man_promotes_on_row_zero() {
        let board = Board::empty().with_piece(pos(1, 2), Cell::WhiteMan);
        let next = apply_move(&board, &Move::new(pos(1, 2), pos(0, 3)));
        assert_eq!(next.get(pos(0, 3)), Some(Cell::WhiteKing));
    }

    #[test]
    fn test_black_man_promotes_on_row_seven() {
        let board = Board::empty()
            .with_piece(pos(5, 2), Cell::BlackMan)
            .with_piece(pos(6, 3), Cell::WhiteMan);
        let next = apply_move(&board, &Move::capture(pos(5, 2), pos(7, 4), pos(6, 3)));
        assert_eq!(next.get(pos(7, 4)), Some(Cell::BlackKing));
        assert_eq!(next.get(pos(6, 3)), Some(Cell::Empty));
    }

    #[test]
    fn test_man_reaching_own_back_rank_is_not_promoted() {
        let board = Board::empty().with_piece(pos(6, 1), Cell::WhiteMan);
        let next = apply_move(&board, &Move::new(pos(6, 1), pos(7, 0)));
        assert_eq!(next.get(pos(7, 0)), Some(Cell::WhiteMan));
    }

    #[test]
    fn test_invalid_move_returns_unmodified_copy() {
        let board = Board::initial();

        let off_board = Move::new(pos(5, 0), pos(4, -1));
        assert_eq!(apply_move(&board, &off_board), board);

        let same_square = Move::new(pos(5, 0), pos(5, 0));
        assert_eq!(apply_move(&board, &same_square), board);
    }

    #[test]
    fn test_try_apply_move_reports_errors() {
        let board = Board::initial();

        assert_eq!(
            try_apply_move(&board, &Move::new(pos(4, 1), pos(3, 2))),
            Err(DraughtsError::NoPieceAt { position: pos(4, 1) })
        );
        assert_eq!(
            try_apply_move(&board, &Move::new(pos(8, 0), pos(7, 1))),
            Err(DraughtsError::OffBoard { position: pos(8, 0) })
        );
    }

    #[test]
    fn test_apply_ply_runs_whole_sequence() {
        let board = Board::empty()
            .with_piece(pos(6, 1), Cell::WhiteMan)
            .with_piece(pos(5, 2), Cell::BlackMan)
            .with_piece(pos(3, 4), Cell::BlackMan);
        let sequence = CaptureSequence::new(vec![
            Move::capture(pos(6, 1), pos(4, 3), pos(5, 2)),
            Move::capture(pos(4, 3), pos(2, 5), pos(3, 4)),
        ])
        .unwrap();

        let next = apply_ply(&board, &Ply::Capture(sequence));
        assert_eq!(next.count(Player::Black), 0);
        assert_eq!(next.get(pos(2, 5)), Some(Cell::WhiteMan));
    }

    #[test]
    fn test_apply_ply_reverts_when_a_step_fails() {
        //! The jumping piece is missing, so the ply is abandoned and the
        //! board comes back unchanged.
        let board = Board::empty()
            .with_piece(pos(5, 2), Cell::BlackMan)
            .with_piece(pos(3, 4), Cell::BlackMan);
        let sequence = CaptureSequence::new(vec![
            Move::capture(pos(6, 1), pos(4, 3), pos(5, 2)),
            Move::capture(pos(4, 3), pos(2, 5), pos(3, 4)),
        ])
        .unwrap();

        assert_eq!(apply_ply(&board, &Ply::Capture(sequence)), board);
    }
}
