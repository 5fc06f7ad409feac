//! Static position evaluation
//!
//! Scores a board from White's point of view using material and advancement:
//! - Men are worth [`MAN_VALUE`] plus [`ADVANCEMENT_BONUS`] per row advanced
//! - Kings are worth a flat [`KING_VALUE`]
//!
//! No lookahead and no pattern detection; the search supplies the tactics.

use crate::constants::*;
use crate::types::*;

/// Evaluate a board (positive favours White, negative favours Black)
pub fn evaluate_board(board: &Board) -> f64 {
    board
        .pieces()
        .map(|(pos, cell)| piece_value(cell, pos.row))
        .sum()
}

fn piece_value(cell: Cell, row: i8) -> f64 {
    match cell {
        Cell::WhiteMan => MAN_VALUE + ADVANCEMENT_BONUS * f64::from(LAST_INDEX - row),
        Cell::BlackMan => -(MAN_VALUE + ADVANCEMENT_BONUS * f64::from(row)),
        Cell::WhiteKing => KING_VALUE,
        Cell::BlackKing => -KING_VALUE,
        Cell::Empty => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_starting_position_is_balanced() {
        let score = evaluate_board(&Board::initial());
        assert!(score.abs() < EPSILON, "Mirrored setup should score 0, got {}", score);
    }

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(evaluate_board(&Board::empty()), 0.0);
    }

    #[test]
    fn test_white_man_advancement_bonus() {
        let home = Board::empty().with_piece(Position::new(7, 0), Cell::WhiteMan);
        let advanced = Board::empty().with_piece(Position::new(1, 0), Cell::WhiteMan);

        assert!((evaluate_board(&home) - 1.0).abs() < EPSILON);
        assert!((evaluate_board(&advanced) - 1.6).abs() < EPSILON);
    }

    #[test]
    fn test_black_man_mirrors_white() {
        let board = Board::empty().with_piece(Position::new(6, 1), Cell::BlackMan);
        assert!((evaluate_board(&board) + 1.6).abs() < EPSILON);
    }

    #[test]
    fn test_kings_are_flat_five() {
        let board = Board::empty()
            .with_piece(Position::new(0, 1), Cell::WhiteKing)
            .with_piece(Position::new(3, 4), Cell::WhiteKing)
            .with_piece(Position::new(7, 6), Cell::BlackKing);
        assert!((evaluate_board(&board) - KING_VALUE).abs() < EPSILON);
    }
}
