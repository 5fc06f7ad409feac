//! # Draughts Engine Constants - Evaluation Values & Search Parameters
//!
//! ## Overview
//!
//! This module centralizes the constant values used throughout the engine: board geometry,
//! direction vectors, the material/advancement weights used by the static evaluator and the
//! search limits.
//!
//! ## Board Geometry
//!
//! The board is a fixed 8x8 grid addressed as `(row, col)`. Row 0 is the top of the board and
//! is Black's home side; row 7 is the bottom and White's home side. Consequently:
//!
//! - **White men** advance toward decreasing rows and promote on row 0
//! - **Black men** advance toward increasing rows and promote on row 7
//!
//! Only the dark squares (`(row + col)` odd) are used by the standard opening position, but the
//! move generator itself never relies on square colour: it follows diagonals, which keep a
//! piece on its colour automatically.
//!
//! ## Evaluation Weights
//!
//! Scores are expressed in *men* (1.0 = one man), signed so that positive values favour White:
//!
//! - **Man**: 1.0, plus 0.1 per row advanced from its own back rank
//! - **King**: 5.0 flat
//!
//! The advancement bonus rewards marching toward promotion. A man one step from promotion is
//! worth 1.6, still far below a king, so the engine always prefers crowning when it can.
//!
//! ## Search Limits
//!
//! The search is a plain recursive minimax without a transposition table, so its cost grows
//! roughly as `branching_factor ^ depth`. `MAX_SEARCH_DEPTH` caps the depth accepted at the
//! public entry points; anything deeper is clamped.

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 8;

/// Last valid row/column index
pub const LAST_INDEX: i8 = BOARD_SIZE as i8 - 1;

/// Row on which White men are crowned
pub const WHITE_PROMOTION_ROW: i8 = 0;

/// Row on which Black men are crowned
pub const BLACK_PROMOTION_ROW: i8 = LAST_INDEX;

/// Number of rows each side fills in the opening position
pub const SETUP_ROWS: i8 = 3;

/// Diagonal steps available to a White man: up-left, up-right
pub const WHITE_MAN_DIRS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// Diagonal steps available to a Black man: down-left, down-right
pub const BLACK_MAN_DIRS: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// Diagonal rays scanned by a king
pub const KING_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Material value of a man
pub const MAN_VALUE: f64 = 1.0;

/// Material value of a king
pub const KING_VALUE: f64 = 5.0;

/// Bonus per row a man has advanced from its own back rank
pub const ADVANCEMENT_BONUS: f64 = 0.1;

/// Deepest search accepted by the public entry points
pub const MAX_SEARCH_DEPTH: u32 = 12;
