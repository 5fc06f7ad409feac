//! Draughts engine
//!
//! Rules and a minimax player for 8x8 draughts (checkers) with flying kings
//! and mandatory maximal captures. The crate is a library of stateless
//! functions over [`Board`] values: nothing here owns a game, a clock or a
//! turn counter, so front ends keep that state themselves.
//!
//! ## Overview
//!
//! - Coordinates are `(row, col)` with row 0 at the top. Black starts on rows
//!   0-2 and moves down; White starts on rows 5-7 and moves up.
//! - Men step and capture diagonally forward. Kings slide any distance along
//!   a diagonal and capture a single piece per direction.
//! - When any capture exists the mover must play one of the longest capture
//!   sequences ([`find_forced_captures`]).
//! - Scores are from White's point of view ([`evaluate_board`]).
//!
//! ## Module Organization
//!
//! - `types` - Cells, players, positions, moves and plies
//! - `board` - Board construction, queries and text format
//! - `move_gen` - Per-piece move generation (men and kings)
//! - `make_move` - Applying moves and plies to copies of a board
//! - `captures` - Mandatory capture sequence resolution
//! - `evaluation` - Static evaluation
//! - `search` - Minimax with alpha-beta pruning and root selection
//! - `api` - Legality checks, game status and configured replies
//! - `config` - Difficulty levels and search configuration
//!
//! ## Example
//!
//! ```
//! use draughts_engine::{find_best_move, Board, Player};
//!
//! let board = Board::initial();
//! let mv = find_best_move(&board, Player::White, 3).expect("White can move");
//! assert!(board.get(mv.from).is_some());
//! ```

pub mod api;
pub mod board;
pub mod captures;
pub mod config;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod make_move;
pub mod move_gen;
pub mod search;
pub mod types;

pub use api::{game_status, is_legal_move, reply, reply_ply, GameStatus};
pub use board::{is_king, is_player_piece};
pub use captures::find_forced_captures;
pub use config::{Difficulty, SearchConfig};
pub use error::{DraughtsError, DraughtsResult};
pub use evaluation::evaluate_board;
pub use make_move::{apply_move, apply_ply, try_apply_move};
pub use move_gen::{get_all_possible_moves_for_player, get_possible_moves};
pub use search::{
    find_best_move, find_best_move_with_rng, legal_plies, minimax, search_best_ply,
    SearchOutcome, SearchStats,
};
pub use types::{Board, CaptureSequence, Cell, Move, PieceMoves, Player, Ply, Position};
