//! Public API for the draughts engine
//!
//! High-level entry points for a front end: legality checks, game status and
//! the engine's reply driven by a [`SearchConfig`](crate::config::SearchConfig).
//!
//! ## Module Organization
//!
//! - `moves` - Move legality (is_legal_move)
//! - `state` - Game status and engine reply (game_status, reply, reply_ply)

mod moves;
mod state;

pub use moves::is_legal_move;
pub use state::{game_status, reply, reply_ply, GameStatus};
