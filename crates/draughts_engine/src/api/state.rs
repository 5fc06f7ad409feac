//! Game status queries and engine replies

use crate::config::SearchConfig;
use crate::search::{legal_plies, search_best_ply, SearchOutcome};
use crate::types::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a position from the point of view of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The side to move has at least one legal ply
    Playing,
    /// The side to move cannot move; the named player has won
    Won(Player),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => f.write_str("playing"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
        }
    }
}

/// Get the game status with `player` to move
///
/// A player without pieces, or whose pieces are all blocked, has lost.
pub fn game_status(board: &Board, player: Player) -> GameStatus {
    if legal_plies(board, player).is_empty() {
        GameStatus::Won(player.opponent())
    } else {
        GameStatus::Playing
    }
}

/// Run the engine for `player` and return the whole winning ply
///
/// Uses a seeded RNG when `config.seed` is set, so the same position and
/// config always produce the same result.
pub fn reply_ply(board: &Board, player: Player, config: &SearchConfig) -> Option<SearchOutcome> {
    match config.seed {
        Some(seed) => {
            search_best_ply(board, player, config.depth, &mut StdRng::seed_from_u64(seed))
        }
        None => search_best_ply(board, player, config.depth, &mut rand::rng()),
    }
}

/// Get the engine's move for `player` (first step of the winning ply)
pub fn reply(board: &Board, player: Player, config: &SearchConfig) -> Option<Move> {
    reply_ply(board, player, config).map(|outcome| outcome.ply.first_move())
}
