//! Engine strength settings
//!
//! Strength is controlled by search depth only; there is no clock.
//!
//! | Difficulty | Depth | Strength                          |
//! |------------|-------|-----------------------------------|
//! | Easy       | 2     | Sees immediate captures           |
//! | Medium     | 4     | Avoids simple two-move shots      |
//! | Hard       | 6     | Noticeably slower, plays combos   |
//!
//! A [`SearchConfig`] may also carry a seed for the candidate shuffle so that
//! repeated runs pick the same move among equally scored candidates.

use crate::error::{DraughtsError, DraughtsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named strength levels mapped to fixed search depths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Depth 2: the engine looks at its own move and the reply
    Easy,
    /// Depth 4
    #[default]
    Medium,
    /// Depth 6
    Hard,
}

impl Difficulty {
    /// Search depth in plies
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    /// Human-readable label
    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy (depth 2)",
            Difficulty::Medium => "Medium (depth 4)",
            Difficulty::Hard => "Hard (depth 6)",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for Difficulty {
    type Err = DraughtsError;

    /// Parse `easy`, `medium` or `hard` (case-insensitive)
    fn from_str(s: &str) -> DraughtsResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DraughtsError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Parameters for one engine reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to search (clamped to [`crate::constants::MAX_SEARCH_DEPTH`])
    pub depth: u32,
    /// Seed for the candidate shuffle; `None` uses the thread RNG
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn new(depth: u32) -> Self {
        Self { depth, seed: None }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Difficulty::default().into()
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self::new(difficulty.depth())
    }
}
