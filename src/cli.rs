//! Argument parsing and the single engine request the binary performs

use anyhow::{Context, Result};
use clap::Parser;
use draughts_engine::{reply_ply, Board, Difficulty, Player, Ply, SearchConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Ask the draughts engine for a move.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Board snapshot. `.json` files hold a serialized board; anything else
    /// is read as eight lines of `.`, `w`, `b`, `W`, `B`. Defaults to the
    /// starting position.
    #[arg(long, value_name = "PATH")]
    pub board: Option<PathBuf>,

    /// Side to move: `white` or `black`.
    #[arg(long)]
    pub player: Player,

    /// Search depth in plies. Overrides `--difficulty`.
    #[arg(long)]
    pub depth: Option<u32>,

    /// Named strength level: `easy`, `medium` or `hard`.
    #[arg(long, default_value = "medium")]
    pub difficulty: Difficulty,

    /// Seed for tie-breaking between equally scored moves.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Print the whole winning ply instead of its first move.
    #[arg(long, default_value_t = false)]
    pub ply: bool,
}

impl Cli {
    /// Search configuration; an explicit depth wins over the difficulty
    pub fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::from(self.difficulty);
        if let Some(depth) = self.depth {
            config = config.with_depth(depth);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

/// Load the board named by `path`, or the starting position
pub fn load_board(path: Option<&Path>) -> Result<Board> {
    let Some(path) = path else {
        return Ok(Board::initial());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON board in {}", path.display()))
    } else {
        text.parse::<Board>()
            .with_context(|| format!("invalid board in {}", path.display()))
    }
}

/// Run the request and render its output line
pub fn run(args: &Cli) -> Result<String> {
    let board = load_board(args.board.as_deref())?;
    let player = args.player;
    let config = args.search_config();
    info!("{} to move, depth {}", player, config.depth);

    let outcome = reply_ply(&board, player, &config);
    render(outcome.map(|o| o.ply).as_ref(), args.json, args.ply)
}

fn render(ply: Option<&Ply>, json: bool, whole_ply: bool) -> Result<String> {
    let Some(ply) = ply else {
        return Ok(if json { "null".to_string() } else { "no legal move".to_string() });
    };

    if json {
        let text = if whole_ply {
            serde_json::to_string(ply)
        } else {
            serde_json::to_string(&ply.first_move())
        };
        return text.context("failed to serialize move");
    }

    Ok(if whole_ply {
        ply.to_string()
    } else {
        ply.first_move().to_string()
    })
}
