//! # Draughts Engine Core Types
//!
//! ## Overview
//!
//! This module defines the value types the whole engine operates on. Everything here is plain
//! data: boards, cells, positions and moves are all `Copy` (sequences are cheap `Vec`s), and
//! no type carries hidden state. Every board transition produces a *new* [`Board`], which is
//! what keeps simulated positions inside the search from leaking into sibling branches.
//!
//! ## Board Representation
//!
//! [`Board`] wraps an `8x8` array of [`Cell`] values (64 bytes total). Copying a board is a
//! single `memcpy`, so the search simply copies on every transition instead of tracking undo
//! information.
//!
//! ## Positions Are Signed
//!
//! [`Position`] stores `i8` coordinates. Scanning rays step past the edge of the board, and a
//! caller may hand the engine a move pointing anywhere; signed coordinates let both cases be
//! represented and rejected by [`Move::validate`] instead of wrapping silently.
//!
//! ## Moves, Sequences and Plies
//!
//! - [`Move`] is a single step: a plain move (`captured == None`) or one jump.
//! - [`CaptureSequence`] is a validated chain of jumps made by the same piece.
//! - [`Ply`] is the unit the search iterates over: either one quiet move or one full capture
//!   sequence. [`Ply::moves`] exposes both shapes uniformly as a non-empty slice.

use crate::constants::*;
use crate::error::{DraughtsError, DraughtsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Content of one board square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    WhiteMan,
    BlackMan,
    WhiteKing,
    BlackKing,
}

impl Cell {
    /// Player owning the piece on this cell, `None` for an empty cell
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::WhiteMan | Cell::WhiteKing => Some(Player::White),
            Cell::BlackMan | Cell::BlackKing => Some(Player::Black),
        }
    }

    /// The king a man of this kind promotes to (kings and empty cells are unchanged)
    pub fn crowned(self) -> Cell {
        match self {
            Cell::WhiteMan => Cell::WhiteKing,
            Cell::BlackMan => Cell::BlackKing,
            other => other,
        }
    }

    /// Character used by the board text format
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::WhiteMan => 'w',
            Cell::BlackMan => 'b',
            Cell::WhiteKing => 'W',
            Cell::BlackKing => 'B',
        }
    }

    /// Inverse of [`Cell::symbol`]
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'w' => Some(Cell::WhiteMan),
            'b' => Some(Cell::BlackMan),
            'W' => Some(Cell::WhiteKing),
            'B' => Some(Cell::BlackKing),
            _ => None,
        }
    }
}

/// Side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// White is the maximizing side of the minimax search
    pub fn is_maximizing(self) -> bool {
        self == Player::White
    }

    /// Row on which this player's men are crowned
    pub fn promotion_row(self) -> i8 {
        match self {
            Player::White => WHITE_PROMOTION_ROW,
            Player::Black => BLACK_PROMOTION_ROW,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Player {
    type Err = DraughtsError;

    /// Parse `white` or `black` (case-insensitive)
    fn from_str(s: &str) -> DraughtsResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Player::White),
            "black" => Ok(Player::Black),
            _ => Err(DraughtsError::UnknownPlayer(s.to_string())),
        }
    }
}

/// Board coordinate, `(0, 0)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        (0..=LAST_INDEX).contains(&self.row) && (0..=LAST_INDEX).contains(&self.col)
    }

    /// Position shifted by `(d_row, d_col)`; may be off the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Position {
        Position {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Array indices for on-board positions
    #[inline]
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single step: plain move or one jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<Position>,
}

impl Move {
    /// Plain (non-capturing) move
    pub fn new(from: Position, to: Position) -> Self {
        Move {
            from,
            to,
            captured: None,
        }
    }

    /// Jump removing the piece on `captured`
    pub fn capture(from: Position, to: Position, captured: Position) -> Self {
        Move {
            from,
            to,
            captured: Some(captured),
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Structural check: every coordinate on the board and `from != to`
    ///
    /// This says nothing about legality on a given board; see
    /// [`crate::api::is_legal_move`] for that.
    pub fn validate(&self) -> DraughtsResult<()> {
        for position in [Some(self.from), Some(self.to), self.captured]
            .into_iter()
            .flatten()
        {
            if !position.is_on_board() {
                return Err(DraughtsError::OffBoard { position });
            }
        }

        if self.from == self.to {
            return Err(DraughtsError::InvalidMove {
                from: self.from,
                to: self.to,
            });
        }

        Ok(())
    }

    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured {
            Some(captured) => write!(f, "{} -> {} x {}", self.from, self.to, captured),
            None => write!(f, "{} -> {}", self.from, self.to),
        }
    }
}

/// Moves available to one piece (or one player), split by kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceMoves {
    /// Plain moves
    pub moves: Vec<Move>,
    /// Single jumps
    pub captures: Vec<Move>,
}

impl PieceMoves {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.captures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len() + self.captures.len()
    }

    /// Append another piece's moves, preserving order
    pub fn extend(&mut self, other: PieceMoves) {
        self.moves.extend(other.moves);
        self.captures.extend(other.captures);
    }
}

/// Chain of jumps made by a single piece
///
/// Invariants (checked by [`CaptureSequence::new`]):
/// - at least one move
/// - every move is a well-formed capture
/// - each jump starts where the previous one landed
///
/// Deserialization goes through the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Move>")]
pub struct CaptureSequence(Vec<Move>);

impl CaptureSequence {
    pub fn new(moves: Vec<Move>) -> DraughtsResult<Self> {
        if moves.is_empty() {
            return Err(DraughtsError::EmptySequence);
        }

        for (index, mv) in moves.iter().enumerate() {
            mv.validate()?;
            if !mv.is_capture() {
                return Err(DraughtsError::NotACapture { index });
            }
            if index > 0 && moves[index - 1].to != mv.from {
                return Err(DraughtsError::BrokenChain { index });
            }
        }

        Ok(CaptureSequence(moves))
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    /// Number of pieces captured
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the sequence holds no jump (never true for a constructed sequence)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Move {
        self.0[0]
    }

    pub fn landing(&self) -> Position {
        self.0[self.0.len() - 1].to
    }

    /// Squares emptied by this sequence, in jump order
    pub fn captured(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().filter_map(|mv| mv.captured)
    }
}

/// One legal unit of play: a quiet move or a full capture sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ply {
    Quiet(Move),
    Capture(CaptureSequence),
}

impl Ply {
    /// Steps of this ply in playing order (never empty)
    pub fn moves(&self) -> &[Move] {
        match self {
            Ply::Quiet(mv) => std::slice::from_ref(mv),
            Ply::Capture(sequence) => sequence.moves(),
        }
    }

    pub fn first_move(&self) -> Move {
        self.moves()[0]
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, Ply::Capture(_))
    }
}

impl TryFrom<Vec<Move>> for CaptureSequence {
    type Error = DraughtsError;

    fn try_from(moves: Vec<Move>) -> DraughtsResult<Self> {
        CaptureSequence::new(moves)
    }
}

impl From<CaptureSequence> for Ply {
    fn from(sequence: CaptureSequence) -> Self {
        Ply::Capture(sequence)
    }
}

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, mv) in self.moves().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", mv)?;
        }
        Ok(())
    }
}

/// 8x8 grid of cells, indexed `[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}
