//! Board utilities and helper functions
//!
//! Provides fundamental board operations used throughout the engine:
//! - Piece identity predicates
//! - Square access with bounds checking
//! - Opening position and the plain-text board format

use super::constants::*;
use super::error::{DraughtsError, DraughtsResult};
use super::types::*;
use std::fmt;
use std::str::FromStr;

/// Check if a cell holds a man or king of `player`
#[inline]
pub fn is_player_piece(cell: Cell, player: Player) -> bool {
    cell.owner() == Some(player)
}

/// Check if a cell holds a king of either colour
#[inline]
pub fn is_king(cell: Cell) -> bool {
    matches!(cell, Cell::WhiteKing | Cell::BlackKing)
}

impl Board {
    /// Board without any piece
    pub fn empty() -> Self {
        Board::default()
    }

    /// Standard opening position: twelve men per side on the dark squares
    pub fn initial() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in cells.iter_mut().enumerate() {
            let row = row as i8;
            let cell = if row < SETUP_ROWS {
                Cell::BlackMan
            } else if row > LAST_INDEX - SETUP_ROWS {
                Cell::WhiteMan
            } else {
                continue;
            };
            for (col, square) in line.iter_mut().enumerate() {
                if (row as usize + col) % 2 == 1 {
                    *square = cell;
                }
            }
        }
        Board { cells }
    }

    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Cell at `pos`, `None` when off the board
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        pos.index().map(|(row, col)| self.cells[row][col])
    }

    /// Check if `pos` is on the board and empty
    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Copy of this board with `cell` placed on `pos` (off-board positions are ignored)
    #[must_use]
    pub fn with_piece(mut self, pos: Position, cell: Cell) -> Self {
        self.set(pos, cell);
        self
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if let Some((row, col)) = pos.index() {
            self.cells[row][col] = cell;
        }
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter(|(_, cell)| **cell != Cell::Empty)
                .map(move |(col, cell)| (Position::new(row as i8, col as i8), *cell))
        })
    }

    /// Number of pieces (men and kings) owned by `player`
    pub fn count(&self, player: Player) -> usize {
        self.pieces()
            .filter(|(_, cell)| is_player_piece(*cell, player))
            .count()
    }
}

impl FromStr for Board {
    type Err = DraughtsError;

    /// Parse eight lines of eight symbols (`.` `w` `b` `W` `B`)
    ///
    /// Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> DraughtsResult<Self> {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mut row = 0usize;

        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let line_no = line_no + 1;
            if row == BOARD_SIZE {
                return Err(DraughtsError::ParseBoard {
                    line: line_no,
                    message: format!("more than {} rows", BOARD_SIZE),
                });
            }

            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != BOARD_SIZE {
                return Err(DraughtsError::ParseBoard {
                    line: line_no,
                    message: format!("expected {} squares, found {}", BOARD_SIZE, symbols.len()),
                });
            }

            for (col, symbol) in symbols.into_iter().enumerate() {
                cells[row][col] =
                    Cell::from_symbol(symbol).ok_or_else(|| DraughtsError::ParseBoard {
                        line: line_no,
                        message: format!("unknown square symbol '{}'", symbol),
                    })?;
            }
            row += 1;
        }

        if row != BOARD_SIZE {
            return Err(DraughtsError::ParseBoard {
                line: s.lines().count(),
                message: format!("expected {} rows, found {}", BOARD_SIZE, row),
            });
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            for cell in line {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
