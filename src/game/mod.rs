//! # Game Module
//!
//! Core grid engine for the sliding-tile merge game.
//!
//! This module contains the fundamental building blocks of a game:
//! - Grid state with empty-cell bookkeeping
//! - The single slide-merge transform shared by all four directions
//! - Random tile spawning with an injected generator
//! - Terminal-state detection
//! - The move coordinator that sequences one player turn

pub mod grid;
pub mod slide;
pub mod spawn;
pub mod state;
pub mod terminal;

pub use grid::*;
pub use slide::*;
pub use spawn::*;
pub use state::*;
pub use terminal::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the grid, counted from the top-left corner.
///
/// # Examples
///
/// ```
/// use slide2048::Position;
///
/// let pos = Position::new(1, 3);
/// assert_eq!(pos.row, 1);
/// assert_eq!(pos.col, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Directions in which the tiles can be slid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all 4 directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// True when tiles travel along columns.
    ///
    /// # Examples
    ///
    /// ```
    /// use slide2048::Direction;
    ///
    /// assert!(Direction::Up.is_vertical());
    /// assert!(!Direction::Right.is_vertical());
    /// ```
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Human-readable name, used in logs and messages.
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
