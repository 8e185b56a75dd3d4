//! # Slide2048
//!
//! A sliding-tile merge game played on an N×N grid from the terminal.
//!
//! ## Architecture Overview
//!
//! The crate separates a small, well-tested engine from a thin terminal shell:
//!
//! - **Game**: grid state, the directional slide-merge transform, the tile
//!   spawner, terminal-state detection and the move coordinator
//! - **Input**: token reading and command parsing for the terminal session
//! - **Rendering**: plain-text display of the grid and session messages
//! - **Scenes**: the interactive session loop tying input, game and display together
//!
//! The engine never touches stdin/stdout and never reaches for a global random
//! source. Randomness is injected as any [`rand::Rng`], so seeded games are
//! fully reproducible.
//!
//! ```
//! use slide2048::{Direction, Game, MoveOutcome};
//!
//! let mut game = Game::with_seed(4, 7).unwrap();
//! assert_eq!(game.grid().empty_count(), 14);
//!
//! let outcome = game.apply_move(Direction::Left).unwrap();
//! assert!(matches!(
//!     outcome,
//!     MoveOutcome::Applied | MoveOutcome::Pointless | MoveOutcome::Lost
//! ));
//! ```

pub mod game;
pub mod input;
pub mod rendering;
pub mod scenes;

// Core module re-exports
pub use game::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;

/// Core error type for the slide2048 engine and shell.
///
/// Game events such as a pointless move or a lost game are *not* errors; they
/// are reported through [`MoveOutcome`]. The variants below signal contract
/// violations by the caller or failures at the I/O boundary.
#[derive(thiserror::Error, Debug)]
pub enum SlideError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Grid size below the playable minimum
    #[error("Invalid grid size {size}: must be at least {min}", min = config::MIN_GRID_SIZE)]
    InvalidSize { size: usize },

    /// Cell holds a value that is neither empty nor a power of two
    #[error("Invalid tile {value} at ({row}, {col}): must be 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: u32 },

    /// Rows of differing length, or row count differing from row length
    #[error("Grid must be square: row {row} has {len} cells, expected {expected}")]
    NonSquareGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Spawn requested on a full grid
    #[error("Cannot spawn a tile: the grid has no empty cells")]
    NoEmptyCells,

    /// Move requested after the game was lost
    #[error("The game is over; no further moves are accepted")]
    GameOver,

    /// Malformed input at the shell boundary
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type used throughout the slide2048 codebase.
pub type SlideResult<T> = Result<T, SlideError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Smallest grid side length that can be played
    pub const MIN_GRID_SIZE: usize = 2;

    /// Grid side length used when none is requested
    pub const DEFAULT_GRID_SIZE: usize = 4;

    /// Number of tiles placed on a fresh grid
    pub const INITIAL_TILES: usize = 2;

    /// Probability that a spawned tile is a 2 rather than a 4
    pub const SPAWN_TWO_PROBABILITY: f64 = 0.75;
}
