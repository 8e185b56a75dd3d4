//! # Game State Module
//!
//! The move coordinator: owns the grid and the random generator for one game
//! and sequences a player turn as slide, then spawn, then terminal check.

use crate::game::{is_terminal, slide, spawn, Direction, Grid};
use crate::{config, SlideError, SlideResult};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Result of one accepted player turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The grid changed and a tile was spawned; play continues
    Applied,
    /// Nothing moved or merged; the grid is unchanged and no tile was spawned
    Pointless,
    /// The grid changed and a tile was spawned, but no further move is possible
    Lost,
}

/// Where the coordinator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the next direction
    AwaitingInput,
    /// No move remains; the game accepts no further input
    Lost,
}

/// Turn bookkeeping for a single game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Moves that changed the grid
    pub moves_applied: u64,
    /// Moves rejected as pointless
    pub pointless_moves: u64,
    /// Tiles spawned, including the initial ones
    pub tiles_spawned: u64,
}

/// A single game: the grid, its random source and its phase.
///
/// The generator is injected so that tests and replays can use a seeded
/// source. [`Game::with_seed`] covers the common case.
///
/// # Examples
///
/// ```
/// use slide2048::{Direction, Game, GamePhase};
///
/// let mut game = Game::with_seed(4, 12345).unwrap();
/// assert_eq!(game.phase(), GamePhase::AwaitingInput);
/// assert_eq!(game.grid().empty_count(), 14);
///
/// game.apply_move(Direction::Up).unwrap();
/// assert_eq!(game.grid().empty_count(), game.grid().count_empty_cells());
/// ```
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    grid: Grid,
    rng: R,
    phase: GamePhase,
    statistics: GameStatistics,
}

impl Game<StdRng> {
    /// Creates a new game whose tiles are drawn from a generator seeded with `seed`.
    pub fn with_seed(size: usize, seed: u64) -> SlideResult<Self> {
        Self::new(size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Creates a new `size`×`size` game with the initial tiles already spawned.
    ///
    /// Fails with [`SlideError::InvalidSize`] when `size` is below
    /// [`config::MIN_GRID_SIZE`].
    pub fn new(size: usize, rng: R) -> SlideResult<Self> {
        let mut game = Self::from_grid(Grid::new(size)?, rng);
        for _ in 0..config::INITIAL_TILES {
            spawn(&mut game.grid, &mut game.rng)?;
            game.statistics.tiles_spawned += 1;
        }

        info!("Started a new {}x{} game", size, size);
        Ok(game)
    }

    /// Wraps an existing grid without spawning anything.
    ///
    /// The phase starts at [`GamePhase::AwaitingInput`] even for a grid that is
    /// already stuck: a loss is only reported by the move that fills the grid.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            rng,
            phase: GamePhase::AwaitingInput,
            statistics: GameStatistics::default(),
        }
    }

    /// Read-only view of the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_lost(&self) -> bool {
        self.phase == GamePhase::Lost
    }

    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }

    /// Plays one turn in `direction`.
    ///
    /// A pointless move leaves the grid untouched and spawns nothing. Otherwise
    /// a tile is spawned and the grid is checked for a terminal state, in which
    /// case the game moves to [`GamePhase::Lost`]. Once lost, every further
    /// call fails with [`SlideError::GameOver`].
    pub fn apply_move(&mut self, direction: Direction) -> SlideResult<MoveOutcome> {
        if self.is_lost() {
            return Err(SlideError::GameOver);
        }

        if !slide(&mut self.grid, direction) {
            self.statistics.pointless_moves += 1;
            debug!("Move {} was pointless", direction);
            return Ok(MoveOutcome::Pointless);
        }
        self.statistics.moves_applied += 1;

        // A changing slide either moved a tile into an empty cell or merged
        // two tiles, so at least one cell is empty here.
        spawn(&mut self.grid, &mut self.rng)?;
        self.statistics.tiles_spawned += 1;

        if is_terminal(&self.grid) {
            self.phase = GamePhase::Lost;
            info!(
                "Game lost after {} moves, largest tile {}",
                self.statistics.moves_applied,
                self.grid.max_tile()
            );
            return Ok(MoveOutcome::Lost);
        }

        debug!(
            "Applied move {}, {} empty cells remain",
            direction,
            self.grid.empty_count()
        );
        Ok(MoveOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn seeded(rows: Vec<Vec<u32>>) -> Game {
        Game::from_grid(Grid::from_rows(rows).unwrap(), StdRng::seed_from_u64(99))
    }

    #[test]
    fn test_new_game_spawns_two_tiles() {
        let game = Game::with_seed(4, 12345).unwrap();
        assert_eq!(game.grid().size(), 4);
        assert_eq!(game.grid().empty_count(), 14);
        assert_eq!(game.grid().count_empty_cells(), 14);
        assert_eq!(game.statistics().tiles_spawned, 2);
        assert_eq!(game.phase(), GamePhase::AwaitingInput);

        for value in game.grid().rows().iter().flatten() {
            assert!(matches!(value, 0 | 2 | 4));
        }
    }

    #[test]
    fn test_new_game_rejects_small_size() {
        assert!(matches!(
            Game::with_seed(1, 0),
            Err(SlideError::InvalidSize { size: 1 })
        ));
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let mut a = Game::with_seed(4, 777).unwrap();
        let mut b = Game::with_seed(4, 777).unwrap();
        assert_eq!(a.grid(), b.grid());

        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            assert_eq!(a.apply_move(direction).unwrap(), b.apply_move(direction).unwrap());
            assert_eq!(a.grid(), b.grid());
        }
    }

    #[test]
    fn test_merge_move_keeps_empty_count() {
        let mut game = seeded(vec![
            vec![2, 2, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        let before = game.grid().empty_count();

        let outcome = game.apply_move(Direction::Left).unwrap();
        assert_eq!(outcome, MoveOutcome::Applied);
        assert_eq!(game.grid().empty_count(), before);

        let tiles: Vec<u32> = game
            .grid()
            .rows()
            .iter()
            .flatten()
            .copied()
            .filter(|&v| v != 0)
            .collect();
        assert_eq!(tiles.len(), 2);
        assert_eq!(game.grid().get(Position::new(0, 0)), Some(4));
    }

    #[test]
    fn test_pointless_move_spawns_nothing() {
        let mut game = seeded(vec![vec![4, 0], vec![0, 0]]);
        let before = game.grid().clone();

        assert_eq!(game.apply_move(Direction::Left).unwrap(), MoveOutcome::Pointless);
        assert_eq!(game.apply_move(Direction::Up).unwrap(), MoveOutcome::Pointless);
        assert_eq!(game.grid(), &before);
        assert_eq!(game.statistics().pointless_moves, 2);
        assert_eq!(game.statistics().tiles_spawned, 0);
        assert_eq!(game.phase(), GamePhase::AwaitingInput);
    }

    #[test]
    fn test_stuck_grid_reports_pointless_not_lost() {
        let mut game = seeded(vec![vec![2, 4], vec![4, 2]]);
        for direction in Direction::all() {
            assert_eq!(game.apply_move(direction).unwrap(), MoveOutcome::Pointless);
        }
        assert_eq!(game.grid().empty_count(), 0);
        assert_eq!(game.phase(), GamePhase::AwaitingInput);
    }

    #[test]
    fn test_filling_move_loses_and_locks() {
        // Sliding right fills (0,0). Whatever lands there, 2 or 4, the grid
        // has no adjacent pair afterwards.
        let mut game = seeded(vec![
            vec![8, 16, 0],
            vec![16, 32, 64],
            vec![32, 64, 128],
        ]);
        // Row 0 becomes [_, 8, 16] with the spawn at (0,0).
        let outcome = game.apply_move(Direction::Right).unwrap();
        assert_eq!(outcome, MoveOutcome::Lost);
        assert!(game.is_lost());
        assert_eq!(game.grid().empty_count(), 0);
        assert!(matches!(
            game.apply_move(Direction::Left),
            Err(SlideError::GameOver)
        ));
    }
}
