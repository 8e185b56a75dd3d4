//! # Tile Spawner
//!
//! Places a new tile on a uniformly chosen empty cell.

use crate::game::{Grid, Position};
use crate::{config, SlideError, SlideResult};
use log::debug;
use rand::Rng;

/// A tile written by [`spawn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnedTile {
    pub position: Position,
    pub value: u32,
}

/// Draws the value of a new tile: 2 with probability
/// [`config::SPAWN_TWO_PROBABILITY`], otherwise 4.
pub fn draw_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_bool(config::SPAWN_TWO_PROBABILITY) {
        2
    } else {
        4
    }
}

/// Spawns a 2 or 4 on a random empty cell of `grid`.
///
/// The empty cells are numbered in row-major scan order and one of them is
/// drawn uniformly. Calling this on a full grid is a caller bug and yields
/// [`SlideError::NoEmptyCells`] without touching the grid.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use slide2048::{spawn, Grid};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let mut grid = Grid::new(3).unwrap();
/// let tile = spawn(&mut grid, &mut rng).unwrap();
/// assert!(tile.value == 2 || tile.value == 4);
/// assert_eq!(grid.empty_count(), 8);
/// ```
pub fn spawn<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> SlideResult<SpawnedTile> {
    let empty_count = grid.empty_count();
    if empty_count == 0 {
        return Err(SlideError::NoEmptyCells);
    }

    let index = rng.gen_range(0..empty_count);
    let position = grid
        .empty_positions()
        .get(index)
        .copied()
        .ok_or(SlideError::NoEmptyCells)?;
    let value = draw_tile_value(rng);

    grid.set(position, value);
    debug!("filled {} with {}", position, value);

    Ok(SpawnedTile { position, value })
}
