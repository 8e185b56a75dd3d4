//! # Grid State
//!
//! The N×N cell matrix together with its running count of empty cells.
//!
//! Every write goes through [`Grid::set`], which adjusts the empty count from
//! the old and new cell values. That keeps the count equal to the number of
//! zero cells after every compaction, merge and spawn without any ad hoc
//! arithmetic at the call sites.

use crate::game::Position;
use crate::{config, SlideError, SlideResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns true if `value` may legally appear in a cell.
///
/// A cell is either empty (0) or a tile reachable by repeated doubling from 2.
pub fn is_valid_cell(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Value of the tile formed by merging `a` and `b`, if they can merge.
///
/// Only equal non-zero tiles merge, and never when the doubled value would
/// not fit in a cell. Two tiles of the largest representable value stay put.
///
/// # Examples
///
/// ```
/// use slide2048::merged_value;
///
/// assert_eq!(merged_value(8, 8), Some(16));
/// assert_eq!(merged_value(8, 4), None);
/// assert_eq!(merged_value(1 << 31, 1 << 31), None);
/// ```
pub fn merged_value(a: u32, b: u32) -> Option<u32> {
    if a == 0 || a != b {
        return None;
    }
    a.checked_mul(2)
}

/// Square grid of cells where 0 denotes an empty cell.
///
/// Serializes as a plain nested list of rows. Deserialization runs the same
/// validation as [`Grid::from_rows`], so a malformed grid can never be built
/// from external data.
///
/// # Examples
///
/// ```
/// use slide2048::{Grid, Position};
///
/// let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
/// assert_eq!(grid.size(), 2);
/// assert_eq!(grid.empty_count(), 2);
/// assert_eq!(grid.get(Position::new(1, 1)), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Grid {
    cells: Vec<Vec<u32>>,
    empty_count: usize,
}

impl Grid {
    /// Creates an empty grid of the given side length.
    ///
    /// Fails with [`SlideError::InvalidSize`] when `size` is below
    /// [`config::MIN_GRID_SIZE`].
    pub fn new(size: usize) -> SlideResult<Self> {
        if size < config::MIN_GRID_SIZE {
            return Err(SlideError::InvalidSize { size });
        }

        Ok(Self {
            cells: vec![vec![0; size]; size],
            empty_count: size * size,
        })
    }

    /// Builds a grid from explicit rows, validating shape and cell values.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> SlideResult<Self> {
        let size = rows.len();
        if size < config::MIN_GRID_SIZE {
            return Err(SlideError::InvalidSize { size });
        }

        let mut empty_count = 0;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(SlideError::NonSquareGrid {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if !is_valid_cell(value) {
                    return Err(SlideError::InvalidTile { row, col, value });
                }
                if value == 0 {
                    empty_count += 1;
                }
            }
        }

        Ok(Self {
            cells: rows,
            empty_count,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Value at `pos`, or None when `pos` lies outside the grid.
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Read-only view of the rows.
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.cells
    }

    /// Tracked number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// Counts empty cells by scanning the grid.
    ///
    /// Always equal to [`Grid::empty_count`]; exposed so tests and debug
    /// assertions can check the bookkeeping against the cells themselves.
    pub fn count_empty_cells(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&value| value == 0)
            .count()
    }

    /// Empty cells in row-major scan order.
    pub fn empty_positions(&self) -> Vec<Position> {
        let mut positions = Vec::with_capacity(self.empty_count);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value == 0 {
                    positions.push(Position::new(row, col));
                }
            }
        }
        positions
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.empty_count == 0
    }

    /// Largest tile on the grid, 0 for an empty grid.
    pub fn max_tile(&self) -> u32 {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// True when two orthogonally adjacent cells hold tiles that can merge.
    pub fn has_adjacent_equal_pair(&self) -> bool {
        let size = self.size();
        for row in 0..size {
            for col in 0..size {
                let value = self.cells[row][col];
                if col + 1 < size && merged_value(value, self.cells[row][col + 1]).is_some() {
                    return true;
                }
                if row + 1 < size && merged_value(value, self.cells[row + 1][col]).is_some() {
                    return true;
                }
            }
        }
        false
    }

    /// Writes `value` at `pos`, keeping the empty count in step.
    ///
    /// Callers inside the engine guarantee `pos` is in range and `value` is a
    /// valid cell.
    pub(crate) fn set(&mut self, pos: Position, value: u32) {
        debug_assert!(is_valid_cell(value), "invalid cell value {}", value);
        let cell = &mut self.cells[pos.row][pos.col];
        match (*cell == 0, value == 0) {
            (true, false) => self.empty_count -= 1,
            (false, true) => self.empty_count += 1,
            _ => {}
        }
        *cell = value;
    }
}

impl TryFrom<Vec<Vec<u32>>> for Grid {
    type Error = SlideError;

    fn try_from(rows: Vec<Vec<u32>>) -> SlideResult<Self> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u32>> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", value)?;
            }
        }
        Ok(())
    }
}
