//! # Slide-Merge Transform
//!
//! One line algorithm ([`slide_line`]) serves all four directions. A direction
//! only decides how a line is read out of the grid: which axis it runs along
//! and which end is the target edge. Offset 0 is always the target edge.

use crate::game::{merged_value, Direction, Grid, Position};

/// What happened to a single line during a slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineShift {
    /// Whether any cell value in the line changed
    pub changed: bool,
    /// Number of merges performed
    pub merges: usize,
}

/// Compacts and merges one line toward index 0.
///
/// Non-zero cells are first packed toward the front keeping their order. The
/// packed line is then scanned from the front: two adjacent equal tiles become
/// one tile of double value, and everything behind them moves up one place.
/// The scan continues after the merged cell, so a tile produced by a merge is
/// never merged again in the same call. A pair whose doubled value would not
/// fit in a cell is left unmerged.
///
/// # Examples
///
/// ```
/// use slide2048::slide_line;
///
/// let mut line = [2, 2, 2, 2];
/// let shift = slide_line(&mut line);
/// assert_eq!(line, [4, 4, 0, 0]);
/// assert!(shift.changed);
/// assert_eq!(shift.merges, 2);
/// ```
pub fn slide_line(line: &mut [u32]) -> LineShift {
    let mut shift = LineShift::default();
    let len = line.len();

    // Compaction
    let mut write = 0;
    for read in 0..len {
        if line[read] != 0 {
            if read != write {
                line[write] = line[read];
                line[read] = 0;
                shift.changed = true;
            }
            write += 1;
        }
    }

    // Merge
    let mut i = 0;
    while i + 1 < len && line[i] != 0 {
        if let Some(doubled) = merged_value(line[i], line[i + 1]) {
            line[i] = doubled;
            line.copy_within(i + 2.., i + 1);
            line[len - 1] = 0;
            shift.merges += 1;
            shift.changed = true;
        }
        i += 1;
    }

    shift
}

/// Maps (line, offset from target edge) to a grid position for `direction`.
fn line_position(direction: Direction, line: usize, offset: usize, size: usize) -> Position {
    match direction {
        Direction::Left => Position::new(line, offset),
        Direction::Right => Position::new(line, size - 1 - offset),
        Direction::Up => Position::new(offset, line),
        Direction::Down => Position::new(size - 1 - offset, line),
    }
}

/// Slides every line of `grid` toward the edge named by `direction`.
///
/// Returns whether any cell changed. When nothing changes the grid is left
/// exactly as it was, which is how callers detect a pointless move.
pub fn slide(grid: &mut Grid, direction: Direction) -> bool {
    let size = grid.size();
    let mut buffer = vec![0u32; size];
    let mut changed = false;

    for line in 0..size {
        for (offset, cell) in buffer.iter_mut().enumerate() {
            let pos = line_position(direction, line, offset, size);
            *cell = grid.rows()[pos.row][pos.col];
        }

        let shift = slide_line(&mut buffer);
        if !shift.changed {
            continue;
        }
        changed = true;

        for (offset, &value) in buffer.iter().enumerate() {
            grid.set(line_position(direction, line, offset, size), value);
        }
    }

    debug_assert_eq!(grid.empty_count(), grid.count_empty_cells());
    changed
}

/// Pure variant of [`slide`]: returns the slid copy and whether it changed.
///
/// The input grid is never touched, which makes this the building block for
/// simulating a move without committing it.
pub fn slid(grid: &Grid, direction: Direction) -> (Grid, bool) {
    let mut next = grid.clone();
    let changed = slide(&mut next, direction);
    (next, changed)
}
