//! # Terminal-State Detection
//!
//! A grid is terminal when no slide in any direction would change it. Two
//! formulations are provided and must agree on every grid:
//!
//! - [`is_terminal`]: with the grid full, look for an orthogonally adjacent
//!   equal pair. This is what the coordinator uses.
//! - [`is_terminal_by_simulation`]: slide a private copy in all four
//!   directions and check that none of them changes anything.
//!
//! Neither function mutates the grid it is given.

use crate::game::{slid, Direction, Grid};

/// Returns true when no move can change `grid`.
///
/// # Examples
///
/// ```
/// use slide2048::{is_terminal, Grid};
///
/// let stuck = Grid::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
/// assert!(is_terminal(&stuck));
///
/// let mergeable = Grid::from_rows(vec![vec![2, 2], vec![4, 8]]).unwrap();
/// assert!(!is_terminal(&mergeable));
/// ```
pub fn is_terminal(grid: &Grid) -> bool {
    if grid.empty_count() > 0 {
        return false;
    }
    !grid.has_adjacent_equal_pair()
}

/// Returns true when sliding a copy of `grid` in every direction changes nothing.
pub fn is_terminal_by_simulation(grid: &Grid) -> bool {
    if grid.empty_count() > 0 {
        return false;
    }
    legal_moves(grid).is_empty()
}

/// Whether sliding `grid` toward `direction` would change it.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    let (_, changed) = slid(grid, direction);
    changed
}

/// Directions that would change `grid`, in [`Direction::all`] order.
pub fn legal_moves(grid: &Grid) -> Vec<Direction> {
    Direction::all()
        .into_iter()
        .filter(|&direction| can_move(grid, direction))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(size: usize) -> Grid {
        let rows = (0..size)
            .map(|r| {
                (0..size)
                    .map(|c| if (r + c) % 2 == 0 { 2 } else { 4 })
                    .collect()
            })
            .collect();
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_grid_with_empty_cell_is_not_terminal() {
        let grid = Grid::from_rows(vec![vec![2, 4], vec![4, 0]]).unwrap();
        assert!(!is_terminal(&grid));
        assert!(!is_terminal_by_simulation(&grid));
    }

    #[test]
    fn test_full_checkerboard_is_terminal() {
        for size in 2..7 {
            let grid = checkerboard(size);
            assert!(is_terminal(&grid), "size {}", size);
            assert!(is_terminal_by_simulation(&grid), "size {}", size);
            assert!(legal_moves(&grid).is_empty());
        }
    }

    #[test]
    fn test_pair_of_largest_tiles_is_terminal() {
        let top = 1u32 << 31;
        let grid = Grid::from_rows(vec![vec![top, top], vec![2, 4]]).unwrap();
        assert!(is_terminal(&grid));
        assert!(is_terminal_by_simulation(&grid));
    }

    #[test]
    fn test_full_grid_with_pair_is_not_terminal() {
        let grid = Grid::from_rows(vec![
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 8, 8],
            vec![4, 2, 4, 2],
        ])
        .unwrap();
        assert!(!is_terminal(&grid));
        assert!(!is_terminal_by_simulation(&grid));
        assert_eq!(legal_moves(&grid), vec![Direction::Left, Direction::Right]);
    }

    #[test]
    fn test_checks_do_not_mutate() {
        let grid = Grid::from_rows(vec![vec![2, 2], vec![4, 8]]).unwrap();
        let before = grid.clone();
        is_terminal(&grid);
        is_terminal_by_simulation(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_legal_moves_partial() {
        let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 0]]).unwrap();
        assert_eq!(legal_moves(&grid), vec![Direction::Down, Direction::Right]);
    }
}
