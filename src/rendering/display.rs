//! # Display Management
//!
//! Writes the grid, instructions, prompts and messages to any `Write` sink.

use crate::game::Grid;
use crate::input::COMMANDS;
use crate::SlideResult;
use std::io::Write;

pub const SIZE_PROMPT: &str = "Enter the size of the table for the game:";
pub const FIRST_MOVE_PROMPT: &str = "Enter your play:";
pub const MOVE_PROMPT: &str = "Enter your move:";
pub const UNKNOWN_COMMAND: &str = "Unknown command.";
pub const POINTLESS_MOVE: &str = "Your movement was pointless, nothing happened. Try another one.";
pub const GAME_LOST: &str = "You lost. This is the final result:";
pub const EXITING: &str = "Exiting...";

/// Terminal display for a game session.
///
/// # Examples
///
/// ```
/// use slide2048::{Grid, TerminalDisplay};
///
/// let mut display = TerminalDisplay::new(Vec::new());
/// let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
/// display.render_grid(&grid).unwrap();
///
/// let text = String::from_utf8(display.into_inner()).unwrap();
/// assert_eq!(text, "Current table:\n2 0\n0 4\n");
/// ```
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the display, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints the grid under a `Current table:` header, one row per line.
    pub fn render_grid(&mut self, grid: &Grid) -> SlideResult<()> {
        writeln!(self.out, "Current table:")?;
        writeln!(self.out, "{}", grid)?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints the command list followed by a blank line.
    pub fn show_instructions(&mut self) -> SlideResult<()> {
        writeln!(self.out, "Game instructions:")?;
        for command in &COMMANDS {
            writeln!(self.out, "{} - {}", command.key, command.description)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn show_message(&mut self, message: &str) -> SlideResult<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn blank_line(&mut self) -> SlideResult<()> {
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(display: TerminalDisplay<Vec<u8>>) -> String {
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_instructions_list_every_command() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.show_instructions().unwrap();
        assert_eq!(
            output(display),
            "Game instructions:\nW - Move up\nA - Move left\nS - Move down\nD - Move right\nXS - Exit game\n\n"
        );
    }

    #[test]
    fn test_render_grid_multi_digit() {
        let mut display = TerminalDisplay::new(Vec::new());
        let grid = Grid::from_rows(vec![
            vec![1024, 2, 0],
            vec![0, 0, 0],
            vec![4, 8, 16],
        ])
        .unwrap();
        display.render_grid(&grid).unwrap();
        assert_eq!(
            output(display),
            "Current table:\n1024 2 0\n0 0 0\n4 8 16\n"
        );
    }
}
