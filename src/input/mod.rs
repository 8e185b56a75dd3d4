//! # Input Module
//!
//! Token reading and command parsing for the terminal session.
//!
//! Malformed input is handled here and never reaches the engine: unknown
//! commands parse to `None` and the session simply asks again.

pub mod commands;

pub use commands::*;

use crate::game::Direction;
use crate::{config, SlideError, SlideResult};
use std::collections::VecDeque;
use std::io::BufRead;

/// Player input types that can be processed by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Slide the tiles in a direction
    Move(Direction),
    /// Leave the game
    Quit,
}

/// Input handler for converting typed tokens into player input.
#[derive(Debug, Clone, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    pub fn new() -> Self {
        Self
    }

    /// Parses one command token.
    ///
    /// Returns None for anything that is not a known command.
    ///
    /// # Examples
    ///
    /// ```
    /// use slide2048::{Direction, InputHandler, PlayerInput};
    ///
    /// let handler = InputHandler::new();
    /// assert_eq!(handler.parse_command("w"), Some(PlayerInput::Move(Direction::Up)));
    /// assert_eq!(handler.parse_command("Xs"), Some(PlayerInput::Quit));
    /// assert_eq!(handler.parse_command("jump"), None);
    /// ```
    pub fn parse_command(&self, token: &str) -> Option<PlayerInput> {
        find_command(token.trim()).map(|command| command.input)
    }

    /// Parses the answer to the board-size prompt.
    pub fn parse_size(&self, token: &str) -> SlideResult<usize> {
        let size: usize = token
            .trim()
            .parse()
            .map_err(|_| SlideError::InvalidInput(format!("'{}' is not a board size", token)))?;
        if size < config::MIN_GRID_SIZE {
            return Err(SlideError::InvalidSize { size });
        }
        Ok(size)
    }
}

/// Reads whitespace-delimited tokens from a buffered source, across lines.
pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or None once the source is exhausted.
    pub fn next_token(&mut self) -> SlideResult<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}
