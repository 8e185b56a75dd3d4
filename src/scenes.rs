//! # Scene Management System
//!
//! Runs an interactive session: reads one token per turn, hands moves to the
//! [`Game`] and renders what happened. The session owns the only game and is
//! strictly sequential; each move is fully resolved before the next token is
//! read.

use crate::{
    Direction, Game, GameStatistics, InputHandler, MoveOutcome, PlayerInput, SlideError,
    SlideResult, TerminalDisplay, TokenReader, EXITING, FIRST_MOVE_PROMPT, GAME_LOST, MOVE_PROMPT,
    POINTLESS_MOVE, SIZE_PROMPT, UNKNOWN_COMMAND,
};
use log::{debug, info};
use rand::Rng;
use std::io::{BufRead, Write};

/// Represents the current scene in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Normal gameplay
    Playing,
    /// The game was lost and the final grid has been shown
    GameOver,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player typed the quit command
    Quit,
    /// A move left no further legal moves
    Lost,
    /// The input ran out
    EndOfInput,
}

/// What a finished session reports back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub statistics: GameStatistics,
}

/// Asks for the board size until a usable answer arrives.
///
/// Returns None if the input ends before a valid size is given.
pub fn prompt_for_size<R: BufRead, W: Write>(
    tokens: &mut TokenReader<R>,
    display: &mut TerminalDisplay<W>,
    input_handler: &InputHandler,
) -> SlideResult<Option<usize>> {
    loop {
        display.show_message(SIZE_PROMPT)?;
        let Some(token) = tokens.next_token()? else {
            return Ok(None);
        };

        match input_handler.parse_size(&token) {
            Ok(size) => return Ok(Some(size)),
            Err(e @ (SlideError::InvalidSize { .. } | SlideError::InvalidInput(_))) => {
                debug!("Rejected board size {:?}: {}", token, e);
                display.show_message(&e.to_string())?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// The scene manager that drives one game from first prompt to exit
pub struct SceneManager<R, W: Write, G> {
    current_scene: SceneType,
    game: Game<G>,
    tokens: TokenReader<R>,
    display: TerminalDisplay<W>,
    input_handler: InputHandler,
}

impl<R: BufRead, W: Write, G: Rng> SceneManager<R, W, G> {
    pub fn new(game: Game<G>, tokens: TokenReader<R>, display: TerminalDisplay<W>) -> Self {
        Self {
            current_scene: SceneType::Playing,
            game,
            tokens,
            display,
            input_handler: InputHandler::new(),
        }
    }

    pub fn current_scene(&self) -> SceneType {
        self.current_scene
    }

    pub fn game(&self) -> &Game<G> {
        &self.game
    }

    /// Consumes the manager, returning the display so its output can be inspected.
    pub fn into_display(self) -> TerminalDisplay<W> {
        self.display
    }

    /// Runs the session loop until the player quits, loses, or input ends.
    pub fn run(&mut self) -> SlideResult<SessionSummary> {
        self.display.show_instructions()?;
        self.display.render_grid(self.game.grid())?;
        self.display.show_message(FIRST_MOVE_PROMPT)?;

        let end = loop {
            let Some(token) = self.tokens.next_token()? else {
                break SessionEnd::EndOfInput;
            };

            match self.input_handler.parse_command(&token) {
                Some(PlayerInput::Quit) => break SessionEnd::Quit,
                Some(PlayerInput::Move(direction)) => {
                    if self.update_playing_scene(direction)? {
                        break SessionEnd::Lost;
                    }
                }
                None => {
                    debug!("Unrecognized command {:?}", token);
                    self.display.show_message(UNKNOWN_COMMAND)?;
                }
            }

            self.display.blank_line()?;
            self.display.show_message(MOVE_PROMPT)?;
        };

        self.display.show_message(EXITING)?;
        self.display.blank_line()?;

        info!("Session ended: {:?}", end);
        Ok(SessionSummary {
            end,
            statistics: self.game.statistics().clone(),
        })
    }

    /// Plays one move, returns true if the game is now over
    fn update_playing_scene(&mut self, direction: Direction) -> SlideResult<bool> {
        match self.game.apply_move(direction)? {
            MoveOutcome::Applied => {
                self.display.render_grid(self.game.grid())?;
                Ok(false)
            }
            MoveOutcome::Pointless => {
                self.display.show_message(POINTLESS_MOVE)?;
                self.display.render_grid(self.game.grid())?;
                Ok(false)
            }
            MoveOutcome::Lost => {
                self.current_scene = SceneType::GameOver;
                self.display.show_message(GAME_LOST)?;
                self.display.render_grid(self.game.grid())?;
                Ok(true)
            }
        }
    }
}
