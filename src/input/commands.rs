//! # Command Definitions
//!
//! The table of commands understood by the terminal session.

use crate::game::Direction;
use crate::input::PlayerInput;

/// A command the player can type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    /// Token that triggers the command, matched case-insensitively
    pub key: &'static str,
    /// Description shown in the instructions
    pub description: &'static str,
    /// Input produced by the command
    pub input: PlayerInput,
}

/// Every command, in the order the instructions list them.
pub static COMMANDS: [Command; 5] = [
    Command {
        key: "W",
        description: "Move up",
        input: PlayerInput::Move(Direction::Up),
    },
    Command {
        key: "A",
        description: "Move left",
        input: PlayerInput::Move(Direction::Left),
    },
    Command {
        key: "S",
        description: "Move down",
        input: PlayerInput::Move(Direction::Down),
    },
    Command {
        key: "D",
        description: "Move right",
        input: PlayerInput::Move(Direction::Right),
    },
    Command {
        key: "XS",
        description: "Exit game",
        input: PlayerInput::Quit,
    },
];

/// Looks up the command whose key matches `token`, ignoring case.
pub fn find_command(token: &str) -> Option<&'static Command> {
    COMMANDS
        .iter()
        .find(|command| command.key.eq_ignore_ascii_case(token))
}
