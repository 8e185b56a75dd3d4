//! # Slide2048 Main Entry Point
//!
//! Parses the command line, sets up logging, and runs one interactive session
//! on stdin/stdout.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use slide2048::{
    prompt_for_size, Game, InputHandler, SceneManager, SlideResult, TerminalDisplay, TokenReader,
};
use std::io;
#[cfg(feature = "dev-tools")]
use tracing::{info, Level};

#[cfg(not(feature = "dev-tools"))]
use log::info;

/// Command line arguments for the slide2048 game.
#[derive(Parser, Debug)]
#[command(name = "slide2048")]
#[command(about = "A terminal sliding-tile merge game on an N x N grid")]
#[command(version)]
struct Args {
    /// Random seed for tile spawning (a fresh seed is drawn when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Board side length (at least 2); asked interactively when omitted
    #[arg(long, value_parser = parse_size_arg)]
    size: Option<usize>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> SlideResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting slide2048 v{}", slide2048::VERSION);

    let stdin = io::stdin();
    let mut tokens = TokenReader::new(stdin.lock());
    let mut display = TerminalDisplay::new(io::stdout());
    let input_handler = InputHandler::new();

    let size = match args.size {
        Some(size) => size,
        None => match prompt_for_size(&mut tokens, &mut display, &input_handler)? {
            Some(size) => size,
            None => return Ok(()),
        },
    };

    let rng = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let game = Game::new(size, rng)?;
    let summary = SceneManager::new(game, tokens, display).run()?;

    info!(
        "Session finished ({:?}) after {} moves",
        summary.end, summary.statistics.moves_applied
    );
    Ok(())
}

/// Validates `--size` with the same rules as the interactive prompt.
fn parse_size_arg(value: &str) -> Result<usize, String> {
    InputHandler::new()
        .parse_size(value)
        .map_err(|e| e.to_string())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> SlideResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        let filter = match log_level.to_lowercase().as_str() {
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            other => {
                return Err(slide2048::SlideError::InvalidInput(format!(
                    "unknown log level '{}'",
                    other
                )))
            }
        };

        env_logger::Builder::new()
            .filter_level(filter)
            .format_target(false)
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_flag_rejects_unplayable_sizes() {
        assert!(Args::try_parse_from(["slide2048", "--size", "1"]).is_err());
        assert!(Args::try_parse_from(["slide2048", "--size", "0"]).is_err());
        assert!(Args::try_parse_from(["slide2048", "--size", "four"]).is_err());
    }

    #[test]
    fn test_size_flag_accepts_playable_sizes() {
        let args = Args::try_parse_from(["slide2048", "--size", "2"]).unwrap();
        assert_eq!(args.size, Some(2));

        let args = Args::try_parse_from(["slide2048"]).unwrap();
        assert_eq!(args.size, None);
        assert_eq!(args.log_level, "warn");
    }
}
