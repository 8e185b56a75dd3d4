//! Logging behavior of the terminal session at the default level.

use log::{Level, LevelFilter, Log, Metadata, Record};
use rand::rngs::StdRng;
use rand::SeedableRng;
use slide2048::{Game, Grid, SceneManager, SessionEnd, SlideResult, TerminalDisplay, TokenReader};
use std::io::Cursor;
use std::sync::Mutex;

struct RecordingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: RecordingLogger = RecordingLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_typos_stay_below_default_log_level() -> SlideResult<()> {
    log::set_logger(&LOGGER).expect("logger installed once per test binary");
    log::set_max_level(LevelFilter::Trace);

    let game = Game::from_grid(
        Grid::from_rows(vec![vec![2, 0], vec![0, 0]])?,
        StdRng::seed_from_u64(1),
    );
    let mut manager = SceneManager::new(
        game,
        TokenReader::new(Cursor::new("jump\nXS\n")),
        TerminalDisplay::new(Vec::new()),
    );
    assert_eq!(manager.run()?.end, SessionEnd::Quit);

    let records = LOGGER.records.lock().unwrap();
    let loud: Vec<_> = records
        .iter()
        .filter(|(level, _)| *level <= Level::Warn)
        .collect();
    assert!(loud.is_empty(), "records at warn or above: {:?}", loud);
    assert!(records
        .iter()
        .any(|(level, text)| *level == Level::Debug && text.contains("jump")));
    Ok(())
}
