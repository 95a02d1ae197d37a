use std::{
    io::{self, Write},
    sync::{Arc, OnceLock, PoisonError, RwLock},
};

use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(LevelFilter::Warn))
}

pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Raises `level` by one step for each `-v`, up to trace.
pub fn raise_level(level: LevelFilter, verbosity: u8) -> LevelFilter {
    let index = LEVELS.iter().position(|l| *l == level).unwrap_or(0);
    LEVELS[(index + verbosity as usize).min(LEVELS.len() - 1)]
}

pub fn format_record(record: &Record) -> String {
    format!(
        "[{} {}] {}",
        record.level(),
        record.module_path().unwrap_or("unknown"),
        record.args()
    )
}

/// Writes every enabled record as a single line to stderr.
pub struct AppLogger {
    min_level: Arc<RwLock<LevelFilter>>,
}

impl AppLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: Arc::new(RwLock::new(min_level)),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // nowhere to report a failed write to stderr
            let _ = writeln!(io::stderr().lock(), "{}", format_record(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
