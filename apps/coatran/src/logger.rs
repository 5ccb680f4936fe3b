//! Minimal stderr logger.  Stdout carries the trees.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

pub struct MinimalLogger;

impl log::Log for MinimalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install [`MinimalLogger`] with the given maximum level.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&MinimalLogger)?;
    log::set_max_level(level);
    Ok(())
}
