use std::sync::Arc;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::appender::buffer::MemAppender;
use crate::appender::types::LogEvent;

/// Adapter feeding the `log` facade into a memory appender. Each record is
/// snapshotted into an owned event before its borrow ends.
pub struct MemLogger {
    appender: Arc<MemAppender>,
    level: LevelFilter,
}

impl MemLogger {
    pub fn new(appender: Arc<MemAppender>, level: LevelFilter) -> Self {
        Self { appender, level }
    }

    /// Install this logger as the process-wide `log` destination.
    /// Fails if another logger is already installed.
    pub fn install(appender: Arc<MemAppender>, level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(appender, level)))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for MemLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // The facade has no error channel; a rejected event is dropped.
        let _ = self.appender.append(LogEvent::from_record(record));
    }

    fn flush(&self) {}
}
