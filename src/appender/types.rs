use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Severity of a captured log event, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Debug,
            log::Level::Trace => Level::Trace,
        }
    }
}

/// Immutable snapshot of a single log occurrence, taken at append time.
/// The source record may be reused by the logging framework afterwards,
/// so every field is owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub event_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEvent {
    pub fn new(level: Level, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            level,
            target: target.into(),
            message: message.into(),
        }
    }

    /// Snapshot a `log::Record` into an owned event. Renders the message
    /// arguments here, while the record borrow is still live.
    pub fn from_record(record: &log::Record) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            level: record.level().into(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        }
    }
}

/// Errors returned by the appender surface
#[derive(Error, Debug)]
pub enum AppenderError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
    #[error("No layout configured")]
    MissingLayout,
}
