use std::sync::Arc;

use log::error;

use crate::appender::buffer::MemAppender;
use crate::appender::layout::Layout;
use crate::appender::types::AppenderError;

/// Construction parameters for a memory appender
pub struct AppenderConfig {
    pub name: String,
    pub max_size: usize,
    pub layout: Option<Box<dyn Layout>>,
}

impl Default for AppenderConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            max_size: 100,
            layout: None,
        }
    }
}

/// Build a configured appender. The factory surface requires a name and a
/// layout; the bare `MemAppender` constructors keep the layout optional.
pub fn create_appender(config: AppenderConfig) -> Result<Arc<MemAppender>, AppenderError> {
    if config.name.is_empty() {
        error!("No name provided for MemAppender");
        return Err(AppenderError::Config("No name provided".into()));
    }
    let Some(layout) = config.layout else {
        error!("No layout provided for MemAppender");
        return Err(AppenderError::Config("No layout provided".into()));
    };
    MemAppender::named(config.name, config.max_size, Some(layout))
}
