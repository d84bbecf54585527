use crate::appender::layout::Layout;
use crate::appender::types::LogEvent;

/// Renders events as `[LEVEL] target: message`
#[derive(Debug, Default)]
pub struct LineLayout;

impl Layout for LineLayout {
    fn format(&self, event: &LogEvent) -> String {
        format!("[{}] {}: {}", event.level, event.target, event.message)
    }
}
