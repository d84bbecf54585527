use crate::appender::layout::Layout;
use crate::appender::types::LogEvent;

/// Renders each event as one JSON object per line
#[derive(Debug, Default)]
pub struct JsonLayout;

impl Layout for JsonLayout {
    fn format(&self, event: &LogEvent) -> String {
        serde_json::to_string(event)
            .unwrap_or_else(|e| format!(r#"{{"serialize_error":"{e}"}}"#))
    }
}
