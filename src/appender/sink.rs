/// Destination for drained log lines and append-time traces
pub trait LogSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Sink that writes each line to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}
