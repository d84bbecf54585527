use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::appender::layout::Layout;
use crate::appender::sink::{LogSink, StdoutSink};
use crate::appender::types::{AppenderError, LogEvent};

/// Sequence and eviction counter live under one lock so both always
/// change atomically with respect to readers.
struct Inner {
    events: VecDeque<LogEvent>,
    discarded: u64,
}

/// Memory appender that retains the most recent `max_size` log events.
/// The oldest event is discarded whenever an append would exceed capacity.
pub struct MemAppender {
    name: String,
    max_size: usize,
    layout: Option<Box<dyn Layout>>,
    sink: Box<dyn LogSink>,
    inner: Mutex<Inner>,
}

impl std::fmt::Debug for MemAppender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemAppender")
            .field("name", &self.name)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

impl MemAppender {
    pub fn new(
        max_size: usize,
        layout: Option<Box<dyn Layout>>,
    ) -> Result<Arc<Self>, AppenderError> {
        Self::build("MemAppender".into(), max_size, layout, Box::new(StdoutSink))
    }

    /// Same as `new`, with an injected sink instead of stdout
    pub fn with_sink(
        max_size: usize,
        layout: Option<Box<dyn Layout>>,
        sink: Box<dyn LogSink>,
    ) -> Result<Arc<Self>, AppenderError> {
        Self::build("MemAppender".into(), max_size, layout, sink)
    }

    pub(crate) fn named(
        name: String,
        max_size: usize,
        layout: Option<Box<dyn Layout>>,
    ) -> Result<Arc<Self>, AppenderError> {
        Self::build(name, max_size, layout, Box::new(StdoutSink))
    }

    fn build(
        name: String,
        max_size: usize,
        layout: Option<Box<dyn Layout>>,
        sink: Box<dyn LogSink>,
    ) -> Result<Arc<Self>, AppenderError> {
        if max_size == 0 {
            return Err(AppenderError::Config("max_size must be positive".into()));
        }
        Ok(Arc::new(Self {
            name,
            max_size,
            layout,
            sink,
            inner: Mutex::new(Inner {
                events: VecDeque::with_capacity(max_size),
                discarded: 0,
            }),
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Capture one event. At capacity the oldest event is removed and the
    /// discard counter bumped before the new event is pushed.
    pub fn append(&self, event: LogEvent) -> Result<(), AppenderError> {
        if event.message.is_empty() {
            return Err(AppenderError::InvalidEvent("Empty message".into()));
        }
        let captured = format!("Captured log: {}", event.message);
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.events.len() == self.max_size {
                inner.discarded += 1;
                inner.events.pop_front(); // remove the oldest log event
            }
            inner.events.push_back(event);
        }
        self.sink.write_line(&captured);
        Ok(())
    }

    /// Cloned snapshot of the retained events, oldest first. Later appends
    /// and evictions never show through a returned snapshot.
    pub fn current_logs(&self) -> Vec<LogEvent> {
        let inner = self.inner.lock().unwrap();
        inner.events.iter().cloned().collect()
    }

    /// Every retained event rendered through the layout, oldest first.
    /// Without a layout this returns an empty list rather than failing.
    pub fn event_strings(&self) -> Vec<String> {
        let Some(layout) = self.layout.as_deref() else {
            return Vec::new();
        };
        self.current_logs()
            .iter()
            .map(|event| layout.format(event))
            .collect()
    }

    /// Render every retained event to the sink, oldest first, then clear
    /// the buffer. Fails without touching the buffer when no layout is
    /// configured; the discard counter is never reset.
    pub fn print_logs(&self) -> Result<(), AppenderError> {
        let layout = self.layout.as_deref().ok_or(AppenderError::MissingLayout)?;
        // Take the whole batch in one step so the lock is not held while
        // formatting and writing.
        let drained: Vec<LogEvent> = {
            let mut inner = self.inner.lock().unwrap();
            inner.events.drain(..).collect()
        };
        for event in &drained {
            self.sink.write_line(&layout.format(event));
        }
        Ok(())
    }

    /// Number of events evicted to stay within capacity, over the whole
    /// lifetime of the appender
    pub fn discarded_log_count(&self) -> u64 {
        self.inner.lock().unwrap().discarded
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().events.is_empty()
    }
}
