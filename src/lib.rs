//! Memory-based log appender that stores log events up to a specified
//! maximum size. Older log events are binned after we reach max size.

pub mod appender;
