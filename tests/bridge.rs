use log::LevelFilter;
use mem_appender::appender::{AppenderConfig, LineLayout, MemLogger, create_appender};

// `log::set_boxed_logger` is process-global, so one test drives the whole
// facade flow: install, filter, capture, evict, format.
#[test]
fn facade_events_are_captured_and_formatted() {
    let appender = create_appender(AppenderConfig {
        name: "bridge-test".into(),
        max_size: 3,
        layout: Some(Box::new(LineLayout)),
    })
    .unwrap();

    MemLogger::install(appender.clone(), LevelFilter::Info).unwrap();

    log::info!("First message");
    log::info!("Second message");
    log::debug!("below the installed level");
    log::info!("Third message");
    log::info!("Fourth message");

    let logs = appender.current_logs();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[0].message, "Second message");
    assert_eq!(logs[1].message, "Third message");
    assert_eq!(logs[2].message, "Fourth message");
    assert_eq!(logs[0].target, "bridge");
    assert_eq!(appender.discarded_log_count(), 1);

    let strings = appender.event_strings();
    assert_eq!(strings.len(), 3);
    assert_eq!(strings[0], "[INFO] bridge: Second message");
}
