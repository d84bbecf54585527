use log::LevelFilter;
use mem_appender::appender::{AppenderConfig, LineLayout, MemLogger, create_appender};

fn main() {
    let appender = create_appender(AppenderConfig {
        name: "demo".into(),
        max_size: 3,
        layout: Some(Box::new(LineLayout)),
    })
    .unwrap();

    MemLogger::install(appender.clone(), LevelFilter::Info).unwrap();

    log::info!("First message");
    log::info!("Second message");
    log::info!("Third message");
    log::info!("Fourth message");

    println!(
        "Retained {} events, discarded {}",
        appender.len(),
        appender.discarded_log_count()
    );

    appender.print_logs().unwrap();

    println!("Retained after print: {}", appender.len());
}
