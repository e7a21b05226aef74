use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Step,
    Info,
    Success,
    Warning,
    Error,
}

const WIDEST_LABEL: usize = 7; // "SUCCESS" / "WARNING"

fn level_style(level: LogLevel) -> (&'static str, &'static str) {
    match level {
        LogLevel::Step => ("STEP", "magenta"),
        LogLevel::Info => ("INFO", "cyan"),
        LogLevel::Success => ("SUCCESS", "green"),
        LogLevel::Warning => ("WARNING", "yellow"),
        LogLevel::Error => ("ERROR", "red"),
    }
}

fn prefix_for(level: LogLevel) -> String {
    let (label, color) = level_style(level);
    let padding = WIDEST_LABEL - label.len() + 1;
    format!(
        "[ {} ]{}",
        label.color(color).bold(),
        " ".repeat(padding)
    )
}

pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    colored::control::set_override(true);

    let format = tracing_subscriber::fmt::format()
        .without_time()
        .with_level(false)
        .with_target(false)
        .compact();

    tracing_subscriber::fmt()
        .event_format(format)
        .with_ansi(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

pub fn log(level: LogLevel, message: &str) {
    let prefix = prefix_for(level);
    match level {
        LogLevel::Warning => tracing::warn!("{}{}", prefix, message),
        LogLevel::Error => tracing::error!("{}{}", prefix, message),
        _ => tracing::info!("{}{}", prefix, message),
    }
}
