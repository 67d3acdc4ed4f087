use std::{fmt::Display, str::FromStr};

use backtrace::Backtrace;
use tracing::level_filters::LevelFilter;

pub fn init(display_level: &bool, level_filter: &str) {
    let level_filter = match LevelFilter::from_str(level_filter) {
        Ok(level) => level,
        Err(err) => panic!("Invalid log level filter '{level_filter}': {err}"),
    };

    if tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_max_level(level_filter)
        .try_init()
        .is_err()
    {
        warn(None, "Log: Subscriber was already initialized");
    }
}

fn prefix<'a>(prefix: Option<&'a str>, default: &'a str) -> &'a str {
    prefix.unwrap_or(default)
}

pub fn trace<T: Display>(p: Option<&str>, msg: T) {
    tracing::trace!("{} {msg}", prefix(p, "🐾"));
}

pub fn debug<T: Display>(p: Option<&str>, msg: T) {
    tracing::debug!("{} {msg}", prefix(p, "🐞"));
}

pub fn info<T: Display>(p: Option<&str>, msg: T) {
    tracing::info!("{} {msg}", prefix(p, "📢"));
}

pub fn warn<T: Display>(p: Option<&str>, msg: T) {
    tracing::warn!("{} {msg}", prefix(p, "⚠️"));
}

pub fn error<T: Display>(p: Option<&str>, msg: T) {
    let p = prefix(p, "🚨");
    match std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1") {
        true => tracing::error!("{p} {msg}\n{:?}", Backtrace::new()),
        false => tracing::error!("{p} {msg}"),
    }
}

pub fn panic<T: Display>(p: Option<&str>, msg: T) -> ! {
    panic!("{} {msg}", prefix(p, "☠️"))
}
