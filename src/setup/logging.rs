use colored::{ColoredString, Colorize};
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Levels applied before `RUST_LOG` is read; anything not listed logs warnings only
const MODULE_LEVELS: &[(&str, LevelFilter)] = &[
    ("noters_api", LevelFilter::Info),
    ("axum", LevelFilter::Warn),
    ("hyper", LevelFilter::Warn),
];

fn colored_level(level: Level) -> ColoredString {
    let label = format!("{level:<5}");
    match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow().bold(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}

/// Sets up logging for the HTTP service.
///
/// Each line carries a millisecond timestamp, the colored level and the
/// emitting module, so request logs can be lined up with storage errors.
/// `RUST_LOG` directives are applied on top of `MODULE_LEVELS`.
pub fn setup_log() {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn);
    for (module, level) in MODULE_LEVELS {
        builder.filter_module(module, *level);
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}: {}",
                buf.timestamp_millis(),
                colored_level(record.level()),
                record.module_path().unwrap_or_else(|| record.target()),
                record.args()
            )
        })
        .parse_default_env()
        .init();
}
