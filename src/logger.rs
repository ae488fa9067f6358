use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;
use std::fs;

use crate::config::Config;

/// Initializes the global logger.
///
/// Should be called once at the very beginning of `main`, after the
/// configuration has been assembled.
///
/// Log level is controlled by the `RUST_LOG` environment variable and
/// defaults to `info`. Records are always appended to the log file in
/// `config.log_dir`; with `config.verbose` they are mirrored to stderr.
pub fn init(config: &Config) {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Failed to create log directory at '{}': {}", config.log_dir.display(), e);
    }

    let log_file_path = config.log_file_path();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_level_filter = log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    let mut base_config = Dispatch::new().level(log_level_filter).level_for("serde", LevelFilter::Warn);

    if config.verbose {
        let console_config = Dispatch::new()
            .format(|out, message, record| {
                let colors = fern::colors::ColoredLevelConfig::new()
                    .error(fern::colors::Color::Red)
                    .warn(fern::colors::Color::Yellow)
                    .info(fern::colors::Color::Green)
                    .debug(fern::colors::Color::Blue)
                    .trace(fern::colors::Color::BrightBlack);

                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    colors.color(record.level()),
                    record.target(),
                    message
                ))
            })
            .chain(std::io::stderr());

        base_config = base_config.chain(console_config);
    }

    // fern::log_file opens in append mode, earlier runs are never truncated.
    match fern::log_file(&log_file_path) {
        Ok(file) => {
            let file_config = Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("[{} {} {}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), record.level(), record.target(), message))
                })
                .chain(file);
            base_config = base_config.chain(file_config);
        }
        Err(e) => {
            eprintln!("Failed to open log file '{}': {}", log_file_path.display(), e);
        }
    }

    base_config.apply().unwrap_or_else(|e| {
        eprintln!("Failed to apply logger configuration: {}", e);
    });

    log::debug!("Logger initialized. Logging to '{}'.", log_file_path.display());
}
