//! Colored stdout logging, plus an optional plain-text log file.

use crate::errors::LoggerError;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use fern::Dispatch;
use humantime::format_rfc3339_seconds;
use log::{info, warn, LevelFilter};
use std::io::stdout;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use std::time::SystemTime;

static INIT_LOGGER_ONCE: Once = Once::new();
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOG_FILE_NAME: &str = "rentals.log";

/// Install the global logger.
///
/// Safe to call more than once: later calls log a warning and return `Ok`.
pub fn initialize(level: LevelFilter, log_dir: Option<&Path>) -> Result<(), LoggerError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("Logger already initialized");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(level, log_dir);
        if result.is_ok() {
            info!("Logger initialized with level: {level:?}");
        }
    });

    result
}

fn initialize_internal(level: LevelFilter, log_dir: Option<&Path>) -> Result<(), LoggerError> {
    let colors = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = format_rfc3339_seconds(SystemTime::now()),
                level = colors.color(record.level()),
                target = record.target(),
            ))
        })
        .chain(stdout());

    let mut dispatch = Dispatch::new().level(level).chain(stdout_dispatch);

    if let Some(dir) = log_dir {
        let path = dir.join(LOG_FILE_NAME);
        let file = fern::log_file(&path).map_err(|source| LoggerError::LogFile {
            path: path.clone(),
            source,
        })?;

        dispatch = dispatch.chain(
            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{date} - {level}] {message} [{target}]",
                        date = format_rfc3339_seconds(SystemTime::now()),
                        level = record.level(),
                        target = record.target(),
                    ))
                })
                .chain(file),
        );
    }

    dispatch.apply()?;
    Ok(())
}
