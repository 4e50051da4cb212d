//! Logging bootstrap.
//!
//! The library logs through the `log` facade only; hosts that want file
//! logging can call [`init_logging`] once at startup. Initialization is
//! idempotent for the same directory and rejected for a different one, so a
//! second widget instance in the same process cannot silently redirect logs.

use std::path::{Path, PathBuf};

use flexi_logger::{FileSpec, Logger, LoggerHandle};
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "scout";

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Initialize file logging at `level` (`trace` through `error`) into
/// `log_dir`. Never panics; errors are human-readable strings.
pub fn init_logging(level: &str, log_dir: &Path) -> std::result::Result<(), String> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.log_dir == log_dir {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        ));
    }

    let dir = log_dir.to_path_buf();
    LOGGING_STATE
        .get_or_try_init(|| -> std::result::Result<LoggingState, String> {
            std::fs::create_dir_all(&dir)
                .map_err(|err| format!("failed to create log directory `{}`: {err}", dir.display()))?;

            let logger = Logger::try_with_str(level)
                .map_err(|err| format!("invalid log level `{level}`: {err}"))?
                .log_to_file(
                    FileSpec::default()
                        .directory(dir.as_path())
                        .basename(LOG_FILE_BASENAME),
                )
                .append()
                .start()
                .map_err(|err| format!("failed to start logger: {err}"))?;

            Ok(LoggingState {
                log_dir: dir,
                _logger: logger,
            })
        })
        .map(|_| ())
}

fn normalize_level(level: &str) -> std::result::Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}
