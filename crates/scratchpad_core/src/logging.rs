//! Logging bootstrap for scratchpad hosts.
//!
//! # Responsibility
//! - Start one rolling file logger per process for the FFI and CLI hosts.
//! - Record which store and persist policy a host resolved at startup.
//!
//! # Invariants
//! - Note text never reaches the log; events carry sizes and flags only.
//! - A second init with identical settings is a no-op; different settings
//!   are rejected.

use crate::config::ScratchpadConfig;
use flexi_logger::{
    Cleanup, Criterion, FileSpec, LogSpecification, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{info, LevelFilter};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const LOG_BASENAME: &str = "scratchpad";
const ROTATE_AT_BYTES: u64 = 1024 * 1024;
const KEPT_LOG_FILES: usize = 3;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

struct ActiveLogger {
    level: LevelFilter,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// Errors are plain strings so the FFI host can hand them to Dart as-is.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let dir = absolute_dir(log_dir)?;

    let active = ACTIVE.get_or_try_init(|| start(level, &dir))?;
    if active.dir != dir || active.level != level {
        return Err(format!(
            "logging already runs at level {} in `{}`; refusing to switch to level {} in `{}`",
            active.level,
            active.dir.display(),
            level,
            dir.display()
        ));
    }
    Ok(())
}

/// Starts logging for a host from its resolved configuration and records the
/// store location and persist policy.
///
/// Returns `Ok(false)` and leaves logging off when no log dir is configured.
pub fn init_logging_from_config(config: &ScratchpadConfig) -> Result<bool, String> {
    let Some(dir) = config.log_dir.as_deref() else {
        return Ok(false);
    };
    let dir = dir
        .to_str()
        .ok_or_else(|| format!("log_dir is not valid UTF-8: `{}`", dir.display()))?;
    init_logging(&config.log_level, dir)?;

    info!(
        "event=config_resolved module=logging status=ok db_file={} persist_policy={}",
        config
            .db_path
            .file_name()
            .map_or_else(|| "-".into(), |name| name.to_string_lossy()),
        config.persist_policy.as_str()
    );
    Ok(true)
}

/// Level used when nothing is configured: `debug` in debug builds, `info`
/// otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start(level: LevelFilter, dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(dir)
        .map_err(|err| format!("cannot create log dir `{}`: {err}", dir.display()))?;

    let spec = LogSpecification::builder().default(level).build();
    // CLI runs are short; write straight through so nothing sits in a buffer
    // when the process exits.
    let handle = Logger::with(spec)
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEPT_LOG_FILES),
        )
        .write_mode(WriteMode::Direct)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("cannot start logger: {err}"))?;

    info!(
        "event=logging_start module=logging status=ok level={} os={} core_version={}",
        level,
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

/// Accepts `trace|debug|info|warn|error` in any case, plus `warning`.
fn parse_level(level: &str) -> Result<LevelFilter, String> {
    let trimmed = level.trim();
    let candidate = if trimmed.eq_ignore_ascii_case("warning") {
        "warn"
    } else {
        trimmed
    };
    match LevelFilter::from_str(candidate) {
        Ok(LevelFilter::Off) | Err(_) => Err(format!(
            "unsupported log level `{trimmed}`; expected trace|debug|info|warn|error"
        )),
        Ok(filter) => Ok(filter),
    }
}

fn absolute_dir(log_dir: &str) -> Result<PathBuf, String> {
    let path = Path::new(log_dir.trim());
    if path.as_os_str().is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    if !path.is_absolute() {
        return Err(format!(
            "log_dir must be an absolute path, got `{}`",
            path.display()
        ));
    }
    Ok(path.to_path_buf())
}
