//! Logging setup for glide
//!
//! The terminal belongs to the UI, so logs only ever go to a file.
//!
//! ## Environment Variables
//!
//! 1. **`GLIDE_LOG`** (highest priority) - glide-specific filter, bare levels
//!    apply to the glide crates only
//! 2. **`RUST_LOG`** - standard tracing filter
//! 3. **Default** - `warn` globally, `info` for glide crates
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/glide/logs/glide-<pid>.log`
//! (`~/.local/share/glide/logs` on Linux). Override with `--log-file <path>`.

use anyhow::Context;
use std::{env, path::PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "warn,glide=info,glide_core=info";

/// Must be held alive to keep the background writer flushing
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

/// Install the file subscriber. Safe to call when a subscriber is already set.
pub fn init(log_file: Option<PathBuf>) -> anyhow::Result<LogGuard> {
    let (log_dir, filename) = resolve_log_path(log_file);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(&filename)
        .build(&log_dir)
        .context("Failed to open log file")?;
    let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);

    let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Already initialized (tests, embedding) is not an error
    let _ = Registry::default().with(create_filter()).with(layer).try_init();

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("glide-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir, name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glide")
        .join("logs");
    (dir, filename)
}

fn create_filter() -> EnvFilter {
    if let Ok(glide_log) = env::var("GLIDE_LOG") {
        return EnvFilter::new(expand_glide_log(&glide_log));
    }
    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }
    EnvFilter::new(DEFAULT_FILTER)
}

/// `GLIDE_LOG=debug` means debug for glide crates, not the whole dependency tree
fn expand_glide_log(value: &str) -> String {
    let value = value.trim();
    if value.contains('=') || value.contains(',') {
        return value.to_string();
    }
    format!("warn,glide={value},glide_core={value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path() {
        let (dir, name) = resolve_log_path(None);
        assert!(dir.ends_with("glide/logs"));
        assert_eq!(name, format!("glide-{}.log", std::process::id()));
    }

    #[test]
    fn test_override_file_path() {
        let (dir, name) = resolve_log_path(Some(PathBuf::from("/tmp/out/glide.log")));
        assert_eq!(dir, PathBuf::from("/tmp/out"));
        assert_eq!(name, "glide.log");

        let (dir, name) = resolve_log_path(Some(PathBuf::from("trace.log")));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "trace.log");
    }

    #[test]
    fn test_override_directory() {
        let (dir, name) = resolve_log_path(Some(PathBuf::from("/tmp/logs")));
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert!(name.starts_with("glide-"));
    }

    #[test]
    fn test_expand_bare_level() {
        assert_eq!(expand_glide_log("debug"), "warn,glide=debug,glide_core=debug");
        assert_eq!(expand_glide_log(" glide_core=trace "), "glide_core=trace");
    }
}
