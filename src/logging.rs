use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File name used when `--log-file` points at a directory-like path.
const DEFAULT_LOG_FILE_NAME: &str = "blogql.log";

/// Filter directive used when `RUST_LOG` is not set.
///
/// Only this crate's events are enabled so sqlx and hyper stay quiet.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("blogql={}", level)
}

/// Split a log file path into the directory the rolling appender writes to
/// and the file name prefix it rotates.
pub fn rolling_target(log_path: &Path) -> (&Path, &OsStr) {
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_NAME));
    (dir, file_name)
}

/// Install the global subscriber: compact stderr output, plus a daily-rolled
/// JSON file when `log_file` is given. `RUST_LOG` overrides `verbose`.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    match log_file {
        Some(log_path) => {
            let (dir, file_name) = rolling_target(&log_path);
            if let Err(e) = std::fs::create_dir_all(dir) {
                eprintln!("Cannot create log directory {}: {}", dir.display(), e);
            }

            let file_layer = fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, file_name))
                .with_ansi(false)
                .json();

            subscriber.with(file_layer).init();
        }
        None => subscriber.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        });
    }

    #[test]
    fn test_default_directive() {
        init_test_logging();
        assert_eq!(default_directive(false), "blogql=info");
        assert_eq!(default_directive(true), "blogql=debug");
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
        assert!(EnvFilter::try_new(default_directive(false)).is_ok());
    }

    #[test]
    fn test_rolling_target_with_directory() {
        let (dir, name) = rolling_target(Path::new("logs/server/blogql.log"));
        assert_eq!(dir, Path::new("logs/server"));
        assert_eq!(name, OsStr::new("blogql.log"));
    }

    #[test]
    fn test_rolling_target_bare_file_name() {
        let (dir, name) = rolling_target(Path::new("server.log"));
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, OsStr::new("server.log"));
    }

    #[test]
    fn test_rolling_target_without_file_name() {
        let (dir, name) = rolling_target(Path::new("/"));
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, OsStr::new(DEFAULT_LOG_FILE_NAME));
    }
}
