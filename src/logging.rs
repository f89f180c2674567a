use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "SAKILA_TUI_LOG";

/// Filter used when `RUST_LOG` is unset: our own events at `info`, reqwest
/// and hyper only when they warn.
const DEFAULT_FILTER: &str = "sakila_tui=info,warn";

/// Starts file logging if `SAKILA_TUI_LOG` is set, and returns the file
/// actually written.
/// Events only ever go to the file; the terminal belongs to the UI.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV_VAR)?;
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = run_log_path(PathBuf::from(base), seconds, std::process::id());

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {err}", path.display());
            return None;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Some(path)
}

/// `{base}.{seconds}.{pid}`: two instances started together never share a file.
fn run_log_path(base: PathBuf, seconds: u64, pid: u32) -> PathBuf {
    let mut name = base.into_os_string();
    name.push(format!(".{seconds}.{pid}"));
    PathBuf::from(name)
}
