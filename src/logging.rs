use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::APP_DIR;

/// `<cache dir>/ott-launcher/ott-launcher.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join(APP_DIR).join("ott-launcher.log"))
}

/// Send tracing output to `log_path`; the terminal belongs to the UI.
///
/// `RUST_LOG` takes precedence over the verbosity flag. The returned guard
/// flushes pending lines when dropped, so `main` holds it until exit.
pub fn init(log_path: &Path, verbose: bool) -> Option<WorkerGuard> {
    let parent = log_path.parent()?;
    std::fs::create_dir_all(parent).ok()?;
    let file_appender = tracing_appender::rolling::never(parent, log_path.file_name()?);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "ott_launcher=debug"
        } else {
            "ott_launcher=info"
        })
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .ok()?;

    Some(guard)
}
