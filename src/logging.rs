use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE: &str = "wordfall.log";
const DEFAULT_FILTER: &str = "wordfall=info,warn";

/// Send diagnostics to `<dir>/wordfall.log`; the terminal belongs to the game.
/// `RUST_LOG` overrides the default filter. Keep the guard alive until exit so
/// buffered lines get flushed.
pub fn init(dir: &Path) -> io::Result<WorkerGuard> {
    fs::create_dir_all(dir)?;
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .map_err(io::Error::other)?;

    Ok(guard)
}
