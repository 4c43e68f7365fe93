use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::Subscriber;
use tracing_subscriber::fmt::format::FmtSpan;

/// JSON lines subscriber writing to `file`. ANSI is off and span close
/// events are included so capture timings show up.
pub fn file_subscriber(file: File) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(Mutex::new(file))
        .finish()
}

/// Routes all tracing output to `path` for the rest of the process.
pub fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("cannot create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .wrap_err_with(|| format!("cannot open log file {}", path.display()))?;

    tracing::subscriber::set_global_default(file_subscriber(file))
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}
