//! File logging setup.
//!
//! Tracing output goes to a log file under the user's data directory so it
//! never corrupts the terminal UI. The filter defaults to `deskpad=info`
//! and can be overridden with `RUST_LOG`.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub fn init() -> Option<PathBuf> {
    let dir = dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("deskpad")
        .join("logs");
    fs::create_dir_all(&dir).ok()?;
    let path = dir.join("deskpad.log");
    let file = File::create(&path).ok()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("deskpad=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    tracing::info!(path = %path.display(), "logging initialized");
    Some(path)
}
