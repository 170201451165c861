// File: ./src/logging.rs
// Log file and panic hook setup. The terminal belongs to the UI, so both go to files.
use crate::context::AppContext;
use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Installs a file logger at `level`. Returns the log path.
pub fn init(ctx: &dyn AppContext, level: LevelFilter) -> Result<PathBuf> {
    let path = ctx.get_log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level, config, file).context("Logger already initialized")?;
    log::info!(
        "vpa v{} started, logging at {}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(path)
}

/// Appends panic info to the panic log, then runs the default hook.
pub fn install_panic_hook(ctx: &dyn AppContext) {
    let panic_path = ctx.get_panic_log_path();
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Some(path) = &panic_path
            && let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path)
        {
            let _ = writeln!(file, "PANIC: {}", info);
        }
        default_hook(info);
    }));
}
