// Entry point for the batch converter. The library crate holds everything else.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use webp_converter_lib::core::DEFAULT_ROOT_DIR;
use webp_converter_lib::{ConvertSettings, convert_tree};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stdout)
        .compact()                // Use compact formatter instead of pretty
        .init();

    let settings = ConvertSettings::with_root(default_root()?);
    debug!("Scanning root {}", settings.root.display());

    convert_tree(&settings)
        .with_context(|| format!("Conversion of {} aborted", settings.root.display()))?;

    Ok(())
}

/// `public`, next to the executable.
fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Cannot locate the running executable")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(dir.join(DEFAULT_ROOT_DIR))
}
