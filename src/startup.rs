use crate::config::Config;
use crate::error::{Error, RosterResult};
use std::io::Read;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Read the OCR text of every sheet and join it the way the OCR results are merged.
///
/// Reads stdin when no file is given.
pub fn read_roster_text(files: &[PathBuf]) -> RosterResult<String> {
    if files.is_empty() {
        info!("Reading roster text from stdin");
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let mut sheets = Vec::with_capacity(files.len());
    for file in files {
        info!("Reading roster text from {}", file.display());
        sheets.push(std::fs::read_to_string(file)?);
    }

    Ok(sheets.join("\n"))
}
