//! Loading gameplay tuning from JSON files.

use std::path::{Path, PathBuf};

use skyraid_core::tuning::{InvalidTuning, Tuning};

/// Failure to produce a usable `Tuning`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(#[from] InvalidTuning),
}

/// Parse and validate tuning from a JSON string. Missing fields take defaults.
pub fn parse_tuning(json: &str) -> Result<Tuning, ConfigError> {
    let tuning: Tuning = serde_json::from_str(json)?;
    tuning.validate()?;
    Ok(tuning)
}

/// Read, parse and validate a tuning file.
pub fn load_tuning(path: &Path) -> Result<Tuning, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tuning = parse_tuning(&json)?;
    log::info!("loaded tuning from {}", path.display());
    Ok(tuning)
}
