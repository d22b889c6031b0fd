use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueFileError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid NaviCue JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode NaviCue JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Read a JSON array of cues (raw or enhanced) from disk.
pub fn read_cues<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CueFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| CueFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cues: Vec<T> = serde_json::from_str(&content).map_err(|source| CueFileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(target: "navicue::io", path = %path.display(), count = cues.len(), "Read cues");
    Ok(cues)
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CueFileError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write `value` as pretty JSON to `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CueFileError> {
    let json = to_json(value)?;
    std::fs::write(path, json).map_err(|source| CueFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(target: "navicue::io", path = %path.display(), "Wrote output");
    Ok(())
}
