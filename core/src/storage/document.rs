//! The organizer document: one pretty-printed JSON file holding the whole
//! tree, replaced by a single write at save time.

use crate::model::{ModelError, Organizer};
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid document: {0}")]
    Invalid(#[from] ModelError),
}

/// Reads and validates the organizer document.
///
/// Returns `Ok(None)` when the file does not exist; anything else that
/// prevents a full load is an error, and no partial state escapes.
pub fn read_document(path: &Path) -> Result<Option<Organizer>, DocumentError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let organizer: Organizer = serde_json::from_str(&content)?;
    organizer.validate()?;

    Ok(Some(organizer))
}

/// Writes the whole document, pretty-printed so it stays human-diffable.
pub fn write_document(path: &Path, organizer: &Organizer) -> Result<(), DocumentError> {
    let content = serde_json::to_string_pretty(organizer)?;
    std::fs::write(path, content)?;

    Ok(())
}
