//! Persistence for the organizer tree.
//!
//! Three formats live here:
//! - the JSON document, the current on-disk representation
//! - the plain-text layout config, used once to build a fresh organizer when
//!   no document exists yet
//! - the legacy redb store, read only by the conversion utility

use crate::config::Config;
use crate::model::Organizer;
use thiserror::Error;

pub mod document;
pub mod layout_conf;
pub mod legacy;

pub use document::{DocumentError, read_document, write_document};
pub use layout_conf::{LayoutConfError, parse_layout_conf, read_layout_conf};
pub use legacy::{LegacyStoreError, read_legacy_store};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("layout config error: {0}")]
    LayoutConf(#[from] LayoutConfError),

    #[error("legacy store error: {0}")]
    Legacy(#[from] LegacyStoreError),
}

/// Loads the organizer at startup: the document when present, otherwise a
/// fresh one built from the layout config.
pub fn load_or_init(config: &Config) -> Result<Organizer, StoreError> {
    match document::read_document(&config.document_path())? {
        Some(organizer) => Ok(organizer),
        None => Ok(layout_conf::read_layout_conf(&config.layout_conf_path())?),
    }
}

/// Saves the whole document, replacing the previous one.
pub fn save(config: &Config, organizer: &Organizer) -> Result<(), StoreError> {
    Ok(document::write_document(
        &config.document_path(),
        organizer,
    )?)
}

#[cfg(test)]
mod tests;
