//! Reader for the store written by releases that predate the JSON document.
//!
//! The legacy format is a redb database holding one record under the
//! `"organizer"` key: a version byte followed by a postcard-encoded tree.
//! Nothing in the app writes this format anymore; `gaveta-convert` reads it
//! and emits the document instead.

use crate::model::{ItemNameError, Organizer};
use redb::{ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use thiserror::Error;

pub mod v1;

const ORGANIZER_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("organizer");
const ORGANIZER_KEY: &str = "organizer";

#[derive(Debug, Error)]
pub enum LegacyStoreError {
    #[error("database error: {0}")]
    Redb(#[from] redb::DatabaseError),

    #[error("table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("store has no organizer record")]
    MissingRecord,

    #[error("empty organizer record")]
    EmptyRecord,

    #[error("unsupported record version {0}")]
    UnsupportedVersion(u8),

    #[error("decode error: {0}")]
    Decode(#[from] postcard::Error),

    #[error("invalid item name: {0}")]
    InvalidName(#[from] ItemNameError),
}

pub trait RecordVariant {
    const VERSION: u8;
}

/// The record as stored: a version byte in front of a postcard payload.
#[derive(Debug, Clone)]
pub enum VersionedRecord {
    V1(v1::OrganizerRecord),
}

impl VersionedRecord {
    pub fn decode(data: &[u8]) -> Result<Self, LegacyStoreError> {
        let (version, payload) = data.split_first().ok_or(LegacyStoreError::EmptyRecord)?;
        match *version {
            v1::OrganizerRecord::VERSION => Ok(Self::V1(postcard::from_bytes(payload)?)),
            version => Err(LegacyStoreError::UnsupportedVersion(version)),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, LegacyStoreError> {
        match self {
            Self::V1(record) => {
                Ok(postcard::to_extend(record, vec![v1::OrganizerRecord::VERSION])?)
            }
        }
    }

    fn into_latest(self) -> v1::OrganizerRecord {
        match self {
            Self::V1(record) => record,
        }
    }
}

/// Reads the organizer tree out of a legacy store.
pub fn read_legacy_store(path: &Path) -> Result<Organizer, LegacyStoreError> {
    let db = redb::Database::open(path)?;
    let read_txn = db.begin_read()?;
    let table = read_txn.open_table(ORGANIZER_TABLE)?;

    let record = {
        let guard = table
            .get(ORGANIZER_KEY)?
            .ok_or(LegacyStoreError::MissingRecord)?;
        VersionedRecord::decode(guard.value())?.into_latest()
    };

    Ok(Organizer::try_from(record)?)
}
