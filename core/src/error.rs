use crate::config::AppConfigError;
use crate::model::ModelError;
use crate::storage::StoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] AppConfigError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
