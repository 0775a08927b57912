use thiserror::Error;

use crate::config::ConfigError;
use crate::models::TransformError;
use crate::source::SourceError;
use crate::storage::StoreError;

/// Any failure that aborts a load. Nothing is committed when one is returned.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Store(#[from] StoreError)
}
