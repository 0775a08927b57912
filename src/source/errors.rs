use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Error opening CSV at path: {path} | {source}")]
    Open {
        path: PathBuf,
        source: io::Error
    },
    #[error("CSV at path: {path} is missing required column [{column}]")]
    MissingColumn {
        path: PathBuf,
        column: &'static str
    },
    #[error("CSV deserialization error: {0}")]
    Csv(#[from] csv::Error)
}
