use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: a database name is required when no database URL is given")]
    MissingDatabaseName,
    #[error("Config error: invalid database host [{host}]: {source}")]
    InvalidHost {
        host: String,
        source: url::ParseError
    },
    #[error("Config error: database credentials cannot be set on {0}")]
    InvalidCredentials(String)
}
