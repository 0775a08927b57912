use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Args;
use url::Url;

use crate::config::errors::ConfigError;
use crate::storage::MAX_BATCH_SIZE;

/// Everything a load needs, supplied once at the process boundary.
///
/// Connection parameters are either the individual MySQL parts or a complete
/// `database_url`, which takes precedence (e.g. `sqlite://loads.db`).
#[derive(Clone, Args)]
pub struct LoaderConfig {
    /// CSV export of point-of-sale transactions
    pub source_path: PathBuf,

    /// Database host
    #[arg(long, env = "LOADER_DB_HOST", default_value = "127.0.0.1")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "LOADER_DB_PORT", default_value_t = 3306)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "LOADER_DB_USER", default_value = "root")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "LOADER_DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    /// Database (schema) holding the `transactions` table
    #[arg(long, env = "LOADER_DB_NAME", required_unless_present = "database_url")]
    pub db_name: Option<String>,

    /// Full connection URL, overrides the individual connection flags
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Rows per INSERT statement (1 to 2978); all statements share one database transaction
    #[arg(long, env = "LOADER_BATCH_SIZE", default_value = "1000", value_parser = parse_batch_size)]
    pub batch_size: NonZeroUsize
}

impl LoaderConfig {
    /// Resolves the connection URL, percent-encoding credentials when it is
    /// assembled from parts.
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }

        let db_name = self.db_name.as_deref().ok_or(ConfigError::MissingDatabaseName)?;

        let mut url = Url::parse(&format!("mysql://{}:{}", self.db_host, self.db_port))
            .map_err(|source| ConfigError::InvalidHost { host: self.db_host.clone(), source })?;

        url.set_username(&self.db_user)
            .map_err(|_| ConfigError::InvalidCredentials(self.db_host.clone()))?;

        if !self.db_password.is_empty() {
            url.set_password(Some(&self.db_password))
                .map_err(|_| ConfigError::InvalidCredentials(self.db_host.clone()))?;
        }

        url.set_path(&format!("/{db_name}"));

        Ok(url.into())
    }
}

/// Accepts a row count whose INSERT stays within the bind parameter limit.
pub fn parse_batch_size(value: &str) -> Result<NonZeroUsize, String> {
    let batch_size: NonZeroUsize = value.parse()
        .map_err(|_| format!("'{value}' is not a positive whole number"))?;

    if batch_size.get() > MAX_BATCH_SIZE {
        return Err(format!("{batch_size} rows exceeds the maximum of {MAX_BATCH_SIZE} rows per INSERT"));
    }

    Ok(batch_size)
}

impl fmt::Debug for LoaderConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("LoaderConfig")
            .field("source_path", &self.source_path)
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &"<redacted>")
            .field("db_name", &self.db_name)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("batch_size", &self.batch_size)
            .finish()
    }
}
