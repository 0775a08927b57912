use tracing::{error, info};

use crate::config::LoaderConfig;
use crate::engine::errors::LoaderError;
use crate::models::transform_all;
use crate::source::read_rows;
use crate::storage::{SqlSession, StoreError};

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LoadReport {
    /// Data rows read from the source file.
    pub rows_read: usize,
    /// Rows the database reported as inserted.
    pub rows_committed: u64
}

/// Reads a point-of-sale CSV export, rewrites its dates and bulk-loads it into
/// the `transactions` table in one database transaction.
pub struct Loader {
    config: LoaderConfig
}

impl Loader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Runs the load end to end.
    ///
    /// The source is read and transformed completely before a connection is
    /// opened, so source and date errors never touch the database. The session
    /// is closed on every path once it is open.
    ///
    /// # Errors
    /// Returns `LoaderError` for an unreadable source, a malformed date, a
    /// failed connection, or a failed write. A failed write leaves nothing
    /// committed.
    pub async fn run(&self) -> Result<LoadReport, LoaderError> {
        let rows = read_rows(&self.config.source_path)?;
        let rows_read = rows.len();
        info!("Read {} rows from {}", rows_read, self.config.source_path.display());

        let records = transform_all(rows)?;

        let url = self.config.connection_url()?;
        let mut session = SqlSession::connect(&url).await?;

        let result = session.insert_all(&records, self.config.batch_size).await;

        if let Err(close_error) = session.close().await {
            log_close_failure(&close_error);
        }

        let rows_committed = result?;

        Ok(LoadReport { rows_read, rows_committed })
    }
}

/// A failed close does not change the load result, so it is only reported.
pub(super) fn log_close_failure(close_error: &StoreError) {
    error!("{close_error}");
}
