use std::num::NonZeroUsize;

use sqlx::any::install_default_drivers;
use sqlx::AnyConnection;
use sqlx::{Any, Connection, QueryBuilder};
use tracing::{debug, info, warn};

use crate::models::TransactionRecord;
use crate::storage::errors::StoreError;
use crate::storage::TRANSACTIONS_TABLE;

/// A single database session used for one load.
///
/// The session must be released with `close`, on success and on failure.
pub struct SqlSession {
    connection: AnyConnection
}

impl SqlSession {
    /// Opens a session for a `mysql://` or `sqlite:` URL.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        install_default_drivers();

        let connection = AnyConnection::connect(url).await.map_err(StoreError::Connect)?;

        debug!("Database session opened");

        Ok(Self { connection })
    }

    /// Writes every record inside one database transaction.
    ///
    /// Records are sent as multi-row INSERT statements of at most `batch_size`
    /// rows. Either every record is committed or the transaction is rolled back
    /// and none are. An empty slice commits an empty transaction.
    ///
    /// Returns the number of rows the database reported as inserted.
    pub async fn insert_all(&mut self, records: &[TransactionRecord], batch_size: NonZeroUsize) -> Result<u64, StoreError> {
        let mut transaction = self.connection.begin().await.map_err(StoreError::Begin)?;

        match insert_chunks(&mut transaction, records, batch_size).await {
            Ok(rows_affected) => {
                transaction.commit().await.map_err(StoreError::Commit)?;
                info!("Committed {} rows to [{}]", rows_affected, TRANSACTIONS_TABLE);
                Ok(rows_affected)
            }
            Err(error) => {
                if let Err(rollback_error) = transaction.rollback().await {
                    warn!("Rollback after failed insert did not complete: {rollback_error}");
                }
                Err(error)
            }
        }
    }

    /// Releases the session.
    pub async fn close(self) -> Result<(), StoreError> {
        self.connection.close().await.map_err(StoreError::Close)?;
        debug!("Database session closed");
        Ok(())
    }
}

async fn insert_chunks(connection: &mut AnyConnection, records: &[TransactionRecord], batch_size: NonZeroUsize) -> Result<u64, StoreError> {
    let mut rows_affected = 0;

    for (index, chunk) in records.chunks(batch_size.get()).enumerate() {
        let first_row = index * batch_size.get();
        let last_row = first_row + chunk.len() - 1;

        let result = insert_statement(chunk).build()
            .execute(&mut *connection)
            .await
            .map_err(|source| StoreError::Write { first_row, last_row, source })?;

        debug!("Inserted rows [{first_row}..{last_row}] ({} affected)", result.rows_affected());
        rows_affected += result.rows_affected();
    }

    Ok(rows_affected)
}

fn insert_statement(chunk: &[TransactionRecord]) -> QueryBuilder<'static, Any> {
    let mut builder = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) ",
        TRANSACTIONS_TABLE,
        TransactionRecord::COLUMNS.join(", ")
    ));

    // Bind order must follow TransactionRecord::COLUMNS.
    builder.push_values(chunk, |mut row, record| {
        row.push_bind(record.transaction_id.clone())
            .push_bind(record.transaction_date.to_string())
            .push_bind(record.transaction_time.clone())
            .push_bind(record.transaction_qty)
            .push_bind(record.store_id)
            .push_bind(record.store_location.clone())
            .push_bind(record.product_id)
            .push_bind(record.unit_price.to_string())
            .push_bind(record.product_category.clone())
            .push_bind(record.product_type.clone())
            .push_bind(record.product_detail.clone());
    });

    builder
}
