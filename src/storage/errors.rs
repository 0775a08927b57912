use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not connect to the database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("Could not begin a database transaction: {0}")]
    Begin(#[source] sqlx::Error),
    #[error("Insert of rows [{first_row}..{last_row}] failed, nothing was committed: {source}")]
    Write {
        first_row: usize,
        last_row: usize,
        source: sqlx::Error
    },
    #[error("Commit failed, nothing was committed: {0}")]
    Commit(#[source] sqlx::Error),
    #[error("Could not close the database session: {0}")]
    Close(#[source] sqlx::Error)
}
