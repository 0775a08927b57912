mod errors;
mod sql_session;

use crate::models::TransactionRecord;

pub use errors::StoreError;
pub use sql_session::SqlSession;

/// Destination table for point-of-sale transactions.
pub const TRANSACTIONS_TABLE: &str = "transactions";

/// Bind parameters one statement may carry. SQLite's default limit (32766)
/// is the lower of the supported backends; MySQL allows 65535.
pub const MAX_BIND_PARAMETERS: usize = 32_766;

/// Largest number of rows a single INSERT can hold.
pub const MAX_BATCH_SIZE: usize = MAX_BIND_PARAMETERS / TransactionRecord::COLUMNS.len();
