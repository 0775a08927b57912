use crate::types::{DateError, TransactionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Invalid transaction_date on line [{line}] for transaction [{transaction_id}]: {source}")]
    InvalidDate {
        line: u64,
        transaction_id: TransactionId,
        source: DateError
    }
}
