mod errors;
mod transaction;

pub use errors::TransformError;
pub use transaction::{SourceRow, TransactionRecord};

/// Applies the date rewrite to every row, stopping at the first failure.
pub fn transform_all(rows: Vec<SourceRow>) -> Result<Vec<TransactionRecord>, TransformError> {
    rows.into_iter().map(SourceRow::into_record).collect()
}
