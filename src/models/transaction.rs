use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::errors::TransformError;
use crate::types::{ProductId, Quantity, StoreId, TransactionDate, TransactionId};

/// Represents a single row from the point-of-sale CSV export.
///
/// Every field except `transaction_date` is carried to the store as read.
/// The date is kept as text here so that a malformed value is reported by the
/// transform step together with the line it came from.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRow {
    /// Line in the source file, filled in by the reader.
    #[serde(skip)]
    pub line: u64,
    pub transaction_id: TransactionId,
    /// Day/month/year, e.g. `01/02/2023`.
    pub transaction_date: String,
    pub transaction_time: String,
    pub transaction_qty: Quantity,
    pub store_id: StoreId,
    pub store_location: String,
    pub product_id: ProductId,
    /// Read from its textual form so the source scale (`3.50`) survives.
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    pub product_category: String,
    pub product_type: String,
    pub product_detail: String
}

impl SourceRow {
    /// Rewrites `transaction_date` into a `TransactionDate`, the only transform applied.
    ///
    /// # Errors
    /// Returns `TransformError::InvalidDate` if the date is empty or not in
    /// `DD/MM/YYYY` form.
    pub fn into_record(self) -> Result<TransactionRecord, TransformError> {
        let transaction_date = self.transaction_date.parse::<TransactionDate>()
            .map_err(|source| TransformError::InvalidDate {
                line: self.line,
                transaction_id: self.transaction_id.clone(),
                source
            })?;

        Ok(TransactionRecord {
            transaction_id: self.transaction_id,
            transaction_date,
            transaction_time: self.transaction_time,
            transaction_qty: self.transaction_qty,
            store_id: self.store_id,
            store_location: self.store_location,
            product_id: self.product_id,
            unit_price: self.unit_price,
            product_category: self.product_category,
            product_type: self.product_type,
            product_detail: self.product_detail
        })
    }
}

/// A transformed row, ready to be written to the `transactions` table.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub transaction_id: TransactionId,
    pub transaction_date: TransactionDate,
    pub transaction_time: String,
    pub transaction_qty: Quantity,
    pub store_id: StoreId,
    pub store_location: String,
    pub product_id: ProductId,
    pub unit_price: Decimal,
    pub product_category: String,
    pub product_type: String,
    pub product_detail: String
}

impl TransactionRecord {
    /// Destination columns, in the order values are bound.
    pub const COLUMNS: [&'static str; 11] = [
        "transaction_id",
        "transaction_date",
        "transaction_time",
        "transaction_qty",
        "store_id",
        "store_location",
        "product_id",
        "unit_price",
        "product_category",
        "product_type",
        "product_detail"
    ];
}
