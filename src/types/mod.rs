mod errors;
mod transaction_date;

pub use errors::DateError;
pub use transaction_date::TransactionDate;

pub type TransactionId = String;
pub type Quantity = i32;
pub type StoreId = i64;
pub type ProductId = i64;
