mod csv_source;
mod errors;

pub use csv_source::read_rows;
pub use errors::SourceError;
