use thiserror::Error;

#[derive(Debug, Error)]
pub enum DateError {
    #[error("Date error: value is an empty string")]
    Empty,
    #[error("Date error: '{value}' does not end in a four digit year")]
    InvalidYear {
        value: String
    },
    #[error("Date error: '{value}' is not a DD/MM/YYYY date ({source})")]
    InvalidFormat {
        value: String,
        source: chrono::ParseError
    }
}
