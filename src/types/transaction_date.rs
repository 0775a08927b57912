use crate::types::errors::DateError;
use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const SOURCE_FORMAT: &str = "%d/%m/%Y";
const CANONICAL_FORMAT: &str = "%Y-%m-%d";
const YEAR_DIGITS: usize = 4;

/// Calendar date of a sale.
///
/// Parsed from the day/month/year form used by the point-of-sale export and
/// rendered in year-month-day form when written to the store.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct TransactionDate(NaiveDate);

impl Display for TransactionDate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl FromStr for TransactionDate {
    type Err = DateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() {
            return Err(DateError::Empty);
        }

        //NOTE: chrono's %Y accepts a sign and fewer than four digits, the year must be exactly four digits
        let year = value.rsplit('/').next().unwrap_or_default();

        if year.len() != YEAR_DIGITS || !year.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(DateError::InvalidYear { value: value.to_string() });
        }

        NaiveDate::parse_from_str(value, SOURCE_FORMAT)
            .map(TransactionDate)
            .map_err(|source| DateError::InvalidFormat { value: value.to_string(), source })
    }
}
