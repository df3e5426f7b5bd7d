use thiserror::Error;

/// Errors converting wall-clock readings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// DOS dates cover 1980 through 2107 only.
    #[error("year {year} cannot be stored as a DOS date (1980..=2107)")]
    YearOutOfRange { year: u16 },

    /// A time or date field is outside its calendar range.
    #[error("{field} value {value} is out of range")]
    FieldOutOfRange { field: &'static str, value: u16 },
}
