use thiserror::Error;

#[derive(Error, Debug)]
pub enum LunarError {
    #[error("Invalid date string: {0}")]
    InvalidDate(String),

    #[error("Invalid ephemeris span parameter: {0}")]
    InvalidSpanParameter(String),

    #[error("Unable to write the CSV ephemeris: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for LunarError {
    fn eq(&self, other: &Self) -> bool {
        use LunarError::*;
        match (self, other) {
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (InvalidSpanParameter(a), InvalidSpanParameter(b)) => a == b,

            // These errors carry no comparable payload: equal if same variant
            (CsvError(_), CsvError(_)) => true,
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
