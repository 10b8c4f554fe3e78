//! Demand input error types.

use crate::domain::TimeError;

/// Errors that can occur while reading or aggregating demand.
#[derive(Debug, thiserror::Error)]
pub enum DemandError {
    /// The CSV stream could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The demand file could not be opened
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record's `time` field is not a valid "HH:MM" label
    #[error("row {row}: {source}")]
    InvalidTime { row: usize, source: TimeError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClockTime;

    #[test]
    fn error_display() {
        let source = ClockTime::parse("8am").unwrap_err();
        let err = DemandError::InvalidTime { row: 3, source };
        assert_eq!(err.to_string(), "row 3: invalid time: expected HH:MM format");

        let err = DemandError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "demand.csv",
        ));
        assert_eq!(err.to_string(), "I/O error: demand.csv");
    }
}
