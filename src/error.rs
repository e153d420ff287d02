use chrono::{DateTime, Utc};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("invalid date range: {start} .. {end}")]
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("invalid option: {0}")]
    InvalidOption(String),
    #[error("event title must not be empty")]
    EmptyTitle,
}
