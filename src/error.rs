use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("a loan start date is required to build a dated schedule")]
    MissingStartDate,

    #[error("installment count must be at least 1, got {count}")]
    InvalidInstallmentCount { count: u32 },

    #[error("invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("invalid date in {field}: {value:?}")]
    InvalidDate { field: String, value: String },

    #[error("date arithmetic overflowed from {date}")]
    DateOverflow { date: NaiveDate },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
