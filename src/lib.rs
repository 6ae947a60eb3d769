//! Repayment schedules for person-to-person loans.
//!
//! Given a loan's terms the engine produces either a dated equal-principal
//! schedule (once the loan has a start date) or a relative preview schedule
//! (while it is still pending acceptance). Both carry the same rows and totals,
//! in integer cents.
//!
//! ```
//! use chrono::NaiveDate;
//! use repayment::{generate_repayment_schedule, Frequency, LoanTerms, RepaymentType, StartMode};
//!
//! let terms = LoanTerms::new(
//!     400000,
//!     5.,
//!     RepaymentType::Installments,
//!     6,
//!     Frequency::Monthly,
//!     StartMode::FixedDate,
//!     NaiveDate::from_ymd_opt(2025, 1, 1),
//!     31,
//! );
//! let schedule = generate_repayment_schedule(&terms).unwrap();
//! assert_eq!(schedule.rows.len(), 6);
//! assert_eq!(schedule.total_to_repay_cents, 400000 + schedule.total_interest_cents);
//! ```

pub mod amortize;
pub mod calendar;
pub mod due_dates;
pub mod error;
pub mod format;
pub mod frequency;
pub mod label;
pub mod loan;
pub mod schedule;

pub use error::{Result, ScheduleError};
pub use format::{render_schedule, MoneyFormat};
pub use frequency::Frequency;
pub use loan::{
    LoanRecord, LoanTerms, RepaymentType, ScheduleMode, ScheduleResult, ScheduleRow,
    ScheduleTotals, StartMode,
};
pub use schedule::{compare_totals, generate_repayment_schedule, TotalsComparison};
