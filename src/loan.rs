use chrono::NaiveDate;
use std::fmt;

use crate::error::{Result, ScheduleError};
use crate::frequency::Frequency;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RepaymentType {
    OneTime,
    Installments,
}

impl RepaymentType {
    pub fn from_code(code: &str) -> Option<RepaymentType> {
        match code.trim() {
            "one_time" => Some(RepaymentType::OneTime),
            "installments" => Some(RepaymentType::Installments),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StartMode {
    FixedDate,
    UponAcceptance,
}

impl StartMode {
    pub fn from_code(code: &str) -> Option<StartMode> {
        match code.trim() {
            "fixed_date" => Some(StartMode::FixedDate),
            "upon_acceptance" => Some(StartMode::UponAcceptance),
            _ => None,
        }
    }
}

/// Loan fields as the application stores them.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoanRecord {
    pub principal_cents: i64,
    pub interest_rate_percent: f64,
    pub repayment_type: String,
    pub installment_count: Option<u32>,
    pub payment_frequency: String,
    pub loan_start_mode: String,
    pub loan_start_date: Option<String>,
    pub first_payment_offset_days: i64,
}

/// Validated loan terms the schedule engine works from.
#[derive(Clone, PartialEq, Debug)]
pub struct LoanTerms {
    pub principal_cents: i64,
    pub annual_rate_percent: f64,
    pub repayment_type: RepaymentType,
    pub installment_count: u32,
    pub frequency: Frequency,
    pub start_mode: StartMode,
    pub start_date: Option<NaiveDate>,
    pub first_payment_offset_days: u32,
    /// Stored frequency code that was not recognised, if monthly was substituted.
    pub unknown_frequency_code: Option<String>,
}

impl LoanTerms {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        principal_cents: i64,
        annual_rate_percent: f64,
        repayment_type: RepaymentType,
        installment_count: u32,
        frequency: Frequency,
        start_mode: StartMode,
        start_date: Option<NaiveDate>,
        first_payment_offset_days: u32,
    ) -> Self {
        Self {
            principal_cents,
            annual_rate_percent,
            repayment_type,
            installment_count,
            frequency,
            start_mode,
            start_date,
            first_payment_offset_days,
            unknown_frequency_code: None,
        }
    }

    /// Builds terms from a stored record. Malformed money-affecting fields are
    /// errors; an unknown frequency code is not (see [`Frequency::resolve`]).
    pub fn from_record(record: &LoanRecord) -> Result<Self> {
        let repayment_type = RepaymentType::from_code(&record.repayment_type).ok_or_else(|| {
            invalid("repayment_type", format!("unknown code {:?}", record.repayment_type))
        })?;
        let start_mode = StartMode::from_code(&record.loan_start_mode).ok_or_else(|| {
            invalid("loan_start_mode", format!("unknown code {:?}", record.loan_start_mode))
        })?;
        let first_payment_offset_days = u32::try_from(record.first_payment_offset_days)
            .map_err(|_| {
                invalid(
                    "first_payment_offset_days",
                    format!("{} is out of range", record.first_payment_offset_days),
                )
            })?;

        let start_date = match record.loan_start_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(parse_iso_date("loan_start_date", value)?),
        };

        let installment_count = match (repayment_type, record.installment_count) {
            (RepaymentType::OneTime, count) => count.unwrap_or(1),
            (RepaymentType::Installments, Some(count)) => count,
            (RepaymentType::Installments, None) => {
                return Err(invalid(
                    "installment_count",
                    "required for installment loans".to_string(),
                ))
            }
        };

        let resolved = Frequency::resolve(&record.payment_frequency);

        let terms = Self {
            principal_cents: record.principal_cents,
            annual_rate_percent: record.interest_rate_percent,
            repayment_type,
            installment_count,
            frequency: resolved.frequency,
            start_mode,
            start_date,
            first_payment_offset_days,
            unknown_frequency_code: resolved.fell_back.then_some(resolved.code),
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Number of scheduled payments: always 1 for one-time loans.
    pub fn payment_count(&self) -> u32 {
        match self.repayment_type {
            RepaymentType::OneTime => 1,
            RepaymentType::Installments => self.installment_count,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.principal_cents < 0 {
            return Err(invalid(
                "principal_cents",
                format!("must not be negative, got {}", self.principal_cents),
            ));
        }
        if !self.annual_rate_percent.is_finite() || self.annual_rate_percent < 0. {
            return Err(invalid(
                "annual_rate_percent",
                format!("must be a non-negative number, got {}", self.annual_rate_percent),
            ));
        }
        let count = self.payment_count();
        if count < 1 {
            return Err(ScheduleError::InvalidInstallmentCount { count });
        }
        Ok(())
    }
}

/// Accepts `YYYY-MM-DD` as well as full ISO timestamps (`T` or space after the
/// date), keeping only the date.
pub fn parse_iso_date(field: &str, value: &str) -> Result<NaiveDate> {
    let date_part = match value.get(10..11) {
        Some("T") | Some(" ") => &value[..10],
        _ => value,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| ScheduleError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn invalid(field: &str, reason: String) -> ScheduleError {
    ScheduleError::InvalidInput {
        field: field.to_string(),
        reason,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScheduleMode {
    /// Dated schedule from a known start date.
    Actual,
    /// Relative schedule for loans without a start date yet.
    Preview,
}

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleRow {
    pub index: u32,
    pub date: Option<NaiveDate>,
    pub date_label: String,
    pub principal_cents: i64,
    pub interest_cents: i64,
    pub total_payment_cents: i64,
    pub remaining_balance_cents: i64,
}

impl ScheduleRow {
    pub fn new(
        index: u32,
        date: Option<NaiveDate>,
        date_label: String,
        principal_cents: i64,
        interest_cents: i64,
        remaining_balance_cents: i64,
    ) -> Self {
        Self {
            index,
            date,
            date_label,
            principal_cents,
            interest_cents,
            total_payment_cents: principal_cents + interest_cents,
            remaining_balance_cents,
        }
    }
}

impl fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pmt number {}, {}, principal {}, interest {}, payment {}, remaining {}",
            self.index,
            self.date_label,
            self.principal_cents,
            self.interest_cents,
            self.total_payment_cents,
            self.remaining_balance_cents
        )
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleTotals {
    pub total_interest_cents: i64,
    pub total_to_repay_cents: i64,
}

#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleResult {
    pub mode: ScheduleMode,
    pub rows: Vec<ScheduleRow>,
    pub total_interest_cents: i64,
    pub total_to_repay_cents: i64,
    /// First due date after normalization; dated schedules only.
    pub first_due_date: Option<NaiveDate>,
    pub warnings: Vec<String>,
}

impl ScheduleResult {
    pub fn totals(&self) -> ScheduleTotals {
        ScheduleTotals {
            total_interest_cents: self.total_interest_cents,
            total_to_repay_cents: self.total_to_repay_cents,
        }
    }

    pub fn principal_cents(&self) -> i64 {
        self.rows.iter().map(|row| row.principal_cents).sum()
    }
}
