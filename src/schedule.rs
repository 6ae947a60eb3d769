//! Public entry point: picks the dated or the preview amortizer for a loan.

use log::{debug, warn};

use crate::amortize::{build_preview_schedule, build_schedule};
use crate::calendar::add_days;
use crate::due_dates::generate_payment_dates;
use crate::error::{Result, ScheduleError};
use crate::loan::{LoanTerms, ScheduleResult, ScheduleTotals, StartMode};

/// Builds the repayment schedule for `terms`.
///
/// Loans that start upon acceptance and have no start date yet get a preview
/// schedule with relative labels. Everything else needs a start date and gets
/// a dated schedule whose first due date is `start_date + first_payment_offset_days`,
/// pushed out by one period if that is not after the start date.
pub fn generate_repayment_schedule(terms: &LoanTerms) -> Result<ScheduleResult> {
    terms.validate()?;
    let count = terms.payment_count();

    let mut schedule = match (terms.start_mode, terms.start_date) {
        (StartMode::UponAcceptance, None) => {
            debug!(
                "no start date yet, previewing {} payments ({})",
                count, terms.frequency
            );
            build_preview_schedule(
                terms.principal_cents,
                terms.annual_rate_percent,
                terms.frequency,
                terms.first_payment_offset_days,
                count,
            )?
        }
        (StartMode::FixedDate, None) => return Err(ScheduleError::MissingStartDate),
        (_, Some(start_date)) => {
            let candidate = add_days(start_date, terms.first_payment_offset_days as u64)?;
            let dates = generate_payment_dates(start_date, candidate, terms.frequency, count)?;
            debug!(
                "dated schedule from {}, first due {} ({} payments, {})",
                start_date, dates.first_due_date, count, terms.frequency
            );
            let mut schedule = build_schedule(
                terms.principal_cents,
                terms.annual_rate_percent,
                count,
                &dates.dates,
                start_date,
            )?;
            schedule.first_due_date = Some(dates.first_due_date);
            schedule
        }
    };

    if let Some(code) = &terms.unknown_frequency_code {
        schedule
            .warnings
            .push(format!("unknown payment frequency {:?}, scheduled as monthly", code));
    }
    if terms.start_date.is_some() && count > 1 && terms.frequency.calendar_step().is_none() {
        warn!(
            "frequency {} has no calendar period, due dates after the first step monthly",
            terms.frequency
        );
        schedule.warnings.push(format!(
            "frequency {} has no calendar period, later due dates step monthly",
            terms.frequency
        ));
    }

    Ok(schedule)
}

/// Result of checking stored totals against freshly computed ones.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TotalsComparison {
    pub matches: bool,
    /// `recomputed - stored`
    pub interest_diff_cents: i64,
    /// `recomputed - stored`
    pub total_diff_cents: i64,
}

/// Exact comparison, no tolerance: any cent of drift is reported.
pub fn compare_totals(stored: &ScheduleTotals, recomputed: &ScheduleTotals) -> TotalsComparison {
    let interest_diff_cents = recomputed.total_interest_cents - stored.total_interest_cents;
    let total_diff_cents = recomputed.total_to_repay_cents - stored.total_to_repay_cents;
    TotalsComparison {
        matches: interest_diff_cents == 0 && total_diff_cents == 0,
        interest_diff_cents,
        total_diff_cents,
    }
}
