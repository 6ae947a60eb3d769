use chrono::NaiveDate;
use log::trace;

use crate::error::{Result, ScheduleError};
use crate::frequency::Frequency;
use crate::label::relative_label;
use crate::loan::{ScheduleMode, ScheduleResult, ScheduleRow};

/// Simple daily rate over a fixed 365-day year, no leap-year adjustment.
pub const DAYS_PER_YEAR: f64 = 365.;

/// Balances below one cent are treated as paid off.
const ROUNDING_EPSILON_CENTS: f64 = 1.;

pub fn daily_rate(annual_rate_percent: f64) -> f64 {
    (annual_rate_percent / 100.) / DAYS_PER_YEAR
}

fn round_cents(amount: f64) -> i64 {
    if amount == 0. {
        0
    } else {
        amount.round() as i64
    }
}

/// One accrual period handed to the amortization loop.
struct Period {
    days: i64,
    date: Option<NaiveDate>,
    label: String,
}

/// Equal-principal amortization with simple daily interest on the outstanding
/// balance. Every monetary figure is rounded to the cent as it is produced and
/// the total interest is the sum of the rounded row interest.
fn amortize(
    principal_cents: i64,
    annual_rate_percent: f64,
    count: u32,
    mut period_for: impl FnMut(u32) -> Period,
) -> (Vec<ScheduleRow>, i64) {
    let daily_rate = daily_rate(annual_rate_percent);
    let principal = principal_cents as f64;
    let principal_per_payment = principal / count as f64;

    let mut rows = Vec::with_capacity(count as usize);
    let mut total_interest_cents = 0;

    for index in 1..=count {
        let period = period_for(index);
        let outstanding_before = principal - principal_per_payment * (index - 1) as f64;
        let interest_cents = round_cents(outstanding_before * daily_rate * period.days as f64);

        let remaining = outstanding_before - principal_per_payment;
        let remaining_cents = if remaining < ROUNDING_EPSILON_CENTS {
            0
        } else {
            round_cents(remaining)
        };

        trace!(
            "pmt # {}, {} days on {:.4} cents, interest {}, remaining {}",
            index,
            period.days,
            outstanding_before,
            interest_cents,
            remaining_cents
        );

        total_interest_cents += interest_cents;
        rows.push(ScheduleRow::new(
            index,
            period.date,
            period.label,
            round_cents(principal_per_payment),
            interest_cents,
            remaining_cents,
        ));
    }

    (rows, total_interest_cents)
}

fn check_count(count: u32) -> Result<()> {
    if count < 1 {
        return Err(ScheduleError::InvalidInstallmentCount { count });
    }
    Ok(())
}

/// Dated schedule: interest for each row accrues over the actual days since
/// the previous payment date, or since `start_date` for the first row.
///
/// `payment_dates` must be sorted ascending with one date per installment.
pub fn build_schedule(
    principal_cents: i64,
    annual_rate_percent: f64,
    count: u32,
    payment_dates: &[NaiveDate],
    start_date: NaiveDate,
) -> Result<ScheduleResult> {
    check_count(count)?;
    if payment_dates.len() != count as usize {
        return Err(ScheduleError::InvalidInput {
            field: "payment_dates".to_string(),
            reason: format!("expected {} dates, got {}", count, payment_dates.len()),
        });
    }

    let (rows, total_interest_cents) =
        amortize(principal_cents, annual_rate_percent, count, |index| {
            let i = (index - 1) as usize;
            let previous = if i == 0 { start_date } else { payment_dates[i - 1] };
            let date = payment_dates[i];
            Period {
                days: date.signed_duration_since(previous).num_days(),
                date: Some(date),
                label: date.format("%Y-%m-%d").to_string(),
            }
        });

    Ok(ScheduleResult {
        mode: ScheduleMode::Actual,
        rows,
        total_interest_cents,
        total_to_repay_cents: principal_cents + total_interest_cents,
        first_due_date: payment_dates.first().copied(),
        warnings: Vec::new(),
    })
}

/// Undated schedule for loans whose start date is not known yet. The first
/// period lasts `first_payment_offset_days`; later periods use the frequency's
/// approximate length.
pub fn build_preview_schedule(
    principal_cents: i64,
    annual_rate_percent: f64,
    frequency: Frequency,
    first_payment_offset_days: u32,
    count: u32,
) -> Result<ScheduleResult> {
    check_count(count)?;

    let period_days = frequency.approx_days(first_payment_offset_days);
    let (rows, total_interest_cents) =
        amortize(principal_cents, annual_rate_percent, count, |index| Period {
            days: if index == 1 {
                first_payment_offset_days as i64
            } else {
                period_days as i64
            },
            date: None,
            label: relative_label(frequency, first_payment_offset_days, index),
        });

    Ok(ScheduleResult {
        mode: ScheduleMode::Preview,
        rows,
        total_interest_cents,
        total_to_repay_cents: principal_cents + total_interest_cents,
        first_due_date: None,
        warnings: Vec::new(),
    })
}
