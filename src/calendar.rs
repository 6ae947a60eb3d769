use chrono::{Days, Months, NaiveDate};
use log::debug;

use crate::error::{Result, ScheduleError};
use crate::frequency::{CalendarStep, Frequency};

/// Adds calendar months, keeping the day of month where it exists and clamping
/// to the last day of shorter months (Jan 31 + 1 month is Feb 28 or 29).
pub fn add_months_keeping_day(date: NaiveDate, months: i32) -> Result<NaiveDate> {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.ok_or(ScheduleError::DateOverflow { date })
}

pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(ScheduleError::DateOverflow { date })
}

/// Returns the date one payment period after `date`.
///
/// Day-based frequencies add a fixed number of days; month-based ones go
/// through [`add_months_keeping_day`]. Frequencies without a calendar period
/// (`once`, `custom_days`) step monthly; the schedule facade reports that once.
pub fn add_one_period(date: NaiveDate, frequency: Frequency) -> Result<NaiveDate> {
    let step = match frequency.calendar_step() {
        Some(step) => step,
        None => {
            debug!(
                "frequency {} has no calendar period, stepping monthly from {}",
                frequency, date
            );
            CalendarStep::Months(1)
        }
    };

    match step {
        CalendarStep::Days(days) => add_days(date, days),
        CalendarStep::Months(months) => add_months_keeping_day(date, months as i32),
    }
}
