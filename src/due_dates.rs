use chrono::NaiveDate;
use log::debug;

use crate::calendar::add_one_period;
use crate::error::{Result, ScheduleError};
use crate::frequency::Frequency;

/// Due dates for a dated schedule, one per installment.
#[derive(Clone, PartialEq, Debug)]
pub struct PaymentDates {
    pub dates: Vec<NaiveDate>,
    pub first_due_date: NaiveDate,
}

/// Pushes a first due date that is not after the transfer date out to one full
/// period after it. The returned date is always strictly after `transfer_date`,
/// so the first accrual period is never empty.
pub fn normalize_first_due_date(
    transfer_date: NaiveDate,
    first_due_date: NaiveDate,
    frequency: Frequency,
) -> Result<NaiveDate> {
    if first_due_date > transfer_date {
        return Ok(first_due_date);
    }

    let normalized = add_one_period(transfer_date, frequency)?;
    debug!(
        "first due date {} is not after transfer date {}, moved to {}",
        first_due_date, transfer_date, normalized
    );
    Ok(normalized)
}

pub fn generate_payment_dates(
    transfer_date: NaiveDate,
    first_due_date: NaiveDate,
    frequency: Frequency,
    count: u32,
) -> Result<PaymentDates> {
    if count < 1 {
        return Err(ScheduleError::InvalidInstallmentCount { count });
    }

    let first_due_date = normalize_first_due_date(transfer_date, first_due_date, frequency)?;

    let mut dates = Vec::with_capacity(count as usize);
    let mut due = first_due_date;
    dates.push(due);
    for _ in 1..count {
        due = add_one_period(due, frequency)?;
        dates.push(due);
    }

    Ok(PaymentDates {
        dates,
        first_due_date,
    })
}

#[cfg(test)]
mod tests {
    use super::{generate_payment_dates, normalize_first_due_date};
    use crate::error::ScheduleError;
    use crate::frequency::Frequency;
    use chrono::{Days, NaiveDate};
    use test_log::test;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_first_due_is_pushed_one_period() {
        assert_eq!(
            normalize_first_due_date(ymd(2025, 1, 15), ymd(2025, 1, 15), Frequency::Monthly),
            Ok(ymd(2025, 2, 15))
        );
        assert_eq!(
            normalize_first_due_date(ymd(2025, 1, 15), ymd(2025, 1, 1), Frequency::Weekly),
            Ok(ymd(2025, 1, 22))
        );
    }

    #[test]
    fn test_later_first_due_is_kept() {
        assert_eq!(
            normalize_first_due_date(ymd(2025, 1, 15), ymd(2025, 1, 16), Frequency::Yearly),
            Ok(ymd(2025, 1, 16))
        );
    }

    #[test]
    fn test_normalized_date_is_always_after_transfer() {
        let transfer = ymd(2024, 1, 31);
        for frequency in Frequency::ALL {
            for back in 0..40 {
                let first_due = transfer.checked_sub_days(Days::new(back)).unwrap();
                let normalized = normalize_first_due_date(transfer, first_due, frequency).unwrap();
                assert!(normalized > transfer, "{} {}", frequency, first_due);
            }
        }
    }

    #[test]
    fn test_monthly_dates() {
        let dates = generate_payment_dates(ymd(2025, 1, 1), ymd(2025, 2, 1), Frequency::Monthly, 6)
            .unwrap();
        assert_eq!(dates.first_due_date, ymd(2025, 2, 1));
        assert_eq!(
            dates.dates,
            vec![
                ymd(2025, 2, 1),
                ymd(2025, 3, 1),
                ymd(2025, 4, 1),
                ymd(2025, 5, 1),
                ymd(2025, 6, 1),
                ymd(2025, 7, 1),
            ]
        );
    }

    #[test]
    fn test_month_end_dates_step_from_previous() {
        let dates = generate_payment_dates(ymd(2025, 1, 1), ymd(2025, 1, 31), Frequency::Monthly, 3)
            .unwrap();
        assert_eq!(dates.dates, vec![ymd(2025, 1, 31), ymd(2025, 2, 28), ymd(2025, 3, 28)]);
    }

    #[test]
    fn test_biweekly_dates_after_normalization() {
        let dates = generate_payment_dates(ymd(2025, 3, 1), ymd(2025, 3, 1), Frequency::Biweekly, 3)
            .unwrap();
        assert_eq!(dates.first_due_date, ymd(2025, 3, 15));
        assert_eq!(dates.dates, vec![ymd(2025, 3, 15), ymd(2025, 3, 29), ymd(2025, 4, 12)]);
    }

    #[test]
    fn test_zero_count_is_rejected() {
        assert_eq!(
            generate_payment_dates(ymd(2025, 1, 1), ymd(2025, 2, 1), Frequency::Monthly, 0),
            Err(ScheduleError::InvalidInstallmentCount { count: 0 })
        );
    }
}
