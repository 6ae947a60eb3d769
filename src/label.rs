use crate::frequency::{Frequency, LabelUnit};

pub const ON_LOAN_START: &str = "On loan start";

/// Relative due-date label for preview schedules, e.g. "3 months after loan start".
///
/// Installment 1 converts the raw first-payment offset into whole units of the
/// frequency's label unit (rounded, never below one unit for a non-zero
/// offset). Each later installment adds one period's worth of units.
pub fn relative_label(frequency: Frequency, first_payment_offset_days: u32, index: u32) -> String {
    let index = index.max(1);

    let (unit, count) = match frequency.label_period() {
        Some((unit, units_per_period)) => {
            let first = offset_in_units(first_payment_offset_days, unit);
            (unit, first.saturating_add((index - 1).saturating_mul(units_per_period)))
        }
        // no fixed period: every installment repeats the offset
        None => (LabelUnit::Day, first_payment_offset_days.saturating_mul(index)),
    };

    if count == 0 {
        return ON_LOAN_START.to_string();
    }
    format!("{} {} after loan start", count, unit.name(count))
}

fn offset_in_units(offset_days: u32, unit: LabelUnit) -> u32 {
    if offset_days == 0 {
        return 0;
    }
    let unit_days = unit.days();
    let whole = offset_days / unit_days;
    let rounded = if offset_days % unit_days >= unit_days - unit_days / 2 {
        whole + 1
    } else {
        whole
    };
    rounded.max(1)
}

#[cfg(test)]
mod tests {
    use super::relative_label;
    use crate::frequency::Frequency;
    use test_log::test;

    #[test]
    fn test_every_month_labels() {
        assert_eq!(relative_label(Frequency::EveryMonth, 30, 1), "1 month after loan start");
        assert_eq!(relative_label(Frequency::EveryMonth, 30, 2), "2 months after loan start");
        assert_eq!(relative_label(Frequency::EveryMonth, 30, 3), "3 months after loan start");
    }

    #[test]
    fn test_zero_offset_is_loan_start() {
        assert_eq!(relative_label(Frequency::Monthly, 0, 1), "On loan start");
        assert_eq!(relative_label(Frequency::Monthly, 0, 2), "1 month after loan start");
        assert_eq!(relative_label(Frequency::Once, 0, 1), "On loan start");
    }

    #[test]
    fn test_week_based_labels() {
        assert_eq!(relative_label(Frequency::Weekly, 7, 1), "1 week after loan start");
        assert_eq!(relative_label(Frequency::EveryWeek, 7, 3), "3 weeks after loan start");
        assert_eq!(relative_label(Frequency::Biweekly, 14, 2), "4 weeks after loan start");
        assert_eq!(relative_label(Frequency::Every4Weeks, 28, 2), "8 weeks after loan start");
    }

    #[test]
    fn test_offset_rounds_to_nearest_unit() {
        assert_eq!(relative_label(Frequency::Monthly, 31, 1), "1 month after loan start");
        assert_eq!(relative_label(Frequency::Monthly, 10, 1), "1 month after loan start");
        assert_eq!(relative_label(Frequency::Monthly, 60, 1), "2 months after loan start");
        assert_eq!(relative_label(Frequency::Quarterly, 90, 2), "6 months after loan start");
        assert_eq!(relative_label(Frequency::Yearly, 365, 2), "2 years after loan start");
        assert_eq!(relative_label(Frequency::EveryYear, 365, 1), "1 year after loan start");
    }

    #[test]
    fn test_day_based_labels() {
        assert_eq!(relative_label(Frequency::Every3Days, 3, 1), "3 days after loan start");
        assert_eq!(relative_label(Frequency::Every3Days, 3, 4), "12 days after loan start");
        assert_eq!(relative_label(Frequency::Once, 45, 1), "45 days after loan start");
        assert_eq!(relative_label(Frequency::CustomDays, 10, 3), "30 days after loan start");
        assert_eq!(relative_label(Frequency::CustomDays, 1, 1), "1 day after loan start");
    }

    #[test]
    fn test_huge_offset_saturates() {
        assert_eq!(
            relative_label(Frequency::Monthly, u32::MAX, 1),
            "143165577 months after loan start"
        );
        assert_eq!(
            relative_label(Frequency::Every3Days, u32::MAX, 3),
            format!("{} days after loan start", u32::MAX)
        );
        assert_eq!(
            relative_label(Frequency::CustomDays, u32::MAX, 2),
            format!("{} days after loan start", u32::MAX)
        );
        assert_eq!(
            relative_label(Frequency::Weekly, 7, u32::MAX),
            format!("{} weeks after loan start", u32::MAX)
        );
    }
}
