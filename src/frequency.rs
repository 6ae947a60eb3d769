//! Payment frequency codes.
//!
//! Stored loans carry one of two overlapping vocabularies: the current codes
//! (`weekly`, `monthly`, ...) and a legacy set (`every-week`, `once`, ...) that
//! older records and the preview screens still use. Both map onto the single
//! closed [`Frequency`] enum, and every per-frequency behavior (calendar step,
//! approximate period length, label unit) is a `match` on it.

use log::warn;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Frequency {
    Weekly,
    Biweekly,
    Every4Weeks,
    Monthly,
    Quarterly,
    Yearly,
    // legacy codes
    Every3Days,
    EveryWeek,
    EveryMonth,
    EveryYear,
    Once,
    CustomDays,
}

/// How one period advances a calendar date.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CalendarStep {
    Days(u64),
    Months(u32),
}

/// Unit a relative label counts in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LabelUnit {
    Day,
    Week,
    Month,
    Year,
}

impl LabelUnit {
    /// Approximate length of one unit, used to turn a day offset into units.
    pub fn days(self) -> u32 {
        match self {
            LabelUnit::Day => 1,
            LabelUnit::Week => 7,
            LabelUnit::Month => 30,
            LabelUnit::Year => 365,
        }
    }

    pub fn name(self, count: u32) -> &'static str {
        match (self, count == 1) {
            (LabelUnit::Day, true) => "day",
            (LabelUnit::Day, false) => "days",
            (LabelUnit::Week, true) => "week",
            (LabelUnit::Week, false) => "weeks",
            (LabelUnit::Month, true) => "month",
            (LabelUnit::Month, false) => "months",
            (LabelUnit::Year, true) => "year",
            (LabelUnit::Year, false) => "years",
        }
    }
}

/// Outcome of reading a stored frequency code.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FrequencyResolution {
    pub frequency: Frequency,
    /// Set when the code was not recognised and monthly was substituted.
    pub fell_back: bool,
    pub code: String,
}

impl Frequency {
    pub const ALL: [Frequency; 12] = [
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Every4Weeks,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Yearly,
        Frequency::Every3Days,
        Frequency::EveryWeek,
        Frequency::EveryMonth,
        Frequency::EveryYear,
        Frequency::Once,
        Frequency::CustomDays,
    ];

    /// Strict lookup; `None` for anything outside the two vocabularies.
    pub fn from_code(code: &str) -> Option<Frequency> {
        let frequency = match code.trim() {
            "weekly" => Frequency::Weekly,
            "biweekly" => Frequency::Biweekly,
            "every_4_weeks" => Frequency::Every4Weeks,
            "monthly" => Frequency::Monthly,
            "quarterly" => Frequency::Quarterly,
            "yearly" => Frequency::Yearly,
            "every-3-days" => Frequency::Every3Days,
            "every-week" => Frequency::EveryWeek,
            "every-month" => Frequency::EveryMonth,
            "every-year" => Frequency::EveryYear,
            "once" => Frequency::Once,
            "custom_days" => Frequency::CustomDays,
            _ => return None,
        };
        Some(frequency)
    }

    /// Lenient lookup used for stored loans: unknown codes become monthly so the
    /// loan stays viewable, and the substitution is logged and flagged.
    pub fn resolve(code: &str) -> FrequencyResolution {
        match Frequency::from_code(code) {
            Some(frequency) => FrequencyResolution {
                frequency,
                fell_back: false,
                code: code.to_string(),
            },
            None => {
                warn!("unknown payment frequency {:?}, using monthly", code);
                FrequencyResolution {
                    frequency: Frequency::Monthly,
                    fell_back: true,
                    code: code.to_string(),
                }
            }
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Every4Weeks => "every_4_weeks",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Yearly => "yearly",
            Frequency::Every3Days => "every-3-days",
            Frequency::EveryWeek => "every-week",
            Frequency::EveryMonth => "every-month",
            Frequency::EveryYear => "every-year",
            Frequency::Once => "once",
            Frequency::CustomDays => "custom_days",
        }
    }

    pub fn is_legacy(self) -> bool {
        matches!(
            self,
            Frequency::Every3Days
                | Frequency::EveryWeek
                | Frequency::EveryMonth
                | Frequency::EveryYear
                | Frequency::Once
                | Frequency::CustomDays
        )
    }

    /// Calendar step for dated schedules. `once` and `custom_days` have no fixed
    /// calendar period.
    pub fn calendar_step(self) -> Option<CalendarStep> {
        match self {
            Frequency::Every3Days => Some(CalendarStep::Days(3)),
            Frequency::Weekly | Frequency::EveryWeek => Some(CalendarStep::Days(7)),
            Frequency::Biweekly => Some(CalendarStep::Days(14)),
            Frequency::Every4Weeks => Some(CalendarStep::Days(28)),
            Frequency::Monthly | Frequency::EveryMonth => Some(CalendarStep::Months(1)),
            Frequency::Quarterly => Some(CalendarStep::Months(3)),
            Frequency::Yearly | Frequency::EveryYear => Some(CalendarStep::Months(12)),
            Frequency::Once | Frequency::CustomDays => None,
        }
    }

    /// Days per period for preview schedules. `once` and `custom_days` repeat
    /// the first-payment offset.
    pub fn approx_days(self, first_payment_offset_days: u32) -> u32 {
        match self {
            Frequency::Every3Days => 3,
            Frequency::Weekly | Frequency::EveryWeek => 7,
            Frequency::Biweekly => 14,
            Frequency::Every4Weeks => 28,
            Frequency::Monthly | Frequency::EveryMonth => 30,
            Frequency::Quarterly => 91,
            Frequency::Yearly | Frequency::EveryYear => 365,
            Frequency::Once | Frequency::CustomDays => first_payment_offset_days,
        }
    }

    /// Label unit and how many of those units one period spans. `None` means
    /// labels count days from the offset alone.
    pub fn label_period(self) -> Option<(LabelUnit, u32)> {
        match self {
            Frequency::Every3Days => Some((LabelUnit::Day, 3)),
            Frequency::Weekly | Frequency::EveryWeek => Some((LabelUnit::Week, 1)),
            Frequency::Biweekly => Some((LabelUnit::Week, 2)),
            Frequency::Every4Weeks => Some((LabelUnit::Week, 4)),
            Frequency::Monthly | Frequency::EveryMonth => Some((LabelUnit::Month, 1)),
            Frequency::Quarterly => Some((LabelUnit::Month, 3)),
            Frequency::Yearly | Frequency::EveryYear => Some((LabelUnit::Year, 1)),
            Frequency::Once | Frequency::CustomDays => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarStep, Frequency, LabelUnit};
    use test_log::test;

    #[test]
    fn test_codes_round_trip() {
        for frequency in Frequency::ALL {
            assert_eq!(Frequency::from_code(frequency.code()), Some(frequency));
        }
        assert_eq!(Frequency::from_code(" monthly "), Some(Frequency::Monthly));
        assert_eq!(Frequency::from_code("fortnightly"), None);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_monthly() {
        let resolved = Frequency::resolve("fortnightly");
        assert_eq!(resolved.frequency, Frequency::Monthly);
        assert!(resolved.fell_back);
        assert_eq!(resolved.code, "fortnightly");

        let resolved = Frequency::resolve("every-week");
        assert_eq!(resolved.frequency, Frequency::EveryWeek);
        assert!(!resolved.fell_back);
    }

    #[test]
    fn test_legacy_aliases_share_behavior() {
        assert!(Frequency::EveryMonth.is_legacy());
        assert!(!Frequency::Monthly.is_legacy());
        assert_eq!(
            Frequency::EveryMonth.calendar_step(),
            Frequency::Monthly.calendar_step()
        );
        assert_eq!(Frequency::EveryWeek.approx_days(0), 7);
        assert_eq!(Frequency::EveryYear.calendar_step(), Some(CalendarStep::Months(12)));
    }

    #[test]
    fn test_approx_days() {
        assert_eq!(Frequency::Weekly.approx_days(10), 7);
        assert_eq!(Frequency::Every4Weeks.approx_days(10), 28);
        assert_eq!(Frequency::Monthly.approx_days(10), 30);
        assert_eq!(Frequency::Quarterly.approx_days(10), 91);
        assert_eq!(Frequency::Yearly.approx_days(10), 365);
        assert_eq!(Frequency::Once.approx_days(45), 45);
        assert_eq!(Frequency::CustomDays.approx_days(12), 12);
        assert_eq!(Frequency::Once.calendar_step(), None);
    }

    #[test]
    fn test_label_unit_names() {
        assert_eq!(LabelUnit::Month.name(1), "month");
        assert_eq!(LabelUnit::Month.name(2), "months");
        assert_eq!(LabelUnit::Day.name(0), "days");
        assert_eq!(Frequency::Quarterly.label_period(), Some((LabelUnit::Month, 3)));
    }
}
