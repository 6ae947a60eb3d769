//! Display formatting for schedules. The engine itself only deals in integer
//! cents; callers choose a [`MoneyFormat`] and pass it in.

use std::fmt::Write;

use crate::loan::ScheduleResult;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MoneyFormat {
    pub symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: Option<char>,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: Some(','),
        }
    }
}

impl MoneyFormat {
    pub fn new(symbol: &str, decimal_separator: char, thousands_separator: Option<char>) -> Self {
        Self {
            symbol: symbol.to_string(),
            decimal_separator,
            thousands_separator,
        }
    }

    pub fn format_cents(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        let units = (abs / 100).to_string();

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                if let Some(sep) = self.thousands_separator {
                    grouped.push(sep);
                }
            }
            grouped.push(digit);
        }

        format!(
            "{}{}{}{}{:02}",
            sign,
            self.symbol,
            grouped,
            self.decimal_separator,
            abs % 100
        )
    }
}

/// Plain-text amortization table followed by the totals.
pub fn render_schedule(schedule: &ScheduleResult, money: &MoneyFormat) -> String {
    let mut out = String::new();

    let label_width = schedule
        .rows
        .iter()
        .map(|row| row.date_label.len())
        .max()
        .unwrap_or(0)
        .max("Due".len());

    let _ = writeln!(
        out,
        "{:>3}  {:<lw$}  {:>14}  {:>12}  {:>14}  {:>14}",
        "#",
        "Due",
        "Principal",
        "Interest",
        "Payment",
        "Remaining",
        lw = label_width
    );
    for row in &schedule.rows {
        let _ = writeln!(
            out,
            "{:>3}  {:<lw$}  {:>14}  {:>12}  {:>14}  {:>14}",
            row.index,
            row.date_label,
            money.format_cents(row.principal_cents),
            money.format_cents(row.interest_cents),
            money.format_cents(row.total_payment_cents),
            money.format_cents(row.remaining_balance_cents),
            lw = label_width
        );
    }
    let _ = writeln!(
        out,
        "Total interest: {}",
        money.format_cents(schedule.total_interest_cents)
    );
    let _ = writeln!(
        out,
        "Total to repay: {}",
        money.format_cents(schedule.total_to_repay_cents)
    );
    for warning in &schedule.warnings {
        let _ = writeln!(out, "warning: {}", warning);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_schedule, MoneyFormat};
    use crate::amortize::build_preview_schedule;
    use crate::frequency::Frequency;
    use test_log::test;

    #[test]
    fn test_format_cents() {
        let money = MoneyFormat::default();
        assert_eq!(money.format_cents(0), "$0.00");
        assert_eq!(money.format_cents(5), "$0.05");
        assert_eq!(money.format_cents(66667), "$666.67");
        assert_eq!(money.format_cents(123456789), "$1,234,567.89");
        assert_eq!(money.format_cents(-100000), "-$1,000.00");
    }

    #[test]
    fn test_format_cents_other_locale() {
        let money = MoneyFormat::new("€", ',', Some('.'));
        assert_eq!(money.format_cents(405772), "€4.057,72");
        let money = MoneyFormat::new("", '.', None);
        assert_eq!(money.format_cents(123456789), "1234567.89");
    }

    #[test]
    fn test_render_schedule() {
        let schedule = build_preview_schedule(400000, 5., Frequency::EveryMonth, 30, 3).unwrap();
        let table = render_schedule(&schedule, &MoneyFormat::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Principal"));
        assert!(lines[1].contains("1 month after loan start"));
        assert!(lines[1].contains("$1,333.33"));
        assert!(lines[1].contains("$16.44"));
        assert_eq!(lines[4], "Total interest: $32.88");
        assert_eq!(lines[5], "Total to repay: $4,032.88");
    }
}
