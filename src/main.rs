use chrono::NaiveDate;
use log::{error, info};
use repayment::*;
use simple_logger::SimpleLogger;

fn main() {
    if let Err(e) = SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("logger init failed: {}", e);
    }

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let money = MoneyFormat::default();

    if let Some(path) = std::env::args().nth(1) {
        return show_record(&path, &money);
    }

    let mut terms = LoanTerms::new(
        400000,
        5.,
        RepaymentType::Installments,
        6,
        Frequency::Monthly,
        StartMode::UponAcceptance,
        None,
        30,
    );

    info!("preview before acceptance");
    let preview = generate_repayment_schedule(&terms)?;
    print!("{}", render_schedule(&preview, &money));

    terms.start_date = NaiveDate::from_ymd_opt(2025, 1, 1);
    info!("schedule after acceptance on 2025-01-01");
    let actual = generate_repayment_schedule(&terms)?;
    print!("{}", render_schedule(&actual, &money));

    let comparison = compare_totals(&preview.totals(), &actual.totals());
    info!(
        "preview vs actual: matches {}, interest diff {}, total diff {}",
        comparison.matches, comparison.interest_diff_cents, comparison.total_diff_cents
    );
    Ok(())
}

// prints the schedule for a stored loan record in JSON
#[cfg(feature = "serde")]
fn show_record(path: &str, money: &MoneyFormat) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let record: LoanRecord = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    let schedule = generate_repayment_schedule(&LoanTerms::from_record(&record)?)?;
    print!("{}", render_schedule(&schedule, money));
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn show_record(path: &str, _money: &MoneyFormat) -> std::result::Result<(), Box<dyn std::error::Error>> {
    Err(format!("reading {} needs the `serde` feature", path).into())
}

// verifies that types can implement the gated traits below
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<ScheduleRow>();
    is_normal::<ScheduleResult>();
    is_normal::<LoanTerms>();
    is_normal::<ScheduleError>();
}
