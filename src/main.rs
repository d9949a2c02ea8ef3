use chrono::{Local, NaiveDate};
use clap::Parser;
use roster_izin::error::Error;
use roster_izin::roster::{analyze_roster, format_routes, PeriodSummary};
use roster_izin::startup;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(version, about = "Find the upcoming flight duty period in roster OCR text")]
struct Args {
    /// OCR text files, one per roster photo (stdin when omitted)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Real current date, YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    now: Option<NaiveDate>,

    /// Print the period as JSON
    #[arg(long)]
    json: bool,

    /// Override the home base station code
    #[arg(long)]
    home_base: Option<String>,

    /// Override the reference year
    #[arg(long)]
    year: Option<i32>,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    // Initialize logging
    startup::init_logging()?;

    // Load configuration, command line overrides last
    let mut config = startup::load_config()?;
    if let Some(home_base) = args.home_base {
        config.home_base = home_base;
    }
    if let Some(year) = args.year {
        config.reference_year = year;
    }
    config.validate()?;

    let text = startup::read_roster_text(&args.files)?;
    let now = args.now.unwrap_or_else(|| Local::now().date_naive());
    info!("Parsing roster as of {}", now);

    let analysis = analyze_roster(&text, now, &config.settings());
    let period = analysis.period.ok_or(Error::NoSchedule)?;

    if args.json {
        let json = serde_json::to_string_pretty(&period).map_err(Error::from)?;
        println!("{}", json);
        return Ok(());
    }

    let summary = PeriodSummary::from_period(&period);
    println!("Mulai       : {}", summary.start);
    println!("Jumlah hari : {}", summary.day_count);
    println!("Hari ke-    : {}", summary.ordinal_label);
    println!();
    print!("{}", format_routes(&period));

    Ok(())
}
