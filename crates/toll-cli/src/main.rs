//! `tollfee` CLI — compute daily road-toll fees from passage timestamps.
//!
//! ## Usage
//!
//! ```sh
//! # Passages as arguments (local time in --timezone)
//! tollfee calculate 2024-04-29T07:30 2024-04-29T08:15 2024-04-29T14:45
//!
//! # Passages from a file, one per line, as JSON
//! tollfee calculate -i passages.txt --vehicle Lorry --json
//!
//! # Passages from stdin, including Easter-derived holidays
//! cat passages.txt | tollfee calculate --movable-holidays
//!
//! # Show the fee schedule and a year's holidays
//! tollfee schedule
//! tollfee holidays --year 2024 --movable-holidays
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use toll_engine::{
    parse_passages, parse_timezone, DailyFee, HolidayRules, TollFeeCalculator, Vehicle,
    VehicleClass, FEE_SCHEDULE,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tollfee",
    version,
    about = "Daily road-toll fee calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log fee calculation details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the toll fee for each day of passages
    Calculate {
        /// Passage timestamps (reads --input or stdin if omitted)
        passages: Vec<String>,
        /// Input file with one timestamp per line
        #[arg(short, long)]
        input: Option<String>,
        /// Vehicle class: Car, Lorry, Bus, Motorbike, Tractor, Emergency, Diplomat
        #[arg(long, env = "TOLLFEE_VEHICLE", default_value = "Car")]
        vehicle: String,
        /// Registration number, echoed in JSON output
        #[arg(long, default_value = "TEST123")]
        registration: String,
        /// IANA timezone for local-time rules and naive timestamps
        #[arg(long, env = "TOLLFEE_TIMEZONE", default_value = "Europe/Stockholm")]
        timezone: String,
        /// Also exempt Good Friday, Easter Monday, Ascension Day and Whit Sunday
        #[arg(long)]
        movable_holidays: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the time-of-day fee schedule
    Schedule,
    /// List the holidays of a year
    Holidays {
        #[arg(long)]
        year: i32,
        /// Include Easter-derived holidays
        #[arg(long)]
        movable_holidays: bool,
    },
}

#[derive(Serialize)]
struct FeeReport {
    vehicle: VehicleClass,
    registration: String,
    timezone: String,
    days: Vec<DailyFee>,
    total: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Calculate {
            passages,
            input,
            vehicle,
            registration,
            timezone,
            movable_holidays,
            json,
        } => {
            let class: VehicleClass = vehicle.parse().context("Failed to parse --vehicle")?;
            let tz = parse_timezone(&timezone).context("Failed to parse --timezone")?;

            let raw = if passages.is_empty() {
                read_input(input.as_deref())?
            } else {
                passages.join("\n")
            };
            let passages =
                parse_passages(raw.lines(), &tz).context("Failed to parse passages")?;
            if passages.is_empty() {
                anyhow::bail!("no passages given");
            }
            debug!(count = passages.len(), %tz, "parsed passages");

            let calculator = TollFeeCalculator::new().with_holidays(holiday_rules(movable_holidays));
            let vehicle = Vehicle::new(class, registration);
            let days = calculator.calculate_daily_fees(Some(&vehicle), &passages);
            let total: u32 = days.iter().map(|d| d.fee).sum();

            if json {
                let report = FeeReport {
                    vehicle: vehicle.class,
                    registration: vehicle.registration,
                    timezone: tz.to_string(),
                    days,
                    total,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for day in &days {
                    println!("{}: {} SEK", day.date, day.fee);
                }
                println!("Total: {} SEK", total);
            }
        }
        Commands::Schedule => {
            for window in FEE_SCHEDULE {
                println!(
                    "{}-{}  {:>2} SEK",
                    clock(window.start_minute),
                    clock(window.end_minute),
                    window.fee
                );
            }
            println!("otherwise     0 SEK");
        }
        Commands::Holidays {
            year,
            movable_holidays,
        } => {
            for date in holiday_rules(movable_holidays).holidays_in_year(year) {
                println!("{}", date);
            }
        }
    }

    Ok(())
}

/// `-v` wins over `RUST_LOG`; with neither, only warnings are shown.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn holiday_rules(movable_holidays: bool) -> HolidayRules {
    if movable_holidays {
        HolidayRules::WithMovableFeasts
    } else {
        HolidayRules::FixedDates
    }
}

fn clock(minute_of_day: u32) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
