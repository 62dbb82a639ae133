//! # toll-engine
//!
//! Deterministic daily road-toll fee calculation.
//!
//! Given a vehicle and the passages it made through toll stations during one
//! day, the engine prices each passage by local time of day, exempts
//! weekends, July, public holidays and toll-free vehicles, charges at most
//! once per 60-minute interval and caps the day at 60.
//!
//! ```rust
//! use chrono::TimeZone;
//! use chrono_tz::Europe::Stockholm;
//! use toll_engine::{calculate_toll_fee, Vehicle};
//!
//! let car = Vehicle::car("ABC123");
//! let passages = [
//!     Stockholm.with_ymd_and_hms(2024, 4, 29, 7, 30, 0).unwrap(),
//!     Stockholm.with_ymd_and_hms(2024, 4, 29, 8, 15, 0).unwrap(),
//!     Stockholm.with_ymd_and_hms(2024, 4, 29, 14, 45, 0).unwrap(),
//! ];
//! assert_eq!(calculate_toll_fee(Some(&car), &passages), 31);
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] — interval merging and the daily cap
//! - [`schedule`] — time-of-day fee table
//! - [`calendar`] — toll-free dates, holidays and Easter
//! - [`vehicle`] — vehicle classes and exemptions
//! - [`daily`] — grouping multi-day passages into per-day fees
//! - [`passage`] — parsing timestamps from text
//! - [`error`] — Error types

pub mod calculator;
pub mod calendar;
pub mod daily;
pub mod error;
pub mod passage;
pub mod schedule;
pub mod vehicle;

pub use calculator::{
    calculate_toll_fee, fee_for_passage, TollFeeCalculator, DAILY_FEE_CAP, INTERVAL_MINUTES,
};
pub use calendar::{easter_sunday, is_toll_free_date, HolidayRules, HOLIDAYS};
pub use daily::{calculate_daily_fees, group_by_day, DailyFee};
pub use error::TollError;
pub use passage::{parse_passage, parse_passages, parse_timezone};
pub use schedule::{fee_for_time, FeeWindow, FEE_SCHEDULE};
pub use vehicle::{is_toll_free_vehicle, Vehicle, VehicleClass, TOLL_FREE_VEHICLES};
