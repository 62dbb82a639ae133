//! Daily toll fee calculation.
//!
//! Passages are sorted and partitioned greedily into intervals: an interval
//! opens at a passage and absorbs every later passage at most
//! [`INTERVAL_MINUTES`] after it. Each interval is charged the highest fee
//! among its passages, and the day's total is capped at [`DAILY_FEE_CAP`].
//!
//! The partition is anchored, not sliding. Passages at 06:00, 06:50 and 07:40
//! form the intervals `[06:00, 06:50]` and `[07:40]`, even though 06:50 and
//! 07:40 are less than an hour apart.

use chrono::{DateTime, TimeZone, Timelike};
use tracing::debug;

use crate::calendar::HolidayRules;
use crate::schedule::fee_for_time;
use crate::vehicle::{is_toll_free_vehicle, Vehicle};

/// Maximum total fee charged for a single day.
pub const DAILY_FEE_CAP: u32 = 60;

/// Length of a single-charge interval. A passage exactly this many minutes
/// after the interval's first passage still belongs to the interval.
pub const INTERVAL_MINUTES: i64 = 60;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Fee calculator with configurable holiday rules.
///
/// `TollFeeCalculator::default()` uses fixed-date holidays only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TollFeeCalculator {
    holidays: HolidayRules,
}

impl TollFeeCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holidays(mut self, holidays: HolidayRules) -> Self {
        self.holidays = holidays;
        self
    }

    pub fn holidays(&self) -> HolidayRules {
        self.holidays
    }

    /// Calculate the total toll fee for one day of passages.
    ///
    /// `passages` may be in any order and is not modified. All passages are
    /// expected to share one local calendar day; callers with multi-day data
    /// should use [`calculate_daily_fees`](Self::calculate_daily_fees).
    ///
    /// Returns 0 for an empty slice. The result never exceeds [`DAILY_FEE_CAP`].
    pub fn calculate_toll_fee<Tz: TimeZone>(
        &self,
        vehicle: Option<&Vehicle>,
        passages: &[DateTime<Tz>],
    ) -> u32 {
        if passages.is_empty() {
            return 0;
        }

        let mut sorted = passages.to_vec();
        sorted.sort();

        let mut interval_start = sorted[0].timestamp_millis();
        let mut highest_fee_in_interval = 0;
        let mut total_fee = 0;

        for passage in &sorted {
            let millis = passage.timestamp_millis();
            let elapsed_minutes = (millis - interval_start).div_euclid(MILLIS_PER_MINUTE);
            let fee = self.fee_for_passage(passage, vehicle);

            debug!(passage = %passage.naive_local(), fee, elapsed_minutes, "priced passage");

            if elapsed_minutes <= INTERVAL_MINUTES {
                highest_fee_in_interval = highest_fee_in_interval.max(fee);
            } else {
                total_fee += highest_fee_in_interval;
                debug!(
                    charged = highest_fee_in_interval,
                    total = total_fee,
                    "interval closed"
                );
                highest_fee_in_interval = fee;
                interval_start = millis;
            }
        }

        total_fee += highest_fee_in_interval;
        debug!(total = total_fee, cap = DAILY_FEE_CAP, "day total");

        total_fee.min(DAILY_FEE_CAP)
    }

    /// Fee for a single passage, before interval and cap rules.
    ///
    /// Returns 0 on toll-free dates and for toll-free vehicles, otherwise the
    /// scheduled fee for the passage's local time of day.
    pub fn fee_for_passage<Tz: TimeZone>(
        &self,
        passage: &DateTime<Tz>,
        vehicle: Option<&Vehicle>,
    ) -> u32 {
        if self.holidays.is_toll_free_date(passage) || is_toll_free_vehicle(vehicle) {
            return 0;
        }
        fee_for_time(passage.hour(), passage.minute())
    }
}

/// Calculate the total toll fee for one day of passages using fixed-date
/// holidays. See [`TollFeeCalculator::calculate_toll_fee`].
pub fn calculate_toll_fee<Tz: TimeZone>(vehicle: Option<&Vehicle>, passages: &[DateTime<Tz>]) -> u32 {
    TollFeeCalculator::default().calculate_toll_fee(vehicle, passages)
}

/// Fee for a single passage using fixed-date holidays. See
/// [`TollFeeCalculator::fee_for_passage`].
pub fn fee_for_passage<Tz: TimeZone>(passage: &DateTime<Tz>, vehicle: Option<&Vehicle>) -> u32 {
    TollFeeCalculator::default().fee_for_passage(passage, vehicle)
}
