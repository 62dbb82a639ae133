//! Splitting multi-day passage lists into single-day fee calculations.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::TollFeeCalculator;
use crate::vehicle::Vehicle;

/// Fee charged for one local calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFee {
    /// Local calendar date of the passages.
    pub date: NaiveDate,
    /// Number of passages recorded that day.
    pub passages: usize,
    /// Capped total fee for the day.
    pub fee: u32,
}

/// Group passages by their local calendar date, ascending.
///
/// Passages keep their input order within a day.
pub fn group_by_day<Tz: TimeZone>(
    passages: &[DateTime<Tz>],
) -> BTreeMap<NaiveDate, Vec<DateTime<Tz>>> {
    let mut days: BTreeMap<NaiveDate, Vec<DateTime<Tz>>> = BTreeMap::new();
    for passage in passages {
        days.entry(passage.date_naive())
            .or_default()
            .push(passage.clone());
    }
    days
}

impl TollFeeCalculator {
    /// Calculate one capped fee per local calendar day.
    ///
    /// Returns an empty vector when there are no passages.
    pub fn calculate_daily_fees<Tz: TimeZone>(
        &self,
        vehicle: Option<&Vehicle>,
        passages: &[DateTime<Tz>],
    ) -> Vec<DailyFee> {
        group_by_day(passages)
            .into_iter()
            .map(|(date, day_passages)| {
                let fee = self.calculate_toll_fee(vehicle, &day_passages);
                debug!(%date, passages = day_passages.len(), fee, "daily fee");
                DailyFee {
                    date,
                    passages: day_passages.len(),
                    fee,
                }
            })
            .collect()
    }
}

/// Calculate one capped fee per local calendar day using fixed-date holidays.
pub fn calculate_daily_fees<Tz: TimeZone>(
    vehicle: Option<&Vehicle>,
    passages: &[DateTime<Tz>],
) -> Vec<DailyFee> {
    TollFeeCalculator::default().calculate_daily_fees(vehicle, passages)
}
