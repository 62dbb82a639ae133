//! Toll-free dates: weekends, the month of July and public holidays.
//!
//! All checks use the timestamp's local calendar date. The default rule set
//! knows only fixed-date holidays. [`HolidayRules::WithMovableFeasts`] adds
//! the Easter-derived holidays computed by [`easter_sunday`].

use chrono::{DateTime, Datelike, Days, Month, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

/// Fixed-date holidays as `(month, day)`, 1-indexed months, in calendar order.
pub const HOLIDAYS: &[(u32, u32)] = &[
    (1, 1),
    (5, 1),
    (6, 6),
    (11, 2),
    (12, 24),
    (12, 25),
    (12, 26),
    (12, 31),
];

/// Day offsets from Easter Sunday of the movable feasts: Good Friday,
/// Easter Monday, Ascension Day and Whit Sunday.
pub const MOVABLE_FEAST_OFFSETS: &[i64] = &[-2, 1, 39, 49];

/// Which holidays count as toll-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HolidayRules {
    /// Only the dates in [`HOLIDAYS`].
    #[default]
    FixedDates,
    /// [`HOLIDAYS`] plus the Easter-derived feasts.
    WithMovableFeasts,
}

impl HolidayRules {
    /// Check whether a timestamp falls on a toll-free date under these rules.
    pub fn is_toll_free_date<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>) -> bool {
        self.is_toll_free_day(timestamp.date_naive())
    }

    /// Same as [`is_toll_free_date`](Self::is_toll_free_date) for a bare local date.
    pub fn is_toll_free_day(&self, date: NaiveDate) -> bool {
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return true;
        }
        if date.month() == Month::July.number_from_month() {
            return true;
        }
        self.is_holiday(date)
    }

    /// Whether `date` is a holiday, ignoring weekends and July.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        let fixed = HOLIDAYS
            .iter()
            .any(|&(month, day)| date.month() == month && date.day() == day);
        match self {
            HolidayRules::FixedDates => fixed,
            HolidayRules::WithMovableFeasts => {
                fixed || movable_feasts(date.year()).contains(&date)
            }
        }
    }

    /// All holidays in `year` under these rules, ascending.
    pub fn holidays_in_year(&self, year: i32) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = HOLIDAYS
            .iter()
            .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
            .collect();
        if *self == HolidayRules::WithMovableFeasts {
            dates.extend(movable_feasts(year));
        }
        dates.sort();
        dates.dedup();
        dates
    }
}

/// Check whether a timestamp falls on a toll-free date, using fixed-date
/// holidays only.
///
/// A date is toll-free when it is a Saturday or Sunday, in July, or one of
/// the [`HOLIDAYS`].
pub fn is_toll_free_date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> bool {
    HolidayRules::FixedDates.is_toll_free_date(timestamp)
}

/// Compute Easter Sunday of a Gregorian year using Gauss's algorithm.
///
/// Returns `None` only when chrono cannot represent the resulting date.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn movable_feasts(year: i32) -> Vec<NaiveDate> {
    let Some(easter) = easter_sunday(year) else {
        return Vec::new();
    };
    MOVABLE_FEAST_OFFSETS
        .iter()
        .filter_map(|&offset| {
            let days = Days::new(offset.unsigned_abs());
            if offset < 0 {
                easter.checked_sub_days(days)
            } else {
                easter.checked_add_days(days)
            }
        })
        .collect()
}
