//! Time-of-day fee schedule.
//!
//! The schedule is a static table of inclusive minute-of-day windows. Any
//! minute not covered by a window (18:30 through 05:59) is free.

use serde::Serialize;

/// A charged window of the day, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeWindow {
    /// First charged minute of the day (0 = 00:00).
    pub start_minute: u32,
    /// Last charged minute of the day.
    pub end_minute: u32,
    pub fee: u32,
}

impl FeeWindow {
    const fn new(start: (u32, u32), end: (u32, u32), fee: u32) -> Self {
        Self {
            start_minute: start.0 * 60 + start.1,
            end_minute: end.0 * 60 + end.1,
            fee,
        }
    }

    pub fn contains(&self, minute_of_day: u32) -> bool {
        (self.start_minute..=self.end_minute).contains(&minute_of_day)
    }
}

/// Charged windows in chronological order. Windows do not overlap.
pub const FEE_SCHEDULE: &[FeeWindow] = &[
    FeeWindow::new((6, 0), (6, 29), 9),
    FeeWindow::new((6, 30), (6, 59), 16),
    FeeWindow::new((7, 0), (7, 59), 22),
    FeeWindow::new((8, 0), (8, 29), 16),
    FeeWindow::new((8, 30), (14, 59), 9),
    FeeWindow::new((15, 0), (15, 29), 16),
    FeeWindow::new((15, 30), (16, 59), 22),
    FeeWindow::new((17, 0), (17, 59), 16),
    FeeWindow::new((18, 0), (18, 29), 9),
];

/// Look up the fee for a local wall-clock time, ignoring any exemptions.
pub fn fee_for_time(hour: u32, minute: u32) -> u32 {
    let minute_of_day = hour * 60 + minute;
    FEE_SCHEDULE
        .iter()
        .find(|window| window.contains(minute_of_day))
        .map_or(0, |window| window.fee)
}
