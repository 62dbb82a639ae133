//! Tests for grouping multi-day passages into per-day fees.

use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::{Europe::Stockholm, Tz};
use toll_engine::{
    calculate_daily_fees, group_by_day, DailyFee, HolidayRules, TollFeeCalculator, Vehicle,
    VehicleClass,
};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Tz> {
    Stockholm
        .with_ymd_and_hms(year, month, day, hour, min, 0)
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn empty_input_yields_no_days() {
    let passages: Vec<DateTime<Tz>> = vec![];
    assert!(group_by_day(&passages).is_empty());
    assert!(calculate_daily_fees(Some(&Vehicle::car("ABC123")), &passages).is_empty());
}

#[test]
fn groups_by_local_date_in_ascending_order() {
    let passages = vec![
        at(2024, 4, 30, 7, 30),
        at(2024, 4, 29, 8, 15),
        at(2024, 4, 29, 7, 30),
    ];

    let days = group_by_day(&passages);
    let keys: Vec<_> = days.keys().copied().collect();
    assert_eq!(keys, vec![date(2024, 4, 29), date(2024, 4, 30)]);

    // Input order is kept within a day.
    assert_eq!(days[&date(2024, 4, 29)], vec![passages[1], passages[2]]);
}

#[test]
fn demo_week_is_priced_per_day() {
    // Sunday 06:15 is free; Monday 07:30 + 08:15 share an interval, 14:45 adds 9.
    let passages = vec![
        at(2024, 4, 28, 6, 15),
        at(2024, 4, 29, 7, 30),
        at(2024, 4, 29, 8, 15),
        at(2024, 4, 29, 14, 45),
    ];

    let fees = calculate_daily_fees(Some(&Vehicle::car("ABC123")), &passages);
    assert_eq!(
        fees,
        vec![
            DailyFee {
                date: date(2024, 4, 28),
                passages: 1,
                fee: 0,
            },
            DailyFee {
                date: date(2024, 4, 29),
                passages: 3,
                fee: 31,
            },
        ]
    );
}

#[test]
fn each_day_is_capped_independently() {
    let mut passages = Vec::new();
    for day in [29, 30] {
        passages.push(at(2024, 4, day, 7, 0));
        passages.push(at(2024, 4, day, 15, 30));
        passages.push(at(2024, 4, day, 16, 59));
    }

    let fees = calculate_daily_fees(Some(&Vehicle::car("ABC123")), &passages);
    assert_eq!(fees.len(), 2);
    assert!(fees.iter().all(|d| d.fee == 60));
}

#[test]
fn exempt_vehicle_pays_nothing_any_day() {
    let passages = vec![at(2024, 4, 29, 7, 30), at(2024, 4, 30, 7, 30)];
    let tractor = Vehicle::new(VehicleClass::Tractor, "TR1");
    let fees = calculate_daily_fees(Some(&tractor), &passages);
    assert_eq!(fees.iter().map(|d| d.fee).sum::<u32>(), 0);
}

#[test]
fn calculator_method_applies_holiday_rules() {
    // Thursday before Easter (charged) and Good Friday 2024.
    let passages = vec![at(2024, 3, 28, 7, 30), at(2024, 3, 29, 7, 30)];
    let calculator = TollFeeCalculator::new().with_holidays(HolidayRules::WithMovableFeasts);
    let fees = calculator.calculate_daily_fees(Some(&Vehicle::car("ABC123")), &passages);
    assert_eq!(fees[0].fee, 22);
    assert_eq!(fees[1].fee, 0);
}

#[test]
fn daily_fee_serializes_with_iso_date() {
    let fee = DailyFee {
        date: date(2024, 4, 29),
        passages: 3,
        fee: 31,
    };
    let json = serde_json::to_string(&fee).unwrap();
    assert_eq!(json, r#"{"date":"2024-04-29","passages":3,"fee":31}"#);
}
