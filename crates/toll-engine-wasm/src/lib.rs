//! WASM bindings for toll-engine.
//!
//! Exposes daily fee calculation to JavaScript via `wasm-bindgen`. Passage
//! lists cross the boundary as JSON arrays of timestamp strings and results
//! come back as numbers or JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p toll-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/toll_engine_wasm.wasm
//! ```

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use toll_engine::{DailyFee, HolidayRules, TollFeeCalculator, Vehicle, VehicleClass};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DailyFeeDto {
    date: String,
    passages: usize,
    fee: u32,
}

impl From<&DailyFee> for DailyFeeDto {
    fn from(d: &DailyFee) -> Self {
        Self {
            date: d.date.to_string(),
            passages: d.passages,
            fee: d.fee,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Parse a vehicle class tag. The empty string means "no vehicle".
fn parse_vehicle(tag: &str) -> Result<Option<Vehicle>, JsValue> {
    if tag.trim().is_empty() {
        return Ok(None);
    }
    let class: VehicleClass = tag.parse().map_err(js_err)?;
    Ok(Some(Vehicle::new(class, "")))
}

/// Parse a JSON array of timestamp strings into passages in `timezone`.
fn parse_passages_json(json: &str, timezone: &str) -> Result<Vec<DateTime<Tz>>, JsValue> {
    let tz = toll_engine::parse_timezone(timezone).map_err(js_err)?;
    let inputs: Vec<String> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid passages JSON: {}", e)))?;

    inputs
        .iter()
        .map(|s| toll_engine::parse_passage(s, &tz).map_err(js_err))
        .collect()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Calculate the capped toll fee for one day of passages.
///
/// # Arguments
/// - `vehicle` -- Vehicle class tag (e.g., "Car"); empty for none
/// - `passages_json` -- JSON array of timestamps (e.g., `["2024-04-29T07:30"]`)
/// - `timezone` -- IANA timezone (e.g., "Europe/Stockholm")
#[wasm_bindgen(js_name = "calculateTollFee")]
pub fn calculate_toll_fee(
    vehicle: &str,
    passages_json: &str,
    timezone: &str,
) -> Result<u32, JsValue> {
    let vehicle = parse_vehicle(vehicle)?;
    let passages = parse_passages_json(passages_json, timezone)?;
    Ok(toll_engine::calculate_toll_fee(vehicle.as_ref(), &passages))
}

/// Group passages by local day and calculate one capped fee per day.
///
/// Returns a JSON string containing an array of `{date, passages, fee}`
/// objects, ascending by date.
#[wasm_bindgen(js_name = "calculateDailyFees")]
pub fn calculate_daily_fees(
    vehicle: &str,
    passages_json: &str,
    timezone: &str,
    movable_holidays: bool,
) -> Result<String, JsValue> {
    let vehicle = parse_vehicle(vehicle)?;
    let passages = parse_passages_json(passages_json, timezone)?;

    let holidays = if movable_holidays {
        HolidayRules::WithMovableFeasts
    } else {
        HolidayRules::FixedDates
    };
    let days = TollFeeCalculator::new()
        .with_holidays(holidays)
        .calculate_daily_fees(vehicle.as_ref(), &passages);

    let dtos: Vec<DailyFeeDto> = days.iter().map(DailyFeeDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
