//! Framework-neutral WASM <-> JavaScript bridge for the core
//! transforms. Records cross the boundary as plain JS objects with
//! camelCase fields and ISO-8601 timestamps.

use careview_core::{
    group_vitals_by_date, select_appointments, Appointment, AppointmentFilter, Vital,
};
use chrono::{DateTime, Utc};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Filter and order appointments for the given display mode
/// ("upcoming" or "past") relative to `now_iso`.
#[wasm_bindgen]
pub fn filter_appointments(
    records: JsValue,
    filter: &str,
    now_iso: &str,
) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let appointments: Vec<Appointment> = from_value(records)
        .map_err(|err| JsValue::from_str(&format!("could not read appointments: {err}")))?;
    let filter = parse_filter(filter)?;
    let now = parse_instant(now_iso)?;

    let selected = select_appointments(&appointments, filter, now);
    to_value(&selected)
        .map_err(|err| JsValue::from_str(&format!("could not serialize appointments: {err}")))
}

/// Group vital readings into dated sections relative to `now_iso`.
#[wasm_bindgen]
pub fn group_vitals(records: JsValue, now_iso: &str) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let vitals: Vec<Vital> = from_value(records)
        .map_err(|err| JsValue::from_str(&format!("could not read vitals: {err}")))?;
    let now = parse_instant(now_iso)?;

    let sections = group_vitals_by_date(&vitals, now);
    to_value(&sections)
        .map_err(|err| JsValue::from_str(&format!("could not serialize sections: {err}")))
}

fn parse_filter(value: &str) -> Result<AppointmentFilter, JsValue> {
    match value {
        "upcoming" => Ok(AppointmentFilter::Upcoming),
        "past" => Ok(AppointmentFilter::Past),
        other => Err(JsValue::from_str(&format!(
            "unknown filter {other:?}, expected \"upcoming\" or \"past\""
        ))),
    }
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, JsValue> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| JsValue::from_str(&format!("could not parse timestamp: {err}")))
}
