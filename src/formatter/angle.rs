//! DD, DM and DMS rendering
//!
//! Degrees are truncated toward zero and carry the only sign; minutes and
//! seconds are never negative. Rounding happens once, on the smallest
//! printed unit, and carries upward (59.9999' becomes the next degree).

use crate::utils::format_utils::{format_fixed, render_scaled, scaled_round};

const DD_DECIMALS: u32 = 6;
const DM_MINUTE_DECIMALS: u32 = 3;
const DMS_SECOND_DECIMALS: u32 = 2;

/// Decimal degrees with six decimals
pub fn format_dd(value: f64) -> String {
    format_fixed(value, DD_DECIMALS)
}

/// Degrees and minutes with three decimals, e.g. `-45° 30.000'`
pub fn format_dm(value: f64) -> String {
    let minute_unit = 10u64.pow(DM_MINUTE_DECIMALS);
    let total = scaled_round(value.abs() * 60.0, DM_MINUTE_DECIMALS);
    let degrees = total / (60 * minute_unit);
    let minutes = total % (60 * minute_unit);

    format!("{}{}° {}'",
            sign(value, total),
            degrees,
            render_scaled(minutes, DM_MINUTE_DECIMALS))
}

/// Degrees, minutes and seconds with two decimals, e.g. `45° 30' 30.00"`
pub fn format_dms(value: f64) -> String {
    let second_unit = 10u64.pow(DMS_SECOND_DECIMALS);
    let total = scaled_round(value.abs() * 3600.0, DMS_SECOND_DECIMALS);
    let degrees = total / (3600 * second_unit);
    let remainder = total % (3600 * second_unit);
    let minutes = remainder / (60 * second_unit);
    let seconds = remainder % (60 * second_unit);

    format!("{}{}° {}' {}\"",
            sign(value, total),
            degrees,
            minutes,
            render_scaled(seconds, DMS_SECOND_DECIMALS))
}

fn sign(value: f64, rounded: u64) -> &'static str {
    if value < 0.0 && rounded != 0 { "-" } else { "" }
}
