//! Number formatting utilities
//!
//! Platform-stable fixed-point rendering. Values are rounded half away from
//! zero on an integer scale, so output never depends on locale or on the
//! float formatter's tie-breaking.

/// Round a non-negative magnitude to an integer count of `1 / 10^decimals` units
pub fn scaled_round(magnitude: f64, decimals: u32) -> u64 {
    (magnitude * 10f64.powi(decimals as i32)).round() as u64
}

/// Render a value with exactly `decimals` fractional digits
///
/// A `-` sign is written only when the rounded value is non-zero; there is
/// never a leading `+`.
pub fn format_fixed(value: f64, decimals: u32) -> String {
    let scaled = scaled_round(value.abs(), decimals);
    let sign = if value < 0.0 && scaled != 0 { "-" } else { "" };
    format!("{}{}", sign, render_scaled(scaled, decimals))
}

/// Render an already scaled integer with `decimals` fractional digits
pub fn render_scaled(scaled: u64, decimals: u32) -> String {
    if decimals == 0 {
        return scaled.to_string();
    }
    let unit = 10u64.pow(decimals);
    format!("{}.{:0width$}", scaled / unit, scaled % unit, width = decimals as usize)
}
