//! Parsers for DD, DM and DMS notations
//!
//! Grammars:
//! - DD: `[+-]<decimal>`
//! - DM: `[+-]<degrees>[° ]+<minutes>[' ]*`
//! - DMS: `[+-]<degrees>[° ]+<minutes>[' ]+<seconds>[" ]*`
//!
//! The sign applies to the whole value, so `-0° 30'` is -0.5.

use lazy_static::lazy_static;
use regex::Regex;

use super::ParsedCoordinate;
use crate::converter::errors::{ConversionError, ConversionResult};
use crate::coordinate::{FormatTag, GeodeticPosition};

lazy_static! {
    static ref DD_PATTERN: Regex = Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$").unwrap();
    static ref DM_PATTERN: Regex =
        Regex::new(r#"^([+-]?)(\d+(?:\.\d+)?)[°\s]+(\d+(?:\.\d+)?)['\s]*$"#).unwrap();
    static ref DMS_PATTERN: Regex =
        Regex::new(r#"^([+-]?)(\d+(?:\.\d+)?)[°\s]+(\d+(?:\.\d+)?)['\s]+(\d+(?:\.\d+)?)["\s]*$"#).unwrap();
}

/// Largest magnitude accepted for a lone angle
const MAX_ANGLE: f64 = 180.0;

/// Parse either a single angle or a `latitude, longitude` pair
pub fn parse_geodetic(text: &str, format: FormatTag) -> ConversionResult<ParsedCoordinate> {
    let text = text.trim();
    if !text.contains(',') {
        return Ok(ParsedCoordinate::Angle(parse_angle(text, format)?));
    }

    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 2 {
        return Err(ConversionError::format(format, text, "expected 'latitude, longitude'"));
    }

    // Latitude range and longitude wrapping are the position's business
    let latitude = parse_component(parts[0], format)?;
    let longitude = parse_component(parts[1], format)?;
    Ok(ParsedCoordinate::Position(GeodeticPosition::new(latitude, longitude)?))
}

/// Parse one lone angle in DD, DM or DMS notation, within [-180, 180]
pub fn parse_angle(text: &str, format: FormatTag) -> ConversionResult<f64> {
    let text = text.trim();
    let value = parse_component(text, format)?;

    if value.abs() > MAX_ANGLE {
        return Err(ConversionError::DomainError(format!(
            "angle {} is outside [-{}, {}]", text, MAX_ANGLE, MAX_ANGLE
        )));
    }
    Ok(value)
}

/// Parse one component of any magnitude
fn parse_component(text: &str, format: FormatTag) -> ConversionResult<f64> {
    let text = text.trim();
    match format {
        FormatTag::DD => parse_dd(text),
        FormatTag::DM => parse_dm(text),
        FormatTag::DMS => parse_dms(text),
        other => Err(ConversionError::GenericError(format!("{} is not an angle notation", other))),
    }
}

fn parse_dd(text: &str) -> ConversionResult<f64> {
    if !DD_PATTERN.is_match(text) {
        return Err(ConversionError::format(FormatTag::DD, text, "expected a signed decimal number"));
    }
    number(text, FormatTag::DD)
}

fn parse_dm(text: &str) -> ConversionResult<f64> {
    let caps = DM_PATTERN.captures(text).ok_or_else(|| {
        ConversionError::format(FormatTag::DM, text, "expected <degrees>° <minutes>'")
    })?;

    let degrees = number(&caps[2], FormatTag::DM)?;
    let minutes = sexagesimal(&caps[3], FormatTag::DM, "minutes")?;
    Ok(apply_sign(&caps[1], degrees + minutes / 60.0))
}

fn parse_dms(text: &str) -> ConversionResult<f64> {
    let caps = DMS_PATTERN.captures(text).ok_or_else(|| {
        ConversionError::format(FormatTag::DMS, text, "expected <degrees>° <minutes>' <seconds>\"")
    })?;

    let degrees = number(&caps[2], FormatTag::DMS)?;
    let minutes = sexagesimal(&caps[3], FormatTag::DMS, "minutes")?;
    let seconds = sexagesimal(&caps[4], FormatTag::DMS, "seconds")?;
    Ok(apply_sign(&caps[1], degrees + minutes / 60.0 + seconds / 3600.0))
}

fn number(token: &str, format: FormatTag) -> ConversionResult<f64> {
    token.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConversionError::format(format, token, "not a finite number"))
}

/// Minutes or seconds field, which must lie in [0, 60)
fn sexagesimal(token: &str, format: FormatTag, field: &str) -> ConversionResult<f64> {
    let value = number(token, format)?;
    if value >= 60.0 {
        return Err(ConversionError::format(format, token, format!("{} must be below 60", field)));
    }
    Ok(value)
}

fn apply_sign(sign: &str, magnitude: f64) -> f64 {
    if sign == "-" { -magnitude } else { magnitude }
}
