//! Parsers for grid notations
//!
//! UTM and the RSO grids share `<zone><letter> <easting> <northing>` with
//! single spaces. MGRS is `<zone><band> <square> <digits>`, where the digit
//! block holds easting then northing with equal length, either concatenated
//! or separated by one space.

use lazy_static::lazy_static;
use regex::Regex;

use crate::converter::errors::{ConversionError, ConversionResult};
use crate::coordinate::{FormatTag, Hemisphere, MgrsCoordinate, ProjectedCoordinate};
use crate::projection::mgrs::{BAND_LETTERS, ROW_LETTERS};

lazy_static! {
    static ref GRID_PATTERN: Regex =
        Regex::new(r"^(\d{1,2})([A-Za-z]) (\d+(?:\.\d+)?) (\d+(?:\.\d+)?)$").unwrap();
    static ref MGRS_PATTERN: Regex =
        Regex::new(r"^(\d{1,2})([A-Za-z]) ([A-Za-z]{2}) (\d+)(?: (\d+))?$").unwrap();
}

/// Parse a UTM or RSO grid coordinate
pub fn parse_grid(text: &str, format: FormatTag) -> ConversionResult<ProjectedCoordinate> {
    let grid_system = format.grid_system()
        .ok_or_else(|| ConversionError::GenericError(format!("{} is not a grid notation", format)))?;

    let text = text.trim();
    let caps = GRID_PATTERN.captures(text).ok_or_else(|| {
        ConversionError::format(format, text, "expected '<zone><letter> <easting> <northing>'")
    })?;

    let zone_number = zone(&caps[1], format)?;
    let letter = single_char(&caps[2]);
    let hemisphere = Hemisphere::from_letter(letter).ok_or_else(|| {
        ConversionError::format(format, &caps[2], "expected N, S or an upper-case latitude band letter")
    })?;
    let easting = coordinate(&caps[3], format)?;
    let northing = coordinate(&caps[4], format)?;

    let coord = ProjectedCoordinate::new(zone_number, hemisphere, easting, northing, grid_system)?;
    Ok(match letter {
        'N' | 'S' => coord,
        band => coord.with_latitude_band(band),
    })
}

/// Parse an MGRS reference into its lexical parts
pub fn parse_mgrs(text: &str) -> ConversionResult<MgrsCoordinate> {
    let text = text.trim();
    let caps = MGRS_PATTERN.captures(text).ok_or_else(|| {
        ConversionError::format(FormatTag::MGRS, text, "expected '<zone><band> <square> <easting><northing>'")
    })?;

    let zone_number = zone(&caps[1], FormatTag::MGRS)?;

    let band = single_char(&caps[2]);
    if !BAND_LETTERS.contains(&(band as u8)) {
        return Err(ConversionError::format(FormatTag::MGRS, &caps[2], "not a latitude band letter (C..X without I, O)"));
    }

    let square = &caps[3];
    let mut letters = square.chars();
    let (column, row) = match (letters.next(), letters.next()) {
        (Some(column), Some(row)) if column.is_ascii_uppercase() && ROW_LETTERS.contains(&(row as u8)) => (column, row),
        _ => {
            return Err(ConversionError::format(FormatTag::MGRS, square, "not a 100 km square identifier"));
        },
    };

    let (easting_digits, northing_digits) = match caps.get(5) {
        Some(northing) => (&caps[4], northing.as_str()),
        None => {
            let digits = &caps[4];
            if digits.len() % 2 != 0 {
                return Err(ConversionError::format(FormatTag::MGRS, digits, "digit block must have even length"));
            }
            digits.split_at(digits.len() / 2)
        },
    };

    if easting_digits.len() != northing_digits.len() || !(1..=5).contains(&easting_digits.len()) {
        return Err(ConversionError::format(
            FormatTag::MGRS,
            &format!("{} {}", easting_digits, northing_digits),
            "easting and northing need the same number of digits, 1 to 5",
        ));
    }

    Ok(MgrsCoordinate {
        zone_number,
        band,
        column,
        row,
        easting: digits(easting_digits)?,
        northing: digits(northing_digits)?,
        precision: easting_digits.len() as u8,
    })
}

fn single_char(token: &str) -> char {
    token.chars().next().unwrap_or(' ')
}

fn zone(token: &str, format: FormatTag) -> ConversionResult<u8> {
    token.parse::<u8>()
        .ok()
        .filter(|zone| (1..=60).contains(zone))
        .ok_or_else(|| ConversionError::format(format, token, "zone must be 1..60"))
}

fn coordinate(token: &str, format: FormatTag) -> ConversionResult<f64> {
    token.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConversionError::format(format, token, "not a finite non-negative number"))
}

fn digits(token: &str) -> ConversionResult<u32> {
    token.parse::<u32>()
        .map_err(|_| ConversionError::format(FormatTag::MGRS, token, "not a digit block"))
}
