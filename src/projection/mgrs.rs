//! MGRS 100 km square lettering on top of UTM
//!
//! Column letters cycle through three sets of eight keyed by zone number;
//! row letters repeat every 2 000 km with a five-letter shift in even zones.
//! I and O are never used.

use super::{geodetic_to_projected, utm_central_meridian, utm_projection};
use crate::converter::errors::{ConversionError, ConversionResult};
use crate::coordinate::{FormatTag, GeodeticPosition, GridSystem, Hemisphere, MgrsCoordinate, ProjectedCoordinate};

/// Latitude band letters from 80°S northwards, 8° each (X spans 12°)
pub const BAND_LETTERS: &[u8] = b"CDEFGHJKLMNPQRSTUVWX";
/// Row letters of the 100 km squares
pub const ROW_LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUV";
/// Column letter sets, indexed by zone number modulo 3
const COLUMN_SETS: [&[u8]; 3] = [b"STUVWXYZ", b"ABCDEFGH", b"JKLMNPQR"];

pub const MGRS_MIN_LATITUDE: f64 = -80.0;
pub const MGRS_MAX_LATITUDE: f64 = 84.0;

const SQUARE_SIZE: f64 = 100_000.0;
const ROW_CYCLE: f64 = 2_000_000.0;

/// Latitude band letter containing a latitude
pub fn latitude_band(latitude: f64) -> ConversionResult<char> {
    if !(MGRS_MIN_LATITUDE..=MGRS_MAX_LATITUDE).contains(&latitude) {
        return Err(ConversionError::DomainError(format!(
            "latitude {} is outside the MGRS band range [{}, {}]",
            latitude, MGRS_MIN_LATITUDE, MGRS_MAX_LATITUDE
        )));
    }
    let index = (((latitude - MGRS_MIN_LATITUDE) / 8.0).floor() as usize).min(BAND_LETTERS.len() - 1);
    Ok(BAND_LETTERS[index] as char)
}

/// Latitude range `(bottom, top)` covered by a band letter
pub fn band_latitude_range(band: char) -> Option<(f64, f64)> {
    let index = band_index(band)?;
    let bottom = MGRS_MIN_LATITUDE + 8.0 * index as f64;
    let top = if index == BAND_LETTERS.len() - 1 { MGRS_MAX_LATITUDE } else { bottom + 8.0 };
    Some((bottom, top))
}

fn band_index(band: char) -> Option<usize> {
    BAND_LETTERS.iter().position(|&b| b as char == band)
}

fn column_set(zone_number: u8) -> &'static [u8] {
    COLUMN_SETS[(zone_number % 3) as usize]
}

fn row_offset(zone_number: u8) -> usize {
    if zone_number % 2 == 0 { 5 } else { 0 }
}

/// Encode a geodetic position as MGRS at `precision` digits per axis (1..=5)
///
/// In-square offsets are truncated to the cell size, as MGRS references
/// always name the cell containing the point.
pub fn encode(position: &GeodeticPosition, precision: u8) -> ConversionResult<MgrsCoordinate> {
    if !(1..=5).contains(&precision) {
        return Err(ConversionError::DomainError(format!(
            "MGRS precision {} is outside 1..5", precision
        )));
    }

    let band = latitude_band(position.latitude())?;
    let utm = geodetic_to_projected(position, GridSystem::Utm)?;
    let zone_number = utm.zone_number();

    let column_index = (utm.easting() / SQUARE_SIZE).floor() as usize;
    let columns = column_set(zone_number);
    if !(1..=columns.len()).contains(&column_index) {
        return Err(ConversionError::DomainError(format!(
            "easting {} has no MGRS column in zone {}", utm.easting(), zone_number
        )));
    }
    let row_index = ((utm.northing() / SQUARE_SIZE).floor() as usize + row_offset(zone_number)) % ROW_LETTERS.len();

    let cell = 10u64.pow(5 - precision as u32);
    let easting_in_square = (utm.easting().floor() as u64) % SQUARE_SIZE as u64;
    let northing_in_square = (utm.northing().floor() as u64) % SQUARE_SIZE as u64;

    MgrsCoordinate::new(
        zone_number,
        band,
        (columns[column_index - 1] as char, ROW_LETTERS[row_index] as char),
        (easting_in_square / cell) as u32,
        (northing_in_square / cell) as u32,
        precision,
    )
}

/// Decode an MGRS reference to the UTM coordinate of its cell's south-west corner
pub fn decode(mgrs: &MgrsCoordinate) -> ConversionResult<ProjectedCoordinate> {
    let square = mgrs.square_id();
    if !(1..=60).contains(&mgrs.zone_number) {
        return Err(ConversionError::format(FormatTag::MGRS, &mgrs.zone_number.to_string(), "zone must be 1..60"));
    }
    if !(1..=5).contains(&mgrs.precision) {
        return Err(ConversionError::format(FormatTag::MGRS, &mgrs.precision.to_string(), "precision must be 1..5"));
    }
    let band = band_index(mgrs.band).ok_or_else(|| {
        ConversionError::format(FormatTag::MGRS, &mgrs.band.to_string(), "not a latitude band letter")
    })?;

    let column_index = column_set(mgrs.zone_number).iter()
        .position(|&c| c as char == mgrs.column)
        .ok_or_else(|| ConversionError::format(
            FormatTag::MGRS, &square,
            format!("column letter {} is not used in zone {}", mgrs.column, mgrs.zone_number),
        ))?;
    let row_position = ROW_LETTERS.iter()
        .position(|&r| r as char == mgrs.row)
        .ok_or_else(|| ConversionError::format(
            FormatTag::MGRS, &square, format!("{} is not a row letter", mgrs.row),
        ))?;
    let row_index = (row_position + ROW_LETTERS.len() - row_offset(mgrs.zone_number)) % ROW_LETTERS.len();

    let cell = mgrs.cell_size();
    if mgrs.easting >= 100_000 / cell || mgrs.northing >= 100_000 / cell {
        return Err(ConversionError::format(FormatTag::MGRS, &mgrs.to_string(), "offset exceeds the 100 km square"));
    }

    let hemisphere = if band >= 10 { Hemisphere::North } else { Hemisphere::South };
    let band_floor = band_floor_northing(mgrs.zone_number, hemisphere, band)?;

    let mut square_northing = row_index as f64 * SQUARE_SIZE;
    while square_northing < band_floor {
        square_northing += ROW_CYCLE;
    }

    let easting = (column_index + 1) as f64 * SQUARE_SIZE + (mgrs.easting * cell) as f64;
    let northing = square_northing + (mgrs.northing * cell) as f64;
    ProjectedCoordinate::new(mgrs.zone_number, hemisphere, easting, northing, GridSystem::Utm)
}

/// Lowest 100 km square northing a band can contain, with one square of slack
/// for the curvature of parallels across the zone
fn band_floor_northing(zone_number: u8, hemisphere: Hemisphere, band: usize) -> ConversionResult<f64> {
    let bottom_latitude = MGRS_MIN_LATITUDE + 8.0 * band as f64;
    let central_meridian = utm_central_meridian(zone_number);
    let (_, northing) = utm_projection(central_meridian, hemisphere)?.forward(bottom_latitude, central_meridian);
    Ok((northing / SQUARE_SIZE).floor() * SQUARE_SIZE - SQUARE_SIZE)
}
