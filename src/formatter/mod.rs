//! Coordinate formatters
//!
//! Pure rendering of parsed or projected values into each format's canonical
//! text. All numbers go through integer-scaled rounding so output is
//! byte-identical across platforms.

mod angle;

pub use self::angle::{format_dd, format_dm, format_dms};

use crate::converter::errors::{ConversionError, ConversionResult};
use crate::coordinate::{FormatTag, GeodeticPosition, MgrsCoordinate, ProjectedCoordinate};
use crate::utils::format_utils::format_fixed;

/// Render one angle in a geodetic notation
pub fn format_angle(value: f64, format: FormatTag) -> ConversionResult<String> {
    match format {
        FormatTag::DD => Ok(format_dd(value)),
        FormatTag::DM => Ok(format_dm(value)),
        FormatTag::DMS => Ok(format_dms(value)),
        other => Err(ConversionError::GenericError(format!("{} is not an angle notation", other))),
    }
}

/// Render a position as `<latitude>, <longitude>` in a geodetic notation
pub fn format_position(position: &GeodeticPosition, format: FormatTag) -> ConversionResult<String> {
    Ok(format!("{}, {}",
               format_angle(position.latitude(), format)?,
               format_angle(position.longitude(), format)?))
}

/// Render a grid coordinate as `<zone><hemisphere> <easting> <northing>` in whole units
pub fn format_projected(coord: &ProjectedCoordinate) -> String {
    format!("{}{} {} {}",
            coord.zone_number(),
            coord.hemisphere().letter(),
            format_fixed(coord.easting(), 0),
            format_fixed(coord.northing(), 0))
}

/// Render an MGRS reference as `<zone><band> <square> <easting><northing>`
pub fn format_mgrs(mgrs: &MgrsCoordinate) -> String {
    mgrs.to_string()
}
