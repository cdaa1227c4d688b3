//! Coordinate text parsers
//!
//! Each format tag has one strict grammar. Parsing never guesses: any token
//! that does not fit is reported as a `FormatError` naming the token.

pub mod angle;
pub mod grid;

use log::debug;

use crate::converter::errors::ConversionResult;
use crate::coordinate::{FormatTag, GeodeticPosition, ProjectedCoordinate};
use crate::projection::mgrs;

/// Internal representation produced by a parser
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedCoordinate {
    /// A lone latitude or longitude component
    Angle(f64),
    /// A `latitude, longitude` pair
    Position(GeodeticPosition),
    /// A grid coordinate (MGRS is already resolved to its UTM cell corner)
    Projected(ProjectedCoordinate),
}

/// Parse text under the grammar of `format`
pub fn parse(text: &str, format: FormatTag) -> ConversionResult<ParsedCoordinate> {
    let parsed = match format {
        FormatTag::DD | FormatTag::DM | FormatTag::DMS => angle::parse_geodetic(text, format)?,
        FormatTag::MGRS => {
            let reference = grid::parse_mgrs(text)?;
            ParsedCoordinate::Projected(mgrs::decode(&reference)?)
        },
        FormatTag::UTM
        | FormatTag::MrsoGdm2000
        | FormatTag::BrsoGdm2000
        | FormatTag::RsoKertau
        | FormatTag::RsoTimbalaiSabah
        | FormatTag::RsoTimbalaiSarawak => ParsedCoordinate::Projected(grid::parse_grid(text, format)?),
    };

    debug!("Parsed '{}' as {}: {:?}", text, format, parsed);
    Ok(parsed)
}
