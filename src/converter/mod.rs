//! Conversion façade
//!
//! `convert` drives parse → (project) → format for any pair of format tags.
//! Everything here is a pure function over immutable values; the only state
//! is the static grid parameter table.

pub mod errors;
pub mod history;
pub mod record;

#[cfg(test)]
mod tests;

use log::debug;

pub use self::errors::{ConversionError, ConversionResult};
pub use self::history::{HistoryStore, JsonLinesHistory, MemoryHistory};
pub use self::record::{describe_conversion, ConversionRecord};

use crate::coordinate::{FormatTag, GeodeticPosition};
use crate::formatter;
use crate::parser::{self, ParsedCoordinate};
use crate::projection::{self, mgrs};

/// Default MGRS digits per axis (1 m)
pub const DEFAULT_MGRS_PRECISION: u8 = 5;

/// Rendering options for conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// MGRS digits per axis, 1..=5
    pub mgrs_precision: u8,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            mgrs_precision: DEFAULT_MGRS_PRECISION,
        }
    }
}

/// Convert coordinate text from one format to another with default options
///
/// Identical tags return the input untouched without parsing it.
pub fn convert(input: &str, from: FormatTag, to: FormatTag) -> ConversionResult<String> {
    convert_with_options(input, from, to, &ConversionOptions::default())
}

/// Convert coordinate text from one format to another
///
/// Grid coordinates are always inverted to a geodetic position first, so a
/// conversion between two grids never shortcuts grid-to-grid.
///
/// # Arguments
/// * `input` - Coordinate text in the grammar of `from`
/// * `from` - Format of the input
/// * `to` - Format of the output
/// * `options` - Rendering options (MGRS precision)
///
/// # Returns
/// The converted text or the first error encountered
pub fn convert_with_options(
    input: &str,
    from: FormatTag,
    to: FormatTag,
    options: &ConversionOptions,
) -> ConversionResult<String> {
    if from == to {
        return Ok(input.to_string());
    }

    let output = match parser::parse(input, from)? {
        ParsedCoordinate::Angle(value) => {
            if !to.is_geodetic() {
                return Err(ConversionError::unsupported(
                    from, to, "a single angle cannot be projected; supply 'latitude, longitude'",
                ));
            }
            formatter::format_angle(value, to)?
        },
        ParsedCoordinate::Position(position) => render_position(&position, to, options)?,
        ParsedCoordinate::Projected(coord) => {
            let position = projection::projected_to_geodetic(&coord)?;
            render_position(&position, to, options)?
        },
    };

    debug!("Converted '{}' from {} to {}: '{}'", input, from, to, output);
    Ok(output)
}

/// Render a geodetic position in any target format, projecting when needed
fn render_position(position: &GeodeticPosition, to: FormatTag, options: &ConversionOptions) -> ConversionResult<String> {
    match (to, to.grid_system()) {
        (_, None) => formatter::format_position(position, to),
        (FormatTag::MGRS, Some(_)) => {
            let reference = mgrs::encode(position, options.mgrs_precision)?;
            Ok(formatter::format_mgrs(&reference))
        },
        (_, Some(system)) => {
            let coord = projection::geodetic_to_projected(position, system)?;
            Ok(formatter::format_projected(&coord))
        },
    }
}
