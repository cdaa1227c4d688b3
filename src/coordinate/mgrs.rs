//! MGRS grid reference value

use std::fmt;

use crate::converter::errors::{ConversionError, ConversionResult};

/// A UTM coordinate expressed as a 100 km square plus in-square offsets
///
/// `easting` and `northing` count cells of `10^(5 - precision)` metres from
/// the south-west corner of the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MgrsCoordinate {
    pub zone_number: u8,
    /// Latitude band letter (C..X, without I and O)
    pub band: char,
    /// 100 km square column letter
    pub column: char,
    /// 100 km square row letter
    pub row: char,
    pub easting: u32,
    pub northing: u32,
    /// Digits per axis, 1..=5
    pub precision: u8,
}

impl MgrsCoordinate {
    /// Create a reference, checking zone, precision and that the offsets fit
    /// in `precision` digits
    ///
    /// Letters are checked against the zone when the reference is decoded.
    pub fn new(
        zone_number: u8,
        band: char,
        square: (char, char),
        easting: u32,
        northing: u32,
        precision: u8,
    ) -> ConversionResult<Self> {
        if !(1..=60).contains(&zone_number) {
            return Err(ConversionError::DomainError(format!("MGRS zone {} is outside 1..60", zone_number)));
        }
        if !(1..=5).contains(&precision) {
            return Err(ConversionError::DomainError(format!("MGRS precision {} is outside 1..5", precision)));
        }
        let limit = 10u32.pow(precision as u32);
        if easting >= limit || northing >= limit {
            return Err(ConversionError::DomainError(format!(
                "MGRS offsets ({}, {}) do not fit in {} digits", easting, northing, precision
            )));
        }

        Ok(MgrsCoordinate {
            zone_number,
            band,
            column: square.0,
            row: square.1,
            easting,
            northing,
            precision,
        })
    }

    /// Two-letter 100 km square identifier
    pub fn square_id(&self) -> String {
        format!("{}{}", self.column, self.row)
    }

    /// Size of one cell in metres at this precision (1 m beyond five digits)
    pub fn cell_size(&self) -> u32 {
        10u32.pow(5u32.saturating_sub(self.precision as u32))
    }
}

impl fmt::Display for MgrsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.precision as usize;
        write!(f, "{}{} {} {:0width$}{:0width$}",
               self.zone_number, self.band, self.square_id(),
               self.easting, self.northing, width = width)
    }
}
