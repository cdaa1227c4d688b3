//! Projected (grid) coordinates

use std::fmt;

use super::crs::GridSystem;
use crate::converter::errors::{ConversionError, ConversionResult};

/// Lowest easting accepted for a UTM coordinate
pub const UTM_MIN_EASTING: f64 = 100_000.0;
/// Highest easting accepted for a UTM coordinate
pub const UTM_MAX_EASTING: f64 = 900_000.0;
/// Northing range of a UTM hemisphere
pub const UTM_MAX_NORTHING: f64 = 10_000_000.0;

/// Hemisphere of a projected coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Hemisphere containing a latitude (the equator counts as north)
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    /// Resolve a grid letter: `N`/`S` name the hemisphere directly, any other
    /// MGRS latitude band letter resolves to the hemisphere it lies in
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'C'..='H' | 'J'..='M' => Some(Hemisphere::South),
            'P'..='R' | 'T'..='X' => Some(Hemisphere::North),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

/// A coordinate on one of the projected grids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedCoordinate {
    zone_number: u8,
    hemisphere: Hemisphere,
    easting: f64,
    northing: f64,
    grid_system: GridSystem,
    /// Band letter written in place of `N`/`S` on input, if any
    latitude_band: Option<char>,
}

impl ProjectedCoordinate {
    /// Create a projected coordinate, checking the grid's valid ranges
    ///
    /// # Arguments
    /// * `zone_number` - UTM zone (1..=60); informational for the RSO grids
    /// * `hemisphere` - Hemisphere selecting the UTM false northing
    /// * `easting` - Easting in the grid's unit
    /// * `northing` - Northing in the grid's unit
    /// * `grid_system` - Parameter set governing interpretation
    pub fn new(
        zone_number: u8,
        hemisphere: Hemisphere,
        easting: f64,
        northing: f64,
        grid_system: GridSystem,
    ) -> ConversionResult<Self> {
        if !(1..=60).contains(&zone_number) {
            return Err(ConversionError::DomainError(format!(
                "zone {} is outside 1..60", zone_number
            )));
        }
        if !easting.is_finite() || !northing.is_finite() {
            return Err(ConversionError::DomainError(format!(
                "non-finite grid coordinate ({}, {})", easting, northing
            )));
        }

        if grid_system.is_zoned() {
            if !(UTM_MIN_EASTING..=UTM_MAX_EASTING).contains(&easting) {
                return Err(ConversionError::DomainError(format!(
                    "UTM easting {} is outside [{}, {}]", easting, UTM_MIN_EASTING, UTM_MAX_EASTING
                )));
            }
            if !(0.0..=UTM_MAX_NORTHING).contains(&northing) {
                return Err(ConversionError::DomainError(format!(
                    "UTM northing {} is outside [0, {}]", northing, UTM_MAX_NORTHING
                )));
            }
        } else if easting < 0.0 || northing < 0.0 {
            return Err(ConversionError::DomainError(format!(
                "{} coordinate ({}, {}) has a negative component", grid_system, easting, northing
            )));
        }

        Ok(ProjectedCoordinate {
            zone_number,
            hemisphere,
            easting,
            northing,
            grid_system,
            latitude_band: None,
        })
    }

    /// Attach the latitude band letter the coordinate was written with
    pub fn with_latitude_band(mut self, band: char) -> Self {
        self.latitude_band = Some(band);
        self
    }

    pub fn zone_number(&self) -> u8 {
        self.zone_number
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    pub fn grid_system(&self) -> GridSystem {
        self.grid_system
    }

    pub fn latitude_band(&self) -> Option<char> {
        self.latitude_band
    }
}

impl fmt::Display for ProjectedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{} {:.3} {:.3}",
               self.grid_system, self.zone_number, self.hemisphere.letter(),
               self.easting, self.northing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_letters_resolve_to_hemisphere() {
        assert_eq!(Hemisphere::from_letter('N'), Some(Hemisphere::North));
        assert_eq!(Hemisphere::from_letter('S'), Some(Hemisphere::South));
        assert_eq!(Hemisphere::from_letter('T'), Some(Hemisphere::North));
        assert_eq!(Hemisphere::from_letter('C'), Some(Hemisphere::South));
        assert_eq!(Hemisphere::from_letter('I'), None);
        assert_eq!(Hemisphere::from_letter('n'), None);
    }

    #[test]
    fn test_utm_ranges_are_enforced() {
        assert!(ProjectedCoordinate::new(31, Hemisphere::North, 448251.0, 5632643.0, GridSystem::Utm).is_ok());
        assert!(ProjectedCoordinate::new(31, Hemisphere::North, 50_000.0, 5632643.0, GridSystem::Utm).is_err());
        assert!(ProjectedCoordinate::new(0, Hemisphere::North, 448251.0, 5632643.0, GridSystem::Utm).is_err());
        assert!(ProjectedCoordinate::new(48, Hemisphere::North, -1.0, 10.0, GridSystem::MrsoGdm2000).is_err());
    }
}
