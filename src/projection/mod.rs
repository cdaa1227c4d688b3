//! Projection math
//!
//! Deterministic forward and inverse transforms between geodetic positions
//! and every supported grid, parameterized by the embedded grid table.
//!
//! UTM zones follow `floor((lon + 180) / 6) + 1` everywhere; the widened
//! Norway and Svalbard zones are not applied.

pub mod ellipsoid;
pub mod grid_table;
pub mod mgrs;
pub mod oblique_mercator;
pub mod transverse_mercator;

use log::debug;

use self::grid_table::{grid_definition, ProjectionKind};
use self::oblique_mercator::HotineObliqueMercator;
use self::transverse_mercator::TransverseMercator;
use crate::converter::errors::{ConversionError, ConversionResult};
use crate::coordinate::{GeodeticPosition, GridSystem, Hemisphere, ProjectedCoordinate};

/// Slack, in degrees, when checking that an inverse result lies in a grid's domain
const INVERSE_TOLERANCE_DEG: f64 = 0.01;

/// Half the width of a UTM zone in degrees of longitude
const UTM_HALF_ZONE_WIDTH_DEG: f64 = 3.0;
/// How far, in degrees, a UTM coordinate may reach past its zone edge
/// (about 40 km at mid latitudes)
const UTM_ZONE_OVERLAP_DEG: f64 = 0.5;

/// UTM zone number for a longitude
pub fn utm_zone_number(longitude: f64) -> u8 {
    (((longitude + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60) as u8
}

/// Central meridian of a UTM zone in degrees
pub fn utm_central_meridian(zone_number: u8) -> f64 {
    zone_number as f64 * 6.0 - 183.0
}

/// Transverse Mercator for one UTM zone and hemisphere
pub(crate) fn utm_projection(central_meridian: f64, hemisphere: Hemisphere) -> ConversionResult<TransverseMercator> {
    let def = grid_definition(GridSystem::Utm)?;
    let false_northing = match hemisphere {
        Hemisphere::North => def.false_northing,
        Hemisphere::South => def.false_northing_south,
    };
    Ok(TransverseMercator::new(&def.ellipsoid, def.scale_factor, central_meridian, def.false_easting, false_northing))
}

/// Project a geodetic position onto a grid
///
/// The zone number and hemisphere of the result are the UTM zone and
/// hemisphere of the position, also for the single-origin RSO grids.
pub fn geodetic_to_projected(position: &GeodeticPosition, system: GridSystem) -> ConversionResult<ProjectedCoordinate> {
    let def = grid_definition(system)?;
    let (lat, lon) = (position.latitude(), position.longitude());

    if !def.bounds.contains(lat, lon, 0.0) {
        return Err(ConversionError::DomainError(format!(
            "({}, {}) is outside the {} domain: latitude [{}, {}], longitude [{}, {}]",
            lat, lon, def.label(),
            def.bounds.min_latitude, def.bounds.max_latitude,
            def.bounds.min_longitude, def.bounds.max_longitude
        )));
    }

    let zone_number = utm_zone_number(lon);
    let hemisphere = Hemisphere::from_latitude(lat);

    let (easting, northing) = match def.kind {
        ProjectionKind::TransverseMercator => {
            utm_projection(utm_central_meridian(zone_number), hemisphere)?.forward(lat, lon)
        },
        ProjectionKind::HotineObliqueMercator { .. } => {
            HotineObliqueMercator::new(def)?.forward(lat, lon)
        },
    };

    debug!("Projected ({}, {}) to {} on {}: {} {}", lat, lon, system, def.ellipsoid.name, easting, northing);
    ProjectedCoordinate::new(zone_number, hemisphere, easting, northing, system)
}

/// Invert a grid coordinate back to a geodetic position
pub fn projected_to_geodetic(coord: &ProjectedCoordinate) -> ConversionResult<GeodeticPosition> {
    let system = coord.grid_system();
    let def = grid_definition(system)?;

    let (lat, lon) = match def.kind {
        ProjectionKind::TransverseMercator => {
            utm_projection(utm_central_meridian(coord.zone_number()), coord.hemisphere())?
                .inverse(coord.easting(), coord.northing())
        },
        ProjectionKind::HotineObliqueMercator { .. } => {
            HotineObliqueMercator::new(def)?.inverse(coord.easting(), coord.northing())
        },
    };

    debug!("Inverted {} to ({}, {})", coord, lat, lon);
    let position = GeodeticPosition::new(lat, lon)?;

    if !def.bounds.contains(position.latitude(), position.longitude(), INVERSE_TOLERANCE_DEG) {
        return Err(ConversionError::DomainError(format!(
            "{} decodes to ({:.6}, {:.6}), outside the {} domain: latitude [{}, {}], longitude [{}, {}]",
            coord, position.latitude(), position.longitude(), def.label(),
            def.bounds.min_latitude, def.bounds.max_latitude,
            def.bounds.min_longitude, def.bounds.max_longitude
        )));
    }

    if def.kind == ProjectionKind::TransverseMercator {
        check_utm_cell(coord, &position)?;
    }

    Ok(position)
}

/// A UTM inverse must land in (or just past) the zone it names, and inside
/// the latitude band when a band letter was given
fn check_utm_cell(coord: &ProjectedCoordinate, position: &GeodeticPosition) -> ConversionResult<()> {
    let central_meridian = utm_central_meridian(coord.zone_number());
    let offset = (position.longitude() - central_meridian + 180.0).rem_euclid(360.0) - 180.0;
    if offset.abs() > UTM_HALF_ZONE_WIDTH_DEG + UTM_ZONE_OVERLAP_DEG {
        return Err(ConversionError::DomainError(format!(
            "{} decodes to longitude {:.6}, outside zone {} which covers longitude [{}, {}]",
            coord, position.longitude(), coord.zone_number(),
            central_meridian - UTM_HALF_ZONE_WIDTH_DEG, central_meridian + UTM_HALF_ZONE_WIDTH_DEG
        )));
    }

    if let Some(band) = coord.latitude_band() {
        if let Some((bottom, top)) = mgrs::band_latitude_range(band) {
            let latitude = position.latitude();
            if latitude < bottom - INVERSE_TOLERANCE_DEG || latitude > top + INVERSE_TOLERANCE_DEG {
                return Err(ConversionError::DomainError(format!(
                    "{} decodes to latitude {:.6}, outside band {} which covers latitude [{}, {}]",
                    coord, latitude, band, bottom, top
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_numbers() {
        assert_eq!(utm_zone_number(-180.0), 1);
        assert_eq!(utm_zone_number(4.333333), 31);
        assert_eq!(utm_zone_number(179.9), 60);
        assert_eq!(utm_zone_number(180.0), 60);
        // Norway exception is deliberately not applied
        assert_eq!(utm_zone_number(5.0), 31);
        assert_eq!(utm_central_meridian(31), 3.0);
    }

    #[test]
    fn test_utm_domain_is_enforced() {
        let arctic = GeodeticPosition::new(85.0, 10.0).unwrap();
        assert!(matches!(geodetic_to_projected(&arctic, GridSystem::Utm), Err(ConversionError::DomainError(_))));
    }

    #[test]
    fn test_regional_domain_is_enforced() {
        let london = GeodeticPosition::new(51.5, -0.12).unwrap();
        for system in GridSystem::ALL.iter().skip(1) {
            assert!(matches!(geodetic_to_projected(&london, *system), Err(ConversionError::DomainError(_))));
        }
    }

    #[test]
    fn test_utm_coordinate_must_lie_in_its_zone() {
        let far_west = ProjectedCoordinate::new(31, Hemisphere::North, 100_000.0, 9_300_000.0, GridSystem::Utm).unwrap();
        assert!(matches!(projected_to_geodetic(&far_west), Err(ConversionError::DomainError(_))));

        let across_antimeridian = ProjectedCoordinate::new(1, Hemisphere::North, 100_000.0, 9_000_000.0, GridSystem::Utm).unwrap();
        let message = projected_to_geodetic(&across_antimeridian).unwrap_err().to_string();
        assert!(message.contains("zone 1 which covers longitude [-180, -174]"), "{}", message);

        // Slightly past the zone edge is still accepted
        let overlap = ProjectedCoordinate::new(33, Hemisphere::North, 294409.0, 5814623.0, GridSystem::Utm).unwrap();
        assert!(projected_to_geodetic(&overlap).is_ok());
    }

    #[test]
    fn test_band_letter_must_match_latitude() {
        let coord = ProjectedCoordinate::new(33, Hemisphere::North, 294409.0, 5814623.0, GridSystem::Utm).unwrap();
        assert!(projected_to_geodetic(&coord.with_latitude_band('U')).is_ok());
        assert!(matches!(projected_to_geodetic(&coord.with_latitude_band('T')), Err(ConversionError::DomainError(_))));

        let south = ProjectedCoordinate::new(33, Hemisphere::South, 294409.0, 5814623.0, GridSystem::Utm).unwrap();
        let message = projected_to_geodetic(&south.with_latitude_band('C')).unwrap_err().to_string();
        assert!(message.contains("band C"), "{}", message);
    }

    #[test]
    fn test_utm_northing_beyond_domain_is_rejected() {
        let coord = ProjectedCoordinate::new(31, Hemisphere::North, 500000.0, 9_900_000.0, GridSystem::Utm).unwrap();
        assert!(matches!(projected_to_geodetic(&coord), Err(ConversionError::DomainError(_))));
    }
}
