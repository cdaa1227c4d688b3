//! Embedded grid system parameter table
//!
//! Ellipsoids and projection constants for every supported grid live in
//! `grid_systems.toml`, compiled into the binary and parsed once on first use.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::error;

use super::ellipsoid::Ellipsoid;
use crate::converter::errors::{ConversionError, ConversionResult};
use crate::coordinate::GridSystem;

lazy_static! {
    // Parse the TOML table on first access
    static ref GRID_DEFINITIONS: GridDefinitions = {
        let content = include_str!("../../grid_systems.toml");
        GridDefinitions::from_str(content).unwrap_or_else(|e| {
            error!("Failed to parse grid system definitions: {}", e);
            GridDefinitions::default()
        })
    };
}

/// Projection family used by a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Zoned Transverse Mercator (UTM)
    TransverseMercator,
    /// Hotine Oblique Mercator; `centre_origin` selects variant B, where the
    /// false easting/northing apply at the projection centre
    HotineObliqueMercator { centre_origin: bool },
}

/// Geographic box in which a grid is considered valid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl GeographicBounds {
    /// Check whether a position lies inside the box widened by `tolerance` degrees
    pub fn contains(&self, latitude: f64, longitude: f64, tolerance: f64) -> bool {
        latitude >= self.min_latitude - tolerance
            && latitude <= self.max_latitude + tolerance
            && longitude >= self.min_longitude - tolerance
            && longitude <= self.max_longitude + tolerance
    }
}

/// Complete parameter set of one grid system
#[derive(Debug, Clone)]
pub struct GridDefinition {
    pub name: String,
    pub epsg: Option<u32>,
    pub ellipsoid: Ellipsoid,
    pub kind: ProjectionKind,
    pub scale_factor: f64,
    /// False easting in grid units (at the natural origin, or at the centre for variant B)
    pub false_easting: f64,
    pub false_northing: f64,
    /// False northing for southern-hemisphere zones (UTM only)
    pub false_northing_south: f64,
    pub latitude_of_centre: f64,
    pub longitude_of_centre: f64,
    /// Azimuth of the initial line at the centre, degrees
    pub azimuth: f64,
    /// Angle from the rectified grid to the skew grid, degrees
    pub rectified_grid_angle: f64,
    /// Length of one grid unit in metres
    pub unit_to_metre: f64,
    pub bounds: GeographicBounds,
}

impl GridDefinition {
    /// Grid name with its EPSG code, when known
    pub fn label(&self) -> String {
        match self.epsg {
            Some(code) => format!("{} (EPSG:{})", self.name, code),
            None => self.name.clone(),
        }
    }
}

/// Container for all ellipsoid and grid definitions
#[derive(Debug, Default)]
pub struct GridDefinitions {
    pub ellipsoids: HashMap<String, Ellipsoid>,
    pub grids: HashMap<String, GridDefinition>,
}

impl GridDefinitions {
    /// Parse grid definitions from a TOML string
    pub fn from_str(content: &str) -> ConversionResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(ConversionError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut defs = GridDefinitions::default();

        if let Some(table) = toml_value.get("ellipsoids").and_then(|v| v.as_table()) {
            for (key, entry) in table {
                let name = entry.get("name").and_then(|v| v.as_str()).unwrap_or(key);
                let ellipsoid = Ellipsoid::new(
                    name,
                    required_f64(entry, key, "semi_major_axis")?,
                    required_f64(entry, key, "inverse_flattening")?,
                );
                defs.ellipsoids.insert(key.clone(), ellipsoid);
            }
        }

        if let Some(table) = toml_value.get("grid_systems").and_then(|v| v.as_table()) {
            for (key, entry) in table {
                let grid = defs.parse_grid(key, entry)?;
                defs.grids.insert(key.clone(), grid);
            }
        }

        Ok(defs)
    }

    /// Helper to build one grid definition from its TOML table
    fn parse_grid(&self, key: &str, entry: &toml::Value) -> ConversionResult<GridDefinition> {
        let ellipsoid_key = entry.get("ellipsoid").and_then(|v| v.as_str())
            .ok_or_else(|| ConversionError::GenericError(format!("Grid '{}' has no ellipsoid", key)))?;
        let ellipsoid = self.ellipsoids.get(ellipsoid_key).cloned()
            .ok_or_else(|| ConversionError::GenericError(format!(
                "Grid '{}' references unknown ellipsoid '{}'", key, ellipsoid_key
            )))?;

        let kind = match entry.get("projection").and_then(|v| v.as_str()) {
            Some("transverse_mercator") => ProjectionKind::TransverseMercator,
            Some("hotine_oblique_mercator_a") => ProjectionKind::HotineObliqueMercator { centre_origin: false },
            Some("hotine_oblique_mercator_b") => ProjectionKind::HotineObliqueMercator { centre_origin: true },
            other => return Err(ConversionError::GenericError(format!(
                "Grid '{}' has unsupported projection {:?}", key, other
            ))),
        };

        let false_northing = required_f64(entry, key, "false_northing")?;

        Ok(GridDefinition {
            name: entry.get("name").and_then(|v| v.as_str()).unwrap_or(key).to_string(),
            epsg: entry.get("epsg").and_then(|v| v.as_integer()).map(|code| code as u32),
            ellipsoid,
            kind,
            scale_factor: required_f64(entry, key, "scale_factor")?,
            false_easting: required_f64(entry, key, "false_easting")?,
            false_northing,
            false_northing_south: optional_f64(entry, "false_northing_south").unwrap_or(false_northing),
            latitude_of_centre: optional_f64(entry, "latitude_of_centre").unwrap_or(0.0),
            longitude_of_centre: optional_f64(entry, "longitude_of_centre").unwrap_or(0.0),
            azimuth: optional_f64(entry, "azimuth").unwrap_or(0.0),
            rectified_grid_angle: optional_f64(entry, "rectified_grid_angle").unwrap_or(0.0),
            unit_to_metre: optional_f64(entry, "unit_to_metre").unwrap_or(1.0),
            bounds: GeographicBounds {
                min_latitude: required_f64(entry, key, "min_latitude")?,
                max_latitude: required_f64(entry, key, "max_latitude")?,
                min_longitude: required_f64(entry, key, "min_longitude")?,
                max_longitude: required_f64(entry, key, "max_longitude")?,
            },
        })
    }

    /// Get the definition of a grid system
    pub fn get(&self, system: GridSystem) -> ConversionResult<&GridDefinition> {
        self.grids.get(system.key()).ok_or_else(|| ConversionError::GenericError(format!(
            "No parameters defined for grid system {}", system
        )))
    }
}

/// Read a numeric field, accepting TOML integers as well as floats
fn optional_f64(entry: &toml::Value, field: &str) -> Option<f64> {
    let value = entry.get(field)?;
    value.as_float().or_else(|| value.as_integer().map(|i| i as f64))
}

fn required_f64(entry: &toml::Value, key: &str, field: &str) -> ConversionResult<f64> {
    optional_f64(entry, field).ok_or_else(|| ConversionError::GenericError(format!(
        "Entry '{}' is missing numeric field '{}'", key, field
    )))
}

/// Look up the parameter set of a grid system in the embedded table
pub fn grid_definition(system: GridSystem) -> ConversionResult<&'static GridDefinition> {
    GRID_DEFINITIONS.get(system)
}
