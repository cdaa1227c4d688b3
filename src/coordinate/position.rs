//! Geodetic position on the reference ellipsoid

use crate::converter::errors::{ConversionError, ConversionResult};

/// Latitude/longitude pair in decimal degrees
///
/// Latitude is always within [-90, 90]; longitude is wrapped into
/// [-180, 180] on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPosition {
    latitude: f64,
    longitude: f64,
}

impl GeodeticPosition {
    /// Create a position, rejecting non-finite values and latitudes beyond the poles
    pub fn new(latitude: f64, longitude: f64) -> ConversionResult<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(ConversionError::DomainError(format!(
                "non-finite position ({}, {})", latitude, longitude
            )));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ConversionError::DomainError(format!(
                "latitude {} is outside [-90, 90]", latitude
            )));
        }

        Ok(GeodeticPosition {
            latitude,
            longitude: normalize_longitude(longitude),
        })
    }

    /// Latitude in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Wrap a longitude into [-180, 180], keeping +180 as given
fn normalize_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        return longitude;
    }
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && longitude > 0.0 {
        180.0
    } else {
        wrapped
    }
}
