//! Reference ellipsoid definitions

/// Reference ellipsoid given by semi-major axis and inverse flattening
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsoid {
    /// Display name
    pub name: String,
    /// Semi-major axis (equatorial radius) in metres
    pub semi_major_axis: f64,
    /// Inverse flattening 1/f
    pub inverse_flattening: f64,
}

impl Ellipsoid {
    /// Create a new ellipsoid
    pub fn new(name: &str, semi_major_axis: f64, inverse_flattening: f64) -> Self {
        Ellipsoid {
            name: name.to_string(),
            semi_major_axis,
            inverse_flattening,
        }
    }

    /// Flattening f
    pub fn flattening(&self) -> f64 {
        1.0 / self.inverse_flattening
    }

    /// First eccentricity squared, e² = f(2 - f)
    pub fn eccentricity_squared(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    /// First eccentricity
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// Third flattening n = f / (2 - f)
    pub fn third_flattening(&self) -> f64 {
        let f = self.flattening();
        f / (2.0 - f)
    }
}
