//! Hotine Oblique Mercator / Rectified Skew Orthomorphic projection
//!
//! One implementation serves every RSO grid. Variant A measures the false
//! origin from the natural origin of the skew grid; variant B measures it
//! from the projection centre. Formulas follow the standard closed form on
//! the aposphere, with a series back to geodetic latitude.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use super::grid_table::{GridDefinition, ProjectionKind};
use crate::converter::errors::{ConversionError, ConversionResult};

/// Precomputed constants of one oblique Mercator grid
#[derive(Debug, Clone)]
pub struct HotineObliqueMercator {
    eccentricity: f64,
    eccentricity_squared: f64,
    /// Aposphere constant B
    b: f64,
    /// Aposphere radius scaled by the centre scale factor
    a: f64,
    h: f64,
    /// Azimuth of the initial line on the aposphere
    gamma0: f64,
    /// Longitude of the aposphere origin
    lambda0: f64,
    /// Along-line offset from natural origin to centre (variant B only)
    u_shift: f64,
    sin_gamma_c: f64,
    cos_gamma_c: f64,
    false_easting_m: f64,
    false_northing_m: f64,
    unit_to_metre: f64,
}

impl HotineObliqueMercator {
    /// Derive the projection constants from a grid definition
    pub fn new(def: &GridDefinition) -> ConversionResult<Self> {
        let centre_origin = match def.kind {
            ProjectionKind::HotineObliqueMercator { centre_origin } => centre_origin,
            ProjectionKind::TransverseMercator => {
                return Err(ConversionError::GenericError(format!(
                    "{} is not an oblique Mercator grid", def.name
                )));
            },
        };

        let e2 = def.ellipsoid.eccentricity_squared();
        let e = e2.sqrt();
        let phi_c = def.latitude_of_centre.to_radians();
        let lambda_c = def.longitude_of_centre.to_radians();
        let alpha_c = def.azimuth.to_radians();
        let gamma_c = def.rectified_grid_angle.to_radians();

        let sin_phi_c = phi_c.sin();
        let cos_phi_c = phi_c.cos();
        let one_minus_e2_sin2 = 1.0 - e2 * sin_phi_c * sin_phi_c;

        let b = (1.0 + e2 * cos_phi_c.powi(4) / (1.0 - e2)).sqrt();
        let a = def.ellipsoid.semi_major_axis * b * def.scale_factor * (1.0 - e2).sqrt()
            / one_minus_e2_sin2;
        let t0 = conformal_t(phi_c, e);
        let d = b * (1.0 - e2).sqrt() / (cos_phi_c * one_minus_e2_sin2.sqrt());
        let d2 = if d < 1.0 { 1.0 } else { d * d };
        let f = d + (d2 - 1.0).sqrt() * phi_c.signum();
        let h = f * t0.powf(b);
        let g = (f - 1.0 / f) / 2.0;
        let gamma0 = (alpha_c.sin() / d).asin();
        let lambda0 = lambda_c - (g * gamma0.tan()).asin() / b;

        let u_shift = if centre_origin {
            let u_c = if alpha_c.cos().abs() < 1e-12 {
                a * (lambda_c - lambda0)
            } else {
                (a / b) * ((d2 - 1.0).sqrt() / alpha_c.cos()).atan() * phi_c.signum()
            };
            u_c.abs() * phi_c.signum()
        } else {
            0.0
        };

        let projection = HotineObliqueMercator {
            eccentricity: e,
            eccentricity_squared: e2,
            b,
            a,
            h,
            gamma0,
            lambda0,
            u_shift,
            sin_gamma_c: gamma_c.sin(),
            cos_gamma_c: gamma_c.cos(),
            false_easting_m: def.false_easting * def.unit_to_metre,
            false_northing_m: def.false_northing * def.unit_to_metre,
            unit_to_metre: def.unit_to_metre,
        };

        if [b, a, h, gamma0, lambda0, u_shift].iter().all(|v| v.is_finite()) {
            Ok(projection)
        } else {
            Err(ConversionError::DomainError(format!(
                "{} parameters do not define a valid oblique projection", def.name
            )))
        }
    }

    /// Project latitude/longitude in degrees to (easting, northing) in grid units
    pub fn forward(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let phi = latitude.to_radians();
        let d_lambda = self.b * (longitude.to_radians() - self.lambda0);

        let t = conformal_t(phi, self.eccentricity);
        let q = self.h / t.powf(self.b);
        let s = (q - 1.0 / q) / 2.0;
        let t_hyp = (q + 1.0 / q) / 2.0;
        let v_sin = d_lambda.sin();
        let u_big = (-v_sin * self.gamma0.cos() + s * self.gamma0.sin()) / t_hyp;

        let v = self.a * ((1.0 - u_big) / (1.0 + u_big)).ln() / (2.0 * self.b);
        let u = self.a * ((s * self.gamma0.cos() + v_sin * self.gamma0.sin()) / d_lambda.cos()).atan()
            / self.b
            - self.u_shift;

        let easting = v * self.cos_gamma_c + u * self.sin_gamma_c + self.false_easting_m;
        let northing = u * self.cos_gamma_c - v * self.sin_gamma_c + self.false_northing_m;
        (easting / self.unit_to_metre, northing / self.unit_to_metre)
    }

    /// Unproject (easting, northing) in grid units to latitude/longitude in degrees
    pub fn inverse(&self, easting: f64, northing: f64) -> (f64, f64) {
        let x = easting * self.unit_to_metre - self.false_easting_m;
        let y = northing * self.unit_to_metre - self.false_northing_m;

        let v = x * self.cos_gamma_c - y * self.sin_gamma_c;
        let u = y * self.cos_gamma_c + x * self.sin_gamma_c + self.u_shift;

        let q = (-self.b * v / self.a).exp();
        let s = (q - 1.0 / q) / 2.0;
        let t_hyp = (q + 1.0 / q) / 2.0;
        let bu = self.b * u / self.a;
        let v_sin = bu.sin();
        let u_big = (v_sin * self.gamma0.cos() + s * self.gamma0.sin()) / t_hyp;

        let t = (self.h / ((1.0 + u_big) / (1.0 - u_big)).sqrt()).powf(1.0 / self.b);
        let chi = FRAC_PI_2 - 2.0 * t.atan();
        let phi = latitude_from_conformal(chi, self.eccentricity_squared);
        let lambda = self.lambda0
            - ((s * self.gamma0.cos() - v_sin * self.gamma0.sin()) / bu.cos()).atan() / self.b;

        (phi.to_degrees(), lambda.to_degrees())
    }
}

/// The isometric-latitude helper t = tan(π/4 - φ/2) / ((1 - e sinφ)/(1 + e sinφ))^(e/2)
fn conformal_t(phi: f64, e: f64) -> f64 {
    let e_sin = e * phi.sin();
    (FRAC_PI_4 - phi / 2.0).tan() / ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0)
}

/// Series from conformal latitude χ back to geodetic latitude
fn latitude_from_conformal(chi: f64, e2: f64) -> f64 {
    let e4 = e2 * e2;
    let e6 = e4 * e2;
    let e8 = e6 * e2;

    chi + (2.0 * chi).sin() * (e2 / 2.0 + 5.0 * e4 / 24.0 + e6 / 12.0 + 13.0 * e8 / 360.0)
        + (4.0 * chi).sin() * (7.0 * e4 / 48.0 + 29.0 * e6 / 240.0 + 811.0 * e8 / 11520.0)
        + (6.0 * chi).sin() * (7.0 * e6 / 120.0 + 81.0 * e8 / 1120.0)
        + (8.0 * chi).sin() * (4279.0 * e8 / 161280.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::GridSystem;
    use crate::projection::grid_table::grid_definition;

    fn projection(system: GridSystem) -> HotineObliqueMercator {
        HotineObliqueMercator::new(grid_definition(system).unwrap()).unwrap()
    }

    #[test]
    fn test_rso_borneo_reference_point() {
        // 5°23'14.1129"N 115°48'19.8196"E on Timbalai 1948 / RSO Borneo (m)
        let latitude = 5.0 + 23.0 / 60.0 + 14.1129 / 3600.0;
        let longitude = 115.0 + 48.0 / 60.0 + 19.8196 / 3600.0;
        let (easting, northing) = projection(GridSystem::RsoTimbalaiSabah).forward(latitude, longitude);
        assert!((easting - 679245.73).abs() < 0.5, "easting {}", easting);
        assert!((northing - 596562.78).abs() < 0.5, "northing {}", northing);
    }

    #[test]
    fn test_sarawak_grid_is_sabah_grid_in_feet() {
        let (e_m, n_m) = projection(GridSystem::RsoTimbalaiSabah).forward(2.5, 112.0);
        let (e_ft, n_ft) = projection(GridSystem::RsoTimbalaiSarawak).forward(2.5, 112.0);
        assert!((e_ft * 0.3047994715386762 - e_m).abs() < 0.01);
        assert!((n_ft * 0.3047994715386762 - n_m).abs() < 0.01);
    }

    #[test]
    fn test_centre_maps_to_centre_origin() {
        let (easting, northing) = projection(GridSystem::RsoTimbalaiSabah).forward(4.0, 115.0);
        assert!((easting - 590476.87).abs() < 0.01, "easting {}", easting);
        assert!((northing - 442857.65).abs() < 0.01, "northing {}", northing);
    }

    #[test]
    fn test_inverse_recovers_position() {
        let samples = [
            (GridSystem::RsoKertau, 3.1, 101.7),
            (GridSystem::MrsoGdm2000, 5.4, 100.3),
            (GridSystem::MrsoGdm2000, 1.5, 103.8),
            (GridSystem::BrsoGdm2000, 1.55, 110.35),
            (GridSystem::BrsoGdm2000, 5.98, 116.07),
            (GridSystem::RsoTimbalaiSabah, 5.3, 118.1),
            (GridSystem::RsoTimbalaiSarawak, 2.3, 111.8),
        ];
        for (system, lat, lon) in samples {
            let hom = projection(system);
            let (e, n) = hom.forward(lat, lon);
            let (lat2, lon2) = hom.inverse(e, n);
            assert!((lat - lat2).abs() < 1e-8, "{} lat {} -> {}", system, lat, lat2);
            assert!((lon - lon2).abs() < 1e-8, "{} lon {} -> {}", system, lon, lon2);
        }
    }

    #[test]
    fn test_transverse_mercator_grid_is_rejected() {
        assert!(HotineObliqueMercator::new(grid_definition(GridSystem::Utm).unwrap()).is_err());
    }
}
