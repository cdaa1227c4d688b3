//! Transverse Mercator projection (Krüger series)
//!
//! Third-order series in the third flattening n, accurate to well below a
//! millimetre inside a 6 degree UTM zone.

use super::ellipsoid::Ellipsoid;

/// Transverse Mercator projection about a fixed central meridian
#[derive(Debug, Clone)]
pub struct TransverseMercator {
    scale_factor: f64,
    central_meridian: f64,
    false_easting: f64,
    false_northing: f64,
    eccentricity: f64,
    /// Radius of the rectifying sphere
    rectifying_radius: f64,
    alpha: [f64; 3],
    beta: [f64; 3],
    delta: [f64; 3],
}

impl TransverseMercator {
    /// Create a projection
    ///
    /// # Arguments
    /// * `ellipsoid` - Reference ellipsoid
    /// * `scale_factor` - Scale on the central meridian (0.9996 for UTM)
    /// * `central_meridian` - Central meridian in degrees
    /// * `false_easting` - Easting of the central meridian in metres
    /// * `false_northing` - Northing of the equator in metres
    pub fn new(
        ellipsoid: &Ellipsoid,
        scale_factor: f64,
        central_meridian: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        let n = ellipsoid.third_flattening();
        let n2 = n * n;
        let n3 = n2 * n;

        let rectifying_radius = ellipsoid.semi_major_axis / (1.0 + n)
            * (1.0 + n2 / 4.0 + n2 * n2 / 64.0);

        TransverseMercator {
            scale_factor,
            central_meridian,
            false_easting,
            false_northing,
            eccentricity: ellipsoid.eccentricity(),
            rectifying_radius,
            alpha: [
                n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0,
                13.0 * n2 / 48.0 - 3.0 * n3 / 5.0,
                61.0 * n3 / 240.0,
            ],
            beta: [
                n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0,
                n2 / 48.0 + n3 / 15.0,
                17.0 * n3 / 480.0,
            ],
            delta: [
                2.0 * n - 2.0 * n2 / 3.0 - 2.0 * n3,
                7.0 * n2 / 3.0 - 8.0 * n3 / 5.0,
                56.0 * n3 / 15.0,
            ],
        }
    }

    /// Project latitude/longitude in degrees to (easting, northing) in metres
    pub fn forward(&self, latitude: f64, longitude: f64) -> (f64, f64) {
        let phi = latitude.to_radians();
        let lambda = (longitude - self.central_meridian).to_radians();
        let e = self.eccentricity;

        // Conformal latitude, expressed through its tangent
        let sin_phi = phi.sin();
        let t = (sin_phi.atanh() - e * (e * sin_phi).atanh()).sinh();

        let xi_prime = t.atan2(lambda.cos());
        let eta_prime = (lambda.sin() / (1.0 + t * t).sqrt()).atanh();

        let mut xi = xi_prime;
        let mut eta = eta_prime;
        for (j, alpha) in self.alpha.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            xi += alpha * (k * xi_prime).sin() * (k * eta_prime).cosh();
            eta += alpha * (k * xi_prime).cos() * (k * eta_prime).sinh();
        }

        let scale = self.scale_factor * self.rectifying_radius;
        (self.false_easting + scale * eta, self.false_northing + scale * xi)
    }

    /// Unproject (easting, northing) in metres to latitude/longitude in degrees
    pub fn inverse(&self, easting: f64, northing: f64) -> (f64, f64) {
        let scale = self.scale_factor * self.rectifying_radius;
        let xi = (northing - self.false_northing) / scale;
        let eta = (easting - self.false_easting) / scale;

        let mut xi_prime = xi;
        let mut eta_prime = eta;
        for (j, beta) in self.beta.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            xi_prime -= beta * (k * xi).sin() * (k * eta).cosh();
            eta_prime -= beta * (k * xi).cos() * (k * eta).sinh();
        }

        let chi = (xi_prime.sin() / eta_prime.cosh()).asin();
        let mut phi = chi;
        for (j, delta) in self.delta.iter().enumerate() {
            let k = 2.0 * (j + 1) as f64;
            phi += delta * (k * chi).sin();
        }

        let lambda = eta_prime.sinh().atan2(xi_prime.cos());
        (phi.to_degrees(), self.central_meridian + lambda.to_degrees())
    }
}
