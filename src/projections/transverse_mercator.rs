use crate::ellipsoid::{Ellipsoid, WGS84};

use super::meridian::{arc_length_of_meridian_grouped, footpoint_latitude, ArcGrouping};

/// Unscaled Transverse Mercator on the [`WGS84`] ellipsoid, as a series in
/// the longitude offset from the central meridian.
///
/// Accuracy degrades with distance from the central meridian. Nothing is
/// checked: points a few hundred kilometers out still produce numbers, just
/// worse ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransverseMercator {
    ellipsoid: Ellipsoid,
    grouping: ArcGrouping,
}

impl Default for TransverseMercator {
    fn default() -> Self {
        TransverseMercator::utm()
    }
}

impl TransverseMercator {
    /// The projection behind every default UTM conversion in this crate.
    pub fn utm() -> TransverseMercator {
        Self::with_grouping(ArcGrouping::Partial)
    }

    /// Same projection, with the meridian arc terms grouped as `grouping`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::projections::{ArcGrouping, TransverseMercator};
    ///
    /// let tm = TransverseMercator::with_grouping(ArcGrouping::Full);
    /// assert_eq!(tm.grouping(), ArcGrouping::Full);
    /// assert_eq!(TransverseMercator::utm().grouping(), ArcGrouping::Partial);
    /// ```
    pub fn with_grouping(grouping: ArcGrouping) -> TransverseMercator {
        Self {
            ellipsoid: WGS84,
            grouping,
        }
    }

    pub fn grouping(&self) -> ArcGrouping {
        self.grouping
    }

    /// Projects `(lat, lon)` onto the plane tangent along `lon0`. All angles
    /// in radians; returns `(x, y)` in meters from the central meridian and
    /// the equator, with no scale factor or false origin applied.
    ///
    /// `lat` must be strictly between the poles.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::projections::TransverseMercator;
    ///
    /// let (x, y) = TransverseMercator::utm().from_latlon(0.0, 0.0, 0.0);
    /// assert_eq!((x, y), (0.0, 0.0));
    /// ```
    #[allow(clippy::similar_names, clippy::wrong_self_convention)]
    pub fn from_latlon(&self, lat: f64, lon: f64, lon0: f64) -> (f64, f64) {
        let ep2 = self.ellipsoid.second_eccentricity_squared();
        let cos_lat = lat.cos();
        let nu2 = ep2 * cos_lat.powi(2);
        let radius = self.ellipsoid.radius_of_curvature(nu2);

        let t = lat.tan();
        let t2 = t * t;
        let l = lon - lon0;

        let l3coef = 1. - t2 + nu2;
        let l4coef = 5. - t2 + 9. * nu2 + 4. * (nu2 * nu2);
        let l5coef = 5. - 18. * t2 + (t2 * t2) + 14. * nu2 - 58. * t2 * nu2;
        let l6coef = 61. - 58. * t2 + (t2 * t2) + 270. * nu2 - 330. * t2 * nu2;
        let l7coef = 61. - 479. * t2 + 179. * (t2 * t2) - (t2 * t2 * t2);
        let l8coef = 1385. - 3111. * t2 + 543. * (t2 * t2) - (t2 * t2 * t2);

        let x = radius * cos_lat * l
            + (radius / 6. * cos_lat.powi(3) * l3coef * l.powi(3))
            + (radius / 120. * cos_lat.powi(5) * l5coef * l.powi(5))
            + (radius / 5040. * cos_lat.powi(7) * l7coef * l.powi(7));

        let y = arc_length_of_meridian_grouped(lat, self.grouping)
            + (t / 2. * radius * cos_lat.powi(2) * l.powi(2))
            + (t / 24. * radius * cos_lat.powi(4) * l4coef * l.powi(4))
            + (t / 720. * radius * cos_lat.powi(6) * l6coef * l.powi(6))
            + (t / 40320. * radius * cos_lat.powi(8) * l8coef * l.powi(8));

        (x, y)
    }

    /// Inverse of [`TransverseMercator::from_latlon`]: `(x, y)` in unscaled
    /// meters back to `(lat, lon)` in radians.
    ///
    /// Latitude gathers the even powers of `x` on top of the footpoint
    /// latitude, longitude the odd powers on top of `lon0`.
    #[allow(clippy::similar_names, clippy::many_single_char_names)]
    pub fn to_latlon(&self, x: f64, y: f64, lon0: f64) -> (f64, f64) {
        let phif = footpoint_latitude(y);

        let ep2 = self.ellipsoid.second_eccentricity_squared();
        let cf = phif.cos();
        let nuf2 = ep2 * cf.powi(2);
        let nf = self.ellipsoid.radius_of_curvature(nuf2);

        let tf = phif.tan();
        let tf2 = tf * tf;
        let tf4 = tf2 * tf2;

        // Fractional coefficient of x^k, k! * nf^k in the denominator
        let x1frac = 1. / (nf * cf);
        let x2frac = tf / (2. * nf.powi(2));
        let x3frac = 1. / (6. * nf.powi(3) * cf);
        let x4frac = tf / (24. * nf.powi(4));
        let x5frac = 1. / (120. * nf.powi(5) * cf);
        let x6frac = tf / (720. * nf.powi(6));
        let x7frac = 1. / (5040. * nf.powi(7) * cf);
        let x8frac = tf / (40320. * nf.powi(8));

        let x2poly = -1. - nuf2;
        let x3poly = -1. - 2. * tf2 - nuf2;
        let x4poly = 5. + 3. * tf2 + 6. * nuf2 - 6. * tf2 * nuf2
            - 3. * (nuf2 * nuf2)
            - 9. * tf2 * (nuf2 * nuf2);
        let x5poly = 5. + 28. * tf2 + 24. * tf4 + 6. * nuf2 + 8. * tf2 * nuf2;
        let x6poly = -61. - 90. * tf2 - 45. * tf4 - 107. * nuf2 + 162. * tf2 * nuf2;
        let x7poly = -61. - 662. * tf2 - 1320. * tf4 - 720. * (tf4 * tf2);
        let x8poly = 1385. + 3633. * tf2 + 4095. * tf4 + 1575. * (tf4 * tf2);

        let lat = phif
            + x2frac * x2poly * (x * x)
            + x4frac * x4poly * x.powi(4)
            + x6frac * x6poly * x.powi(6)
            + x8frac * x8poly * x.powi(8);

        let lon = lon0
            + x1frac * x
            + x3frac * x3poly * x.powi(3)
            + x5frac * x5poly * x.powi(5)
            + x7frac * x7poly * x.powi(7);

        (lat, lon)
    }
}
