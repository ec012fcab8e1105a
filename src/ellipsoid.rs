use crate::constants::{WGS84_A, WGS84_B, WGS84_ECC_SQUARED};

/// The reference ellipsoid every conversion in this crate is computed on.
pub const WGS84: Ellipsoid = Ellipsoid {
    semi_major_axis: WGS84_A,
    semi_minor_axis: WGS84_B,
    eccentricity_squared: WGS84_ECC_SQUARED,
};

/// Shape of the reference ellipsoid. Only [`WGS84`] exists; the type is here
/// so the derived quantities have one place to live.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    pub(crate) semi_major_axis: f64,
    pub(crate) semi_minor_axis: f64,
    pub(crate) eccentricity_squared: f64,
}

impl Ellipsoid {
    /// Equatorial radius `a` in meters.
    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Polar radius `b` in meters.
    #[inline]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor_axis
    }

    /// First eccentricity squared, as published for the ellipsoid. None of
    /// the projection series read this value.
    #[inline]
    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity_squared
    }

    /// First eccentricity squared computed from the two axes, `(a² - b²) / a²`.
    ///
    /// ```
    /// use utmconvert::ellipsoid::WGS84;
    ///
    /// let derived = WGS84.derived_eccentricity_squared();
    /// assert!((derived - WGS84.eccentricity_squared()).abs() < 1e-9);
    /// ```
    pub fn derived_eccentricity_squared(&self) -> f64 {
        let (a, b) = (self.semi_major_axis, self.semi_minor_axis);
        (a.powi(2) - b.powi(2)) / a.powi(2)
    }

    /// Second eccentricity squared, `(a² - b²) / b²`.
    pub fn second_eccentricity_squared(&self) -> f64 {
        let (a, b) = (self.semi_major_axis, self.semi_minor_axis);
        (a.powi(2) - b.powi(2)) / b.powi(2)
    }

    /// The third flattening `n = (a - b) / (a + b)` that the meridian series
    /// are expanded in.
    pub fn flattening_ratio(&self) -> f64 {
        let (a, b) = (self.semi_major_axis, self.semi_minor_axis);
        (a - b) / (a + b)
    }

    /// Mean meridian radius scaled by the leading terms of the arc series,
    /// `(a + b) / 2 * (1 + n²/4 + n⁴/64)`.
    pub fn meridian_scale(&self) -> f64 {
        let n = self.flattening_ratio();
        ((self.semi_major_axis + self.semi_minor_axis) / 2.)
            * (1. + n.powi(2) / 4. + n.powi(4) / 64.)
    }

    /// Radius of curvature in the prime vertical, `a² / (b * sqrt(1 + nu2))`,
    /// where `nu2` is the second eccentricity squared scaled by `cos²(lat)`.
    pub(crate) fn radius_of_curvature(&self, nu2: f64) -> f64 {
        self.semi_major_axis.powi(2) / (self.semi_minor_axis * (1. + nu2).sqrt())
    }
}
