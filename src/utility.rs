use std::f64::consts::PI;

pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Degrees per zone
    pub const ZD: i32 = 6;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Degrees per turn
    pub const TD: i32 = 2 * HD;
}

/// Converts an angle in degrees to radians, as `degrees / 180 * π`.
///
/// This is deliberately not [`f64::to_radians`], which multiplies by a
/// pre-rounded `π / 180` and can differ in the last bit.
///
/// ```
/// use utmconvert::utility::degrees_to_radians;
///
/// assert_eq!(degrees_to_radians(180.0), std::f64::consts::PI);
/// assert!(degrees_to_radians(f64::NAN).is_nan());
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees / f64::from(dms::HD) * PI
}

/// Converts an angle in radians to degrees, as `radians / π * 180`.
///
/// ```
/// use utmconvert::utility::radians_to_degrees;
///
/// assert_eq!(radians_to_degrees(std::f64::consts::PI), 180.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians / PI * f64::from(dms::HD)
}

pub(crate) trait GeoMath {
    fn eps_eq(&self, other: Self) -> bool;
    fn ang_normalize(&self) -> Self;
    fn remainder(&self, denom: Self) -> Self;
}

impl GeoMath for f64 {
    fn eps_eq(&self, other: f64) -> bool {
        (*self - other).abs() < f64::EPSILON
    }

    fn ang_normalize(&self) -> f64 {
        let value = self.remainder(f64::from(dms::TD));
        let hd = f64::from(dms::HD);

        if value.abs().eps_eq(hd) {
            hd.copysign(*self)
        }
        else {
            value
        }
    }

    fn remainder(&self, denom: Self) -> Self {
        *self - (*self / denom).round() * denom
    }
}
