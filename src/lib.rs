#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Conversion between WGS84 latitude/longitude and
//! [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
//! easting/northing, using the classic Transverse Mercator power series.
//!
//! ```
//! use utmconvert::{latlong_to_utm, utm_to_latlong};
//!
//! let (easting, northing) = latlong_to_utm(45.0, 3.0, 31);
//! let (lat, lon) = utm_to_latlong(easting, northing, 31, false);
//!
//! assert!((lat - 45.0).abs() < 1e-5);
//! assert!((lon - 3.0).abs() < 1e-5);
//! ```

use thiserror::Error;

pub mod ellipsoid;
pub mod latlon;
pub mod utm;
pub mod utility;

pub use latlon::LatLon;
pub use utm::{
    central_meridian, latlong_to_utm, standard_zone, try_latlong_to_utm, try_utm_to_latlong,
    utm_to_latlong, Utm,
};

pub mod projections {
    pub mod meridian;
    pub mod transverse_mercator;

    pub use meridian::ArcGrouping;
    pub use transverse_mercator::TransverseMercator;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Latitude {0} outside of valid range (-90, 90)")]
    InvalidLatitude(f64),
    #[error("Zone {0} not in range [1, 60]")]
    InvalidZone(i32),
    #[error("UTM coords are invalid: {0}")]
    InvalidUtmCoords(String),
}

pub trait ParseCoord {
    /// Parses a coordinate from its text form.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the text is malformed or describes an invalid coordinate.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any coordinate type implementing [`ParseCoord`].
///
/// # Errors
///
/// Returns an [`Error`] if the text is malformed or describes an invalid coordinate.
///
/// ```
/// use utmconvert::{LatLon, Utm};
///
/// let coord: LatLon = utmconvert::from_str("45 3").unwrap();
/// assert_eq!(coord.latitude(), 45.0);
///
/// let coord: Utm = utmconvert::from_str("56s 334368.634 6250960.153").unwrap();
/// assert!(!coord.is_north());
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
