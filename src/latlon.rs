use std::fmt::Display;

use log::debug;

use crate::{
    projections::TransverseMercator,
    utility::dms,
    utm::{standard_zone, Utm},
    Error, ParseCoord,
};

/// Representation of a WGS84 Latitude/Longitude point in decimal degrees.
/// Can be converted to/from [`Utm`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range (-90,90), the poles themselves cannot be projected
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLatitude`] if latitude is invalid.
    /// Returns [`Error::InvalidCoord`] if longitude is invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(40.748333, -73.985278);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 40.748333);
    /// assert_eq!(coord.longitude(), -73.985278);
    ///
    /// let invalid_coord_lat = LatLon::create(90.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        let qd = f64::from(dms::QD);
        let hd = f64::from(dms::HD);

        if lat.is_nan() || lat.abs() >= qd {
            debug!("Rejecting latitude {lat}");
            Err(Error::InvalidLatitude(lat))
        } else if !(-hd..=hd).contains(&lon) {
            debug!("Rejecting longitude {lon}");
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    ///
    /// # Example
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// assert_eq!(coord.latitude(), 40.748333);
    /// ```
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere. The
    /// equator, signed zero included, counts as north, matching [`Utm::is_north`].
    ///
    /// # Example
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// assert!(coord.is_north());
    ///
    /// let coord = LatLon::create(-40.748333, -73.985278).unwrap();
    /// assert!(!coord.is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude >= 0.0
    }

    /// Converts from [`Utm`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{LatLon, Utm};
    ///
    /// let coord_utm = Utm::create(31, true, 500000.0, 4982950.378).unwrap();
    ///
    /// let converted = LatLon::from_utm(&coord_utm);
    ///
    /// assert!((converted.latitude() - 45.0).abs() < 1e-6);
    /// assert!((converted.longitude() - 3.0).abs() < 1e-9);
    /// ```
    pub fn from_utm(value: &Utm) -> LatLon {
        value.to_latlon()
    }

    /// Converts from [`LatLon`] to [`Utm`] in the given zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    ///
    /// let converted = coord.to_utm(18).unwrap();
    ///
    /// assert_eq!(converted.zone(), 18);
    /// assert!(converted.is_north());
    /// assert!((converted.easting() - 585664.121).abs() < 1e-3);
    /// assert!((converted.northing() - 4511310.480).abs() < 1e-3);
    ///
    /// assert!(coord.to_utm(61).is_err());
    /// ```
    pub fn to_utm(&self, zone: i32) -> Result<Utm, Error> {
        Utm::from_latlon(self, zone)
    }

    /// Converts from [`LatLon`] to [`Utm`] in the zone the point falls in,
    /// see [`standard_zone`](crate::standard_zone).
    ///
    /// ```
    /// use utmconvert::LatLon;
    ///
    /// let coord = LatLon::create(-33.8688, 151.2093).unwrap();
    /// let converted = coord.to_utm_standard();
    ///
    /// assert_eq!(converted.zone(), 56);
    /// assert!(!converted.is_north());
    /// ```
    pub fn to_utm_standard(&self) -> Utm {
        let zone = standard_zone(self.latitude, self.longitude);
        Utm::project(self, zone, &TransverseMercator::utm())
    }
}

impl ParseCoord for LatLon {
    /// Parses `"{lat} {lon}"`; a comma may stand in for, or accompany, the
    /// whitespace.
    ///
    /// ```
    /// use utmconvert::{LatLon, ParseCoord};
    ///
    /// let coord = LatLon::parse_coord("40.748333, -73.985278").unwrap();
    /// assert_eq!(coord.latitude(), 40.748333);
    /// assert_eq!(coord.longitude(), -73.985278);
    ///
    /// assert!(LatLon::parse_coord("40.748333").is_err());
    /// ```
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let mut pieces = value
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|piece| !piece.is_empty());

        let (Some(lat), Some(lon), None) = (pieces.next(), pieces.next(), pieces.next()) else {
            return Err(Error::InvalidCoord(format!("Expected \"<lat> <lon>\", got \"{value}\"")));
        };

        let lat = lat
            .parse::<f64>()
            .map_err(|_| Error::InvalidCoord(format!("Invalid latitude \"{lat}\"")))?;
        let lon = lon
            .parse::<f64>()
            .map_err(|_| Error::InvalidCoord(format!("Invalid longitude \"{lon}\"")))?;

        LatLon::create(lat, lon)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
