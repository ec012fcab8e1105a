use log::{debug, warn};

use crate::{
    constants::{UTM_FALSE_EASTING, UTM_FALSE_NORTHING, UTM_K0, UTM_MAX_EASTING, UTM_MAX_NORTHING},
    latlon::LatLon,
    projections::TransverseMercator,
    utility::{degrees_to_radians, dms, radians_to_degrees, GeoMath},
    Error, ParseCoord, ThisOrThat,
};

pub mod zonespec {
    pub const MINZONE: i32 = 1;
    pub const MAXZONE: i32 = 60;
}

/// Representation of a WGS84
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point. Southern hemisphere points (`is_north() == false`) carry the
/// 10,000,000 m false northing.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utm {
    pub(crate) zone: i32,
    #[cfg_attr(feature = "serde", serde(alias = "north", alias = "is_north"))]
    pub(crate) northp: bool,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl Utm {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(zone: i32, northp: bool, easting: f64, northing: f64) -> Utm {
        Self {
            zone,
            northp,
            easting,
            northing,
        }
    }

    /// Tries to create a UTM point from its constituent parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    /// Returns [`Error::InvalidUtmCoords`] if the easting is outside `[0, 1000km]`,
    /// the northing is outside `[0, 10000km]`, or either is not finite.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::Utm;
    ///
    /// let coord = Utm::create(31, true, 500000.0, 4982950.378);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.zone(), 31);
    /// assert_eq!(coord.is_north(), true);
    ///
    /// let invalid_coord_zone = Utm::create(0, true, 500000.0, 4982950.378);
    /// assert!(invalid_coord_zone.is_err());
    ///
    /// let invalid_coord_easting = Utm::create(31, true, -1.0, 4982950.378);
    /// assert!(invalid_coord_easting.is_err());
    /// ```
    pub fn create(zone: i32, northp: bool, easting: f64, northing: f64) -> Result<Utm, Error> {
        check_zone(zone)?;
        check_coords(easting, northing)?;

        Ok(Utm::new(zone, northp, easting, northing))
    }

    /// Returns the UTM zone.
    pub fn zone(&self) -> i32 {
        self.zone
    }

    /// Returns whether the coordinate is in the northern hemisphere.
    pub fn is_north(&self) -> bool {
        self.northp
    }

    /// Returns the UTM easting.
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the UTM northing.
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Converts from [`LatLon`] to [`Utm`] in the given zone. The zone is
    /// not required to be the one the point falls in, but accuracy drops
    /// quickly with distance from its central meridian.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::{LatLon, Utm};
    ///
    /// let coord = LatLon::create(45.0, 3.0).unwrap();
    /// let converted = Utm::from_latlon(&coord, 31).unwrap();
    ///
    /// assert_eq!(converted.zone(), 31);
    /// assert!(converted.is_north());
    /// assert!((converted.easting() - 500000.0).abs() < 1e-3);
    /// assert!((converted.northing() - 4982950.378).abs() < 1e-3);
    /// ```
    pub fn from_latlon(value: &LatLon, zone: i32) -> Result<Utm, Error> {
        Utm::from_latlon_with(value, zone, &TransverseMercator::utm())
    }

    /// Like [`Utm::from_latlon`], projecting with `tm`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZone`] if the zone is outside the range `[1, 60]`.
    pub fn from_latlon_with(
        value: &LatLon,
        zone: i32,
        tm: &TransverseMercator,
    ) -> Result<Utm, Error> {
        check_zone(zone)?;

        Ok(Utm::project(value, zone, tm))
    }

    /// Internal-only projection that doesn't check the zone
    pub(crate) fn project(value: &LatLon, zone: i32, tm: &TransverseMercator) -> Utm {
        let (easting, northing, northp) = forward(tm, value.latitude, value.longitude, zone);

        Utm::new(zone, northp, easting, northing)
    }

    /// Converts from [`Utm`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use utmconvert::Utm;
    ///
    /// let coord = Utm::create(31, true, 500000.0, 4982950.378).unwrap();
    /// let converted = coord.to_latlon();
    ///
    /// assert!((converted.latitude() - 45.0).abs() < 1e-6);
    /// assert!((converted.longitude() - 3.0).abs() < 1e-9);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        self.to_latlon_with(&TransverseMercator::utm())
    }

    /// Like [`Utm::to_latlon`], projecting with `tm`.
    pub fn to_latlon_with(&self, tm: &TransverseMercator) -> LatLon {
        let (lat, lon) = inverse(tm, self.easting, self.northing, self.zone, !self.northp);

        LatLon::new(lat, lon)
    }
}

/// Central meridian of a UTM zone, in radians: `-183° + 6° * zone`.
///
/// Zones outside `[1, 60]` still produce an angle, it just doesn't belong to
/// any zone.
///
/// ```
/// use utmconvert::{central_meridian, utility::radians_to_degrees};
///
/// assert!((radians_to_degrees(central_meridian(31)) - 3.0).abs() < 1e-12);
/// assert!((radians_to_degrees(central_meridian(1)) + 177.0).abs() < 1e-12);
/// ```
pub fn central_meridian(zone: i32) -> f64 {
    degrees_to_radians(-183. + f64::from(zone) * f64::from(dms::ZD))
}

/// Converts a latitude/longitude in degrees to a UTM easting/northing in
/// `zone`. A negative northing gets the 10,000,000 m false northing added,
/// which is the only trace of the hemisphere in the result.
///
/// Nothing is validated. Latitudes at or beyond the poles give non-finite
/// output and NaN propagates. See [`try_latlong_to_utm`] for a checked
/// version.
///
/// # Usage
///
/// ```
/// use utmconvert::latlong_to_utm;
///
/// let (easting, northing) = latlong_to_utm(45.0, 3.0, 31);
///
/// assert!((easting - 500000.0).abs() < 1e-3);
/// assert!((northing - 4982950.378).abs() < 1e-3);
///
/// let (_, northing) = latlong_to_utm(-0.001, 3.0, 31);
/// assert!(northing > 9_999_000.0 && northing < 10_000_000.0);
/// ```
pub fn latlong_to_utm(latitude: f64, longitude: f64, zone: i32) -> (f64, f64) {
    if !(zonespec::MINZONE..=zonespec::MAXZONE).contains(&zone) {
        warn!("Zone {zone} outside of [1, 60], central meridian has no meaning");
    }
    if latitude.is_nan() || latitude.abs() >= f64::from(dms::QD) {
        warn!("Latitude {latitude} not strictly between the poles");
    }

    let (easting, northing, _) = forward(&TransverseMercator::utm(), latitude, longitude, zone);
    (easting, northing)
}

/// Converts a UTM easting/northing in `zone` back to latitude/longitude in
/// degrees. Pass `southern = true` when the northing carries the southern
/// hemisphere false northing; `false` is the usual default.
///
/// Nothing is validated. See [`try_utm_to_latlong`] for a checked version.
///
/// # Usage
///
/// ```
/// use utmconvert::utm_to_latlong;
///
/// let (lat, lon) = utm_to_latlong(500000.0, 4982950.378, 31, false);
///
/// assert!((lat - 45.0).abs() < 1e-6);
/// assert!((lon - 3.0).abs() < 1e-9);
/// ```
pub fn utm_to_latlong(easting: f64, northing: f64, zone: i32, southern: bool) -> (f64, f64) {
    if !(zonespec::MINZONE..=zonespec::MAXZONE).contains(&zone) {
        warn!("Zone {zone} outside of [1, 60], central meridian has no meaning");
    }

    inverse(&TransverseMercator::utm(), easting, northing, zone, southern)
}

/// Checked [`latlong_to_utm`]. Results are identical for valid input.
///
/// # Errors
///
/// Returns [`Error::InvalidLatitude`] if latitude is not strictly inside `(-90, 90)`.
/// Returns [`Error::InvalidCoord`] if longitude is outside `[-180, 180]`.
/// Returns [`Error::InvalidZone`] if the zone is outside `[1, 60]`.
///
/// # Usage
///
/// ```
/// use utmconvert::{latlong_to_utm, try_latlong_to_utm, Error};
///
/// assert_eq!(try_latlong_to_utm(45.0, 3.0, 31).unwrap(), latlong_to_utm(45.0, 3.0, 31));
/// assert!(matches!(try_latlong_to_utm(90.0, 3.0, 31), Err(Error::InvalidLatitude(_))));
/// assert!(matches!(try_latlong_to_utm(45.0, 3.0, 61), Err(Error::InvalidZone(61))));
/// ```
pub fn try_latlong_to_utm(latitude: f64, longitude: f64, zone: i32) -> Result<(f64, f64), Error> {
    let utm = LatLon::create(latitude, longitude)?.to_utm(zone)?;
    Ok((utm.easting, utm.northing))
}

/// Checked [`utm_to_latlong`]. Results are identical for valid input.
///
/// # Errors
///
/// Returns [`Error::InvalidZone`] if the zone is outside `[1, 60]`.
/// Returns [`Error::InvalidUtmCoords`] if easting or northing are out of range.
pub fn try_utm_to_latlong(
    easting: f64,
    northing: f64,
    zone: i32,
    southern: bool,
) -> Result<(f64, f64), Error> {
    let coord = Utm::create(zone, !southern, easting, northing)?.to_latlon();
    Ok((coord.latitude, coord.longitude))
}

/// The UTM zone a point belongs to, including the Norway (32V) and
/// Svalbard (31X, 33X, 35X, 37X) exceptions. Latitudes outside `[-80, 84)`
/// get the plain 6° zone for their longitude.
///
/// # Usage
///
/// ```
/// use utmconvert::standard_zone;
///
/// assert_eq!(standard_zone(45.0, 3.0), 31);
/// assert_eq!(standard_zone(40.748333, -73.985278), 18);
/// // Bergen
/// assert_eq!(standard_zone(60.39, 5.32), 32);
/// // Longyearbyen
/// assert_eq!(standard_zone(78.22, 15.65), 33);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn standard_zone(lat: f64, lon: f64) -> i32 {
    let mut lon_int = lon.ang_normalize().floor() as i32;
    if lon_int == dms::HD {
        lon_int = -dms::HD;
    }

    let zone = (lon_int + 186) / dms::ZD;
    if !((-80_f64)..84.0).contains(&lat) {
        return zone;
    }

    let band = latitude_band(lat);
    // The Norway exception
    if band == 7 && zone == 31 && lon_int >= 3 {
        32
    }
    // The Svalbard exception
    else if band == 9 && (0..42).contains(&lon_int) {
        2 * ((lon_int + 183) / 12) + 1
    } else {
        zone
    }
}

// Index of the 8° latitude band, -10 (C) through 9 (X)
#[allow(clippy::cast_possible_truncation)]
fn latitude_band(lat: f64) -> i32 {
    let lat_int = lat.floor() as i32;
    (-10).max(9.min((lat_int + 80) / 8 - 10))
}

// Scaled, offset easting/northing plus whether the point is north of the equator
fn forward(tm: &TransverseMercator, lat: f64, lon: f64, zone: i32) -> (f64, f64, bool) {
    let (x, y) = tm.from_latlon(
        degrees_to_radians(lat),
        degrees_to_radians(lon),
        central_meridian(zone),
    );

    let easting = x * UTM_K0 + UTM_FALSE_EASTING;
    let mut northing = y * UTM_K0;

    let southern = northing < 0.;
    if southern {
        northing += UTM_FALSE_NORTHING;
    }

    (easting, northing, !southern)
}

fn inverse(
    tm: &TransverseMercator,
    easting: f64,
    northing: f64,
    zone: i32,
    southern: bool,
) -> (f64, f64) {
    let x = (easting - UTM_FALSE_EASTING) / UTM_K0;
    let y = (northing - southern.ternary(UTM_FALSE_NORTHING, 0.)) / UTM_K0;

    let (lat, lon) = tm.to_latlon(x, y, central_meridian(zone));

    (radians_to_degrees(lat), radians_to_degrees(lon))
}

pub(crate) fn check_zone(zone: i32) -> Result<(), Error> {
    if (zonespec::MINZONE..=zonespec::MAXZONE).contains(&zone) {
        Ok(())
    } else {
        debug!("Rejecting UTM zone {zone}");
        Err(Error::InvalidZone(zone))
    }
}

pub(crate) fn check_coords(x: f64, y: f64) -> Result<(), Error> {
    if !(0_f64..=UTM_MAX_EASTING).contains(&x) {
        debug!("Rejecting UTM easting {x}");
        return Err(Error::InvalidUtmCoords(
            format!(
                "Easting {:.2}km not in UTM range [0.00km, {:.2}km]",
                x / 1000.0,
                UTM_MAX_EASTING / 1000.0,
            )
        ));
    }

    if !(0_f64..=UTM_MAX_NORTHING).contains(&y) {
        debug!("Rejecting UTM northing {y}");
        return Err(Error::InvalidUtmCoords(
            format!(
                "Northing {:.2}km not in UTM range [0.00km, {:.2}km]",
                y / 1000.0,
                UTM_MAX_NORTHING / 1000.0,
            )
        ));
    }

    Ok(())
}

impl ParseCoord for Utm {
    /// Parses the [`Display`](std::fmt::Display) form, `"{zone}{n|s} {easting} {northing}"`.
    ///
    /// ```
    /// use utmconvert::{ParseCoord, Utm};
    ///
    /// let coord = Utm::parse_coord("31n 500000 4982950.378").unwrap();
    /// assert_eq!(coord.zone(), 31);
    /// assert!(coord.is_north());
    ///
    /// assert!(Utm::parse_coord("31x 500000 4982950.378").is_err());
    /// ```
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let mut pieces = value.split_whitespace();
        let (Some(zone_str), Some(easting), Some(northing), None) =
            (pieces.next(), pieces.next(), pieces.next(), pieces.next())
        else {
            return Err(Error::InvalidUtmCoords(format!(
                "Expected \"<zone><n|s> <easting> <northing>\", got \"{value}\""
            )));
        };

        let northp = match zone_str.chars().last().map(|c| c.to_ascii_lowercase()) {
            Some('n') => true,
            Some('s') => false,
            _ => {
                return Err(Error::InvalidUtmCoords(format!(
                    "Missing hemisphere letter in \"{zone_str}\""
                )))
            }
        };

        let zone = zone_str[..zone_str.len() - 1]
            .parse::<i32>()
            .map_err(|_| Error::InvalidUtmCoords(format!("Invalid zone \"{zone_str}\"")))?;
        let easting = easting
            .parse::<f64>()
            .map_err(|_| Error::InvalidUtmCoords(format!("Invalid easting \"{easting}\"")))?;
        let northing = northing
            .parse::<f64>()
            .map_err(|_| Error::InvalidUtmCoords(format!("Invalid northing \"{northing}\"")))?;

        Utm::create(zone, northp, easting, northing)
    }
}

impl std::fmt::Display for Utm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{} {} {}",
            self.zone,
            self.northp.ternary("n", "s"),
            self.easting,
            self.northing
        )
    }
}
