//! Meridian arc length and its inverse, the footpoint latitude.
//!
//! Both are fifth-order series in the flattening ratio `n` after
//! Hoffmann-Wellenhof, Lichtenegger and Collins, *GPS: Theory and Practice*,
//! 3rd ed., 1994.

use lazy_static::lazy_static;

use crate::ellipsoid::{Ellipsoid, WGS84};

lazy_static! {
    static ref ARC: ArcCoefficients = ArcCoefficients::new(&WGS84);
    static ref FOOTPOINT: FootpointCoefficients = FootpointCoefficients::new(&WGS84);
}

/// How the `alpha` scale is distributed over the terms of the meridian arc
/// series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArcGrouping {
    /// `alpha * (lat + beta*sin(2lat)) + gamma*sin(4lat) + delta*sin(6lat) + epsilon*sin(8lat)`.
    ///
    /// Only the first two terms are scaled. This is what every default
    /// conversion in the crate uses, and the numbers it produces are kept
    /// stable. Northings differ from the textbook series by up to ~17 m,
    /// least near the equator and near ±45°.
    #[default]
    Partial,
    /// `alpha * (lat + beta*sin(2lat) + gamma*sin(4lat) + delta*sin(6lat) + epsilon*sin(8lat))`,
    /// the textbook series. Agrees with other UTM implementations to the
    /// millimeter and round-trips through [`footpoint_latitude`].
    Full,
}

#[derive(Clone, Copy)]
struct ArcCoefficients {
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    epsilon: f64,
}

impl ArcCoefficients {
    fn new(ellipsoid: &Ellipsoid) -> ArcCoefficients {
        let n = ellipsoid.flattening_ratio();

        Self {
            alpha: ellipsoid.meridian_scale(),
            beta: (-3. * n / 2.) + (9. * n.powi(3) / 16.) + (-3. * n.powi(5) / 32.),
            gamma: (15. * n.powi(2) / 16.) + (-15. * n.powi(4) / 32.),
            delta: (-35. * n.powi(3) / 48.) + (105. * n.powi(5) / 256.),
            epsilon: 315. * n.powi(4) / 512.,
        }
    }
}

#[derive(Clone, Copy)]
struct FootpointCoefficients {
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    epsilon: f64,
}

impl FootpointCoefficients {
    fn new(ellipsoid: &Ellipsoid) -> FootpointCoefficients {
        let n = ellipsoid.flattening_ratio();

        Self {
            alpha: ellipsoid.meridian_scale(),
            beta: (3. * n / 2.) + (-27. * n.powi(3) / 32.) + (269. * n.powi(5) / 512.),
            gamma: (21. * n.powi(2) / 16.) + (-55. * n.powi(4) / 32.),
            delta: (151. * n.powi(3) / 96.) + (-417. * n.powi(5) / 128.),
            epsilon: 1097. * n.powi(4) / 512.,
        }
    }
}

/// Ellipsoidal distance in meters along the meridian from the equator to
/// `lat` (radians), using [`ArcGrouping::Partial`].
///
/// # Usage
///
/// ```
/// use utmconvert::projections::meridian::arc_length_of_meridian;
///
/// assert_eq!(arc_length_of_meridian(0.0), 0.0);
/// // Roughly 10,000 km from the equator to the pole
/// let quarter = arc_length_of_meridian(std::f64::consts::FRAC_PI_2);
/// assert!((quarter - 10_001_965.7).abs() < 1.0);
/// ```
pub fn arc_length_of_meridian(lat: f64) -> f64 {
    arc_length_of_meridian_grouped(lat, ArcGrouping::Partial)
}

/// Same as [`arc_length_of_meridian`] with an explicit term grouping.
pub fn arc_length_of_meridian_grouped(lat: f64, grouping: ArcGrouping) -> f64 {
    let ArcCoefficients { alpha, beta, gamma, delta, epsilon } = *ARC;

    match grouping {
        ArcGrouping::Partial => {
            alpha * (lat + beta * (2. * lat).sin())
                + gamma * (4. * lat).sin()
                + delta * (6. * lat).sin()
                + epsilon * (8. * lat).sin()
        }
        ArcGrouping::Full => {
            alpha * (lat
                + beta * (2. * lat).sin()
                + gamma * (4. * lat).sin()
                + delta * (6. * lat).sin()
                + epsilon * (8. * lat).sin())
        }
    }
}

/// Latitude (radians) whose meridian arc length is `northing` meters, used
/// as the starting point of the inverse projection.
///
/// # Usage
///
/// ```
/// use utmconvert::projections::meridian::{
///     arc_length_of_meridian_grouped, footpoint_latitude, ArcGrouping,
/// };
///
/// let lat = 0.6;
/// let northing = arc_length_of_meridian_grouped(lat, ArcGrouping::Full);
/// assert!((footpoint_latitude(northing) - lat).abs() < 1e-10);
/// ```
pub fn footpoint_latitude(northing: f64) -> f64 {
    let FootpointCoefficients { alpha, beta, gamma, delta, epsilon } = *FOOTPOINT;

    let y = northing / alpha;

    y + beta * (2. * y).sin()
        + gamma * (4. * y).sin()
        + delta * (6. * y).sin()
        + epsilon * (8. * y).sin()
}
