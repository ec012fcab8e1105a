// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Semi-minor axis b
pub(crate) const WGS84_B: f64 = 6_356_752.314;
// First eccentricity squared
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_ECC_SQUARED: f64 = 6.69437999013e-3;

// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;
// Added to every easting so it stays positive within a zone
pub(crate) const UTM_FALSE_EASTING: f64 = 500_000.;
// Added to southern hemisphere northings
pub(crate) const UTM_FALSE_NORTHING: f64 = 10_000_000.;

// Easting/northing envelope accepted by the checked constructors
pub(crate) const UTM_MAX_EASTING: f64 = 2. * UTM_FALSE_EASTING;
pub(crate) const UTM_MAX_NORTHING: f64 = UTM_FALSE_NORTHING;
