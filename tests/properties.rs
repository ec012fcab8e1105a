use float_eq::assert_float_eq;
use utmconvert::{
    central_meridian, latlong_to_utm,
    projections::{ArcGrouping, TransverseMercator},
    utility::radians_to_degrees,
    utm_to_latlong, LatLon, Utm,
};

const ZONES: [i32; 5] = [1, 18, 31, 56, 60];

fn zone_meridian(zone: i32) -> f64 {
    f64::from(-183 + 6 * zone)
}

fn round_trip(tm: &TransverseMercator, lat: f64, lon: f64, zone: i32) -> (f64, f64) {
    let coord = LatLon::create(lat, lon).unwrap();
    let back = Utm::from_latlon_with(&coord, zone, tm).unwrap().to_latlon_with(tm);
    (back.latitude(), back.longitude())
}

#[test]
fn central_meridian_of_every_zone() {
    for zone in 1..=60 {
        assert_float_eq!(
            radians_to_degrees(central_meridian(zone)),
            zone_meridian(zone),
            abs <= 1e-9
        );
    }

    assert_float_eq!(radians_to_degrees(central_meridian(31)), 3.0, abs <= 1e-12);
    assert_float_eq!(radians_to_degrees(central_meridian(1)), -177.0, abs <= 1e-12);
}

#[test]
fn central_meridian_projects_to_false_easting() {
    for zone in ZONES {
        for lat in [-79.5, -45.0, -10.0, 0.0, 10.0, 45.0, 79.5] {
            let (easting, _) = latlong_to_utm(lat, zone_meridian(zone), zone);
            assert_float_eq!(easting, 500_000.0, abs <= 0.01);
        }
    }
}

#[test]
fn known_fixed_point() {
    let (easting, northing) = latlong_to_utm(45.0, 3.0, 31);

    assert_float_eq!(easting, 500_000.0, abs <= 1e-3);
    assert_float_eq!(northing, 4_982_950.378, abs <= 1e-3);

    let (easting, northing) = latlong_to_utm(-33.8688, 151.2093, 56);

    assert_float_eq!(easting, 334_368.634, abs <= 1e-3);
    assert_float_eq!(northing, 6_250_960.153, abs <= 1e-3);
}

#[test]
fn southern_hemisphere_offset() {
    let (easting, northing) = latlong_to_utm(-0.001, 3.0, 31);

    assert_float_eq!(easting, 500_000.0, abs <= 1e-3);
    assert!(northing < 10_000_000.0);
    assert_float_eq!(northing, 9_999_889.471, abs <= 1e-3);

    let (lat, lon) = utm_to_latlong(easting, northing, 31, true);
    assert!(lat < 0.0);
    assert_float_eq!(lat, -0.001, abs <= 1e-5);
    assert_float_eq!(lon, 3.0, abs <= 1e-9);

    // Without the flag the same northing lands near the north pole
    let (lat, _) = utm_to_latlong(easting, northing, 31, false);
    assert!(lat > 80.0);
}

#[test]
fn hemisphere_is_tracked_on_utm() {
    let north = LatLon::create(0.001, 3.0).unwrap().to_utm(31).unwrap();
    let south = LatLon::create(-0.001, 3.0).unwrap().to_utm(31).unwrap();

    assert!(north.is_north());
    assert!(!south.is_north());
    assert!(north.northing() < 200.0);
    assert!(south.northing() > 9_999_800.0);

    assert_float_eq!(south.to_latlon().latitude(), -0.001, abs <= 1e-5);

    // Both types put the equator, either signed zero, in the north
    for lat in [0.0, -0.0] {
        let coord = LatLon::create(lat, 3.0).unwrap();
        let utm = coord.to_utm(31).unwrap();

        assert!(coord.is_north());
        assert!(utm.is_north());
        assert_eq!(utm.northing(), 0.0);
    }
}

#[test]
fn round_trip_full_grouping() {
    let tm = TransverseMercator::with_grouping(ArcGrouping::Full);

    for zone in ZONES {
        for lat in (-79..=79).step_by(2) {
            for dl in [-3.0, -1.5, 0.0, 1.5, 3.0] {
                let (lat, lon) = (f64::from(lat), zone_meridian(zone) + dl);
                let (lat2, lon2) = round_trip(&tm, lat, lon, zone);

                assert_float_eq!(lat2, lat, abs <= 1e-5);
                assert_float_eq!(lon2, lon, abs <= 1e-5);
            }
        }
    }
}

#[test]
fn round_trip_partial_grouping() {
    let tm = TransverseMercator::utm();

    // The unscaled gamma term shifts northings by up to ~17 m, which the
    // footpoint series does not undo. Latitudes come back within 2e-4 deg.
    for zone in ZONES {
        for lat in (-79..=79).step_by(2) {
            for dl in [-3.0, -1.5, 0.0, 1.5, 3.0] {
                let (lat, lon) = (f64::from(lat), zone_meridian(zone) + dl);
                let (lat2, lon2) = round_trip(&tm, lat, lon, zone);

                assert_float_eq!(lat2, lat, abs <= 2e-4);
                assert_float_eq!(lon2, lon, abs <= 5e-5);
            }
        }
    }

    // Where sin(4 lat) vanishes the offset does too
    for zone in ZONES {
        for lat in [-45.0, 0.0, 45.0] {
            for dl in [-3.0, 0.0, 3.0] {
                let lon = zone_meridian(zone) + dl;
                let (lat2, lon2) = round_trip(&tm, lat, lon, zone);

                assert_float_eq!(lat2, lat, abs <= 1e-5);
                assert_float_eq!(lon2, lon, abs <= 1e-5);
            }
        }
    }
}

#[test]
fn adjacent_zones_agree() {
    let full = TransverseMercator::with_grouping(ArcGrouping::Full);

    // 6E is the edge between zones 31 and 32
    for lat in [-60.0, -30.0, 0.5, 30.0, 60.0] {
        let (lat31, lon31) = round_trip(&full, lat, 6.0, 31);
        let (lat32, lon32) = round_trip(&full, lat, 6.0, 32);

        assert_float_eq!(lat31, lat32, abs <= 1e-5);
        assert_float_eq!(lon31, lon32, abs <= 1e-5);
        assert_float_eq!(lon31, 6.0, abs <= 1e-5);
    }

    let partial = TransverseMercator::utm();
    for lat in [-45.0, 45.0] {
        let (lat31, lon31) = round_trip(&partial, lat, 6.0, 31);
        let (lat32, lon32) = round_trip(&partial, lat, 6.0, 32);

        assert_float_eq!(lat31, lat32, abs <= 1e-9);
        assert_float_eq!(lat31, lat, abs <= 1e-5);
        assert_float_eq!(lon31, 6.0, abs <= 1e-5);
        assert_float_eq!(lon32, 6.0, abs <= 1e-5);
    }

    // Mirror images about the shared edge
    let (e31, n31) = latlong_to_utm(45.0, 6.0, 31);
    let (e32, n32) = latlong_to_utm(45.0, 6.0, 32);
    assert_float_eq!(e31 - 500_000.0, 500_000.0 - e32, abs <= 1e-6);
    assert_float_eq!(n31, n32, abs <= 1e-6);
}

#[test]
fn unchecked_calls_do_not_validate() {
    let (easting, northing) = latlong_to_utm(f64::NAN, 3.0, 31);
    assert!(easting.is_nan());
    assert!(northing.is_nan());

    let (lat, lon) = utm_to_latlong(f64::NAN, 4_982_950.378, 31, false);
    assert!(lat.is_nan());
    assert!(lon.is_nan());

    // Zone 61 has a central meridian at 183E, which is still a meridian
    let (easting, _) = latlong_to_utm(10.0, 183.0, 61);
    assert_float_eq!(easting, 500_000.0, abs <= 1e-3);

    // Far out of range zones still give a meridian instead of overflowing
    assert_float_eq!(
        radians_to_degrees(central_meridian(400_000_000)),
        2_399_999_817.0,
        abs <= 1e-3
    );

    let (easting, northing) = latlong_to_utm(45.0, 3.0, i32::MAX);
    assert!(easting.is_finite());
    assert!(northing.is_finite());

    let (lat, lon) = utm_to_latlong(500_000.0, 0.0, i32::MIN, false);
    assert_eq!(lat, 0.0);
    assert_float_eq!(lon, -183.0 + 6.0 * f64::from(i32::MIN), abs <= 1e-3);
}
