use sunpos::ephemeris::*;
use sunpos::normalize_angle;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

/// 1992 October 13.0 TD, Meeus example 25.a.
const MEEUS_T: f64 = -0.072183436;

// ── J2000 epoch ──

#[test]
fn test_series_constants_at_epoch() {
    assert_approx!(geom_mean_anomaly(0.0), 357.52911, 1e-12);
    assert_approx!(geom_mean_longitude(0.0), 280.46646, 1e-12);
    assert_approx!(eccentricity_earth_orbit(0.0), 0.016708634, 1e-15);
    assert_approx!(mean_obliquity_of_ecliptic(0.0), 23.439291111, 1e-8);
}

#[test]
fn test_epoch_position() {
    assert_approx!(solar_declination(0.0), -23.03, 0.01);
    assert_approx!(equation_of_time(0.0), -3.30, 0.01);
    assert_approx!(radius_vector(0.0), 0.98331, 1e-5);
}

// ── Meeus example 25.a ──

#[test]
fn test_meeus_longitudes() {
    assert_approx!(geom_mean_longitude(MEEUS_T), 201.80720, 1e-4);
    assert_approx!(normalize_angle(geom_mean_anomaly(MEEUS_T)), 278.99397, 1e-4);
    assert_approx!(equation_of_center(MEEUS_T), -1.89732, 1e-5);
    assert_approx!(true_longitude(MEEUS_T), 199.90988, 1e-4);
    assert_approx!(apparent_longitude(MEEUS_T), 199.90895, 1e-4);
}

#[test]
fn test_meeus_orbit() {
    assert_approx!(eccentricity_earth_orbit(MEEUS_T), 0.016711668, 1e-9);
    assert_approx!(radius_vector(MEEUS_T), 0.99766, 1e-5);
    assert_approx!(
        true_anomaly(MEEUS_T),
        geom_mean_anomaly(MEEUS_T) + equation_of_center(MEEUS_T),
        1e-12
    );
}

#[test]
fn test_meeus_obliquity() {
    assert_approx!(mean_obliquity_of_ecliptic(MEEUS_T), 23.44023, 1e-5);
    assert_approx!(obliquity_correction(MEEUS_T), 23.43999, 1e-5);
}

#[test]
fn test_meeus_equatorial() {
    // 198.38083 expressed in atan2's range
    assert_approx!(right_ascension(MEEUS_T), 198.38083 - 360.0, 1e-4);
    assert_approx!(solar_declination(MEEUS_T), -7.78507, 1e-5);
}

// ── Ranges across a year ──

#[test]
fn test_declination_bounded_over_year() {
    for day in 0..366 {
        let t = day as f64 / 36525.0;
        let decl = solar_declination(t);
        assert!(decl.abs() <= 23.45, "day {}: {}", day, decl);
    }
}

#[test]
fn test_equation_of_time_bounded_over_year() {
    for day in 0..366 {
        let t = 0.26 + day as f64 / 36525.0;
        let eot = equation_of_time(t);
        assert!((-14.7..=16.6).contains(&eot), "day {}: {}", day, eot);
    }
}

#[test]
fn test_mean_longitude_normalized() {
    for &t in &[-1.0, -0.072183436, 0.0, 0.25, 0.5, 1.0] {
        let l0 = geom_mean_longitude(t);
        assert!((0.0..360.0).contains(&l0), "t {}: {}", t, l0);
    }
}

// ── SolarCoordinates ──

#[test]
fn test_snapshot_identical_to_series() {
    for &t in &[MEEUS_T, 0.0, 0.0379278, 0.26] {
        let sun = SolarCoordinates::at(t);
        assert_eq!(sun.julian_century, t);
        assert_eq!(sun.mean_anomaly, geom_mean_anomaly(t));
        assert_eq!(sun.equation_of_center, equation_of_center(t));
        assert_eq!(sun.true_anomaly, true_anomaly(t));
        assert_eq!(sun.eccentricity, eccentricity_earth_orbit(t));
        assert_eq!(sun.radius_vector, radius_vector(t));
        assert_eq!(sun.mean_longitude, geom_mean_longitude(t));
        assert_eq!(sun.true_longitude, true_longitude(t));
        assert_eq!(sun.apparent_longitude, apparent_longitude(t));
        assert_eq!(sun.mean_obliquity, mean_obliquity_of_ecliptic(t));
        assert_eq!(sun.obliquity, obliquity_correction(t));
        assert_eq!(sun.right_ascension, right_ascension(t));
        assert_eq!(sun.declination, solar_declination(t));
        assert_eq!(sun.equation_of_time, equation_of_time(t));
    }
}
