//! Closed-form solar series (Meeus, "Astronomical Algorithms", ch. 25) as
//! used by the NOAA solar calculator.
//!
//! Every function takes `t`, Julian centuries since J2000.0, and returns
//! degrees unless noted otherwise.

use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};

pub fn geom_mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Geometric mean longitude, in `[0, 360)`.
pub fn geom_mean_longitude(t: f64) -> f64 {
    normalize_angle(280.46646 + t * (36000.76983 + 0.0003032 * t))
}

/// Unitless.
pub fn eccentricity_earth_orbit(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

pub fn equation_of_center(t: f64) -> f64 {
    let m = deg_to_rad(geom_mean_anomaly(t));
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

pub fn true_anomaly(t: f64) -> f64 {
    geom_mean_anomaly(t) + equation_of_center(t)
}

pub fn true_longitude(t: f64) -> f64 {
    geom_mean_longitude(t) + equation_of_center(t)
}

/// Earth-sun distance in astronomical units.
pub fn radius_vector(t: f64) -> f64 {
    radius_vector_from(eccentricity_earth_orbit(t), true_anomaly(t))
}

fn radius_vector_from(e: f64, true_anomaly: f64) -> f64 {
    1.000001018 * (1.0 - e * e) / (1.0 + e * deg_to_rad(true_anomaly).cos())
}

/// Longitude of the ascending node of the moon's orbit, driving nutation.
fn omega(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// True longitude corrected for nutation and aberration.
pub fn apparent_longitude(t: f64) -> f64 {
    apparent_longitude_from(true_longitude(t), t)
}

fn apparent_longitude_from(true_longitude: f64, t: f64) -> f64 {
    true_longitude - 0.00569 - 0.00478 * deg_to_rad(omega(t)).sin()
}

pub fn mean_obliquity_of_ecliptic(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

pub fn obliquity_correction(t: f64) -> f64 {
    obliquity_correction_from(mean_obliquity_of_ecliptic(t), t)
}

fn obliquity_correction_from(mean_obliquity: f64, t: f64) -> f64 {
    mean_obliquity + 0.00256 * deg_to_rad(omega(t)).cos()
}

/// Right ascension in `(-180, 180]`.
pub fn right_ascension(t: f64) -> f64 {
    right_ascension_from(obliquity_correction(t), apparent_longitude(t))
}

fn right_ascension_from(epsilon: f64, lambda: f64) -> f64 {
    let (epsilon, lambda) = (deg_to_rad(epsilon), deg_to_rad(lambda));
    rad_to_deg((epsilon.cos() * lambda.sin()).atan2(lambda.cos()))
}

pub fn solar_declination(t: f64) -> f64 {
    declination_from(obliquity_correction(t), apparent_longitude(t))
}

fn declination_from(epsilon: f64, lambda: f64) -> f64 {
    let (epsilon, lambda) = (deg_to_rad(epsilon), deg_to_rad(lambda));
    rad_to_deg((epsilon.sin() * lambda.sin()).asin())
}

/// Apparent minus mean solar time, in minutes.
pub fn equation_of_time(t: f64) -> f64 {
    equation_of_time_from(
        obliquity_correction(t),
        geom_mean_longitude(t),
        eccentricity_earth_orbit(t),
        geom_mean_anomaly(t),
    )
}

fn equation_of_time_from(epsilon: f64, l0: f64, e: f64, m: f64) -> f64 {
    let y = (deg_to_rad(epsilon) / 2.0).tan().powi(2);
    let l0 = deg_to_rad(l0);
    let m = deg_to_rad(m);

    let etime = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    rad_to_deg(etime) * 4.0
}

/// Every quantity of the series evaluated once at a single instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    pub julian_century: f64,
    pub mean_anomaly: f64,
    pub equation_of_center: f64,
    pub true_anomaly: f64,
    pub eccentricity: f64,
    pub radius_vector: f64,
    pub mean_longitude: f64,
    pub true_longitude: f64,
    pub apparent_longitude: f64,
    pub mean_obliquity: f64,
    pub obliquity: f64,
    pub right_ascension: f64,
    pub declination: f64,
    pub equation_of_time: f64,
}

impl SolarCoordinates {
    pub fn at(t: f64) -> Self {
        let mean_anomaly = geom_mean_anomaly(t);
        let center = equation_of_center(t);
        let true_anomaly = mean_anomaly + center;
        let eccentricity = eccentricity_earth_orbit(t);

        let mean_longitude = geom_mean_longitude(t);
        let true_longitude = mean_longitude + center;
        let apparent_longitude = apparent_longitude_from(true_longitude, t);

        let mean_obliquity = mean_obliquity_of_ecliptic(t);
        let obliquity = obliquity_correction_from(mean_obliquity, t);

        Self {
            julian_century: t,
            mean_anomaly,
            equation_of_center: center,
            true_anomaly,
            eccentricity,
            radius_vector: radius_vector_from(eccentricity, true_anomaly),
            mean_longitude,
            true_longitude,
            apparent_longitude,
            mean_obliquity,
            obliquity,
            right_ascension: right_ascension_from(obliquity, apparent_longitude),
            declination: declination_from(obliquity, apparent_longitude),
            equation_of_time: equation_of_time_from(
                obliquity,
                mean_longitude,
                eccentricity,
                mean_anomaly,
            ),
        }
    }
}
