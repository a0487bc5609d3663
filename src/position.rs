use chrono::{DateTime, Datelike, NaiveDateTime, TimeDelta, TimeZone, Timelike};
use log::{debug, trace};

use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};
use crate::ephemeris::SolarCoordinates;
use crate::time::{julian_century, julian_day};
use crate::types::{SunPosition, NOT_REPORTED};

pub const MAX_LATITUDE: f64 = 89.8;
pub const MIN_ZONE: f64 = -12.5;
pub const MAX_ZONE: f64 = 12.0;
pub const MINUTES_PER_DAY: f64 = 1440.0;
/// Refracted zenith angle beyond which the sun is past astronomical twilight.
pub const TWILIGHT_ZENITH: f64 = 108.0;
const AZIMUTH_EPSILON: f64 = 0.001;

pub fn clamp_latitude(latitude: f64) -> f64 {
    if latitude > MAX_LATITUDE {
        debug!("latitude {latitude} clamped to {MAX_LATITUDE}");
        MAX_LATITUDE
    } else if latitude < -MAX_LATITUDE {
        debug!("latitude {latitude} clamped to {}", -MAX_LATITUDE);
        -MAX_LATITUDE
    } else {
        latitude
    }
}

/// Offsets outside `[-12.5, 12]` hours fall back to UTC.
pub fn normalize_zone(zone: f64) -> f64 {
    if zone > MAX_ZONE || zone < MIN_ZONE {
        debug!("time zone offset {zone} out of range, using 0");
        0.0
    } else {
        zone
    }
}

/// True solar time in `[0, 1440)` minutes from the local clock and the
/// equation-of-time/longitude/zone correction, both in minutes.
pub fn true_solar_time(clock_minutes: f64, solar_time_fix: f64) -> f64 {
    let tst = (clock_minutes + solar_time_fix).rem_euclid(MINUTES_PER_DAY);
    // rem_euclid rounds tiny negative sums up to exactly one day
    if tst >= MINUTES_PER_DAY {
        0.0
    } else {
        tst
    }
}

/// Hour angle in `[-180, 180)` degrees from true solar time in minutes.
pub fn hour_angle(true_solar_time: f64) -> f64 {
    let ha = true_solar_time / 4.0 - 180.0;
    if ha < -180.0 {
        ha + 360.0
    } else if ha >= 180.0 {
        ha - 360.0
    } else {
        ha
    }
}

/// Cosine of the geometric zenith angle, clamped to `[-1, 1]`.
pub fn cos_zenith(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    (lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos()).clamp(-1.0, 1.0)
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    rad_to_deg(cos_zenith(latitude, declination, hour_angle).acos())
}

/// Azimuth in `[0, 360)` degrees clockwise from north.
///
/// Falls back to due south (north of the equator) or due north when the sun
/// is too close to the zenith for the spherical formula to be stable.
pub fn solar_azimuth(latitude: f64, declination: f64, zenith: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let zen_rad = deg_to_rad(zenith);
    let denom = lat_rad.cos() * zen_rad.sin();

    let azimuth = if denom.abs() > AZIMUTH_EPSILON {
        let cos_az =
            (lat_rad.sin() * zen_rad.cos() - deg_to_rad(declination).sin()) / denom;
        let az = 180.0 - rad_to_deg(cos_az.clamp(-1.0, 1.0).acos());
        if hour_angle > 0.0 {
            -az
        } else {
            az
        }
    } else if latitude > 0.0 {
        180.0
    } else {
        0.0
    };
    normalize_angle(azimuth)
}

/// Atmospheric refraction in degrees for an airless elevation in degrees.
pub fn refraction_correction(exoatm_elevation: f64) -> f64 {
    let e = exoatm_elevation;
    if e > 85.0 {
        return 0.0;
    }
    let te = deg_to_rad(e).tan();
    let arcseconds = if e > 5.0 {
        58.1 / te - 0.07 / te.powi(3) + 0.000086 / te.powi(5)
    } else if e > -0.575 {
        1735.0 + e * (-518.2 + e * (103.4 + e * (-12.79 + e * 0.711)))
    } else {
        -20.774 / te
    };
    arcseconds / 3600.0
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Apparent position of the sun seen from `latitude`/`longitude` when the
/// local clock reads `time`.
///
/// `zone` is the standard-time offset from UTC in hours (east positive) and
/// `daylight_saving` marks a clock running one hour ahead of it. Out of range
/// latitudes and zones are corrected rather than rejected.
pub fn sun_position(
    latitude: f64,
    longitude: f64,
    zone: f64,
    daylight_saving: bool,
    time: &NaiveDateTime,
) -> SunPosition {
    let latitude = clamp_latitude(latitude);
    let zone = normalize_zone(zone);

    let standard = if daylight_saving {
        time.checked_sub_signed(TimeDelta::hours(1)).unwrap_or_else(|| {
            debug!("cannot move {time} back to standard time, ignoring daylight saving");
            *time
        })
    } else {
        *time
    };
    let minutes_of_day = standard.hour() as f64 * 60.0
        + standard.minute() as f64
        + standard.second() as f64 / 60.0;

    // hours since 0h UT of the local calendar date, may leave [0, 24)
    let gmt_hours = minutes_of_day / 60.0 - zone;
    let jd = julian_day(standard.year(), standard.month(), standard.day() as f64);
    let t = julian_century(jd + gmt_hours / 24.0);

    let sun = SolarCoordinates::at(t);
    let eq_time = sun.equation_of_time;
    let declination = sun.declination;

    let solar_time_fix = eq_time + 4.0 * longitude - 60.0 * zone;
    let true_solar_time = true_solar_time(minutes_of_day, solar_time_fix);
    let ha = hour_angle(true_solar_time);

    let zenith = solar_zenith_angle(latitude, declination, ha);
    let azimuth = solar_azimuth(latitude, declination, zenith, ha);
    let refraction = refraction_correction(90.0 - zenith);
    let solar_zenith = zenith - refraction;

    trace!(
        "t={t:.9} tst={true_solar_time:.3}min ha={ha:.4} zenith={zenith:.4} refraction={refraction:.5}"
    );

    let (azimuth, elevation, cos_zenith) = if solar_zenith < TWILIGHT_ZENITH {
        let mut azimuth = round_to(azimuth, 2);
        if azimuth >= 360.0 {
            azimuth -= 360.0;
        }
        let cos_zenith = if solar_zenith < 90.0 {
            round_to(deg_to_rad(solar_zenith).cos().clamp(0.0, 1.0), 4)
        } else {
            0.0
        };
        (azimuth, round_to(90.0 - solar_zenith, 2), cos_zenith)
    } else {
        (NOT_REPORTED, NOT_REPORTED, 0.0)
    };

    SunPosition {
        equation_of_time: round_to(eq_time, 2),
        solar_declination: round_to(declination, 2),
        elevation,
        azimuth,
        cos_zenith,
    }
}

/// [`sun_position`] for a zoned timestamp; the offset of `time` already
/// includes any daylight saving.
pub fn sun_position_at<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    time: &DateTime<Tz>,
) -> SunPosition {
    sun_position(latitude, longitude, 0.0, false, &time.naive_utc())
}
