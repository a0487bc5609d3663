pub mod angles;
pub mod ephemeris;
pub mod error;
pub mod position;
pub mod time;
pub mod types;

pub use angles::{deg_to_rad, normalize_angle, rad_to_deg};

pub use ephemeris::{
    apparent_longitude, eccentricity_earth_orbit, equation_of_center, equation_of_time,
    geom_mean_anomaly, geom_mean_longitude, mean_obliquity_of_ecliptic, obliquity_correction,
    radius_vector, right_ascension, solar_declination, true_anomaly, true_longitude,
    SolarCoordinates,
};

pub use error::{Error, Result};

pub use position::{
    clamp_latitude, cos_zenith, hour_angle, normalize_zone, refraction_correction,
    solar_azimuth, solar_zenith_angle, sun_position, sun_position_at, true_solar_time,
    MAX_LATITUDE, MAX_ZONE, MINUTES_PER_DAY, MIN_ZONE, TWILIGHT_ZENITH,
};

pub use time::{
    civil_time, day_of_week, day_of_year, is_leap_year, julian_century, julian_day,
    DAYS_PER_JULIAN_CENTURY, J2000,
};

pub use types::{Observer, SunPosition, NOT_REPORTED};
