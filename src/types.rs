use chrono::NaiveDateTime;

use crate::position;

/// Value reported for azimuth and elevation once the sun is past
/// astronomical twilight.
pub const NOT_REPORTED: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Minutes, 2 decimals.
    pub equation_of_time: f64,
    /// Degrees, 2 decimals.
    pub solar_declination: f64,
    /// Degrees above the horizon (refraction corrected), or [`NOT_REPORTED`].
    pub elevation: f64,
    /// Degrees clockwise from north in `[0, 360)`, or [`NOT_REPORTED`].
    pub azimuth: f64,
    /// Cosine of the refracted zenith angle in `[0, 1]`, 4 decimals; zero
    /// whenever the sun is below the horizon.
    pub cos_zenith: f64,
}

impl SunPosition {
    /// False once the sun has sunk past astronomical twilight and the
    /// horizontal coordinates carry the sentinel.
    pub fn is_reported(&self) -> bool {
        self.azimuth != NOT_REPORTED
    }
}

/// Where the sun is observed from and how the local clock relates to UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    /// Standard-time offset from UTC in hours, east positive.
    pub zone: f64,
    /// The local clock is one hour ahead of standard time.
    pub daylight_saving: bool,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            latitude: 39.8,
            longitude: -89.6,
            zone: -6.0,
            daylight_saving: false,
        }
    }
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64, zone: f64, daylight_saving: bool) -> Self {
        Self {
            latitude,
            longitude,
            zone,
            daylight_saving,
        }
    }

    /// The observer as the calculator sees it: latitude clamped away from
    /// the poles and out-of-range zones reset to UTC.
    pub fn normalized(&self) -> Self {
        Self {
            latitude: position::clamp_latitude(self.latitude),
            zone: position::normalize_zone(self.zone),
            ..*self
        }
    }

    pub fn sun_position(&self, time: &NaiveDateTime) -> SunPosition {
        position::sun_position(
            self.latitude,
            self.longitude,
            self.zone,
            self.daylight_saving,
            time,
        )
    }
}
