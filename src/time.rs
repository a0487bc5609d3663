use chrono::{NaiveDate, NaiveDateTime, Weekday};

use crate::error::{Error, Result};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000: f64 = 2_451_545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Day at 0h UT for a proleptic Gregorian calendar date.
///
/// `day` may carry a fraction of a day; `julian_day(2000, 1, 1.5)` is the
/// J2000.0 epoch.
pub fn julian_day(year: i32, month: u32, day: f64) -> f64 {
    let (year, month) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (year as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (year + 4716) as f64).floor() + (30.6001 * (month + 1) as f64).floor() + day + b
        - 1524.5
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_JULIAN_CENTURY
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Ordinal day (1..=366) from month and day of month.
pub fn day_of_year(month: u32, day: u32, is_leap: bool) -> i32 {
    let k = if is_leap { 1 } else { 2 };
    let (month, day) = (month as i32, day as i32);
    (275 * month) / 9 - k * ((month + 9) / 12) + day - 30
}

/// Weekday on which the given Julian Day falls.
pub fn day_of_week(jd: f64) -> Weekday {
    match ((jd + 1.5).floor() as i64).rem_euclid(7) {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}

/// Builds a local civil timestamp, rejecting impossible dates and clock times.
pub fn civil_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<NaiveDateTime> {
    let date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(Error::InvalidDate { year, month, day })?;
    date.and_hms_opt(hour, minute, second)
        .ok_or(Error::InvalidTime {
            hour,
            minute,
            second,
        })
}
