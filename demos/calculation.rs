use chrono::TimeZone;
use chrono_tz::America::Denver;

use sunpos::{civil_time, julian_day, sun_position_at, Observer, SolarCoordinates};

fn main() -> sunpos::Result<()> {
    // Golden, CO
    let observer = Observer::new(39.742476, -105.1786, -7.0, false);
    let time = civil_time(2003, 10, 17, 12, 30, 30)?;

    let pos = observer.sun_position(&time);
    let jd = julian_day(2003, 10, 17.0) + (12.5 + 30.0 / 3600.0 + 7.0) / 24.0;
    let sun = SolarCoordinates::at(sunpos::julian_century(jd));

    println!("=== Sun Position Calculation Example ===");
    println!(
        "Location: Golden, CO ({:.2}°N, {:.2}°W), zone {}",
        observer.latitude, -observer.longitude, observer.zone
    );
    println!("Local time: {}", time);
    println!();
    println!("--- Ephemeris ---");
    println!("Julian Day: {:.5}", jd);
    println!("Apparent longitude: {:.4}°", sun.apparent_longitude);
    println!("Right ascension: {:.4}°", sun.right_ascension);
    println!("Radius vector: {:.6} AU", sun.radius_vector);
    println!();
    println!("--- Sun Position ---");
    println!("Equation of Time: {:.2} minutes", pos.equation_of_time);
    println!("Declination: {:.2}°", pos.solar_declination);
    println!("Elevation: {:.2}°", pos.elevation);
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", pos.azimuth);
    println!("cos(zenith): {:.4}", pos.cos_zenith);

    let zoned = Denver.with_ymd_and_hms(2003, 10, 17, 13, 30, 30).unwrap();
    let dst = sun_position_at(observer.latitude, observer.longitude, &zoned);
    println!();
    println!("Same instant from {} (MDT): azimuth {:.2}°", zoned, dst.azimuth);

    Ok(())
}
