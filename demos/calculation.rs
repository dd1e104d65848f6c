use chrono::{NaiveDate, TimeZone};
use chrono_tz::Europe::London;

use sun_path::{
    annual_extremes, annual_table, daily_path, polar_condition, solar_position, GeoCoordinate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let greenwich = GeoCoordinate::new(51.4769, 0.0)?;
    let dt = London.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let pos = solar_position(&greenwich, &dt)?;

    println!("=== Solar Position Calculation Example ===");
    println!(
        "Location: Greenwich ({:.4}°N, {:.1}°E)",
        greenwich.latitude, greenwich.longitude
    );
    println!("Date/Time: {}", dt);
    println!("Declination: {:.2}°", pos.declination);
    println!("Hour Angle: {:.2}°", pos.hour_angle);
    println!("Elevation: {:.2}°", pos.elevation);
    println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", pos.azimuth);
    println!();

    let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    let path = daily_path(&greenwich, date)?;
    println!("--- Sun Path {} ---", date);
    if let (Some(rise), Some(set)) = (path.sunrise, path.sunset) {
        println!("Sunrise: {} (azimuth {:.1}°)", rise.instant, rise.azimuth);
        println!("Sunset:  {} (azimuth {:.1}°)", set.instant, set.azimuth);
    }
    println!("Max elevation: {:.2}°", path.max_elevation());
    println!();

    let tromso = GeoCoordinate::new(69.65, 18.96)?;
    for date in [
        NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(),
    ] {
        let condition = polar_condition(&tromso, date)?;
        println!("Tromsø {}: {}", date, condition.description);
    }
    println!();

    let table = annual_table(2024)?;
    if let Some((min, max)) = annual_extremes(&table) {
        println!("--- Equation of Time 2024 ---");
        println!("Minimum: {:.2} min on {}", min.minutes, min.date);
        println!("Maximum: {:.2} min on {}", max.minutes, max.date);
    }

    Ok(())
}
