use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::ephemeris::equation_of_time;
use crate::error::{Result, SolarError};
use crate::types::EquationOfTimeDatum;

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_year(year: i32) -> usize {
    if leap_year(year) {
        366
    } else {
        365
    }
}

/// Equation of time for every day of `year`, January 1 first.
pub fn annual_table(year: i32) -> Result<Vec<EquationOfTimeDatum>> {
    if year <= 0 {
        return Err(SolarError::InvalidYear(year));
    }
    let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(SolarError::InvalidYear(year))?;

    let mut table = Vec::with_capacity(days_in_year(year));
    table.extend(
        first
            .iter_days()
            .take_while(|d| d.year() == year)
            .map(|date| EquationOfTimeDatum {
                date,
                day_of_year: date.ordinal(),
                minutes: equation_of_time(date),
            }),
    );

    debug!(year, entries = table.len(), "generated equation of time table");
    Ok(table)
}

/// The days with the lowest and highest equation of time.
pub fn annual_extremes(
    table: &[EquationOfTimeDatum],
) -> Option<(EquationOfTimeDatum, EquationOfTimeDatum)> {
    let min = table
        .iter()
        .min_by(|a, b| a.minutes.total_cmp(&b.minutes))?;
    let max = table
        .iter()
        .max_by(|a, b| a.minutes.total_cmp(&b.minutes))?;
    Some((*min, *max))
}
