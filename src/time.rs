use std::fmt;
use std::str::FromStr;

use hifitime::Epoch;

use crate::constants::{GREGORIAN_REFORM_JD, JDE};
use crate::lunar_errors::LunarError;

/// Calendar date with a fractional day, as used in astronomical almanacs
/// (e.g. `1992 April 12.0` for 1992-04-12 00:00).
///
/// Dates before 1582 October 15 are in the Julian calendar, later dates in the Gregorian
/// calendar. Years use astronomical numbering (year 0 = 1 BC).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: f64,
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:09.6}", self.year, self.month, self.day)
    }
}

/// Transformation from Julian (Ephemeris) Day to calendar date (Meeus, ch. 7).
///
/// Argument
/// --------
/// * `jde`: a Julian Day, `jde ≥ 0`
///
/// Return
/// ------
/// * the calendar date; the day carries the fraction of the day
pub fn jde_to_calendar_date(jde: JDE) -> CalendarDate {
    let shifted = jde + 0.5;
    let z = shifted.trunc();
    let fraction = shifted - z;

    let a = if z < GREGORIAN_REFORM_JD {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).trunc();
        z + 1.0 + alpha - (alpha / 4.0).trunc()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).trunc();
    let d = (365.25 * c).trunc();
    let e = ((b - d) / 30.6001).trunc();

    let day = b - d - (30.6001 * e).trunc() + fraction;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    CalendarDate {
        year: year as i32,
        month: month as u8,
        day,
    }
}

/// Transformation from calendar date to Julian Day (Meeus, ch. 7).
///
/// Argument
/// --------
/// * `date`: calendar date; Gregorian from 1582 October 15 on, Julian before
///
/// Return
/// ------
/// * the Julian Day of the date
pub fn calendar_date_to_jde(date: &CalendarDate) -> JDE {
    let (mut year, mut month) = (f64::from(date.year), f64::from(date.month));
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let gregorian = (date.year, date.month, date.day) >= (1582, 10, 15.0);
    let b = if gregorian {
        let a = (year / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + date.day + b - 1524.5
}

/// Transformation from an ISO 8601 date (`YYYY-MM-DDTHH:MM:SS`, optionally followed by a
/// time scale such as ` TT` or ` UTC`) to Julian Ephemeris Day.
///
/// Dates without an explicit time scale are read as UTC, as `hifitime` does; the result is
/// always expressed in Terrestrial Time.
///
/// Return
/// ------
/// * the JDE, or [`LunarError::InvalidDate`] if the string cannot be parsed
pub fn iso_to_jde(date: &str) -> Result<JDE, LunarError> {
    let epoch = Epoch::from_str(date.trim())
        .map_err(|e| LunarError::InvalidDate(format!("{date}: {e}")))?;
    Ok(epoch.to_jde_tt_days())
}

/// Read a JDE either as a plain number (`2448724.5`) or as an ISO 8601 date.
pub fn parse_jde(input: &str) -> Result<JDE, LunarError> {
    match input.trim().parse::<f64>() {
        Ok(jde) if jde.is_finite() => Ok(jde),
        Ok(_) => Err(LunarError::InvalidDate(format!(
            "{input}: JDE must be finite"
        ))),
        Err(_) => iso_to_jde(input),
    }
}
