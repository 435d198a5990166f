//! Calendar helpers: ISO weeks, day distances and weekday labels.

use chrono::{Datelike, IsoWeek, NaiveDate, Weekday};

use crate::error::RosterError;

/// Returns the ISO-8601 week (week-based year and week number) of a date.
///
/// Weeks start on Monday and week 1 is the week holding the year's first
/// Thursday, so late-December dates may belong to week 1 of the next year.
#[inline]
pub fn week_of(date: NaiveDate) -> IsoWeek {
    date.iso_week()
}

/// Signed number of days from `from` to `to`.
#[inline]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Parses a weekday label.
///
/// Accepts German two-letter labels (`Mo`, `Di`, `Mi`, `Do`, `Fr`, `Sa`, `So`)
/// as they appear in volunteer forms, plus English abbreviations and full
/// names. Matching ignores case and surrounding whitespace.
pub fn parse_weekday(label: &str) -> Result<Weekday, RosterError> {
    let normalized = label.trim().to_lowercase();
    let weekday = match normalized.as_str() {
        "mo" | "mon" | "monday" | "montag" => Weekday::Mon,
        "di" | "tu" | "tue" | "tuesday" | "dienstag" => Weekday::Tue,
        "mi" | "we" | "wed" | "wednesday" | "mittwoch" => Weekday::Wed,
        "do" | "th" | "thu" | "thursday" | "donnerstag" => Weekday::Thu,
        "fr" | "fri" | "friday" | "freitag" => Weekday::Fri,
        "sa" | "sat" | "saturday" | "samstag" => Weekday::Sat,
        "so" | "su" | "sun" | "sunday" | "sonntag" => Weekday::Sun,
        _ => return Err(RosterError::UnknownWeekday(label.to_string())),
    };
    Ok(weekday)
}

/// Parses a shift date.
///
/// Accepts ISO dates (`2026-01-07`) and the dotted forms used in volunteer
/// spreadsheets (`07.01.26`, `07.01.2026`). Two-digit years are in 2000-2099.
pub fn parse_date(value: &str) -> Result<NaiveDate, RosterError> {
    let trimmed = value.trim();
    let malformed = |reason: String| RosterError::MalformedDate {
        value: value.to_string(),
        reason,
    };

    if trimmed.contains('-') {
        return NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|e| malformed(e.to_string()));
    }

    let parts: Vec<&str> = trimmed.split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(malformed("expected YYYY-MM-DD or DD.MM.YY".to_string()));
    };
    let number = |part: &str| {
        part.parse::<u32>()
            .map_err(|e| malformed(format!("{part:?}: {e}")))
    };
    let (day, month, year) = (number(*day)?, number(*month)?, number(*year)?);
    let year = match year {
        0..=99 => 2000 + year,
        1000..=9999 => year,
        _ => return Err(malformed(format!("unsupported year {year}"))),
    };
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| malformed("no such calendar day".to_string()))
}
