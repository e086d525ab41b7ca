//! Date phrase parsing and resolution

use crate::domain::number;
use crate::error::{DaybookError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use regex::Regex;
use std::sync::OnceLock;

/// Upper bound on relative quantities, keeps the day arithmetic well
/// inside chrono's supported date range.
const MAX_QUANTITY: i64 = 100_000;

/// Regex for relative offsets: "<quantity> <unit> ago|from now|from today".
/// The optional plural suffix makes the longer unit token win, so "months"
/// is never read as "month" with a stray trailing "s".
fn relative_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(?P<qty>.+?)\s+(?P<unit>days?|weeks?|months?|years?)\s+(?P<dir>ago|from now|from today)$")
            .unwrap()
    })
}

/// Represents a date phrase that can be resolved to a specific date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatePhrase {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Next day
    Tomorrow,
    /// A fixed number of days in the past
    DaysAgo(i64),
    /// A fixed number of days in the future
    DaysAhead(i64),
    /// Occurrence of a weekday in the current Monday-based week
    Weekday(Weekday),
    /// Previous occurrence of a weekday (strictly before today)
    LastWeekday(Weekday),
    /// Occurrence of a weekday in the following week
    NextWeekday(Weekday),
}

impl DatePhrase {
    /// Parse a date phrase string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" => Ok(DatePhrase::Today),
            "yesterday" => Ok(DatePhrase::Yesterday),
            "tomorrow" => Ok(DatePhrase::Tomorrow),
            _ if normalized.starts_with("last ") => {
                Self::named_weekday(&normalized[5..], input).map(DatePhrase::LastWeekday)
            }
            _ if normalized.starts_with("this ") => {
                Self::named_weekday(&normalized[5..], input).map(DatePhrase::Weekday)
            }
            _ if normalized.starts_with("next ") => {
                Self::named_weekday(&normalized[5..], input).map(DatePhrase::NextWeekday)
            }
            _ => {
                // A bare weekday reads as "this <weekday>"
                if let Some(day) = weekday_from_name(&normalized) {
                    return Ok(DatePhrase::Weekday(day));
                }
                Self::parse_relative(&normalized, input)
            }
        }
    }

    /// Helper to parse a weekday name, reporting the full phrase on failure
    fn named_weekday(day_str: &str, input: &str) -> Result<Weekday> {
        weekday_from_name(day_str).ok_or_else(|| DaybookError::UnparsedPhrase(input.to_string()))
    }

    /// Parse "<quantity> <unit> ago|from now|from today" offsets
    fn parse_relative(normalized: &str, input: &str) -> Result<Self> {
        let unparsed = || DaybookError::UnparsedPhrase(input.to_string());

        let captures = relative_regex().captures(normalized).ok_or_else(unparsed)?;
        let quantity = parse_quantity(&captures["qty"]).ok_or_else(unparsed)?;
        let days = quantity * unit_days(&captures["unit"]).ok_or_else(unparsed)?;

        match &captures["dir"] {
            "ago" => Ok(DatePhrase::DaysAgo(days)),
            _ => Ok(DatePhrase::DaysAhead(days)),
        }
    }

    /// Resolve this date phrase to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DatePhrase::Today => base_date,
            DatePhrase::Yesterday => base_date - Duration::days(1),
            DatePhrase::Tomorrow => base_date + Duration::days(1),
            DatePhrase::DaysAgo(days) => base_date - Duration::days(*days),
            DatePhrase::DaysAhead(days) => base_date + Duration::days(*days),
            DatePhrase::Weekday(target_day) => {
                Self::find_weekday(base_date, *target_day, WeekdayOffset::This)
            }
            DatePhrase::LastWeekday(target_day) => {
                Self::find_weekday(base_date, *target_day, WeekdayOffset::Last)
            }
            DatePhrase::NextWeekday(target_day) => {
                Self::find_weekday(base_date, *target_day, WeekdayOffset::Next)
            }
        }
    }

    /// Find a specific weekday relative to the base date
    fn find_weekday(base_date: NaiveDate, target_day: Weekday, offset: WeekdayOffset) -> NaiveDate {
        let today = base_date.weekday().num_days_from_monday() as i64;
        let target = target_day.num_days_from_monday() as i64;

        match offset {
            WeekdayOffset::This => {
                // Same Monday-based week; may land before or after today
                base_date + Duration::days(target - today)
            }
            WeekdayOffset::Last => {
                // Most recent occurrence strictly before today
                let days_back = match (today - target).rem_euclid(7) {
                    0 => 7,
                    days => days,
                };
                base_date - Duration::days(days_back)
            }
            WeekdayOffset::Next => {
                // Always in the following week: 7 to 13 days ahead
                base_date + Duration::days((target - today).rem_euclid(7) + 7)
            }
        }
    }
}

/// Offset for weekday resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeekdayOffset {
    /// Occurrence within the current week
    This,
    /// Previous occurrence (strictly before today)
    Last,
    /// Occurrence in the following week
    Next,
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    let day = match name {
        "monday" => Weekday::Mon,
        "tuesday" => Weekday::Tue,
        "wednesday" => Weekday::Wed,
        "thursday" => Weekday::Thu,
        "friday" => Weekday::Fri,
        "saturday" => Weekday::Sat,
        "sunday" => Weekday::Sun,
        _ => return None,
    };
    Some(day)
}

/// Parse a quantity as either a digit string or an English number word
fn parse_quantity(text: &str) -> Option<i64> {
    let value = text
        .parse::<i64>()
        .ok()
        .or_else(|| number::from_words(text))?;
    (0..=MAX_QUANTITY).contains(&value).then_some(value)
}

/// Days per unit; calendar-naive fixed approximations
fn unit_days(unit: &str) -> Option<i64> {
    let days = match unit {
        "day" | "days" => 1,
        "week" | "weeks" => 7,
        "month" | "months" => 30,
        "year" | "years" => 365,
        _ => return None,
    };
    Some(days)
}
