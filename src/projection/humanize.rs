//! Human-readable distances for arrival estimates.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use num_bigint::BigUint;

use crate::types::Eta;

const MINUTES_IN_YEAR: i64 = 525_600;
const MINUTES_IN_QUARTER_YEAR: i64 = 131_400;
const MINUTES_IN_THREE_QUARTERS_YEAR: i64 = 394_200;
const MINUTES_IN_DAY: i64 = 1_440;

/// 365.24219 days.
pub const MILLIS_PER_TROPICAL_YEAR: u64 = 31_556_925_216;

/// Beyond this many years an exact date is meaningless; report years only.
pub const FAR_FUTURE_YEARS: u64 = 10_000;

/// How far away an arrival estimate lies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EtaDescription {
    Within {
        distance: String,
        at: DateTime<Utc>,
    },
    YearsAway(BigUint),
}

impl fmt::Display for EtaDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtaDescription::Within { distance, at } => write!(
                f,
                "in {distance} (at approx. {})",
                at.format("%H:%M on %b. %d, %Y")
            ),
            EtaDescription::YearsAway(years) => {
                write!(f, "in about {} years", with_delimiters(years))
            }
        }
    }
}

pub fn describe_eta(eta: &Eta, now: DateTime<Utc>) -> EtaDescription {
    // Distance from `now`, not from the anchoring emission.
    let anchor_ms = (eta.from - now).num_milliseconds();
    let offset = eta.offset_millis();
    let ahead = if anchor_ms >= 0 {
        offset + BigUint::from(anchor_ms.unsigned_abs())
    } else {
        let behind = BigUint::from(anchor_ms.unsigned_abs());
        if offset > behind {
            offset - behind
        } else {
            BigUint::default()
        }
    };

    let far_future = BigUint::from(FAR_FUTURE_YEARS) * MILLIS_PER_TROPICAL_YEAR;
    if ahead < far_future {
        if let Some(at) = eta.timestamp() {
            return EtaDescription::Within {
                distance: distance_in_words(now, at),
                at,
            };
        }
    }

    let years = (ahead + MILLIS_PER_TROPICAL_YEAR / 2) / MILLIS_PER_TROPICAL_YEAR;
    EtaDescription::YearsAway(years)
}

pub fn pluralize(count: i64, singular: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Approximate distance between two instants, in either order.
pub fn distance_in_words(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let (from, to) = if from > to { (to, from) } else { (from, to) };
    let minutes = rounded_div((to - from).num_milliseconds(), 60_000);

    match minutes {
        0 => "less than 1 minute".to_string(),
        1 => "about 1 minute".to_string(),
        2..=44 => format!("about {minutes} minutes"),
        45..=89 => "about 1 hour".to_string(),
        90..=1439 => format!("about {} hours", rounded_div(minutes, 60)),
        1440..=2519 => "about 1 day".to_string(),
        2520..=43199 => format!("about {} days", rounded_div(minutes, MINUTES_IN_DAY)),
        43200..=525599 => format!("about {}", pluralize(rounded_div(minutes, 43_200), "month")),
        _ => years_in_words(from, to, minutes),
    }
}

fn years_in_words(from: DateTime<Utc>, to: DateTime<Utc>, minutes: i64) -> String {
    // Leap days inside the span would otherwise push "80 years" to "over 80 years".
    let first_year = from.year() + i32::from(from.month() >= 3);
    let last_year = to.year() - i32::from(to.month() < 3);
    let leap_days = if first_year > last_year {
        0
    } else {
        leap_years_through(last_year) - leap_years_through(first_year - 1)
    };

    let minutes = minutes - leap_days * MINUTES_IN_DAY;
    let remainder = minutes.rem_euclid(MINUTES_IN_YEAR);
    let years = minutes.div_euclid(MINUTES_IN_YEAR);

    if remainder < MINUTES_IN_QUARTER_YEAR {
        format!("about {}", pluralize(years, "year"))
    } else if remainder < MINUTES_IN_THREE_QUARTERS_YEAR {
        format!("over {}", pluralize(years, "year"))
    } else {
        format!("almost {} years", years + 1)
    }
}

/// Leap-year counting function: `f(y) − f(y − 1)` is 1 exactly when `y` is a leap year.
fn leap_years_through(year: i32) -> i64 {
    let year = i64::from(year);
    year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400)
}

/// Round-half-up division for non-negative values.
fn rounded_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

/// `1234567` → `"1,234,567"`.
pub fn with_delimiters(value: &BigUint) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

