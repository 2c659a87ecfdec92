//! age.rs
//!
//! This module computes an age breakdown between a birth date and a
//! reference date, plus a countdown to the next milestone birthday.
//!
//! The months/days figures are NOT a calendar-exact decomposition:
//!   • years  = completed birthdays (Feb 29 birthdays complete on Mar 1 in
//!     non-leap years)
//!   • months = whole months elapsed (day-overflow rules, see
//!     `whole_months`), modulo 12, independent of `years`
//!   • days   = days since the last birthday, modulo a fixed 30
//!
//! Downstream displays depend on these exact numbers; keep the formulas
//! as they are rather than switching to month-length borrowing.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;

/// Ages worth a countdown, ascending.
pub const MILESTONE_AGES: [u32; 15] = [1, 5, 10, 13, 16, 18, 21, 25, 30, 40, 50, 60, 65, 75, 90];

/// Shown by presentation layers in place of a summary when input is invalid.
pub const INVALID_INPUT_PLACEHOLDER: &str = "Set a valid birth date";

// Fixed "month" length used for the days remainder.
const DAYS_MODULUS: i64 = 30;

/// Age between two calendar dates. Built fresh by [`compute_age`]; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days_lived: u64,
    pub next_milestone_age: Option<u32>,
    pub next_milestone_date: Option<NaiveDate>,
    pub days_until_next_milestone: Option<u64>,
}

impl AgeBreakdown {
    /// Headline text, e.g. "29 years 0 months 0 days".
    pub fn summary(&self) -> String {
        format!("{} years {} months {} days", self.years, self.months, self.days)
    }
}

/// Why an age could not be computed.
///
/// Callers of [`compute_age`] only ever see an absent result; this type exists
/// so that front ends can log the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("birth date is missing")]
    MissingBirthDate,

    #[error("reference date is missing")]
    MissingReferenceDate,

    #[error("'{0}' is not a valid calendar date")]
    Unparseable(String),

    #[error("birth date {birth} is after reference date {reference}")]
    BirthAfterReference {
        birth: NaiveDate,
        reference: NaiveDate,
    },
}

/// Returns the age breakdown, or `None` when either date is missing or the
/// birth date is after the reference date.
pub fn compute_age(birth: Option<NaiveDate>, reference: Option<NaiveDate>) -> Option<AgeBreakdown> {
    try_compute_age(birth, reference).ok()
}

/// Same as [`compute_age`] for `YYYY-MM-DD` (or ISO date-time) strings.
/// Unparseable strings yield `None`.
pub fn compute_age_from_str(birth: &str, reference: &str) -> Option<AgeBreakdown> {
    try_compute_age_from_str(birth, reference).ok()
}

pub fn try_compute_age_from_str(birth: &str, reference: &str) -> Result<AgeBreakdown, InvalidInput> {
    let birth = parse_optional(birth)?;
    let reference = parse_optional(reference)?;
    try_compute_age(birth, reference)
}

/// Computes the breakdown, reporting why the input was rejected.
pub fn try_compute_age(
    birth: Option<NaiveDate>,
    reference: Option<NaiveDate>,
) -> Result<AgeBreakdown, InvalidInput> {
    let birth = birth.ok_or(InvalidInput::MissingBirthDate)?;
    let reference = reference.ok_or(InvalidInput::MissingReferenceDate)?;

    if birth > reference {
        return Err(InvalidInput::BirthAfterReference { birth, reference });
    }

    let years = whole_years(birth, reference);
    let months = whole_months(birth, reference) % 12;

    // Always <= reference, so it stays in range.
    let last_birthday = add_years(birth, years).unwrap_or(birth);
    let days = day_count(last_birthday, reference) % DAYS_MODULUS;

    let total_days_lived = day_count(birth, reference);

    // A milestone whose date overflows the calendar is treated as absent, so
    // the age/date/countdown triple is all-or-nothing.
    let milestone = next_milestone(years)
        .and_then(|age| add_years(birth, age).map(|date| (age, date)));

    Ok(AgeBreakdown {
        years,
        months,
        days: days as u32,
        total_days_lived: total_days_lived as u64,
        next_milestone_age: milestone.map(|(age, _)| age),
        next_milestone_date: milestone.map(|(_, date)| date),
        days_until_next_milestone: milestone.map(|(_, date)| {
            // Not completing the milestone birthday means its date is still ahead.
            debug_assert!(date >= reference, "milestone {date} precedes {reference}");
            day_count(reference, date).unsigned_abs()
        }),
    })
}

/// Smallest milestone strictly greater than `years`, if any remain.
pub fn next_milestone(years: u32) -> Option<u32> {
    MILESTONE_AGES.iter().copied().find(|&age| age > years)
}

/// Parses a calendar date. Accepts `YYYY-MM-DD`, an ISO date-time
/// (`YYYY-MM-DDTHH:MM[:SS[.fff]]`) or an RFC 3339 timestamp; any time of day
/// is dropped.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.date_naive())
}

fn parse_optional(input: &str) -> Result<Option<NaiveDate>, InvalidInput> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_date(input)
        .map(Some)
        .ok_or_else(|| InvalidInput::Unparseable(input.to_string()))
}

/// Completed birthdays. Month/day are compared ignoring the year, so a
/// Feb 29 birthday only completes on Mar 1 in non-leap years.
fn whole_years(birth: NaiveDate, reference: NaiveDate) -> u32 {
    let mut years = reference.year() - birth.year();
    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Whole months from `birth` to `reference`.
///
/// The reference is walked back by the calendar-month difference, letting
/// the day overflow into the next month (Apr 30 back 3 months is Jan 30,
/// Mar 31 back 1 month is Mar 3); if that lands before `birth` the last
/// month is not full. Two quirks are part of the contract:
///   • a Feb 28/29 reference is first moved to "Feb 30", i.e. into March
///   • a month-end reference one calendar month after `birth` always
///     counts as a full month
fn whole_months(birth: NaiveDate, reference: NaiveDate) -> u32 {
    let difference = (reference.year() - birth.year()) * 12 + reference.month() as i32
        - birth.month() as i32;
    if difference < 1 {
        return 0;
    }

    let start = if reference.month() == 2 && reference.day() > 27 {
        overflowing_date(reference.year(), 1, 30)
    } else {
        Some(reference)
    };
    let walked_back = start.and_then(|date| {
        overflowing_date(date.year(), date.month0() as i32 - difference, date.day())
    });

    let mut last_month_not_full = walked_back.is_none_or(|date| date < birth);
    if difference == 1 && is_last_day_of_month(reference) && reference > birth {
        last_month_not_full = false;
    }

    (difference - last_month_not_full as i32) as u32
}

/// Builds a date from a zero-based month that may fall outside 0..12 and a
/// day that may exceed the month's length; both roll forward.
fn overflowing_date(year: i32, month0: i32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(
        year.checked_add(month0.div_euclid(12))?,
        month0.rem_euclid(12) as u32 + 1,
        1,
    )?;
    first.checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.day() == days_in_month(date.year(), date.month())
}

/// Returns number of days in a given year/month (handles leap years)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30, // unreachable for a valid date; keeps the function total
    }
}

/// Gregorian rule: every 4th year, except centuries not divisible by 400.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Advances `date` by whole years, clamping Feb 29 to Feb 28.
fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years.checked_mul(12)?))
}

fn day_count(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
