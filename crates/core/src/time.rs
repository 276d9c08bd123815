//! Time formatting helpers.
//!
//! Human-readable times ([`tuk_time`]) are rendered in UK time, [`TUK_TIME_ZONE`], whatever the
//! host's zone. The field helpers use the host's local time and return fixed-width strings so they
//! can be concatenated directly into identifiers and file names.

use crate::constants::{TUK_TIME_FORMAT, TUK_TIME_ZONE};
use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Utc};

pub use tuk_id::oid_timestamp;

/// The current UK time, e.g. `2021-10-21 09:00:59.143025113 +0100`.
pub fn tuk_time() -> String {
    tuk_time_at(Utc::now())
}

/// Renders the instant `at` as UK time in the [`tuk_time`] layout.
///
/// # Arguments
///
/// * `at` - Instant to render, in any zone.
///
/// # Returns
///
/// The instant converted to [`TUK_TIME_ZONE`], so British Summer Time shows as `+0100` and
/// winter time as `+0000`.
pub fn tuk_time_at<Tz: TimeZone>(at: DateTime<Tz>) -> String {
    format_tuk_time(&at.with_timezone(&TUK_TIME_ZONE))
}

/// Renders `at` in the [`tuk_time`] layout.
pub fn format_tuk_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TUK_TIME_FORMAT).to_string()
}

/// Strips everything from the first `.` onwards.
///
/// `"2021-10-21 09:00:59.143 +0100"` becomes `"2021-10-21 09:00:59"`. Input without a `.` is
/// returned unchanged.
pub fn pretty_time(time: &str) -> &str {
    time.split_once('.').map_or(time, |(head, _)| head)
}

/// [`tuk_time`] without the fractional seconds and offset.
pub fn tuk_pretty_time() -> String {
    pretty_time(&tuk_time()).to_owned()
}

/// Four-digit year.
pub fn year() -> String {
    year_of(&Local::now().naive_local())
}

/// Two-digit month, `01`..=`12`.
pub fn month() -> String {
    month_of(&Local::now().naive_local())
}

/// Two-digit day of month.
pub fn day() -> String {
    day_of(&Local::now().naive_local())
}

/// Two-digit hour, 24-hour clock.
pub fn hour() -> String {
    hour_of(&Local::now().naive_local())
}

/// Two-digit minute.
pub fn minute() -> String {
    minute_of(&Local::now().naive_local())
}

/// Two-digit second.
pub fn second() -> String {
    second_of(&Local::now().naive_local())
}

/// Milliseconds within the current second, `0..=999`.
pub fn millisecond() -> u32 {
    millisecond_of(&Local::now().naive_local())
}

pub fn year_of(at: &NaiveDateTime) -> String {
    format!("{:04}", at.year())
}

pub fn month_of(at: &NaiveDateTime) -> String {
    format!("{:02}", at.month())
}

pub fn day_of(at: &NaiveDateTime) -> String {
    format!("{:02}", at.day())
}

pub fn hour_of(at: &NaiveDateTime) -> String {
    format!("{:02}", at.hour())
}

pub fn minute_of(at: &NaiveDateTime) -> String {
    format!("{:02}", at.minute())
}

pub fn second_of(at: &NaiveDateTime) -> String {
    format!("{:02}", at.second())
}

// Leap seconds carry nanoseconds past 1e9; fold them back into the last millisecond.
pub fn millisecond_of(at: &NaiveDateTime) -> u32 {
    (at.nanosecond() / 1_000_000).min(999)
}
