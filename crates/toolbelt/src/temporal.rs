//! Flexible datetime parsing.
//!
//! Normalizes "datetime-like" inputs — structured dates, times, datetimes,
//! offset datetimes, or text in a handful of well-known layouts — into a
//! single [`ParsedDatetime`] value. All functions are pure: no system clock
//! access, no timezone database, no I/O.
//!
//! # Design Principle
//!
//! Text is matched against a fixed, priority-ordered list of candidate
//! formats, and a format only wins if it consumes the **entire** string.
//! If nothing matches, we return an error rather than guessing at partial
//! or reordered components.
//!
//! # Offsets
//!
//! Only fixed UTC offsets are represented — no IANA zone names, no DST
//! rules. The suffixes `Z`, `+00:00`, and `-00:00` all normalize to a zero
//! offset; any other `±HH:MM` suffix is kept as an exact offset in seconds,
//! so sub-hour offsets like `+05:30` survive unchanged.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{Result, ToolbeltError};

// ── Input and output types ──────────────────────────────────────────────────

/// A "datetime-like" input accepted by [`parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeLike<'a> {
    /// A calendar date; parses to midnight of that date.
    Date(NaiveDate),
    /// A bare time of day; parses to that time on 1900-01-01.
    Time(NaiveTime),
    /// A full datetime without an offset; passes through unchanged.
    DateTime(NaiveDateTime),
    /// A datetime with a fixed UTC offset; passes through unchanged.
    Fixed(DateTime<FixedOffset>),
    /// Unparsed text, matched against the candidate formats.
    Text(&'a str),
}

impl From<NaiveDate> for DateTimeLike<'static> {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveTime> for DateTimeLike<'static> {
    fn from(time: NaiveTime) -> Self {
        Self::Time(time)
    }
}

impl From<NaiveDateTime> for DateTimeLike<'static> {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::DateTime(datetime)
    }
}

impl From<DateTime<FixedOffset>> for DateTimeLike<'static> {
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::Fixed(datetime)
    }
}

impl<'a> From<&'a str> for DateTimeLike<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// A normalized datetime: calendar date and time of day, plus an optional
/// fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParsedDatetime {
    /// No offset attached.
    Naive(NaiveDateTime),
    /// Anchored to a fixed UTC offset.
    Fixed(DateTime<FixedOffset>),
}

impl ParsedDatetime {
    /// The local calendar date and time, ignoring any offset.
    #[must_use]
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Self::Naive(dt) => *dt,
            Self::Fixed(dt) => dt.naive_local(),
        }
    }

    /// The attached UTC offset, if any.
    #[must_use]
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Naive(_) => None,
            Self::Fixed(dt) => Some(*dt.offset()),
        }
    }

    /// The attached offset as seconds east of UTC, if any.
    #[must_use]
    pub fn offset_seconds(&self) -> Option<i32> {
        self.offset().map(|offset| offset.local_minus_utc())
    }

    /// True when an offset is attached and it is exactly UTC.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.offset_seconds() == Some(0)
    }
}

/// Canonical text form: ISO-8601, RFC 3339 when an offset is attached.
///
/// Feeding the output back through [`parse`] reproduces the same value.
impl fmt::Display for ParsedDatetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Self::Fixed(dt) => write!(f, "{}", dt.to_rfc3339()),
        }
    }
}

// ── Candidate formats ───────────────────────────────────────────────────────

/// Date-only candidates, tried first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Date+time candidates: colon or dot separators, ISO `T`, compact digits.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H.%M.%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y%m%d_%H%M%S",
];

/// Time-only candidates, with or without a leading `T`.
const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "T%H:%M:%S"];

/// Anchor date for bare time-of-day inputs.
fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

// ── parse ───────────────────────────────────────────────────────────────────

/// Parse a datetime-like value into a normalized [`ParsedDatetime`].
///
/// # Arguments
///
/// * `value` — anything convertible to [`DateTimeLike`]: a `NaiveDate`,
///   `NaiveTime`, `NaiveDateTime`, `DateTime<FixedOffset>`, or `&str`
/// * `fmt` — an optional strftime-style format; when given, text input is
///   parsed with exactly that format instead of the candidate list
///
/// # Returns
///
/// Structured inputs pass through: datetimes are returned unchanged
/// (offset preserved), bare dates become midnight, and bare times are
/// anchored to 1900-01-01. Text is matched against the candidate formats
/// in priority order — date-only, date+time, compact digits, time-only,
/// then full ISO-8601 with a `Z`/`±HH:MM` offset suffix.
///
/// # Errors
///
/// Returns [`ToolbeltError::FormatMismatch`] when an explicit `fmt` does
/// not match the whole input, or [`ToolbeltError::UnparseableDatetime`]
/// when no candidate format does.
///
/// # Examples
///
/// ```
/// use toolbelt::temporal::parse;
///
/// let stamp = parse("2024-07-01 12:00:00", None).unwrap();
/// assert_eq!(stamp.to_string(), "2024-07-01T12:00:00");
/// assert_eq!(stamp.offset(), None);
///
/// let stamp = parse("2024-07-01T11:00:00+01:00", None).unwrap();
/// assert_eq!(stamp.offset_seconds(), Some(3600));
/// ```
pub fn parse<'a>(value: impl Into<DateTimeLike<'a>>, fmt: Option<&str>) -> Result<ParsedDatetime> {
    match value.into() {
        DateTimeLike::DateTime(dt) => Ok(ParsedDatetime::Naive(dt)),
        DateTimeLike::Fixed(dt) => Ok(ParsedDatetime::Fixed(dt)),
        DateTimeLike::Date(date) => Ok(ParsedDatetime::Naive(date.and_time(NaiveTime::MIN))),
        DateTimeLike::Time(time) => Ok(ParsedDatetime::Naive(anchor_date().and_time(time))),
        DateTimeLike::Text(text) => match fmt {
            Some(fmt) => parse_with_format(text, fmt),
            None => parse_text(text),
        },
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Parse `value` with exactly the given strftime-style format.
///
/// The format may describe an offset datetime, a naive datetime, a bare
/// date (midnight), or a bare time (1900-01-01 anchor); the shapes are
/// tried most- to least-specific so each format lands on its natural one.
fn parse_with_format(value: &str, fmt: &str) -> Result<ParsedDatetime> {
    if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
        return Ok(ParsedDatetime::Fixed(dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
        return Ok(ParsedDatetime::Naive(dt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
        return Ok(ParsedDatetime::Naive(date.and_time(NaiveTime::MIN)));
    }
    if let Ok(time) = NaiveTime::parse_from_str(value, fmt) {
        return Ok(ParsedDatetime::Naive(anchor_date().and_time(time)));
    }

    Err(ToolbeltError::FormatMismatch {
        value: value.to_owned(),
        fmt: fmt.to_owned(),
    })
}

/// Try the fixed candidate formats in priority order.
fn parse_text(value: &str) -> Result<ParsedDatetime> {
    try_date(value)
        .or_else(|| try_datetime(value))
        .or_else(|| try_time(value))
        .or_else(|| try_offset_datetime(value))
        .ok_or_else(|| ToolbeltError::UnparseableDatetime(value.to_owned()))
}

/// Date-only text → midnight of that date.
fn try_date(value: &str) -> Option<ParsedDatetime> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .map(|date| ParsedDatetime::Naive(date.and_time(NaiveTime::MIN)))
}

/// Date+time text without an offset.
fn try_datetime(value: &str) -> Option<ParsedDatetime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(ParsedDatetime::Naive)
}

/// Time-only text → that time on the 1900-01-01 anchor.
fn try_time(value: &str) -> Option<ParsedDatetime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
        .map(|time| ParsedDatetime::Naive(anchor_date().and_time(time)))
}

/// Full ISO-8601 / RFC 3339 with a `Z` or `±HH:MM` offset suffix.
///
/// `Z`, `+00:00`, and `-00:00` all parse to a zero offset; any other
/// suffix keeps its exact offset in seconds.
fn try_offset_datetime(value: &str) -> Option<ParsedDatetime> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(ParsedDatetime::Fixed)
}

// ── Tests ───────────────────────────────────────────────────────────────────
