// Time window domain model - resolves the measured interval from raw query inputs
use super::error::WindowParamError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y-%-m-%-d",
    "%Y/%m/%d",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Untrusted inputs of a progress request, exactly as they arrived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowParams {
    pub tz: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Signed offset in (possibly fractional) hours added to every instant of a window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UtcOffsetHours(f64);

impl UtcOffsetHours {
    pub fn new(hours: f64) -> Self {
        if hours.is_finite() { Self(hours) } else { Self::default() }
    }

    /// Parses the leading decimal number of `raw`, ignoring trailing text
    /// (`"5.5h"` is 5.5 hours).
    pub fn parse(raw: &str) -> Result<Self, WindowParamError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(WindowParamError::Empty);
        }

        let number = leading_number(value);
        let hours: f64 = number
            .parse()
            .map_err(|_| WindowParamError::InvalidOffset(value.to_string()))?;

        if !hours.is_finite() {
            return Err(WindowParamError::NonFiniteOffset(value.to_string()));
        }
        Ok(Self(hours))
    }

    /// Moves `instant` by the offset, saturating at the representable range.
    pub fn shift(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        // `as` saturates for out-of-range floats
        let millis = (self.0 * MILLIS_PER_HOUR).round() as i64;
        TimeDelta::try_milliseconds(millis)
            .and_then(|delta| instant.checked_add_signed(delta))
            .unwrap_or(if millis < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
    }
}

/// The interval progress is measured against, plus the instant being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub reference: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, reference: DateTime<Utc>) -> Self {
        Self { start, end, reference }
    }

    /// Builds the window for a request. Never fails: every malformed
    /// parameter falls back to its default, and start/end ordering is
    /// left for the progress calculation to deal with.
    pub fn resolve(params: &WindowParams, now: DateTime<Utc>) -> Self {
        let offset = or_default(
            "tz",
            params.tz.as_deref().map(UtcOffsetHours::parse),
            UtcOffsetHours::default,
        );
        let reference = offset.shift(now);

        let start = or_default(
            "start",
            params.start.as_deref().map(parse_calendar_instant),
            || default_start(reference),
        );
        let end = or_default(
            "end",
            params.end.as_deref().map(parse_calendar_instant),
            || default_end(reference),
        );

        Self::new(offset.shift(start), offset.shift(end), reference)
    }
}

/// Parses a calendar date or date-time. Values without an explicit offset
/// are read as UTC.
pub fn parse_calendar_instant(raw: &str) -> Result<DateTime<Utc>, WindowParamError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(WindowParamError::Empty);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(midnight(date));
        }
    }

    partial_date(value)
        .map(midnight)
        .ok_or_else(|| WindowParamError::InvalidDate(value.to_string()))
}

/// January 1, 00:00:00 of the reference's year.
pub fn default_start(reference: DateTime<Utc>) -> DateTime<Utc> {
    start_of_year(reference.year()).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// The last millisecond before January 1 of the following year.
pub fn default_end(reference: DateTime<Utc>) -> DateTime<Utc> {
    reference
        .year()
        .checked_add(1)
        .and_then(start_of_year)
        .and_then(|next_year| next_year.checked_sub_signed(TimeDelta::milliseconds(1)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn or_default<T>(
    name: &str,
    parsed: Option<Result<T, WindowParamError>>,
    fallback: impl FnOnce() -> T,
) -> T {
    match parsed {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            tracing::debug!("Ignoring {} parameter: {}", name, e);
            fallback()
        }
        None => fallback(),
    }
}

fn start_of_year(year: i32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(midnight)
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// `YYYY-MM` (first of the month) or a bare `YYYY` (January 1).
fn partial_date(value: &str) -> Option<NaiveDate> {
    let mut parts = value.split('-');
    let year = parse_year(parts.next()?)?;
    match (parts.next(), parts.next()) {
        (None, _) => NaiveDate::from_ymd_opt(year, 1, 1),
        (Some(month), None) if (1..=2).contains(&month.len()) => {
            let month = month.parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1)
        }
        _ => None,
    }
}

fn parse_year(digits: &str) -> Option<i32> {
    if digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

/// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`. The
/// exponent only counts when at least one digit follows it.
fn leading_number(value: &str) -> &str {
    let bytes = value.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let integer_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - integer_start;

    if bytes.get(end) == Some(&b'.') {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while bytes.get(fraction_end).is_some_and(u8::is_ascii_digit) {
            fraction_end += 1;
        }
        digits += fraction_end - fraction_start;
        if digits > 0 {
            end = fraction_end;
        }
    }

    if digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = exponent_end;
        while bytes.get(exponent_end).is_some_and(u8::is_ascii_digit) {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits {
            end = exponent_end;
        }
    }

    &value[..end]
}
