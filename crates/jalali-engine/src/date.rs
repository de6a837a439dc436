//! The Jalali calendar date value.
//!
//! A [`JalaliDate`] wraps one absolute instant plus its timezone; the
//! Jalali year/month/day are derived on demand from the stored instant,
//! never cached. Construction goes partial components → defaults from a
//! single "now" snapshot → carry normalization → Gregorian conversion →
//! timezone-resolved instant.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::components::DateComponents;
use crate::convert;
use crate::error::{JalaliError, Result};
use crate::format;

/// Timezone used when callers do not care: Iran standard time.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Tehran;

/// Parse an IANA timezone name into `Tz`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| JalaliError::InvalidTimezone(format!("'{name}'")))
}

/// A snapshot of a date's Jalali calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateFields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

/// An absolute instant viewed through the Jalali calendar.
///
/// Value semantics throughout: every mutation produces a new value and
/// leaves the receiver untouched, so a failed operation never corrupts
/// the date it started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JalaliDate {
    pub(crate) datetime: DateTime<Tz>,
}

impl JalaliDate {
    /// The current instant in `tz`.
    pub fn now(tz: Tz) -> Self {
        Self {
            datetime: Utc::now().with_timezone(&tz),
        }
    }

    /// A date from a Unix timestamp (seconds).
    ///
    /// # Errors
    ///
    /// Returns [`JalaliError::InvalidDatetime`] if the timestamp is outside
    /// the representable range.
    pub fn from_timestamp(secs: i64, tz: Tz) -> Result<Self> {
        Utc.timestamp_opt(secs, 0)
            .single()
            .map(|dt| Self {
                datetime: dt.with_timezone(&tz),
            })
            .ok_or_else(|| JalaliError::InvalidDatetime(format!("timestamp {secs}")))
    }

    /// Parse a Gregorian datetime string.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS` (local to `tz`), or
    /// `YYYY-MM-DD` (midnight in `tz`).
    ///
    /// # Errors
    ///
    /// Returns [`JalaliError::InvalidDatetime`] if `text` matches none of
    /// the accepted shapes or names a nonexistent/ambiguous local time.
    pub fn parse(text: &str, tz: Tz) -> Result<Self> {
        let text = text.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self {
                datetime: dt.with_timezone(&tz),
            });
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
            return Self::from_local(naive, tz);
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return Self::from_local(naive, tz);
            }
        }

        Err(JalaliError::InvalidDatetime(format!("'{text}'")))
    }

    /// Build a date from partial Jalali components, defaulting absent
    /// fields from the system clock.
    ///
    /// Absent year/month/day come from a single "now" snapshot so the
    /// three stay mutually consistent. An absent hour pulls
    /// hour/minute/second from the same snapshot; a present hour defaults
    /// absent minute/second to 0 instead — a caller who names a
    /// time-of-day wants a clean time, not inherited seconds.
    ///
    /// # Errors
    ///
    /// Returns [`JalaliError::InvalidDatetime`] if the normalized tuple
    /// resolves to a nonexistent or ambiguous local time in `tz`.
    pub fn from_components(components: DateComponents, tz: Tz) -> Result<Self> {
        Self::from_components_at(components, Utc::now(), tz)
    }

    /// [`from_components`](Self::from_components) with an explicit "now"
    /// anchor instead of the system clock. Defaults are derived from
    /// `anchor` expressed in `tz`.
    pub fn from_components_at(
        components: DateComponents,
        anchor: DateTime<Utc>,
        tz: Tz,
    ) -> Result<Self> {
        let now = Self {
            datetime: anchor.with_timezone(&tz),
        }
        .fields();

        let mut c = components;
        c.year = c.year.or(Some(now.year));
        c.month = c.month.or(Some(now.month));
        c.day = c.day.or(Some(now.day));
        match c.hour {
            None => {
                c.hour = Some(now.hour);
                c.minute = c.minute.or(Some(now.minute));
                c.second = c.second.or(Some(now.second));
            }
            Some(_) => {
                c.minute = c.minute.or(Some(0));
                c.second = c.second.or(Some(0));
            }
        }

        Self::materialize(c, tz)
    }

    /// Normalize a fully present tuple and resolve it to an instant.
    pub(crate) fn materialize(mut components: DateComponents, tz: Tz) -> Result<Self> {
        components.normalize();

        let (
            Some(year),
            Some(month),
            Some(day),
            Some(hour),
            Some(minute),
            Some(second),
        ) = (
            components.year,
            components.month,
            components.day,
            components.hour,
            components.minute,
            components.second,
        )
        else {
            return Err(JalaliError::InvalidDatetime(
                "incomplete component tuple".to_string(),
            ));
        };

        let (gy, gm, gd) = convert::jalali_to_gregorian(year, month, day);
        let naive = NaiveDate::from_ymd_opt(gy as i32, gm as u32, gd as u32)
            .and_then(|d| d.and_hms_opt(hour as u32, minute as u32, second as u32))
            .ok_or_else(|| {
                JalaliError::InvalidDatetime(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"
                ))
            })?;

        Self::from_local(naive, tz)
    }

    fn from_local(naive: NaiveDateTime, tz: Tz) -> Result<Self> {
        tz.from_local_datetime(&naive)
            .single()
            .map(|datetime| Self { datetime })
            .ok_or_else(|| {
                JalaliError::InvalidDatetime(format!(
                    "ambiguous or nonexistent local time {naive}"
                ))
            })
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// All six Jalali fields, derived from the stored instant.
    pub fn fields(&self) -> DateFields {
        let (year, month, day) = convert::gregorian_to_jalali(
            i64::from(self.datetime.year()),
            i64::from(self.datetime.month()),
            i64::from(self.datetime.day()),
        );
        DateFields {
            year,
            month,
            day,
            hour: i64::from(self.datetime.hour()),
            minute: i64::from(self.datetime.minute()),
            second: i64::from(self.datetime.second()),
        }
    }

    pub fn year(&self) -> i64 {
        self.fields().year
    }

    pub fn month(&self) -> i64 {
        self.fields().month
    }

    pub fn day(&self) -> i64 {
        self.fields().day
    }

    pub fn hour(&self) -> i64 {
        i64::from(self.datetime.hour())
    }

    pub fn minute(&self) -> i64 {
        i64::from(self.datetime.minute())
    }

    pub fn second(&self) -> i64 {
        i64::from(self.datetime.second())
    }

    pub fn weekday(&self) -> chrono::Weekday {
        self.datetime.weekday()
    }

    /// Seconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.datetime.timestamp()
    }

    pub fn timezone(&self) -> Tz {
        self.datetime.timezone()
    }

    /// Render through a `%`-specifier pattern with Jalali date fields
    /// (see [`format::format_datetime`]).
    pub fn format(&self, pattern: &str) -> String {
        format::format_datetime(pattern, &self.datetime)
    }

    // ── Day stepping ────────────────────────────────────────────────────

    /// Move `days` whole calendar days, preserving the wall-clock time;
    /// the directive interpreter steps through weekdays with this.
    ///
    /// # Errors
    ///
    /// Returns [`JalaliError::InvalidDatetime`] when the offset leaves
    /// the representable date range.
    pub(crate) fn step_days(&self, days: i64) -> Result<Self> {
        let date = Duration::try_days(days)
            .and_then(|delta| self.datetime.date_naive().checked_add_signed(delta))
            .ok_or_else(|| {
                JalaliError::InvalidDatetime(format!("day offset {days} out of range"))
            })?;
        Self::from_local(date.and_time(self.datetime.time()), self.timezone())
    }

    // ── Elapsed-time humanizer ──────────────────────────────────────────

    /// Approximate elapsed time since this date, against the system clock.
    pub fn elapsed(&self) -> String {
        self.elapsed_since(Utc::now())
    }

    /// Approximate elapsed time between this date and `now`, as a Persian
    /// "time ago" phrase. Future instants drop the « پیش» suffix.
    pub fn elapsed_since(&self, now: DateTime<Utc>) -> String {
        const UNIT_LENGTHS: [f64; 7] = [60.0, 60.0, 24.0, 7.0, 4.35, 12.0, 10.0];
        const UNIT_NAMES: [&str; 8] = [
            "ثانیه",
            "دقیقه",
            "ساعت",
            "روز",
            "هفته",
            "ماه",
            "سال",
            "قرن",
        ];

        let mut difference = (now.timestamp() - self.timestamp()) as f64;
        let in_future = difference < 0.0;
        if in_future {
            difference = difference.abs();
        }

        let mut unit = 0;
        while unit < UNIT_LENGTHS.len() - 1 && difference >= UNIT_LENGTHS[unit] {
            difference /= UNIT_LENGTHS[unit];
            unit += 1;
        }
        let amount = difference.round() as i64;

        if in_future {
            format!("{} {}", amount, UNIT_NAMES[unit])
        } else {
            format!("{} {} پیش", amount, UNIT_NAMES[unit])
        }
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("%Y-%m-%d %H:%M:%S"))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
