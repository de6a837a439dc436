//! Transient date component tuples and carry normalization.
//!
//! A [`DateComponents`] value holds a possibly out-of-range
//! (year, month, day, hour, minute, second) tuple in which each field is
//! either present or defaulted. It exists only between arithmetic on a
//! date's fields and the construction of the next absolute instant;
//! nothing stores one.

use serde::Serialize;

use crate::convert;

/// A partial (year, month, day, hour, minute, second) tuple.
///
/// Fields may transiently hold any `i64` value; [`normalize`] repairs
/// overflow and underflow. An absent field stops the repair cascade:
/// callers wanting lower fields normalized must supply a contiguous
/// prefix in the order year, month, day, hour, minute, second.
///
/// [`normalize`]: DateComponents::normalize
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateComponents {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub second: Option<i64>,
}

impl DateComponents {
    /// An entirely absent tuple; every field defaults from "now" during
    /// construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tuple with the date fields present and the time fields absent.
    pub fn ymd(year: i64, month: i64, day: i64) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..Self::default()
        }
    }

    /// A fully present tuple.
    pub fn ymd_hms(year: i64, month: i64, day: i64, hour: i64, minute: i64, second: i64) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
        }
    }

    /// Set the time-of-day fields.
    pub fn with_time(mut self, hour: i64, minute: i64, second: i64) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self.second = Some(second);
        self
    }

    /// Repair out-of-range fields by carry propagation.
    ///
    /// Rules, applied first-match per pass until none fires:
    ///
    /// 1. Year saturates to [`convert::MIN_YEAR`]..=[`convert::MAX_YEAR`].
    /// 2. Month carries into year by truncating division (the negative
    ///    branch adds 12 and borrows one extra year).
    /// 3. Day overflows into the next month one month-length at a time;
    ///    day < 1 borrows the previous month's length, wrapping month 1
    ///    into esfand of the prior year.
    /// 4. Hour/minute/second carry base 24/60/60 with the same
    ///    negative-remainder treatment as rule 2.
    ///
    /// Every firing restarts from rule 1, because a lower-field repair can
    /// push a higher field back out of range. The year clamp bounds the
    /// whole process, so the loop terminates. Normalization is idempotent.
    pub fn normalize(&mut self) {
        while self.normalize_once() {}
    }

    /// Apply the first rule that fires, or report that none did.
    fn normalize_once(&mut self) -> bool {
        let Some(year) = self.year else { return false };
        if year < convert::MIN_YEAR {
            self.year = Some(convert::MIN_YEAR);
            return true;
        }
        if year > convert::MAX_YEAR {
            self.year = Some(convert::MAX_YEAR);
            return true;
        }

        let Some(month) = self.month else { return false };
        if month <= 0 {
            self.year = Some(year + month / 12 - 1);
            self.month = Some(12 + month % 12);
            return true;
        }
        if month > 12 {
            self.year = Some(year + month / 12);
            self.month = Some(month % 12);
            return true;
        }

        let Some(day) = self.day else { return false };
        let month_days = convert::month_length(year, month);
        if day > month_days {
            self.day = Some(day - month_days);
            self.month = Some(month + 1);
            return true;
        }
        if day <= 0 {
            let (prev_year, prev_month) = if month == 1 {
                (year - 1, 12)
            } else {
                (year, month - 1)
            };
            self.day = Some(day + convert::month_length(prev_year, prev_month));
            self.month = Some(month - 1);
            return true;
        }

        let Some(hour) = self.hour else { return false };
        if hour >= 24 {
            self.day = Some(day + hour / 24);
            self.hour = Some(hour % 24);
            return true;
        }
        if hour < 0 {
            self.day = Some(day + hour / 24 - 1);
            self.hour = Some(24 + hour % 24);
            return true;
        }

        let Some(minute) = self.minute else { return false };
        if minute >= 60 {
            self.hour = Some(hour + minute / 60);
            self.minute = Some(minute % 60);
            return true;
        }
        if minute < 0 {
            self.hour = Some(hour + minute / 60 - 1);
            self.minute = Some(60 + minute % 60);
            return true;
        }

        let Some(second) = self.second else { return false };
        if second >= 60 {
            self.minute = Some(minute + second / 60);
            self.second = Some(second % 60);
            return true;
        }
        if second < 0 {
            self.minute = Some(minute + second / 60 - 1);
            self.second = Some(60 + second % 60);
            return true;
        }

        false
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
