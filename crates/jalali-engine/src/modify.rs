//! Free-form relative-date directive interpretation.
//!
//! [`JalaliDate::modify`] accepts expressions such as `"next month"`,
//! `"first day of esfand 1395"` or `"1394-03-30 +3 months -11 days"`. The
//! expression is lower-cased, then a fixed, ordered pattern table is
//! tested against the remaining text; the first pattern that matches
//! *anywhere* wins the pass, its match is cut out of the text, and its
//! transformation is applied to a component tuple seeded from the current
//! date. Priority order is load-bearing: `"first day of next month"` must
//! be claimed by the period-boundary rule before the bare `"next month"`
//! rule sees it.
//!
//! Passes repeat over the shrinking text as long as it still contains
//! directive keywords. Text no rule recognizes is forwarded once, whole,
//! to the generic instant mutator (relative days/hours/minutes/seconds
//! and bare times of day); only that mutator can reject an expression.
//!
//! The single recursive call resolves the anchor sub-expression of a
//! period-boundary directive ("first day of **esfand 1395**"); its depth
//! is bounded because the sub-expression is a strict substring of the
//! expression that contains it.

use std::sync::OnceLock;

use chrono::{Duration, TimeZone, Weekday};
use regex::{Captures, Regex};

use crate::components::DateComponents;
use crate::convert;
use crate::date::{DateFields, JalaliDate};
use crate::error::{JalaliError, Result};

// ── Options ─────────────────────────────────────────────────────────────────

/// Options for [`JalaliDate::modify_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifyOptions {
    /// The weekly rest day that weekday-stepping directives skip over.
    /// Friday, the Iranian weekend, unless overridden.
    pub rest_day: Weekday,
}

impl Default for ModifyOptions {
    fn default() -> Self {
        Self {
            rest_day: Weekday::Fri,
        }
    }
}

fn is_holiday(date: &JalaliDate, options: &ModifyOptions) -> bool {
    date.weekday() == options.rest_day
}

// ── Pattern table ───────────────────────────────────────────────────────────

/// Compiled directive patterns, in priority order.
struct DirectivePatterns {
    period_boundary: Regex,
    named_period: Regex,
    month_name: Regex,
    datetime: Regex,
    date: Regex,
    years: Regex,
    months: Regex,
    weekdays: Regex,
}

fn patterns() -> &'static DirectivePatterns {
    static PATTERNS: OnceLock<DirectivePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| DirectivePatterns {
        period_boundary: Regex::new(r"(?:\bthe )?\b(first|last) (weekday|week|day) of (.+)$")
            .unwrap(),
        named_period: Regex::new(r"\b(next|previous|this) (month|year)\b").unwrap(),
        month_name: Regex::new(&format!(
            r"\b(?:(\d{{1,2}}) )?({})(?: (\d{{1,4}}))?\b",
            convert::MONTH_NAMES.join("|")
        ))
        .unwrap(),
        datetime: Regex::new(r"(\d{4})-(\d{1,2})-(\d{1,2}) (\d{1,2}):(\d{1,2}):(\d{1,2})")
            .unwrap(),
        date: Regex::new(r"(\d{4})-(\d{1,2})-(\d{1,2})").unwrap(),
        years: Regex::new(r"([+-]?\d+) years?\b( ago\b)?").unwrap(),
        months: Regex::new(r"([+-]?\d+) months?\b( ago\b)?").unwrap(),
        weekdays: Regex::new(r"([+-]?\d+) weekdays?\b( ago\b)?").unwrap(),
    })
}

/// Tokens whose presence in leftover text justifies another pass. Digits
/// cover dates, offsets and times; whole words only, so "thistle" does
/// not count as "this".
fn keyword_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(
            r"\d|\b(?:next|previous|this|first|last|tomorrow|yesterday|{})\b",
            convert::MONTH_NAMES.join("|")
        ))
        .unwrap()
    })
}

fn has_directive_keywords(text: &str) -> bool {
    keyword_pattern().is_match(text)
}

/// Remove the overall match of `caps` from `text`, keeping what surrounds it.
fn without_match(text: &str, caps: &Captures) -> String {
    match caps.get(0) {
        Some(m) => {
            let mut rest = String::with_capacity(text.len());
            rest.push_str(&text[..m.start()]);
            rest.push(' ');
            rest.push_str(&text[m.end()..]);
            rest.trim().to_string()
        }
        None => text.to_string(),
    }
}

fn capture_int(caps: &Captures, group: usize) -> Option<i64> {
    caps.get(group).and_then(|m| m.as_str().parse().ok())
}

/// Signed count from group 1, negated when an `ago` group is present.
fn signed_count(caps: &Captures) -> Result<i64> {
    let text = caps
        .get(1)
        .map(|m| m.as_str())
        .ok_or_else(|| JalaliError::InvalidExpression("missing count".to_string()))?;
    let n: i64 = text
        .parse()
        .map_err(|_| JalaliError::InvalidExpression(format!("count '{text}' out of range")))?;
    if caps.get(2).is_some() {
        n.checked_neg()
            .ok_or_else(|| JalaliError::InvalidExpression(format!("count '{text}' out of range")))
    } else {
        Ok(n)
    }
}

fn checked_offset(base: i64, n: i64) -> Result<i64> {
    base.checked_add(n)
        .ok_or_else(|| JalaliError::InvalidExpression(format!("offset {n} out of range")))
}

fn checked_scale(n: i64, factor: i64) -> Result<i64> {
    n.checked_mul(factor)
        .ok_or_else(|| JalaliError::InvalidExpression(format!("offset {n} out of range")))
}

fn seed(fields: DateFields) -> DateComponents {
    DateComponents::ymd_hms(
        fields.year,
        fields.month,
        fields.day,
        fields.hour,
        fields.minute,
        fields.second,
    )
}

// ── Interpreter ─────────────────────────────────────────────────────────────

/// What one interpreter pass did with the remaining text.
enum Pass {
    /// A directive matched; the text shrank.
    Matched { date: JalaliDate, rest: String },
    /// No directive matched; the whole text went to the generic mutator.
    Forwarded(JalaliDate),
}

impl JalaliDate {
    /// Apply a free-form relative-date expression, skipping Fridays in
    /// weekday-stepping directives.
    ///
    /// # Supported Directives
    ///
    /// **Period boundaries**: `"first day of <expr>"`,
    /// `"last weekday of <expr>"` — `<expr>` is resolved as its own
    /// expression first, then the boundary day (or nearest non-rest-day
    /// from it) is taken.
    ///
    /// **Named periods**: `"next month"`, `"previous year"`, `"this month"`.
    ///
    /// **Month names**: `"11 azar 1390"`, `"esfand 1390"`, `"1 farvardin"`
    /// (day defaults to 1, year to the current year).
    ///
    /// **Absolute dates**: `"1394-03-30 15:30:10"`, `"1394-03-30"`.
    ///
    /// **Relative offsets**: `"+5 years"`, `"-6 months"`, `"2 years ago"`,
    /// `"+15 weekdays"` (weekdays step one day at a time and only count
    /// days that are not the weekly rest day).
    ///
    /// **Everything else** — `"+3 days"`, `"22 days"`, `"next day"`,
    /// `"15:30:10"` — is forwarded to the generic instant mutator.
    /// Directives cascade left to right: `"1394-03-30 +3 months -11 days"`.
    ///
    /// # Errors
    ///
    /// Returns [`JalaliError::InvalidExpression`] when the generic mutator
    /// rejects forwarded text, or [`JalaliError::InvalidDatetime`] when a
    /// directive resolves to an unrepresentable local time. The original
    /// date is unaffected either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use jalali_engine::{DateComponents, JalaliDate, DEFAULT_TIMEZONE};
    ///
    /// let anchor = Utc.with_ymd_and_hms(2016, 11, 30, 8, 0, 0).unwrap();
    /// let date = JalaliDate::from_components_at(
    ///     DateComponents::ymd(1394, 3, 31),
    ///     anchor,
    ///     DEFAULT_TIMEZONE,
    /// )
    /// .unwrap();
    ///
    /// // Day 31 of month 9 overflows into month 10 rather than clamping.
    /// let moved = date.modify("+6 months").unwrap();
    /// assert_eq!(moved.format("%Y-%m-%d"), "1394-10-01");
    /// ```
    pub fn modify(&self, expression: &str) -> Result<JalaliDate> {
        self.modify_with_options(expression, &ModifyOptions::default())
    }

    /// [`modify`](Self::modify) with an explicit rest-day policy.
    pub fn modify_with_options(
        &self,
        expression: &str,
        options: &ModifyOptions,
    ) -> Result<JalaliDate> {
        let mut date = *self;
        let mut remaining = expression.trim().to_lowercase();

        loop {
            if remaining.is_empty() {
                return Ok(date);
            }
            match apply_first_directive(date, &remaining, options)? {
                Pass::Matched { date: next, rest } => {
                    date = next;
                    // Leftover text without a single recognizable keyword
                    // is discarded rather than forwarded.
                    if !has_directive_keywords(&rest) {
                        return Ok(date);
                    }
                    remaining = rest;
                }
                Pass::Forwarded(next) => return Ok(next),
            }
        }
    }
}

/// Run one pass of the priority-ordered pattern table.
fn apply_first_directive(
    date: JalaliDate,
    remaining: &str,
    options: &ModifyOptions,
) -> Result<Pass> {
    let p = patterns();
    let tz = date.timezone();

    // 1. Period boundary: resolve the anchor sub-expression, then take the
    // first/last day of its month; "week"/"weekday" walks off the boundary
    // day to the nearest non-rest-day.
    if let Some(caps) = p.period_boundary.captures(remaining) {
        let anchor = date.modify_with_options(&caps[3], options)?;
        let fields = anchor.fields();

        let mut tuple = seed(fields);
        tuple.day = Some(if &caps[1] == "first" {
            1
        } else {
            convert::month_length(fields.year, fields.month)
        });
        let mut resolved = JalaliDate::materialize(tuple, tz)?;

        if &caps[2] != "day" {
            let step = if &caps[1] == "first" { 1 } else { -1 };
            while is_holiday(&resolved, options) {
                resolved = resolved.step_days(step)?;
            }
        }

        return Ok(Pass::Matched {
            date: resolved,
            rest: without_match(remaining, &caps),
        });
    }

    // 2. Named-period relative: next/previous/this month or year.
    if let Some(caps) = p.named_period.captures(remaining) {
        let delta = match &caps[1] {
            "next" => 1,
            "previous" => -1,
            _ => 0,
        };
        let mut tuple = seed(date.fields());
        match &caps[2] {
            "month" => tuple.month = tuple.month.map(|m| m + delta),
            _ => tuple.year = tuple.year.map(|y| y + delta),
        }
        return Ok(Pass::Matched {
            date: JalaliDate::materialize(tuple, tz)?,
            rest: without_match(remaining, &caps),
        });
    }

    // 3. Absolute month-name date: "(day) <name> (year)".
    if let Some(caps) = p.month_name.captures(remaining) {
        let mut tuple = seed(date.fields());
        if let Some(month) = convert::month_from_name(&caps[2]) {
            tuple.month = Some(month);
        }
        tuple.day = Some(capture_int(&caps, 1).unwrap_or(1));
        if let Some(year) = capture_int(&caps, 3) {
            tuple.year = Some(year);
        }
        return Ok(Pass::Matched {
            date: JalaliDate::materialize(tuple, tz)?,
            rest: without_match(remaining, &caps),
        });
    }

    // 4. Absolute date-time: all six fields verbatim.
    if let Some(caps) = p.datetime.captures(remaining) {
        let mut tuple = seed(date.fields());
        tuple.year = capture_int(&caps, 1);
        tuple.month = capture_int(&caps, 2);
        tuple.day = capture_int(&caps, 3);
        tuple.hour = capture_int(&caps, 4);
        tuple.minute = capture_int(&caps, 5);
        tuple.second = capture_int(&caps, 6);
        return Ok(Pass::Matched {
            date: JalaliDate::materialize(tuple, tz)?,
            rest: without_match(remaining, &caps),
        });
    }

    // 5. Absolute date: year/month/day only, time untouched.
    if let Some(caps) = p.date.captures(remaining) {
        let mut tuple = seed(date.fields());
        tuple.year = capture_int(&caps, 1);
        tuple.month = capture_int(&caps, 2);
        tuple.day = capture_int(&caps, 3);
        return Ok(Pass::Matched {
            date: JalaliDate::materialize(tuple, tz)?,
            rest: without_match(remaining, &caps),
        });
    }

    // 6. Relative years.
    if let Some(caps) = p.years.captures(remaining) {
        let n = signed_count(&caps)?;
        let fields = date.fields();
        let mut tuple = seed(fields);
        tuple.year = Some(checked_offset(fields.year, n)?);
        return Ok(Pass::Matched {
            date: JalaliDate::materialize(tuple, tz)?,
            rest: without_match(remaining, &caps),
        });
    }

    // 7. Relative months.
    if let Some(caps) = p.months.captures(remaining) {
        let n = signed_count(&caps)?;
        let fields = date.fields();
        let mut tuple = seed(fields);
        tuple.month = Some(checked_offset(fields.month, n)?);
        return Ok(Pass::Matched {
            date: JalaliDate::materialize(tuple, tz)?,
            rest: without_match(remaining, &caps),
        });
    }

    // 8. Relative weekdays: step single days, counting only non-rest-days.
    if let Some(caps) = p.weekdays.captures(remaining) {
        let n = signed_count(&caps)?;
        // One step per day; `chrono` dates span roughly ±262,000 years,
        // so a wider count can never land anywhere.
        const MAX_WEEKDAY_COUNT: u64 = 200_000_000;
        if n.unsigned_abs() > MAX_WEEKDAY_COUNT {
            return Err(JalaliError::InvalidExpression(format!(
                "weekday offset {n} out of range"
            )));
        }
        let step = if n < 0 { -1 } else { 1 };
        let mut stepped = date;
        let mut counted = 0;
        while counted < n.abs() {
            stepped = stepped.step_days(step)?;
            if !is_holiday(&stepped, options) {
                counted += 1;
            }
        }
        return Ok(Pass::Matched {
            date: stepped,
            rest: without_match(remaining, &caps),
        });
    }

    // 9. Fallback: hand the whole remainder to the generic mutator.
    Ok(Pass::Forwarded(apply_generic(date, remaining)?))
}

// ── Generic instant mutator ─────────────────────────────────────────────────

/// Patterns for the calendar-agnostic fallback.
struct GenericPatterns {
    offset: Regex,
    step: Regex,
    named_day: Regex,
    time_of_day: Regex,
}

fn generic_patterns() -> &'static GenericPatterns {
    static PATTERNS: OnceLock<GenericPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| GenericPatterns {
        offset: Regex::new(r"([+-]?\d+) (second|minute|hour|day|week)s?\b( ago\b)?").unwrap(),
        step: Regex::new(r"\b(next|previous) (day|week)\b").unwrap(),
        named_day: Regex::new(r"\b(tomorrow|yesterday)\b").unwrap(),
        time_of_day: Regex::new(r"\b(\d{1,2}):(\d{2})(?::(\d{2}))?\b").unwrap(),
    })
}

/// Apply every generic mutation found in `text` to the instant: signed
/// second/minute/hour/day/week offsets, next/previous day or week,
/// tomorrow/yesterday, and a bare time of day that replaces the local
/// wall-clock time. Day-sized mutations preserve the wall clock.
///
/// # Errors
///
/// Returns [`JalaliError::InvalidExpression`] if nothing in `text` is
/// recognized.
fn apply_generic(date: JalaliDate, text: &str) -> Result<JalaliDate> {
    let p = generic_patterns();
    let mut date = date;
    let mut matched = false;

    for caps in p.offset.captures_iter(text) {
        let count: i64 = caps[1]
            .parse()
            .map_err(|_| JalaliError::InvalidExpression(format!("count in '{text}'")))?;
        let n = if caps.get(3).is_some() {
            count.checked_neg().ok_or_else(|| {
                JalaliError::InvalidExpression(format!("count in '{text}' out of range"))
            })?
        } else {
            count
        };
        date = match caps.get(2).map_or("", |m| m.as_str()) {
            "day" => date.step_days(n)?,
            "week" => date.step_days(checked_scale(n, 7)?)?,
            unit => {
                let seconds = match unit {
                    "hour" => checked_scale(n, 3600)?,
                    "minute" => checked_scale(n, 60)?,
                    _ => n,
                };
                let datetime = Duration::try_seconds(seconds)
                    .and_then(|delta| date.datetime.checked_add_signed(delta))
                    .ok_or_else(|| {
                        JalaliError::InvalidDatetime(format!(
                            "second offset {seconds} out of range"
                        ))
                    })?;
                JalaliDate { datetime }
            }
        };
        matched = true;
    }

    for caps in p.step.captures_iter(text) {
        let sign = if &caps[1] == "next" { 1 } else { -1 };
        let days = if &caps[2] == "week" { 7 } else { 1 };
        date = date.step_days(sign * days)?;
        matched = true;
    }

    for caps in p.named_day.captures_iter(text) {
        date = date.step_days(if &caps[1] == "tomorrow" { 1 } else { -1 })?;
        matched = true;
    }

    if let Some(caps) = p.time_of_day.captures(text) {
        let hour = capture_int(&caps, 1).unwrap_or(0);
        let minute = capture_int(&caps, 2).unwrap_or(0);
        let second = capture_int(&caps, 3).unwrap_or(0);
        let naive = date
            .datetime
            .date_naive()
            .and_hms_opt(hour as u32, minute as u32, second as u32)
            .ok_or_else(|| {
                JalaliError::InvalidExpression(format!("time of day in '{text}'"))
            })?;
        let tz = date.timezone();
        date = JalaliDate {
            datetime: tz.from_local_datetime(&naive).single().ok_or_else(|| {
                JalaliError::InvalidDatetime(format!("ambiguous or nonexistent local time {naive}"))
            })?,
        };
        matched = true;
    }

    if matched {
        Ok(date)
    } else {
        Err(JalaliError::InvalidExpression(format!("'{text}'")))
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DEFAULT_TIMEZONE;
    use chrono_tz::Tz;

    fn tehran() -> Tz {
        DEFAULT_TIMEZONE
    }

    /// 1395-09-10 11:30:00 Tehran (2016-11-30, a Wednesday).
    fn base() -> JalaliDate {
        JalaliDate::materialize(DateComponents::ymd_hms(1395, 9, 10, 11, 30, 0), tehran())
            .unwrap()
    }

    fn modified(expr: &str) -> String {
        base().modify(expr).unwrap().format("%Y-%m-%d")
    }

    // ── Absolute directives ─────────────────────────────────────────────

    #[test]
    fn test_absolute_date() {
        let date = base().modify("1394-03-30").unwrap();
        assert_eq!(date.format("%Y-%m-%d %H:%M:%S"), "1394-03-30 11:30:00");
    }

    #[test]
    fn test_absolute_datetime() {
        let date = base().modify("1394-03-30 15:30:10").unwrap();
        assert_eq!(date.format("%Y-%m-%d %H:%M:%S"), "1394-03-30 15:30:10");
    }

    #[test]
    fn test_month_name_full() {
        assert_eq!(modified("11 azar 1390"), "1390-09-11");
    }

    #[test]
    fn test_month_name_defaults_day_to_first() {
        assert_eq!(modified("esfand 1390"), "1390-12-01");
    }

    #[test]
    fn test_month_name_defaults_year_to_current() {
        assert_eq!(modified("1 farvardin"), "1395-01-01");
    }

    // ── Named periods ───────────────────────────────────────────────────

    #[test]
    fn test_next_year() {
        assert_eq!(modified("next year"), "1396-09-10");
    }

    #[test]
    fn test_previous_month() {
        assert_eq!(modified("previous month"), "1395-08-10");
    }

    #[test]
    fn test_next_day_equals_tomorrow() {
        assert_eq!(modified("next day"), "1395-09-11");
        assert_eq!(modified("tomorrow"), "1395-09-11");
    }

    #[test]
    fn test_yesterday() {
        assert_eq!(modified("yesterday"), "1395-09-09");
    }

    // ── Period boundaries ───────────────────────────────────────────────

    #[test]
    fn test_first_day_of_named_month() {
        assert_eq!(modified("first day of esfand 1395"), "1395-12-01");
    }

    #[test]
    fn test_last_day_of_leap_esfand() {
        assert_eq!(modified("last day of esfand 1395"), "1395-12-30");
    }

    #[test]
    fn test_last_day_of_common_esfand() {
        assert_eq!(modified("last day of esfand 1357"), "1357-12-29");
    }

    #[test]
    fn test_first_day_of_this_month_preserves_time() {
        let date = base().modify("first day of this month").unwrap();
        assert_eq!(date.format("%Y-%m-%d %H:%M:%S"), "1395-09-01 11:30:00");
    }

    #[test]
    fn test_first_day_of_next_month() {
        assert_eq!(modified("first day of next month"), "1395-10-01");
    }

    #[test]
    fn test_last_day_of_this_month() {
        assert_eq!(modified("last day of this month"), "1395-09-30");
    }

    // 1395-05-01 is a Friday; the first weekday is the 2nd.
    #[test]
    fn test_first_weekday_of_month() {
        assert_eq!(modified("first weekday of mordad 1395"), "1395-05-02");
    }

    // 1394-11-30 is a Friday; the last weekday is the 29th.
    #[test]
    fn test_last_weekday_of_month() {
        assert_eq!(modified("last weekday of bahman 1394"), "1394-11-29");
    }

    // ── Relative offsets ────────────────────────────────────────────────

    #[test]
    fn test_add_years() {
        assert_eq!(modified("+5 years"), "1400-09-10");
    }

    #[test]
    fn test_add_year_preserves_time_of_day() {
        let date =
            JalaliDate::materialize(DateComponents::ymd_hms(1394, 3, 30, 20, 30, 0), tehran())
                .unwrap();
        assert_eq!(
            date.modify("+1 year").unwrap().format("%Y-%m-%d %H:%M:%S"),
            "1395-03-30 20:30:00"
        );
    }

    #[test]
    fn test_years_ago() {
        assert_eq!(modified("2 years ago"), "1393-09-10");
    }

    #[test]
    fn test_subtract_months() {
        assert_eq!(modified("-6 months"), "1395-03-10");
    }

    #[test]
    fn test_add_months_wraps_year() {
        assert_eq!(modified("+6 months"), "1396-03-10");
    }

    #[test]
    fn test_add_days() {
        assert_eq!(modified("+3 days"), "1395-09-13");
    }

    #[test]
    fn test_days_ago() {
        assert_eq!(modified("2 days ago"), "1395-09-08");
    }

    #[test]
    fn test_add_weeks() {
        assert_eq!(modified("+2 weeks"), "1395-09-24");
    }

    #[test]
    fn test_next_week() {
        assert_eq!(modified("next week"), "1395-09-17");
    }

    #[test]
    fn test_subtract_hours() {
        let date = base().modify("-2 hours").unwrap();
        assert_eq!(date.format("%Y-%m-%d %H:%M:%S"), "1395-09-10 09:30:00");
    }

    // ── Weekday stepping ────────────────────────────────────────────────

    #[test]
    fn test_forward_weekdays_skip_friday() {
        // Wednesday +2: Thursday counts, Friday is skipped, Saturday counts.
        assert_eq!(modified("+2 weekdays"), "1395-09-13");
    }

    #[test]
    fn test_forward_weekdays_long() {
        assert_eq!(modified("+15 weekdays"), "1395-09-28");
    }

    #[test]
    fn test_backward_weekdays() {
        assert_eq!(modified("-4 weekdays"), "1395-09-06");
    }

    #[test]
    fn test_backward_weekdays_long() {
        assert_eq!(modified("-15 weekdays"), "1395-08-23");
    }

    #[test]
    fn test_weekdays_from_absolute_date() {
        assert_eq!(modified("1395-01-14 +14 weekdays"), "1395-01-30");
    }

    #[test]
    fn test_weekdays_with_sunday_rest_day() {
        let options = ModifyOptions {
            rest_day: Weekday::Sun,
        };
        let date = base().modify_with_options("+2 weekdays", &options).unwrap();
        assert_eq!(date.format("%Y-%m-%d"), "1395-09-12");
    }

    // ── Cascading and leftovers ─────────────────────────────────────────

    #[test]
    fn test_cascade_date_months_days() {
        assert_eq!(modified("1394-03-30 +3 months -11 days"), "1394-06-19");
    }

    #[test]
    fn test_cascade_month_name_then_days() {
        assert_eq!(modified("1 azar 1395 +3 days"), "1395-09-04");
    }

    #[test]
    fn test_day_overflow_after_month_shift() {
        // 1394-03-31 +6 months lands on azar's 30-day length and rolls over.
        let date =
            JalaliDate::materialize(DateComponents::ymd_hms(1394, 3, 31, 11, 30, 0), tehran())
                .unwrap();
        assert_eq!(
            date.modify("+6 months").unwrap().format("%Y-%m-%d"),
            "1394-10-01"
        );
    }

    #[test]
    fn test_unrecognized_trailing_text_is_dropped() {
        assert_eq!(modified("esfand 1390 whatever"), "1390-12-01");
    }

    #[test]
    fn test_keyword_check_matches_whole_words_only() {
        // "thistle" must not count as "this" and trigger another pass.
        assert_eq!(modified("esfand 1390 thistle"), "1390-12-01");
    }

    // ── Oversized counts ────────────────────────────────────────────────

    #[test]
    fn test_oversized_day_offset_errors() {
        assert!(base().modify("+100000000 days").is_err());
    }

    #[test]
    fn test_oversized_year_offset_errors() {
        assert!(base().modify("+9223372036854775807 years").is_err());
        assert!(base().modify("-9223372036854775808 years").is_err());
    }

    #[test]
    fn test_oversized_month_offset_errors() {
        assert!(base().modify("+9223372036854775807 months").is_err());
    }

    #[test]
    fn test_oversized_weekday_offset_errors() {
        assert!(base().modify("+9223372036854775807 weekdays").is_err());
        assert!(base().modify("-9223372036854775807 weekdays").is_err());
    }

    #[test]
    fn test_oversized_generic_offset_errors() {
        assert!(base().modify("+9223372036854775807 hours").is_err());
        assert!(base().modify("+9223372036854775807 weeks").is_err());
        assert!(base().modify("+9223372036854775807 seconds").is_err());
    }

    // ── Generic fallback ────────────────────────────────────────────────

    #[test]
    fn test_time_of_day_replaces_wall_clock() {
        let date = base().modify("15:30:10").unwrap();
        assert_eq!(date.format("%Y-%m-%d %H:%M:%S"), "1395-09-10 15:30:10");
    }

    #[test]
    fn test_unrecognized_expression_errors() {
        let err = base().modify("gobbledygook").unwrap_err();
        assert!(matches!(err, JalaliError::InvalidExpression(_)));
    }

    #[test]
    fn test_modify_is_case_insensitive() {
        assert_eq!(
            base().modify("First Day Of Esfand 1395").unwrap().format("%Y-%m-%d"),
            "1395-12-01"
        );
    }

    #[test]
    fn test_modify_does_not_mutate_receiver() {
        let date = base();
        let _ = date.modify("+5 years").unwrap();
        assert_eq!(date.format("%Y-%m-%d"), "1395-09-10");
    }
}
