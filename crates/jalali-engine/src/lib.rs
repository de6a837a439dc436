//! # jalali-engine
//!
//! Jalali (Persian) calendar dates, backed by real UTC instants.
//!
//! A [`JalaliDate`] wraps a timezone-aware `chrono` instant and presents it
//! through Jalali year/month/day fields. Around that core:
//!
//! - [`convert`] — the Jalali ↔ Gregorian arithmetic and calendar tables
//! - [`components`] — the partial component tuple and its wrap-around
//!   normalization (month 13 becomes month 1 of the next year, and so on)
//! - [`date`] — the date type: construction, accessors, the elapsed-time
//!   humanizer
//! - [`format`] — `%`-specifier rendering with Persian month and weekday
//!   names
//! - [`modify`] — free-form relative-date expressions such as
//!   `"first day of esfand 1395"` or `"+2 weekdays"`
//!
//! ## Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use jalali_engine::{DateComponents, JalaliDate, DEFAULT_TIMEZONE};
//!
//! // 2016-11-30 08:00 UTC is 1395-09-10 11:30 in Tehran.
//! let anchor = Utc.with_ymd_and_hms(2016, 11, 30, 8, 0, 0).unwrap();
//! let date = JalaliDate::from_components_at(
//!     DateComponents::ymd(1395, 9, 10),
//!     anchor,
//!     DEFAULT_TIMEZONE,
//! )
//! .unwrap();
//!
//! assert_eq!(date.format("%d %B %Y"), "10 آذر 1395");
//! assert_eq!(
//!     date.modify("first day of next month").unwrap().format("%Y-%m-%d"),
//!     "1395-10-01",
//! );
//! ```

pub mod components;
pub mod convert;
pub mod date;
pub mod error;
pub mod format;
pub mod modify;

pub use components::DateComponents;
pub use date::{parse_timezone, DateFields, JalaliDate, DEFAULT_TIMEZONE};
pub use error::{JalaliError, Result};
pub use modify::ModifyOptions;
