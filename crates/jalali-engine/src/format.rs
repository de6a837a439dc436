//! strftime-style formatting of an instant in the Jalali calendar.

use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;

use crate::convert;

/// Day of the Jalali year (1..=366). `month` must be in 1..=12.
fn day_of_year(month: i64, day: i64) -> i64 {
    if month <= 7 {
        (month - 1) * 31 + day
    } else {
        186 + (month - 7) * 30 + day
    }
}

/// Render `datetime` through a `%`-specifier pattern, with the date
/// fields expressed in the Jalali calendar.
///
/// Supported specifiers: `%Y` `%y` `%m` `%d` `%e` `%j` `%H` `%M` `%S`
/// `%B` (Persian month name), `%A` (Persian weekday name), `%%`. Other
/// text passes through unchanged; an unknown specifier is kept verbatim.
pub fn format_datetime(pattern: &str, datetime: &DateTime<Tz>) -> String {
    let (jy, jm, jd) = convert::gregorian_to_jalali(
        i64::from(datetime.year()),
        i64::from(datetime.month()),
        i64::from(datetime.day()),
    );

    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('Y') => out.push_str(&format!("{jy:04}")),
            Some('y') => out.push_str(&format!("{:02}", jy % 100)),
            Some('m') => out.push_str(&format!("{jm:02}")),
            Some('d') => out.push_str(&format!("{jd:02}")),
            Some('e') => out.push_str(&format!("{jd:2}")),
            Some('j') => out.push_str(&format!("{:03}", day_of_year(jm, jd))),
            Some('H') => out.push_str(&format!("{:02}", datetime.hour())),
            Some('M') => out.push_str(&format!("{:02}", datetime.minute())),
            Some('S') => out.push_str(&format!("{:02}", datetime.second())),
            Some('B') => out.push_str(convert::MONTH_NAMES_FA[(jm - 1) as usize]),
            Some('A') => out.push_str(convert::weekday_name_fa(datetime.weekday())),
            Some('%') => out.push('%'),
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }
    out
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tehran_datetime() -> DateTime<Tz> {
        // June 3, 2015 14:05:09 local, which is 13 Khordad 1394.
        chrono_tz::Asia::Tehran
            .with_ymd_and_hms(2015, 6, 3, 14, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_date_and_time_specifiers() {
        let dt = tehran_datetime();
        assert_eq!(
            format_datetime("%Y-%m-%d %H:%M:%S", &dt),
            "1394-03-13 14:05:09"
        );
        assert_eq!(format_datetime("%y/%e", &dt), "94/13");
    }

    #[test]
    fn test_name_specifiers() {
        let dt = tehran_datetime();
        // June 3, 2015 was a Wednesday.
        assert_eq!(format_datetime("%B", &dt), "خرداد");
        assert_eq!(format_datetime("%A", &dt), "چهارشنبه");
    }

    #[test]
    fn test_day_of_year() {
        let dt = tehran_datetime();
        // Two 31-day months before khordad.
        assert_eq!(format_datetime("%j", &dt), "075");
    }

    #[test]
    fn test_literals_and_escapes() {
        let dt = tehran_datetime();
        assert_eq!(format_datetime("100%% %Q %", &dt), "100% %Q %");
        assert_eq!(format_datetime("year %Y!", &dt), "year 1394!");
    }
}
