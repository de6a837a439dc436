//! Pure Jalali↔Gregorian conversion math and the fixed name tables.
//!
//! The conversion uses the classic division-based day-number algorithm
//! (epoch offsets 979/1600, pivot 79, cycle constants 12053/1461/146097),
//! with truncating integer division throughout. Leap years follow the
//! 33-year remainder rule, which agrees with the day-number math across
//! the supported range.
//!
//! Month indices here are always 1-based and must already be in 1..=12;
//! carry normalization is the caller's job (see
//! [`DateComponents::normalize`](crate::DateComponents::normalize)).

/// Lowest Jalali year the conversion routine supports. Years below this
/// saturate during normalization.
pub const MIN_YEAR: i64 = 0;

/// Highest Jalali year the conversion routine supports. Years above this
/// saturate during normalization.
pub const MAX_YEAR: i64 = 1876;

const GREGORIAN_MONTH_DAYS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const JALALI_MONTH_DAYS: [i64; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 30];

/// Latin month-name transliterations, indexed by month - 1. This is the
/// parse table for the directive grammar.
pub const MONTH_NAMES: [&str; 12] = [
    "farvardin",
    "ordibehesht",
    "khordad",
    "tir",
    "mordad",
    "shahrivar",
    "mehr",
    "aban",
    "azar",
    "dey",
    "bahman",
    "esfand",
];

/// Persian-script month names, indexed by month - 1. Used for formatted
/// output only.
pub const MONTH_NAMES_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Persian-script weekday name.
pub fn weekday_name_fa(weekday: chrono::Weekday) -> &'static str {
    match weekday {
        chrono::Weekday::Sat => "شنبه",
        chrono::Weekday::Sun => "یکشنبه",
        chrono::Weekday::Mon => "دوشنبه",
        chrono::Weekday::Tue => "سه‌شنبه",
        chrono::Weekday::Wed => "چهارشنبه",
        chrono::Weekday::Thu => "پنجشنبه",
        chrono::Weekday::Fri => "جمعه",
    }
}

/// Month number (1..=12) for a lowercase Latin month name.
pub fn month_from_name(name: &str) -> Option<i64> {
    MONTH_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|i| i as i64 + 1)
}

/// Whether a Jalali year has 366 days (33-year cycle rule).
pub fn is_leap_year(year: i64) -> bool {
    matches!(year % 33, 1 | 5 | 9 | 13 | 17 | 22 | 26 | 30)
}

fn is_gregorian_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a Jalali month. `month` must be in 1..=12.
pub fn month_length(year: i64, month: i64) -> i64 {
    if month == 12 && !is_leap_year(year) {
        29
    } else {
        JALALI_MONTH_DAYS[(month - 1) as usize]
    }
}

/// Convert a valid Jalali date to the equivalent Gregorian (year, month, day).
pub fn jalali_to_gregorian(year: i64, month: i64, day: i64) -> (i64, i64, i64) {
    let jy = year - 979;
    let jm = month - 1;
    let jd = day - 1;

    let mut j_day_no = 365 * jy + (jy / 33) * 8 + ((jy % 33) + 3) / 4;
    for days in &JALALI_MONTH_DAYS[..jm as usize] {
        j_day_no += days;
    }
    j_day_no += jd;

    let mut g_day_no = j_day_no + 79;

    let mut gy = 1600 + 400 * (g_day_no / 146097);
    g_day_no %= 146097;

    let mut leap = true;
    if g_day_no >= 36525 {
        g_day_no -= 1;
        gy += 100 * (g_day_no / 36524);
        g_day_no %= 36524;
        if g_day_no >= 365 {
            g_day_no += 1;
        } else {
            leap = false;
        }
    }

    gy += 4 * (g_day_no / 1461);
    g_day_no %= 1461;

    if g_day_no >= 366 {
        leap = false;
        g_day_no -= 1;
        gy += g_day_no / 365;
        g_day_no %= 365;
    }

    let mut gm = 0usize;
    loop {
        let len = GREGORIAN_MONTH_DAYS[gm] + i64::from(gm == 1 && leap);
        if g_day_no < len {
            break;
        }
        g_day_no -= len;
        gm += 1;
    }

    (gy, gm as i64 + 1, g_day_no + 1)
}

/// Convert a valid Gregorian date to the equivalent Jalali (year, month, day).
pub fn gregorian_to_jalali(year: i64, month: i64, day: i64) -> (i64, i64, i64) {
    let gy = year - 1600;
    let gm = month - 1;
    let gd = day - 1;

    let mut g_day_no = 365 * gy + (gy + 3) / 4 - (gy + 99) / 100 + (gy + 399) / 400;
    for days in &GREGORIAN_MONTH_DAYS[..gm as usize] {
        g_day_no += days;
    }
    if gm > 1 && is_gregorian_leap_year(year) {
        g_day_no += 1;
    }
    g_day_no += gd;

    let mut j_day_no = g_day_no - 79;

    let j_np = j_day_no / 12053;
    j_day_no %= 12053;

    let mut jy = 979 + 33 * j_np + 4 * (j_day_no / 1461);
    j_day_no %= 1461;

    if j_day_no >= 366 {
        jy += (j_day_no - 1) / 365;
        j_day_no = (j_day_no - 1) % 365;
    }

    let mut jm = 0usize;
    while jm < 11 && j_day_no >= JALALI_MONTH_DAYS[jm] {
        j_day_no -= JALALI_MONTH_DAYS[jm];
        jm += 1;
    }

    (jy, jm as i64 + 1, j_day_no + 1)
}

// ── Tests ───────────────────────────────────────────────────────────────────
