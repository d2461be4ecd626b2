use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};

/// Local hour window counted as business hours, `[start, end)`.
pub const BUSINESS_HOURS: (u32, u32) = (9, 17);

/// NYSE regular session in minutes after local midnight, `[open, close)`.
pub const MARKET_SESSION_MINUTES: (u32, u32) = (9 * 60 + 30, 16 * 60);

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Quarter 1-4 for a chrono month 1-12.
pub(crate) fn quarter(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

/// English name for a chrono month 1-12.
pub(crate) fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[month as usize - 1]
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// ISO-8601 week number and the ISO year it belongs to.
pub fn iso_week(date: NaiveDate) -> (u32, i32) {
    let week = date.iso_week();
    (week.week(), week.year())
}

pub fn is_weekend(weekday: Weekday) -> bool {
    weekday.number_from_monday() >= 6
}

/// Hour-only check. Weekends are not excluded.
pub fn is_business_hours(time: NaiveTime) -> bool {
    let (start, end) = BUSINESS_HOURS;
    (start..end).contains(&time.hour())
}

/// 9:30-16:00 in the given local time, for zones already known to be US Eastern.
///
/// Weekends and exchange holidays are not excluded.
pub fn is_market_session(time: NaiveTime) -> bool {
    let (open, close) = MARKET_SESSION_MINUTES;
    let minutes = time.hour() * 60 + time.minute();
    (open..close).contains(&minutes)
}
