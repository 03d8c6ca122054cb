// Date utility functions

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Combine a day with an hour/minute pair.
///
/// Returns `None` when the pair is not a valid time of day.
pub fn at_time(date: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveTime::from_hms_opt(hour, minute, 0).map(|time| date.and_time(time))
}

/// Minutes since midnight
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// 12-hour clock label, e.g. `9:30 AM`, `12:00 PM`.
pub fn format_time_12h(hour: u32, minute: u32) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, period)
}

/// Hour-only label for the range pickers, e.g. `8 AM`.
pub fn format_hour_12h(hour: u32) -> String {
    if hour == 24 {
        return "12 AM (midnight)".to_string();
    }
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{} {}", display_hour, period)
}

/// Long heading for the scheduler header, e.g. `Friday, March 14, 2025`.
pub fn format_day_heading(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
