//! Display formatting for dates, relative times, and notification text.
//!
//! Pure string builders used by the presentation layer and the
//! notification sink. All functions take explicit timestamps; nothing here
//! reads the clock.

use chrono::{Local, TimeZone};

use crate::calendar;
use crate::models::ReminderRequest;

/// Formats an instant as "Jun 15, 2025".
pub fn format_date_in<Tz: TimeZone>(tz: &Tz, ts_ms: i64) -> String {
    calendar::local_date_in(tz, ts_ms)
        .format("%b %d, %Y")
        .to_string()
}

/// Formats an instant as "Jun 15, 2025", local timezone.
pub fn format_date(ts_ms: i64) -> String {
    format_date_in(&Local, ts_ms)
}

/// Relative description of an instant: "Today", "Tomorrow", "Yesterday",
/// "3 days ago", "In 2 weeks", and so on.
///
/// Day-granular; buckets of 7/30/365 days roll up to weeks, months, years.
pub fn relative_time_in<Tz: TimeZone>(tz: &Tz, ts_ms: i64, now_ms: i64) -> String {
    let days = calendar::days_until_in(tz, ts_ms, now_ms);
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        d if d < 0 => {
            let past = -d;
            match past {
                2..=6 => format!("{past} days ago"),
                7..=29 => format!("{} weeks ago", past / 7),
                30..=364 => format!("{} months ago", past / 30),
                _ => format!("{} years ago", past / 365),
            }
        }
        d => match d {
            2..=6 => format!("In {d} days"),
            7..=29 => format!("In {} weeks", d / 7),
            30..=364 => format!("In {} months", d / 30),
            _ => format!("In {} years", d / 365),
        },
    }
}

/// Relative description of an instant, local timezone.
pub fn relative_time(ts_ms: i64, now_ms: i64) -> String {
    relative_time_in(&Local, ts_ms, now_ms)
}

/// Notification body text for a due reminder: "Today: Visa interview",
/// "Tomorrow: Final exam", "In 3 days: Essay deadline".
///
/// `days_until` is never negative for a due reminder; a negative value
/// falls through to the "In n days" form unaltered.
pub fn notification_text(title: &str, days_until: i64) -> String {
    match days_until {
        0 => format!("Today: {title}"),
        1 => format!("Tomorrow: {title}"),
        n => format!("In {n} days: {title}"),
    }
}

/// Notification title and body for a reminder request.
///
/// The title is the category display name, the body the due-day phrasing —
/// the sink may use them verbatim or restyle.
pub fn notification_content(request: &ReminderRequest) -> (String, String) {
    (
        request.category.display_name().to_string(),
        notification_text(&request.title, request.days_until),
    )
}
