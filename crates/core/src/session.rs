//! Session timestamps.
//!
//! A session carries nothing but the moment the user logged in. The value is
//! stored and displayed as a local wall-clock string.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Display format for `login_time`.
pub const LOGIN_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a login instant for storage in the session.
pub fn format_login_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(LOGIN_TIME_FORMAT).to_string()
}

/// Login time for a session starting now.
pub fn login_time_now() -> String {
    format_login_time(&Local::now())
}

/// Parse a stored login time, returning `None` if it is malformed.
pub fn parse_login_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, LOGIN_TIME_FORMAT).ok()
}
