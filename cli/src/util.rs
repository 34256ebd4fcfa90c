// SPDX-FileCopyrightText: 2026 The Animo Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::civil::{Date, DateTime, Time};

/// The output format for commands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

/// Parses the date and time of an activity.
///
/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM`, `HH:MM` (today), `YYYY-MM-DD`
/// (midnight), `now` and `tomorrow` (tomorrow at 9:00).
pub fn parse_datetime(dt: &str, now: DateTime) -> Result<DateTime, Box<dyn Error>> {
    let dt = dt.trim();
    match dt {
        "now" => return Ok(now.round(jiff::Unit::Minute)?),
        "tomorrow" => return Ok(now.date().tomorrow()?.at(9, 0, 0, 0)),
        _ => {}
    }

    for format in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = DateTime::strptime(format, dt) {
            return Ok(dt);
        }
    }

    if let Ok(time) = Time::strptime("%H:%M", dt) {
        // If the input is just a time, we assume it's today
        Ok(now.date().to_datetime(time))
    } else if let Ok(date) = Date::strptime("%Y-%m-%d", dt) {
        Ok(date.to_datetime(Time::midnight()))
    } else {
        Err(format!(
            "Invalid date format: {dt}. Expected format: YYYY-MM-DD HH:MM, YYYY-MM-DD, HH:MM, now or tomorrow"
        )
        .into())
    }
}

pub fn format_datetime(dt: DateTime) -> String {
    dt.strftime("%Y-%m-%d %H:%M").to_string()
}

/// Clock time like `8:05 AM`.
pub fn format_time(dt: DateTime) -> String {
    dt.strftime("%-I:%M %p").to_string()
}

/// Date header like `June 1, 2025`.
pub fn format_date_header(date: Date) -> String {
    date.strftime("%B %-d, %Y").to_string()
}

/// Short date like `Jun 01`.
pub fn format_short_date(dt: DateTime) -> String {
    dt.strftime("%b %d").to_string()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn now() -> DateTime {
        date(2025, 6, 1).at(14, 23, 45, 0)
    }

    #[test]
    fn test_parse_datetime_date_time() {
        let expected = date(2025, 1, 2).at(8, 30, 0, 0);
        assert_eq!(parse_datetime("2025-01-02 08:30", now()).unwrap(), expected);
        assert_eq!(parse_datetime("2025-01-02T08:30", now()).unwrap(), expected);
        assert_eq!(parse_datetime("2025-01-02T08:30:00", now()).unwrap(), expected);
    }

    #[test]
    fn test_parse_datetime_time_only() {
        let dt = parse_datetime("09:15", now()).unwrap();
        assert_eq!(dt, date(2025, 6, 1).at(9, 15, 0, 0));
    }

    #[test]
    fn test_parse_datetime_date_only() {
        let dt = parse_datetime("2025-12-24", now()).unwrap();
        assert_eq!(dt, date(2025, 12, 24).at(0, 0, 0, 0));
    }

    #[test]
    fn test_parse_datetime_keywords() {
        assert_eq!(parse_datetime("now", now()).unwrap(), date(2025, 6, 1).at(14, 24, 0, 0));
        assert_eq!(
            parse_datetime("tomorrow", now()).unwrap(),
            date(2025, 6, 2).at(9, 0, 0, 0)
        );
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("", now()).is_err());
        assert!(parse_datetime("next week", now()).is_err());
        assert!(parse_datetime("2025-13-01", now()).is_err());
    }

    #[test]
    fn test_format_helpers() {
        let dt = date(2025, 6, 1).at(8, 5, 0, 0);
        assert_eq!(format_datetime(dt), "2025-06-01 08:05");
        assert_eq!(format_time(dt), "8:05 AM");
        assert_eq!(format_date_header(dt.date()), "June 1, 2025");
        assert_eq!(format_short_date(dt), "Jun 01");
    }
}
