//! MotoGP calendar
//!
//! Reads the season file and renders session times for a client timezone.

use std::path::Path;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{Calendar, Race};

/// Season file name inside the data directory
pub const CALENDAR_FILE: &str = "motogp-2025.json";

/// Reads and parses the season file from `data_dir`.
pub async fn load(data_dir: &Path) -> Result<Calendar> {
    let path = data_dir.join(CALENDAR_FILE);
    debug!(path = %path.display(), "reading calendar");
    let bytes = tokio::fs::read(&path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Converts every parseable session time to `zone`, keeping RFC 3339.
///
/// Values that do not parse (an empty sprint slot, for instance) are kept
/// as they are.
pub fn in_timezone(mut calendar: Calendar, zone: Tz) -> Calendar {
    for race in &mut calendar.races {
        race.sessions.map_each(|value| match DateTime::parse_from_rfc3339(value) {
            Ok(t) => t
                .with_timezone(&zone)
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            Err(_) => value.to_string(),
        });
    }
    calendar
}

/// Returns the first race whose race session starts after `now`.
///
/// Races are taken in file order; entries with an unparseable race time are
/// skipped.
pub fn next_race(calendar: &Calendar, now: DateTime<Utc>) -> Option<Race> {
    calendar
        .races
        .iter()
        .find(|race| match DateTime::parse_from_rfc3339(&race.sessions.race) {
            Ok(start) => start > now,
            Err(e) => {
                warn!(race = %race.name, error = %e, "skipping race with bad race time");
                false
            }
        })
        .cloned()
}

/// Renders every session of `race` for display in `zone`.
pub fn format_race(mut race: Race, zone: Tz) -> Race {
    race.sessions.map_each(|value| format_session(value, zone));
    race
}

/// Formats an RFC 3339 time as `2nd March 2025 at 18:30` in `zone`.
///
/// Unparseable values are returned unchanged.
pub fn format_session(value: &str, zone: Tz) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(t) => {
            let t = t.with_timezone(&zone);
            format!(
                "{}{} {} at {}",
                t.day(),
                ordinal(t.day()),
                t.format("%B %Y"),
                t.format("%H:%M")
            )
        }
        Err(_) => value.to_string(),
    }
}

/// English ordinal suffix for a day of the month.
pub fn ordinal(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sessions;
    use crate::timezone::zone_for;
    use chrono::TimeZone;

    fn race(name: &str, race_time: &str) -> Race {
        Race {
            round: 1,
            name: name.to_string(),
            location: String::new(),
            country: String::new(),
            circuit: String::new(),
            date: String::new(),
            sessions: Sessions {
                q1: "2025-03-01T03:50:00Z".to_string(),
                q2: String::new(),
                sprint: String::new(),
                race: race_time.to_string(),
            },
        }
    }

    fn calendar() -> Calendar {
        Calendar {
            year: 2025,
            races: vec![
                race("Thailand", "2025-03-02T08:00:00Z"),
                race("Broken", "not a time"),
                race("Argentina", "2025-03-16T18:00:00Z"),
            ],
        }
    }

    #[test]
    fn test_ordinal() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal(day), suffix, "day {day}");
        }
    }

    #[test]
    fn test_format_session_in_zone() {
        let acdt = zone_for("ACDT").unwrap();
        assert_eq!(
            format_session("2025-03-02T08:00:00Z", acdt),
            "2nd March 2025 at 18:30"
        );
    }

    #[test]
    fn test_format_session_follows_daylight_saving() {
        let est = zone_for("EST").unwrap();
        let gmt = zone_for("GMT").unwrap();

        assert_eq!(
            format_session("2025-01-12T18:00:00Z", est),
            "12th January 2025 at 13:00"
        );
        assert_eq!(
            format_session("2025-07-13T18:00:00Z", est),
            "13th July 2025 at 14:00"
        );
        assert_eq!(
            format_session("2025-01-12T18:00:00Z", gmt),
            "12th January 2025 at 18:00"
        );
        assert_eq!(
            format_session("2025-07-13T18:00:00Z", gmt),
            "13th July 2025 at 19:00"
        );
    }

    #[test]
    fn test_in_timezone_summer_offset() {
        let season = Calendar {
            year: 2025,
            races: vec![race("Britain", "2025-05-25T12:00:00Z")],
        };
        let converted = in_timezone(season, zone_for("GMT").unwrap());
        assert_eq!(converted.races[0].sessions.race, "2025-05-25T13:00:00+01:00");
    }

    #[test]
    fn test_format_session_keeps_unparseable() {
        let utc = zone_for("UTC").unwrap();
        assert_eq!(format_session("", utc), "");
        assert_eq!(format_session("TBC", utc), "TBC");
    }

    #[test]
    fn test_in_timezone_converts_rfc3339() {
        let converted = in_timezone(calendar(), zone_for("AEST").unwrap());
        let sessions = &converted.races[0].sessions;

        assert_eq!(sessions.race, "2025-03-02T18:00:00+10:00");
        assert_eq!(sessions.q1, "2025-03-01T13:50:00+10:00");
        assert_eq!(sessions.sprint, "");
        assert_eq!(converted.races[1].sessions.race, "not a time");
    }

    #[test]
    fn test_in_timezone_utc_uses_z() {
        let converted = in_timezone(calendar(), zone_for("UTC").unwrap());
        assert_eq!(converted.races[0].sessions.race, "2025-03-02T08:00:00Z");
    }

    #[test]
    fn test_next_race_skips_past_and_broken() {
        let now = Utc.with_ymd_and_hms(2025, 3, 5, 0, 0, 0).unwrap();
        let next = next_race(&calendar(), now).unwrap();
        assert_eq!(next.name, "Argentina");
    }

    #[test]
    fn test_next_race_none_after_season() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert!(next_race(&calendar(), now).is_none());
    }

    #[test]
    fn test_format_race() {
        let formatted = format_race(calendar().races[0].clone(), zone_for("UTC").unwrap());
        assert_eq!(formatted.sessions.race, "2nd March 2025 at 08:00");
        assert_eq!(formatted.sessions.q1, "1st March 2025 at 03:50");
        assert_eq!(formatted.sessions.q2, "");
    }

    #[tokio::test]
    async fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let json = serde_json::to_vec(&calendar()).unwrap();
        std::fs::write(dir.path().join(CALENDAR_FILE), json).unwrap();

        let loaded = load(dir.path()).await.unwrap();
        assert_eq!(loaded, calendar());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).await.unwrap_err();
        assert!(matches!(err, crate::error::ApiError::Io(_)));
    }
}
