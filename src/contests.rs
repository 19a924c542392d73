use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::api::Contest;
use crate::error::CompanionError;

/// Keep contests that have a scheduled start and started no more than one
/// year before `now`. Upcoming contests pass by construction (their start is
/// after `now`). API order is preserved.
pub fn recent_contests(contests: &[Contest], now: DateTime<Utc>) -> Vec<Contest> {
    let window = Duration::days(365);
    contests
        .iter()
        .filter(|c| match c.start_time_seconds {
            Some(start) => match Utc.timestamp_opt(start, 0).single() {
                Some(start_time) => now - start_time <= window,
                None => false,
            },
            None => false,
        })
        .cloned()
        .collect()
}

/// Render a contest as an RFC 5545 calendar entry, the portable stand-in for
/// the original's calendar hand-off. The event spans start to start plus
/// duration; type and phase land in the description.
pub fn contest_to_ics(contest: &Contest) -> Result<String, CompanionError> {
    let start = contest
        .start_time_seconds
        .and_then(|s| Utc.timestamp_opt(s, 0).single())
        .ok_or_else(|| {
            CompanionError::Api(format!("Contest {} has no start time", contest.id))
        })?;
    let end = start + Duration::seconds(contest.duration_seconds);

    let fmt = "%Y%m%dT%H%M%SZ";
    Ok(format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//cf-companion//EN\r\n\
         BEGIN:VEVENT\r\n\
         UID:contest-{}@codeforces.com\r\n\
         DTSTAMP:{}\r\n\
         DTSTART:{}\r\n\
         DTEND:{}\r\n\
         SUMMARY:{}\r\n\
         DESCRIPTION:Contest Type: {}\\nContest Phase: {}\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n",
        contest.id,
        start.format(fmt),
        start.format(fmt),
        end.format(fmt),
        escape_ics_text(&contest.name),
        escape_ics_text(&contest.kind),
        escape_ics_text(&contest.phase),
    ))
}

// Commas, semicolons and backslashes are meaningful in ICS text values.
fn escape_ics_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contest(id: i64, start: Option<i64>, duration: i64) -> Contest {
        Contest {
            id,
            name: format!("Round {}", id),
            kind: "CF".to_string(),
            phase: "FINISHED".to_string(),
            start_time_seconds: start,
            duration_seconds: duration,
        }
    }

    #[test]
    fn test_window_keeps_recent_and_upcoming() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let contests = vec![
            contest(1, Some((now - Duration::days(30)).timestamp()), 7200),
            contest(2, Some((now - Duration::days(400)).timestamp()), 7200),
            contest(3, Some((now + Duration::days(5)).timestamp()), 7200),
            contest(4, None, 7200),
        ];
        let recent = recent_contests(&contests, now);
        let ids: Vec<i64> = recent.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let at_boundary = contest(1, Some((now - Duration::days(365)).timestamp()), 3600);
        let past_boundary = contest(
            2,
            Some((now - Duration::days(365) - Duration::seconds(1)).timestamp()),
            3600,
        );
        let recent = recent_contests(&[at_boundary, past_boundary], now);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, 1);
    }

    #[test]
    fn test_ics_render() {
        let c = Contest {
            id: 1881,
            name: "Codeforces Round 903 (Div. 3)".to_string(),
            kind: "ICPC".to_string(),
            phase: "BEFORE".to_string(),
            start_time_seconds: Some(1697036700),
            duration_seconds: 8100,
        };
        let ics = contest_to_ics(&c).unwrap();
        assert!(ics.contains("UID:contest-1881@codeforces.com"));
        assert!(ics.contains("DTSTART:20231011T150500Z"));
        assert!(ics.contains("DTEND:20231011T172000Z"));
        assert!(ics.contains("SUMMARY:Codeforces Round 903 (Div. 3)"));
        assert!(ics.contains("DESCRIPTION:Contest Type: ICPC\\nContest Phase: BEFORE"));
    }

    #[test]
    fn test_ics_requires_start_time() {
        let c = contest(5, None, 3600);
        assert!(contest_to_ics(&c).is_err());
    }

    #[test]
    fn test_ics_escapes_commas() {
        let mut c = contest(6, Some(1697036700), 3600);
        c.name = "Good Bye, 2023".to_string();
        let ics = contest_to_ics(&c).unwrap();
        assert!(ics.contains("SUMMARY:Good Bye\\, 2023"));
    }
}
