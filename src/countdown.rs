//! Countdown to the Next Physical Program
//!
//! Pure tick logic; the 1 s interval lives in `components::countdown_banner`.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::models::NextProgram;

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Wording differs between the home page and the programs page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownKind {
    Home,
    Workshop,
}

impl CountdownKind {
    pub fn fallback(self) -> &'static str {
        match self {
            Self::Home => "Check out our physical programs for upcoming dates!",
            Self::Workshop => "No upcoming workshops scheduled. Please check back soon!",
        }
    }

    pub fn started(self, title: &str) -> String {
        match self {
            Self::Home => format!("Our {} program has started!", title),
            Self::Workshop => format!("The {} workshop has started!", title),
        }
    }
}

/// Whole days / hours / minutes / seconds left
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Floor decomposition of a positive millisecond difference.
    pub fn from_millis(millis: i64) -> Self {
        let total = millis.div_euclid(1000);
        Self {
            days: total.div_euclid(SECS_PER_DAY),
            hours: total.rem_euclid(SECS_PER_DAY).div_euclid(SECS_PER_HOUR),
            minutes: total.rem_euclid(SECS_PER_HOUR).div_euclid(SECS_PER_MINUTE),
            seconds: total.rem_euclid(SECS_PER_MINUTE),
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECS_PER_DAY + self.hours * SECS_PER_HOUR + self.minutes * SECS_PER_MINUTE + self.seconds
    }

    pub fn describe(&self, title: &str) -> String {
        format!(
            "{}d {}h {}m {}s until our {} program",
            self.days, self.hours, self.minutes, self.seconds, title
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    Remaining(Remaining),
    /// Emitted once, on the first tick at or past the target
    Started(String),
    /// Already started; the interval should be gone
    Stopped,
}

/// Accepts RFC 3339 and the zone-less `YYYY-MM-DDTHH:MM:SS` form (read as UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

#[derive(Clone, Debug, PartialEq)]
pub struct Countdown {
    title: String,
    target: DateTime<Utc>,
    kind: CountdownKind,
    finished: bool,
}

impl Countdown {
    /// `None` when there is no upcoming program or its date is unreadable;
    /// the caller shows `kind.fallback()` instead.
    pub fn for_program(program: Option<&NextProgram>, kind: CountdownKind) -> Option<Self> {
        let program = program?;
        let target = parse_timestamp(&program.next_session)?;
        Some(Self::new(&program.title, target, kind))
    }

    pub fn new(title: &str, target: DateTime<Utc>, kind: CountdownKind) -> Self {
        Self {
            title: title.to_string(),
            target,
            kind,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn tick(&mut self, now: DateTime<Utc>) -> Tick {
        if self.finished {
            return Tick::Stopped;
        }
        let difference = (self.target - now).num_milliseconds();
        if difference <= 0 {
            self.finished = true;
            return Tick::Started(self.kind.started(&self.title));
        }
        Tick::Remaining(Remaining::from_millis(difference))
    }

    /// Text for the current tick, if there is anything new to show.
    pub fn render(&self, tick: &Tick) -> Option<String> {
        match tick {
            Tick::Remaining(remaining) => Some(remaining.describe(&self.title)),
            Tick::Started(message) => Some(message.clone()),
            Tick::Stopped => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_floor_decomposition() {
        let millis = ((2 * SECS_PER_DAY + 3 * SECS_PER_HOUR + 4 * SECS_PER_MINUTE + 5) * 1000) + 999;
        let remaining = Remaining::from_millis(millis);
        assert_eq!(
            remaining,
            Remaining {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
        assert_eq!(remaining.describe("Coding"), "2d 3h 4m 5s until our Coding program");
    }

    #[test]
    fn test_strictly_decreasing_then_started_once() {
        let target = start() + Duration::seconds(3);
        let mut countdown = Countdown::new("Coding Bootcamp", target, CountdownKind::Home);

        let mut last = i64::MAX;
        let mut now = start();
        let mut started = 0;
        for _ in 0..6 {
            match countdown.tick(now) {
                Tick::Remaining(remaining) => {
                    assert!(remaining.total_seconds() < last);
                    last = remaining.total_seconds();
                }
                Tick::Started(message) => {
                    started += 1;
                    assert_eq!(message, "Our Coding Bootcamp program has started!");
                }
                Tick::Stopped => {}
            }
            now += Duration::seconds(1);
        }
        assert_eq!(started, 1);
        assert!(countdown.is_finished());
        assert_eq!(countdown.tick(now), Tick::Stopped);
    }

    #[test]
    fn test_past_target_starts_immediately() {
        let mut countdown = Countdown::new("Design", start() - Duration::days(1), CountdownKind::Workshop);
        assert_eq!(
            countdown.tick(start()),
            Tick::Started("The Design workshop has started!".to_string())
        );
    }

    #[test]
    fn test_missing_or_bad_program_falls_back() {
        assert!(Countdown::for_program(None, CountdownKind::Home).is_none());
        let bad = NextProgram {
            title: "Design".into(),
            next_session: "next tuesday".into(),
        };
        assert!(Countdown::for_program(Some(&bad), CountdownKind::Home).is_none());
        assert_eq!(
            CountdownKind::Home.fallback(),
            "Check out our physical programs for upcoming dates!"
        );
    }

    #[test]
    fn test_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2025, 7, 14, 9, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2025-07-14T09:30:00.000Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-07-14T11:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-07-14T09:30:00"), Some(expected));
        assert_eq!(parse_timestamp(""), None);
    }
}
