use super::detector::DetectorKind;
use crate::api::models::QueueType;
use chrono::{Datelike, TimeZone, Weekday};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}

/// Matches played per weekday, Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdayTally {
    counts: [usize; 7],
}

impl WeekdayTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a match started at `timestamp_ms` (epoch millis) in `tz`.
    /// Returns `None` and counts nothing for an unrepresentable timestamp.
    pub fn record<Tz: TimeZone>(&mut self, timestamp_ms: i64, tz: &Tz) -> Option<Weekday> {
        let day = tz.timestamp_millis_opt(timestamp_ms).single()?.weekday();
        self.counts[day.num_days_from_monday() as usize] += 1;
        Some(day)
    }

    pub fn count(&self, day: Weekday) -> usize {
        self.counts[day.num_days_from_monday() as usize]
    }

    /// Share of `total` per weekday, sorted busiest first and cut to `limit`.
    /// The sort is stable, so ties keep Monday..Sunday order.
    pub fn ranked(&self, total: usize, limit: usize) -> Vec<(Weekday, f64)> {
        let mut days: Vec<(Weekday, f64)> = WEEK
            .iter()
            .map(|day| (*day, percentage(self.count(*day), total)))
            .collect();

        days.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        days.truncate(limit);
        days
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub kind: DetectorKind,
    pub queue: QueueType,
    /// Flagged summoner names, one per flagged match, in scan order.
    pub flagged: Vec<String>,
    pub flagged_matches: usize,
    pub total_matches: usize,
    /// Distinct summoners evaluated during the run.
    pub analyzed_players: usize,
    pub flagged_percentage: f64,
    pub weekdays: Vec<(Weekday, f64)>,
}

impl Report {
    pub fn build(
        kind: DetectorKind,
        queue: QueueType,
        flagged: Vec<String>,
        total_matches: usize,
        analyzed_players: usize,
        tally: &WeekdayTally,
        weekday_limit: usize,
    ) -> Self {
        let flagged_matches = flagged.len();
        Report {
            kind,
            queue,
            flagged_percentage: percentage(flagged_matches, total_matches),
            flagged,
            flagged_matches,
            total_matches,
            analyzed_players,
            weekdays: tally.ranked(total_matches, weekday_limit),
        }
    }
}
