use std::collections::HashSet;

use chrono::TimeZone;
use indicatif::ProgressBar;

use super::aggregator::{Report, WeekdayTally};
use super::detector::PipelineSettings;
use super::evaluator::SuspicionEvaluator;
use crate::api::models::{MatchDto, QueueType};
use crate::api::MatchDataSource;
use crate::display::output::{display_skip, display_verdict, display_warning};
use crate::error::AppError;

/// Summoner names already evaluated in one run. A fresh set is created for
/// every (detector, queue) run and never shared between them.
#[derive(Debug, Default)]
pub struct AnalyzedSet {
    names: HashSet<String>,
}

impl AnalyzedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when `name` was not seen before in this run.
    pub fn insert(&mut self, name: &str) -> bool {
        self.names.insert(name.to_string())
    }

    #[cfg(test)]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

pub struct MatchScanner<'a, S: MatchDataSource, Tz: TimeZone> {
    source: &'a S,
    settings: PipelineSettings,
    queue: QueueType,
    quiet: bool,
    /// Timezone match start times are bucketed into weekdays in.
    tz: Tz,
}

impl<'a, S: MatchDataSource, Tz: TimeZone> MatchScanner<'a, S, Tz> {
    pub fn new(
        source: &'a S,
        settings: PipelineSettings,
        queue: QueueType,
        quiet: bool,
        tz: Tz,
    ) -> Self {
        MatchScanner {
            source,
            settings,
            queue,
            quiet,
            tz,
        }
    }

    /// Most recent top-level matches of the target, in API order.
    pub fn list_matches(&self, puuid: &str) -> Result<Vec<String>, AppError> {
        self.source
            .list_matches(puuid, self.queue, self.settings.match_count)
    }

    /// Scans every match once and aggregates the run. Any error other than a
    /// candidate 404 aborts the whole run.
    pub fn scan(&self, match_ids: &[String], progress: &ProgressBar) -> Result<Report, AppError> {
        let mut analyzed = AnalyzedSet::new();
        let mut tally = WeekdayTally::new();
        let mut flagged = Vec::new();

        for match_id in match_ids {
            progress.inc(1);

            let detail = self.source.get_match(match_id)?;
            if let Some(name) = self.scan_match(&detail, &mut analyzed, &mut tally)? {
                flagged.push(name);
            }
        }

        Ok(Report::build(
            self.settings.kind(),
            self.queue,
            flagged,
            match_ids.len(),
            analyzed.len(),
            &tally,
            self.settings.weekday_limit,
        ))
    }

    /// Tallies the match weekday and evaluates candidates in participant
    /// order until the first suspicious one, whose name is returned.
    pub fn scan_match(
        &self,
        detail: &MatchDto,
        analyzed: &mut AnalyzedSet,
        tally: &mut WeekdayTally,
    ) -> Result<Option<String>, AppError> {
        if tally.record(detail.info.game_start_timestamp, &self.tz).is_none() {
            display_warning(&format!(
                "Match {} has an invalid start time, weekday not counted",
                detail.metadata.match_id
            ));
        }

        let evaluator =
            SuspicionEvaluator::new(self.source, self.settings.rule, self.queue, self.quiet);

        for participant in &detail.info.participants {
            if !self.settings.rule.is_candidate(participant) {
                continue;
            }

            let name = participant.display_name();
            // Marked before evaluating so a failed lookup is not retried later in the run.
            if !analyzed.insert(&name) {
                if !self.quiet {
                    display_skip(&name);
                }
                continue;
            }

            let verdict = evaluator.evaluate(&name)?;
            display_verdict(&name, &verdict);

            if verdict.is_suspicious() {
                return Ok(Some(name));
            }
        }

        Ok(None)
    }
}
