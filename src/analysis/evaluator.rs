use super::detector::DetectionRule;
use super::kda::{average, kda};
use crate::api::models::QueueType;
use crate::api::MatchDataSource;
use crate::display::output::display_detail;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KdaScore {
    /// Average over the most recent window.
    pub recent: f64,
    /// Long-window average, boosted rule only.
    pub baseline: Option<f64>,
    /// `recent` must reach this to be suspicious.
    pub bar: f64,
}

impl KdaScore {
    pub fn is_suspicious(&self) -> bool {
        self.recent >= self.bar
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Summoner lookup returned 404.
    NotFound,
    /// No entry for the candidate in the fetched window.
    Inconclusive,
    Scored(KdaScore),
}

impl Verdict {
    pub fn is_suspicious(&self) -> bool {
        matches!(self, Verdict::Scored(score) if score.is_suspicious())
    }
}

pub struct SuspicionEvaluator<'a, S: MatchDataSource> {
    source: &'a S,
    rule: DetectionRule,
    queue: QueueType,
    quiet: bool,
}

impl<'a, S: MatchDataSource> SuspicionEvaluator<'a, S> {
    pub fn new(source: &'a S, rule: DetectionRule, queue: QueueType, quiet: bool) -> Self {
        SuspicionEvaluator {
            source,
            rule,
            queue,
            quiet,
        }
    }

    /// Looks `name` up and scores it. Only a 404 on the lookup is absorbed;
    /// every other error is returned to the caller.
    pub fn evaluate(&self, name: &str) -> Result<Verdict, AppError> {
        let summoner = match self.source.lookup_summoner(name) {
            Ok(summoner) => summoner,
            Err(e) if e.is_not_found() => return Ok(Verdict::NotFound),
            Err(e) => return Err(e),
        };

        let verdict = match self.rule {
            DetectionRule::Boosted {
                short_window,
                long_window,
                factor,
            } => {
                let Some(recent) = self.window_average(&summoner.puuid, short_window)? else {
                    return Ok(Verdict::Inconclusive);
                };
                let Some(baseline) = self.window_average(&summoner.puuid, long_window)? else {
                    return Ok(Verdict::Inconclusive);
                };
                Verdict::Scored(KdaScore {
                    recent,
                    baseline: Some(baseline),
                    bar: factor * baseline,
                })
            }
            DetectionRule::Smurf {
                window, threshold, ..
            } => match self.window_average(&summoner.puuid, window)? {
                Some(recent) => Verdict::Scored(KdaScore {
                    recent,
                    baseline: None,
                    bar: threshold,
                }),
                None => Verdict::Inconclusive,
            },
        };

        Ok(verdict)
    }

    /// Mean KDA of `puuid` over its last `count` matches in this queue. The
    /// participant is located by puuid since names can change between matches.
    pub fn window_average(&self, puuid: &str, count: usize) -> Result<Option<f64>, AppError> {
        let match_ids = self.source.list_matches(puuid, self.queue, count)?;

        let mut kdas = Vec::with_capacity(match_ids.len());
        for match_id in &match_ids {
            if !self.quiet {
                display_detail(&format!("Computing KDA for match {}", match_id));
            }
            let detail = self.source.get_match(match_id)?;
            if let Some(entry) = detail.info.participants.iter().find(|p| p.puuid == puuid) {
                kdas.push(kda(entry));
            }
        }

        Ok(average(&kdas))
    }
}
