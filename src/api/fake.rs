//! Scripted in-memory `MatchDataSource` for tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::models::*;
use super::MatchDataSource;
use crate::error::AppError;

/// 2023-11-13 12:00:00 UTC, a Monday.
pub const MONDAY_NOON_MS: i64 = 1_699_876_800_000;
pub const DAY_MS: i64 = 86_400_000;

pub fn participant(
    puuid: &str,
    name: &str,
    level: i64,
    kills: u32,
    deaths: u32,
    assists: u32,
) -> ParticipantDto {
    ParticipantDto {
        puuid: puuid.to_string(),
        summoner_name: name.to_string(),
        summoner_level: level,
        kills,
        deaths,
        assists,
        ..Default::default()
    }
}

pub fn match_with(match_id: &str, start_ms: i64, participants: Vec<ParticipantDto>) -> MatchDto {
    MatchDto {
        metadata: MatchMetadata {
            match_id: match_id.to_string(),
        },
        info: MatchInfo {
            game_start_timestamp: start_ms,
            participants,
        },
    }
}

#[derive(Default)]
pub struct ScriptedSource {
    summoners: HashMap<String, SummonerDto>,
    failing: HashSet<String>,
    histories: HashMap<(String, QueueType), Vec<String>>,
    matches: HashMap<String, MatchDto>,
    lookups: RefCell<HashMap<String, u32>>,
    list_calls: RefCell<Vec<(String, QueueType, usize)>>,
    detail_calls: RefCell<u32>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summoner(mut self, name: &str, puuid: &str, level: i64) -> Self {
        self.summoners.insert(
            name.to_string(),
            SummonerDto {
                puuid: puuid.to_string(),
                name: name.to_string(),
                summoner_level: level,
            },
        );
        self
    }

    /// Lookups for `name` fail with a non-404 API error.
    pub fn with_failing_summoner(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn with_history(mut self, puuid: &str, queue: QueueType, match_ids: &[&str]) -> Self {
        self.histories.insert(
            (puuid.to_string(), queue),
            match_ids.iter().map(|id| id.to_string()).collect(),
        );
        self
    }

    pub fn with_match(mut self, detail: MatchDto) -> Self {
        self.matches
            .insert(detail.metadata.match_id.clone(), detail);
        self
    }

    /// Registers `count` single-participant matches for `puuid` with the same stat line
    /// and appends them to its history in `queue`.
    pub fn with_stat_line(
        mut self,
        puuid: &str,
        queue: QueueType,
        count: usize,
        (kills, deaths, assists): (u32, u32, u32),
    ) -> Self {
        let history = self
            .histories
            .entry((puuid.to_string(), queue))
            .or_default();
        for _ in 0..count {
            let id = format!("{}_{}_{}", puuid, queue, history.len());
            history.push(id.clone());
            self.matches.insert(
                id.clone(),
                match_with(
                    &id,
                    MONDAY_NOON_MS,
                    vec![participant(puuid, puuid, 100, kills, deaths, assists)],
                ),
            );
        }
        self
    }

    pub fn lookup_count(&self, name: &str) -> u32 {
        self.lookups.borrow().get(name).copied().unwrap_or(0)
    }

    pub fn list_calls(&self) -> Vec<(String, QueueType, usize)> {
        self.list_calls.borrow().clone()
    }

    pub fn detail_calls(&self) -> u32 {
        *self.detail_calls.borrow()
    }
}

impl MatchDataSource for ScriptedSource {
    fn lookup_summoner(&self, name: &str) -> Result<SummonerDto, AppError> {
        *self.lookups.borrow_mut().entry(name.to_string()).or_insert(0) += 1;

        if self.failing.contains(name) {
            return Err(AppError::Api {
                status: 503,
                message: format!("summoner {}", name),
            });
        }
        self.summoners
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("summoner {}", name)))
    }

    fn list_matches(
        &self,
        puuid: &str,
        queue: QueueType,
        count: usize,
    ) -> Result<Vec<String>, AppError> {
        self.list_calls
            .borrow_mut()
            .push((puuid.to_string(), queue, count));

        Ok(self
            .histories
            .get(&(puuid.to_string(), queue))
            .map(|ids| ids.iter().take(count).cloned().collect())
            .unwrap_or_default())
    }

    fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        *self.detail_calls.borrow_mut() += 1;

        self.matches
            .get(match_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("match {}", match_id)))
    }
}
