pub mod client;
pub mod endpoints;
#[cfg(test)]
pub mod fake;
pub mod models;

use crate::error::AppError;
use models::{MatchDto, QueueType, SummonerDto};

/// The three lookups the detectors need from the match-history API.
pub trait MatchDataSource {
    /// `AppError::NotFound` when the summoner does not exist.
    fn lookup_summoner(&self, name: &str) -> Result<SummonerDto, AppError>;

    /// Match ids for `puuid` in `queue`, most recent first.
    fn list_matches(
        &self,
        puuid: &str,
        queue: QueueType,
        count: usize,
    ) -> Result<Vec<String>, AppError>;

    fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError>;
}
