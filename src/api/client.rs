use crate::config::Config;
use crate::error::AppError;
use crate::rate_limit::{Endpoint, RequestLog, RequestPacer};
use serde::de::DeserializeOwned;

use super::endpoints;
use super::models::*;
use super::MatchDataSource;

const USER_AGENT: &str = "league_suspicion/0.1.0";
const REQUESTS_PER_SECOND: u32 = 20;

pub struct RiotApiClient {
    config: Config,
    request_pacer: RequestPacer,
    courtesy_pacer: RequestPacer,
    request_log: RequestLog,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        let courtesy_pacer = RequestPacer::with_period(config.courtesy_delay);
        RiotApiClient {
            config,
            request_pacer: RequestPacer::per_second(REQUESTS_PER_SECOND),
            courtesy_pacer,
            request_log: RequestLog::new(),
        }
    }

    pub fn request_log(&self) -> &RequestLog {
        &self.request_log
    }

    fn execute_request<T: DeserializeOwned>(
        &self,
        url: &str,
        endpoint: Endpoint,
        subject: &str,
    ) -> Result<T, AppError> {
        self.request_pacer.wait();
        self.request_log.record_request(endpoint);

        let response = ureq::get(url)
            .set("User-Agent", USER_AGENT)
            .set("X-Riot-Token", &self.config.api_key)
            .call();

        match response {
            Ok(resp) => resp
                .into_json::<T>()
                .map_err(|e| AppError::JsonError(format!("{}: {}", subject, e))),
            Err(ureq::Error::Status(404, _)) => {
                self.request_log.record_not_found();
                Err(AppError::NotFound(subject.to_string()))
            }
            Err(ureq::Error::Status(429, _)) => Err(AppError::RateLimited),
            Err(ureq::Error::Status(status, resp)) => Err(AppError::Api {
                status,
                message: format!("{} ({})", resp.status_text(), subject),
            }),
            Err(e) => Err(AppError::HttpError(e.to_string())),
        }
    }

    fn lookup_by_riot_id(&self, game_name: &str, tag_line: &str) -> Result<SummonerDto, AppError> {
        let subject = format!("account {}#{}", game_name, tag_line);
        let url = endpoints::account_by_riot_id(&self.config.region, game_name, tag_line);
        let account: AccountDto = self.execute_request(&url, Endpoint::Account, &subject)?;

        let url = endpoints::summoner_by_puuid(&self.config.region, &account.puuid);
        let mut summoner: SummonerDto =
            self.execute_request(&url, Endpoint::Summoner, &subject)?;
        if summoner.name.is_empty() {
            summoner.name = format!("{}#{}", account.game_name, account.tag_line);
        }
        Ok(summoner)
    }
}

impl MatchDataSource for RiotApiClient {
    fn lookup_summoner(&self, name: &str) -> Result<SummonerDto, AppError> {
        self.courtesy_pacer.wait();

        if let Some((game_name, tag_line)) = name.split_once('#') {
            return self.lookup_by_riot_id(game_name, tag_line);
        }

        let url = endpoints::summoner_by_name(&self.config.region, name);
        let mut summoner: SummonerDto =
            self.execute_request(&url, Endpoint::Summoner, &format!("summoner {}", name))?;
        if summoner.name.is_empty() {
            summoner.name = name.to_string();
        }
        Ok(summoner)
    }

    fn list_matches(
        &self,
        puuid: &str,
        queue: QueueType,
        count: usize,
    ) -> Result<Vec<String>, AppError> {
        let url = endpoints::match_ids(&self.config.region, puuid, queue, count);
        self.execute_request(&url, Endpoint::MatchList, &format!("{} matches of {}", queue, puuid))
    }

    fn get_match(&self, match_id: &str) -> Result<MatchDto, AppError> {
        let url = endpoints::match_detail(&self.config.region, match_id);
        self.execute_request(&url, Endpoint::MatchDetail, &format!("match {}", match_id))
    }
}
