use crate::error::AppError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REGION: &str = "euw1";
pub const DEFAULT_COURTESY_DELAY_MS: u64 = 1200;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub summoner_name: Option<String>,
    pub region: String,
    /// Minimum spacing between summoner lookups.
    pub courtesy_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        if dotenvy::dotenv().is_err() {
            if let Some(path) = Self::fallback_env_path() {
                dotenvy::from_path(path).ok();
            }
        }

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from any variable lookup. `from_env` feeds it the process environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("RIOT_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::ConfigError("RIOT_API_KEY not found in .env file".to_string())
            })?;

        let summoner_name = lookup("SUMMONER_NAME").filter(|name| !name.trim().is_empty());

        let region = lookup("RIOT_REGION")
            .filter(|region| !region.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let courtesy_delay_ms = match lookup("COURTESY_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::ConfigError(format!("COURTESY_DELAY_MS is not a number: {}", raw))
            })?,
            None => DEFAULT_COURTESY_DELAY_MS,
        };

        Ok(Config {
            api_key,
            summoner_name,
            region: region.to_lowercase(),
            courtesy_delay: Duration::from_millis(courtesy_delay_ms),
        })
    }

    fn fallback_env_path() -> Option<PathBuf> {
        let path = dirs::config_dir()?.join("league_suspicion").join(".env");
        path.exists().then_some(path)
    }
}
