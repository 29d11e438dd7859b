use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// 404 from the Riot API. Callers decide whether this is recoverable.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, please try again later")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_not_found_is_recoverable() {
        assert!(AppError::NotFound("Faker".to_string()).is_not_found());
        assert!(!AppError::RateLimited.is_not_found());
        assert!(!AppError::Api {
            status: 500,
            message: "boom".to_string()
        }
        .is_not_found());
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::Api {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "API error (403): Forbidden");
        assert_eq!(
            AppError::NotFound("summoner Faker".to_string()).to_string(),
            "Not found: summoner Faker"
        );
    }
}
