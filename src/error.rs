//! Error types for the ESPN Fantasy Basketball summary

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("ESPN request failed: HTTP {status}\n{body}")]
    Upstream { status: u16, body: String },

    #[error("Missing env vars {} (private league)", .missing.join(" and/or "))]
    MissingCredentials { missing: Vec<String> },

    #[error("Could not determine current {field} from league state")]
    MissingLeagueState { field: &'static str },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

impl EspnError {
    /// True for errors raised by local configuration or league state rather
    /// than by the transport.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EspnError::MissingCredentials { .. }
                | EspnError::MissingLeagueState { .. }
                | EspnError::InvalidNumber(_)
        )
    }
}

#[cfg(test)]
mod tests;
