//! League snapshot requests against the ESPN Fantasy v3 API.

use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::{MatchupPeriod, ScoringPeriod},
    core::{config::Credentials, http::league_header_map, LeagueConfig},
    error::EspnError,
    espn::document::Document,
    Result,
};


/// Base path for ESPN Fantasy v3 API (the game key follows).
pub const ESPN_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games";

/// The three league snapshots a run needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotRequest {
    /// Teams plus the current scoring/matchup period.
    CurrentState,
    /// Live and final matchup scores.
    Scoreboard {
        scoring_period: ScoringPeriod,
        matchup_period: MatchupPeriod,
    },
    /// Every team's roster with stats for one scoring period.
    DailyRoster { scoring_period: ScoringPeriod },
}

impl SnapshotRequest {
    pub fn views(&self) -> &'static [&'static str] {
        match self {
            SnapshotRequest::CurrentState => &["mTeam"],
            SnapshotRequest::Scoreboard { .. } => {
                &["mTeam", "mMatchupScore", "mScoreboard", "mLiveScoring"]
            }
            SnapshotRequest::DailyRoster { .. } => &["mTeam", "mRoster", "mLiveScoring"],
        }
    }

    /// Query pairs in ESPN's order: every `view`, then the period ids.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params: Vec<(&'static str, String)> = self
            .views()
            .iter()
            .map(|view| ("view", view.to_string()))
            .collect();

        match self {
            SnapshotRequest::CurrentState => {}
            SnapshotRequest::Scoreboard {
                scoring_period,
                matchup_period,
            } => {
                params.push(("scoringPeriodId", scoring_period.to_string()));
                params.push(("matchupPeriodId", matchup_period.to_string()));
            }
            SnapshotRequest::DailyRoster { scoring_period } => {
                params.push(("scoringPeriodId", scoring_period.to_string()));
            }
        }
        params
    }
}

/// Source of league snapshots.
///
/// Calls are awaited one at a time; any error ends the run.
#[allow(async_fn_in_trait)]
pub trait SnapshotFetcher {
    type Doc: Document;

    async fn fetch(&self, request: &SnapshotRequest) -> Result<Self::Doc>;
}

/// Fetches snapshots over HTTPS with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    league_url: String,
    headers: HeaderMap,
}

impl HttpFetcher {
    /// Fetcher for the live ESPN API.
    pub fn new(config: &LeagueConfig, credentials: Option<&Credentials>) -> Result<Self> {
        Self::with_base_url(ESPN_BASE_URL, config, credentials)
    }

    /// Fetcher against another host serving the same paths.
    pub fn with_base_url(
        base_url: &str,
        config: &LeagueConfig,
        credentials: Option<&Credentials>,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("espn-fba-summary/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            league_url: league_url(base_url, config),
            headers: league_header_map(credentials)?,
        })
    }

    pub fn league_url(&self) -> &str {
        &self.league_url
    }
}

/// `{base}/{sport}/seasons/{season}/segments/0/leagues/{league}`
pub fn league_url(base_url: &str, config: &LeagueConfig) -> String {
    format!(
        "{}/{}/seasons/{}/segments/0/leagues/{}",
        base_url.trim_end_matches('/'),
        config.sport,
        config.season,
        config.league_id
    )
}

impl SnapshotFetcher for HttpFetcher {
    type Doc = Value;

    async fn fetch(&self, request: &SnapshotRequest) -> Result<Value> {
        let builder = self
            .client
            .get(&self.league_url)
            .headers(self.headers.clone())
            .query(&request.query());

        let response = builder.send().await?;
        debug!(url = %response.url(), status = %response.status(), "fetched snapshot");

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(EspnError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
