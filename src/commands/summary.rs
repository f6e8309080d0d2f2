//! Rolling summary command: fetch, aggregate and print.

use tracing::{debug, info};

use crate::{
    core::config::{CredentialSource, Credentials, LeagueConfig},
    espn::{
        aggregate::Aggregator,
        compute::resolve_window,
        http::{HttpFetcher, SnapshotFetcher, SnapshotRequest},
        types::LeagueSummary,
    },
    Result,
};

use super::report::Report;

/// Run the whole summary against `fetcher`.
///
/// Order is fixed: current state, scoreboard, then one roster snapshot per day
/// ascending. The first fetch error aborts the run.
pub async fn run_summary<F: SnapshotFetcher>(fetcher: &F) -> Result<LeagueSummary> {
    let state = fetcher.fetch(&SnapshotRequest::CurrentState).await?;
    let window = resolve_window(&state)?;

    let mut aggregator = Aggregator::new();
    let seeded = aggregator.seed_teams(&state);
    info!(
        start = %window.start,
        end = %window.end,
        matchup_period = %window.matchup_period,
        teams = seeded,
        "resolved scoring window"
    );

    let scoreboard = fetcher
        .fetch(&SnapshotRequest::Scoreboard {
            scoring_period: window.end,
            matchup_period: window.matchup_period,
        })
        .await?;
    aggregator.apply_scoreboard(&scoreboard, window.matchup_period);

    for scoring_period in window.periods() {
        debug!(%scoring_period, "fetching daily rosters");
        let day = fetcher
            .fetch(&SnapshotRequest::DailyRoster { scoring_period })
            .await?;
        aggregator.apply_day(&day, scoring_period);
    }

    info!(days = window.days(), "aggregated window");

    Ok(LeagueSummary {
        window,
        teams: aggregator.into_records(),
    })
}

/// Handle the summary command: load credentials, fetch, print the table.
///
/// Credentials are checked before any request is made.
pub async fn handle_summary(config: &LeagueConfig, env: &impl CredentialSource) -> Result<()> {
    let credentials = Credentials::load(env, config.private_league)?;
    let fetcher = HttpFetcher::new(config, credentials.as_ref())?;
    info!(league = %fetcher.league_url(), "requesting league snapshots");

    let summary = run_summary(&fetcher).await?;
    print!("{}", Report(&summary)); // tarpaulin::skip - console output

    Ok(())
}
