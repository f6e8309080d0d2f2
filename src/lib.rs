//! ESPN Fantasy rolling summary library
//!
//! Pulls one league's current state, scoreboard and a trailing week of daily
//! roster snapshots from the ESPN Fantasy v3 API and reduces them to one row per
//! team: starter games played over the window, current matchup points, and
//! points per game.
//!
//! ## Features
//!
//! - **Window resolution**: trailing seven scoring periods, bounded by season start
//! - **Starter selection**: lineup slots below 20, lowest ten per team per day
//! - **Participation**: any non-zero actual stat for the day counts as a game
//! - **Matchup scoring**: live points, falling back to final points
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_fba_summary::{commands::summary::handle_summary, LeagueConfig, ProcessEnv};
//!
//! # async fn example() -> espn_fba_summary::Result<()> {
//! handle_summary(&LeagueConfig::default(), &ProcessEnv).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Private leagues need the ESPN session cookies:
//! ```bash
//! export ESPN_SWID='{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}'
//! export ESPN_S2=AEB...
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;

// Re-export commonly used types
pub use cli::types::{LeagueId, MatchupPeriod, ScoringPeriod, Season, TeamId};
pub use crate::core::{CredentialSource, Credentials, LeagueConfig, ProcessEnv};
pub use error::{EspnError, Result};
pub use espn::types::{LeagueSummary, ScoringWindow, TeamRecord};
