//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use types::{LeagueId, Season};

use crate::core::config::LeagueConfig;

/// Rolling games-played and week-points summary for an ESPN fantasy league.
///
/// Every flag is optional; without flags the compiled-in league is used.
#[derive(Debug, Parser)]
#[clap(name = "espn-fba-summary", about = "ESPN Fantasy rolling summary")]
pub struct ESPN {
    /// League ID (defaults to the configured league).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Season year (e.g. 2026).
    #[clap(long, short)]
    pub season: Option<Season>,

    /// ESPN game key (`fba`, `ffl`, ...).
    #[clap(long)]
    pub sport: Option<String>,

    /// Treat the league as public and send no cookies.
    #[clap(long)]
    pub public: bool,

    /// Log request and aggregation details to stderr.
    #[clap(long, short)]
    pub verbose: bool,
}

impl ESPN {
    /// Apply any flags given on the command line over the compiled-in config.
    pub fn league_config(&self) -> LeagueConfig {
        let mut config = LeagueConfig::default();
        if let Some(league_id) = self.league_id {
            config.league_id = league_id;
        }
        if let Some(season) = self.season {
            config.season = season;
        }
        if let Some(sport) = &self.sport {
            config.sport = sport.clone();
        }
        if self.public {
            config.private_league = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_compiled_config() {
        let app = ESPN::parse_from(["espn-fba-summary"]);
        let config = app.league_config();
        let default = LeagueConfig::default();

        assert_eq!(config.league_id, default.league_id);
        assert_eq!(config.season, default.season);
        assert_eq!(config.sport, default.sport);
        assert!(config.private_league);
        assert!(!app.verbose);
    }

    #[test]
    fn test_flags_override_config() {
        let app = ESPN::parse_from([
            "espn-fba-summary",
            "--league-id",
            "12345",
            "--season",
            "2025",
            "--sport",
            "ffl",
            "--public",
            "-v",
        ]);
        let config = app.league_config();

        assert_eq!(config.league_id, LeagueId::new(12345));
        assert_eq!(config.season, Season::new(2025));
        assert_eq!(config.sport, "ffl");
        assert!(!config.private_league);
        assert!(app.verbose);
    }

    #[test]
    fn test_invalid_league_id_rejected() {
        let result = ESPN::try_parse_from(["espn-fba-summary", "--league-id", "abc"]);
        assert!(result.is_err());
    }
}
