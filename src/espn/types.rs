use crate::cli::types::{MatchupPeriod, ScoringPeriod, TeamId};

/// Running totals for one fantasy team over the window.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
    /// Starter games with a recorded stat line, across the window.
    pub games_played: u32,
    /// Current matchup total; overwritten, never summed.
    pub week_points: f64,
}

impl TeamRecord {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            games_played: 0,
            week_points: 0.0,
        }
    }

    /// Week points per game played, `0.0` before any game.
    pub fn average_per_game(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.week_points / f64::from(self.games_played)
        }
    }
}

/// Scoring periods to scan plus the live matchup period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWindow {
    pub start: ScoringPeriod,
    pub end: ScoringPeriod,
    pub matchup_period: MatchupPeriod,
}

impl ScoringWindow {
    /// Every scoring period in the window, ascending.
    pub fn periods(&self) -> impl Iterator<Item = ScoringPeriod> {
        (self.start.as_u32()..=self.end.as_u32()).map(ScoringPeriod::new)
    }

    /// Number of periods scanned; zero when the season starts after `end`.
    pub fn days(&self) -> u32 {
        if self.start > self.end {
            return 0;
        }
        self.end.as_u32() - self.start.as_u32() + 1
    }
}

/// Result of one run: the window scanned and every team, sorted by id.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSummary {
    pub window: ScoringWindow,
    pub teams: Vec<TeamRecord>,
}
