//! Per-team running totals for one run.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::{
    cli::types::{MatchupPeriod, ScoringPeriod, TeamId},
    espn::{
        compute::{collect_starters, did_play_on, matchup_points, team_id, team_name},
        document::Document,
        types::TeamRecord,
    },
};

/// Owns the team table for a single run. Teams are seeded once from the
/// current-state snapshot; later snapshots only update known teams.
#[derive(Debug, Default)]
pub struct Aggregator {
    teams: BTreeMap<TeamId, TeamRecord>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every team listed under `teams[]`. Returns how many were added.
    pub fn seed_teams<D: Document>(&mut self, state: &D) -> usize {
        let before = self.teams.len();
        for team in state.elements_at(&["teams"]) {
            let Some(id) = team_id(team) else {
                continue;
            };
            self.teams
                .entry(id)
                .or_insert_with(|| TeamRecord::new(id, String::new()))
                .name = team_name(team, id);
        }
        self.teams.len() - before
    }

    /// Overwrite week points from the matchups of `period`. Later sides win.
    pub fn apply_scoreboard<D: Document>(&mut self, scoreboard: &D, period: MatchupPeriod) {
        for (id, points) in matchup_points(scoreboard, period) {
            match self.teams.get_mut(&id) {
                Some(team) => team.week_points = points,
                None => warn!(team_id = %id, "matchup side references unknown team"),
            }
        }
    }

    /// Count played starters for one day's roster snapshot.
    pub fn apply_day<D: Document>(&mut self, day: &D, period: ScoringPeriod) {
        for team in day.elements_at(&["teams"]) {
            let Some(record) = team_id(team).and_then(|id| self.teams.get_mut(&id)) else {
                warn!(scoring_period = %period, "roster snapshot has unknown team");
                continue;
            };

            let played = collect_starters(team)
                .into_iter()
                .filter_map(|entry| entry.path(&["playerPoolEntry", "player"]))
                .filter(|player| did_play_on(*player, period))
                .count();

            debug!(
                team_id = %record.id,
                scoring_period = %period,
                played,
                "counted starters"
            );
            record.games_played += u32::try_from(played).unwrap_or(u32::MAX);
        }
    }

    pub fn get(&self, id: TeamId) -> Option<&TeamRecord> {
        self.teams.get(&id)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Final records, ascending by team id.
    pub fn into_records(self) -> Vec<TeamRecord> {
        self.teams.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn state() -> Value {
        json!({
            "teams": [
                { "id": 2, "name": "Beta" },
                { "id": 1, "name": "Alpha" },
                { "name": "No Id" }
            ]
        })
    }

    fn starter(slot: i64, period: i64, pts: f64) -> Value {
        json!({
            "lineupSlotId": slot,
            "playerPoolEntry": { "player": { "stats": [
                { "scoringPeriodId": period, "statSourceId": 0, "stats": { "pts": pts } }
            ] } }
        })
    }

    #[test]
    fn test_seed_teams() {
        let mut agg = Aggregator::new();
        assert_eq!(agg.seed_teams(&state()), 2);
        assert_eq!(agg.get(TeamId::new(1)).unwrap().name, "Alpha");
        assert_eq!(agg.get(TeamId::new(2)).unwrap().games_played, 0);
    }

    #[test]
    fn test_apply_scoreboard_overwrites_and_skips_unknown() {
        let mut agg = Aggregator::new();
        agg.seed_teams(&state());

        let scoreboard = json!({
            "schedule": [
                {
                    "matchupPeriodId": 2,
                    "home": { "teamId": 1, "totalPoints": 50.0 },
                    "away": { "teamId": 9, "totalPoints": 70.0 }
                },
                {
                    "matchupPeriodId": 2,
                    "home": { "teamId": 1, "totalPointsLive": 60.0 }
                }
            ]
        });
        agg.apply_scoreboard(&scoreboard, MatchupPeriod::new(2));

        assert_eq!(agg.get(TeamId::new(1)).unwrap().week_points, 60.0);
        assert_eq!(agg.get(TeamId::new(2)).unwrap().week_points, 0.0);
        assert!(agg.get(TeamId::new(9)).is_none());
    }

    #[test]
    fn test_apply_day_counts_each_played_starter() {
        let mut agg = Aggregator::new();
        agg.seed_teams(&state());

        let day = json!({
            "teams": [
                { "id": 1, "roster": { "entries": [
                    starter(0, 5, 10.0),
                    starter(1, 5, 0.0),
                    starter(2, 5, 4.0),
                    starter(20, 5, 30.0)
                ] } },
                { "id": 42, "roster": { "entries": [starter(0, 5, 10.0)] } }
            ]
        });
        agg.apply_day(&day, ScoringPeriod::new(5));

        assert_eq!(agg.get(TeamId::new(1)).unwrap().games_played, 2);
        assert_eq!(agg.get(TeamId::new(2)).unwrap().games_played, 0);
        assert_eq!(agg.len(), 2);
    }

    #[test]
    fn test_apply_day_uses_the_days_period() {
        let mut agg = Aggregator::new();
        agg.seed_teams(&state());

        let day = json!({
            "teams": [{ "id": 2, "roster": { "entries": [starter(0, 6, 10.0)] } }]
        });
        agg.apply_day(&day, ScoringPeriod::new(5));
        agg.apply_day(&day, ScoringPeriod::new(6));

        assert_eq!(agg.get(TeamId::new(2)).unwrap().games_played, 1);
    }

    #[test]
    fn test_into_records_sorted_by_id() {
        let mut agg = Aggregator::new();
        agg.seed_teams(&state());

        let ids: Vec<i64> = agg.into_records().iter().map(|t| t.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
