//! Selection and scoring rules applied to fetched league documents.

use crate::{
    cli::types::{MatchupPeriod, ScoringPeriod, TeamId},
    core::config::{MAX_STARTERS, PARTICIPATION_EPSILON, ROLLING_DAYS, STARTER_SLOT_LIMIT},
    error::EspnError,
    espn::{document::Document, types::ScoringWindow},
    Result,
};


/// Sort key for entries without a lineup slot.
const MISSING_SLOT: i64 = 999;

/// Actual (game result) stats; 1 is projected.
const ACTUAL_STAT_SOURCE: i64 = 0;

/// Resolve the trailing window from the current-state document.
///
/// `scoringPeriodId` and `status.currentMatchupPeriod` must be positive.
/// `status.firstScoringPeriod` bounds the start; absent or non-positive values
/// mean 1. A season starting after the current period gives an empty window.
pub fn resolve_window<D: Document>(state: &D) -> Result<ScoringWindow> {
    let current = positive(state, &["scoringPeriodId"], "scoringPeriodId")?;
    let matchup = positive(
        state,
        &["status", "currentMatchupPeriod"],
        "currentMatchupPeriod",
    )?;
    let first = state.int_or(&["status", "firstScoringPeriod"], 1).max(1);

    let lookback = i64::from(ROLLING_DAYS) - 1;
    let start = first.max(current - lookback);

    Ok(ScoringWindow {
        start: ScoringPeriod::new(to_period(start)),
        end: ScoringPeriod::new(to_period(current)),
        matchup_period: MatchupPeriod::new(to_period(matchup)),
    })
}

fn positive<D: Document>(doc: &D, keys: &[&str], field: &'static str) -> Result<i64> {
    let value = doc.int_or(keys, -1);
    if value <= 0 || value > i64::from(u32::MAX) {
        return Err(EspnError::MissingLeagueState { field });
    }
    Ok(value)
}

fn to_period(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Team id of a `teams[]` entry, if numeric.
pub fn team_id<D: Document>(team: &D) -> Option<TeamId> {
    team.field("id").and_then(|n| n.as_int()).map(TeamId::new)
}

/// Display name of a `teams[]` entry.
///
/// Uses `name`, then `location nickname` from older payloads, then `Team {id}`.
pub fn team_name<D: Document>(team: &D, id: TeamId) -> String {
    if let Some(name) = team.field("name").and_then(|n| n.as_text()) {
        return name.to_string();
    }
    let location = team.text_or(&["location"], "").trim();
    let nickname = team.text_or(&["nickname"], "").trim();
    let joined = format!("{location} {nickname}");
    let joined = joined.trim();
    if joined.is_empty() {
        format!("Team {id}")
    } else {
        joined.to_string()
    }
}

/// Lineup slot of a roster entry, if numeric.
fn lineup_slot<D: Document>(entry: &D) -> Option<i64> {
    entry.field("lineupSlotId").and_then(|n| n.as_int())
}

/// Starters are roster entries in slots `0..20`, lowest slot first, capped at
/// [`MAX_STARTERS`].
pub fn collect_starters<D: Document>(team: &D) -> Vec<&D> {
    let mut starters: Vec<&D> = team
        .elements_at(&["roster", "entries"])
        .filter(|entry| {
            lineup_slot(*entry).is_some_and(|slot| (0..STARTER_SLOT_LIMIT).contains(&slot))
        })
        .collect();

    starters.sort_by_key(|entry| lineup_slot(*entry).unwrap_or(MISSING_SLOT));
    starters.truncate(MAX_STARTERS);
    starters
}

/// Whether `player` has an actual stat line for `period` with any non-zero stat.
///
/// Only the first actual line for the period is inspected. Missing or malformed
/// stats mean not played.
pub fn did_play_on<D: Document>(player: &D, period: ScoringPeriod) -> bool {
    let target = i64::from(period.as_u32());

    let Some(line) = player.elements_at(&["stats"]).find(|line| {
        line.int_or(&["scoringPeriodId"], -1) == target
            && line.int_or(&["statSourceId"], -1) == ACTUAL_STAT_SOURCE
    }) else {
        return false;
    };

    let Some(stats) = line.field("stats").filter(|s| s.is_object_node()) else {
        return false;
    };

    stats
        .entries()
        .filter_map(|(_, value)| value.as_float())
        .any(|value| value.abs() > PARTICIPATION_EPSILON)
}

/// Points for one matchup side: live total, then final total, then zero.
pub fn pick_points<D: Document>(side: &D) -> f64 {
    if side.has_non_null("totalPointsLive") {
        return side.float_or(&["totalPointsLive"], 0.0);
    }
    if side.has_non_null("totalPoints") {
        return side.float_or(&["totalPoints"], 0.0);
    }
    0.0
}

/// `(team, points)` for each side of every matchup in `period`, in payload order.
pub fn matchup_points<D: Document>(scoreboard: &D, period: MatchupPeriod) -> Vec<(TeamId, f64)> {
    let period = i64::from(period.as_u32());

    scoreboard
        .elements_at(&["schedule"])
        .filter(|matchup| matchup.int_or(&["matchupPeriodId"], -1) == period)
        .flat_map(|matchup| {
            ["home", "away"]
                .into_iter()
                .filter_map(move |key| matchup.field(key))
        })
        .filter_map(|side| {
            let id = side.field("teamId").and_then(|n| n.as_int())?;
            Some((TeamId::new(id), pick_points(side)))
        })
        .collect()
}
