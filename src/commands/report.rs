//! Fixed-width text table for a [`LeagueSummary`].

use std::fmt;

use crate::espn::types::LeagueSummary;

/// Display width of the team name column.
pub const NAME_WIDTH: usize = 24;

const RULE_WIDTH: usize = 74;

/// Table view of a summary; teams are listed by ascending id.
pub struct Report<'a>(pub &'a LeagueSummary);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        let mut teams: Vec<_> = summary.teams.iter().collect();
        teams.sort_by_key(|t| t.id);

        let rule = "-".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "Current Week (Matchup {})", summary.window.matchup_period)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<24} {:>14} {:>12} {:>12}",
            "Team", "Games (Last 7)", "Week Points", "Avg/Game"
        )?;
        writeln!(f, "{rule}")?;

        for team in teams {
            writeln!(
                f,
                "{:<24} {:>14} {:>12.2} {:>12.2}",
                truncate_name(&team.name, NAME_WIDTH),
                team.games_played,
                team.week_points,
                team.average_per_game()
            )?;
        }
        writeln!(f, "{rule}")
    }
}

/// Render the summary table to a string.
pub fn render_report(summary: &LeagueSummary) -> String {
    Report(summary).to_string()
}

/// Cut `name` to `width` characters, marking the cut with `…`.
pub fn truncate_name(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        return name.to_string();
    }
    let mut cut: String = name.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
