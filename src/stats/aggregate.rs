//! Roll parsed career-summary rows up into a [`FormatReport`].

use crate::models::{FormatOverview, FormatReport, TeamStat};
use crate::stats::normalize::{to_f64, to_i64};
use crate::statsguru::table::RawRow;

/// Grouping labels Statsguru uses for whole-career summary rows. These
/// duplicate the team rows and must not contribute to totals.
const SUMMARY_GROUPINGS: [&str; 3] = ["Career", "Overall", "Total"];

/// Team breakdowns are capped at the top scorers.
const MAX_TEAMS: usize = 10;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Aggregate one format's rows into totals plus a ranked team breakdown.
///
/// Rows with a missing, empty, or summary `Grouping` are skipped. Matches,
/// runs, centuries, catches and wickets sum across rows; highest score is a
/// running maximum. The overall batting average is recomputed from the
/// totals (never divided by zero). Teams sort by runs descending, name
/// ascending on ties, and are truncated to the top 10.
///
/// An empty input produces the canonical zeroed report.
pub fn aggregate(rows: &[RawRow]) -> FormatReport {
    let mut overview = FormatOverview::default();
    let mut teams: Vec<TeamStat> = Vec::new();

    for row in rows {
        let grouping = row.get("Grouping").map(str::trim).unwrap_or("");
        if grouping.is_empty() || SUMMARY_GROUPINGS.contains(&grouping) {
            continue;
        }

        let matches = to_i64(row.get("Mat"), 0);
        let runs = to_i64(row.get("Runs"), 0);
        let highest_score = to_i64(row.get("HS"), 0);
        let batting_average = to_f64(row.get("Bat Av"), 0.0);
        let centuries = to_i64(row.get("100"), 0);
        let catches = to_i64(row.get("Ct"), 0);
        let wickets = to_i64(row.get("Wkts"), 0);
        let bowling_average = to_f64(row.get("Bowl Av"), 0.0);

        overview.total_matches += matches;
        overview.total_runs += runs;
        overview.centuries += centuries;
        overview.catches += catches;
        overview.wickets += wickets;
        overview.highest_score = overview.highest_score.max(highest_score);

        teams.push(TeamStat {
            team: grouping.to_string(),
            matches,
            runs,
            batting_average,
            highest_score,
            centuries,
            wickets,
            bowling_average,
            catches,
        });
    }

    overview.batting_average = if overview.total_matches > 0 {
        round2(overview.total_runs as f64 / overview.total_matches as f64)
    } else {
        0.0
    };

    teams.sort_by(|a, b| b.runs.cmp(&a.runs).then_with(|| a.team.cmp(&b.team)));
    teams.truncate(MAX_TEAMS);

    FormatReport { overview, teams }
}
