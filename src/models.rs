//! Data model for player reports and search results.
//!
//! Everything here is request-scoped: a report is built fresh per API call,
//! serialized once, and dropped. Nothing is cached or mutated after
//! construction.

use crate::error::{CricketError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for ESPN Cricinfo player IDs.
///
/// # Examples
///
/// ```rust
/// use cricket_dashboard::PlayerId;
///
/// let player_id = PlayerId::new(253802);
/// assert_eq!(player_id.as_u64(), 253802);
/// assert_eq!(player_id.to_string(), "253802");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new PlayerId from a u64 value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying u64 value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = CricketError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// The three international formats served by the dashboard.
///
/// Statsguru identifies them by a numeric class code in the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Test,
    Odi,
    T20,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Test, Format::Odi, Format::T20];

    /// Statsguru `class` query parameter value.
    pub fn class_code(&self) -> u8 {
        match self {
            Format::Test => 1,
            Format::Odi => 2,
            Format::T20 => 3,
        }
    }

    /// JSON key under `formats` in a [`PlayerReport`].
    pub fn key(&self) -> &'static str {
        match self {
            Format::Test => "test",
            Format::Odi => "odi",
            Format::T20 => "t20",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One team/opposition grouping's aggregated performance in one format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStat {
    pub team: String,
    pub matches: i64,
    pub runs: i64,
    pub batting_average: f64,
    pub highest_score: i64,
    pub centuries: i64,
    pub wickets: i64,
    pub bowling_average: f64,
    pub catches: i64,
}

/// Career totals across all groupings in one format.
///
/// `highest_score` is a running maximum, not a sum. `batting_average` is
/// `total_runs / total_matches` rounded to 2 decimals, or 0 when the player
/// has no matches in the format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatOverview {
    pub total_matches: i64,
    pub total_runs: i64,
    pub highest_score: i64,
    pub batting_average: f64,
    pub centuries: i64,
    pub catches: i64,
    pub wickets: i64,
}

/// Per-format slice of a player report: career totals plus a ranked
/// team-wise breakdown (descending by runs, at most 10 entries).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatReport {
    pub overview: FormatOverview,
    pub teams: Vec<TeamStat>,
}

impl FormatReport {
    /// The canonical "no data" value. Missing or unreachable format data is
    /// served as this, never as an error or an absent key.
    pub fn zeroed() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Success,
    Error,
}

/// Full per-player payload served by `GET /api/player/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerReport {
    pub player_id: u64,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub formats: BTreeMap<String, FormatReport>,
}

impl PlayerReport {
    pub fn success(player_id: PlayerId, formats: BTreeMap<String, FormatReport>) -> Self {
        Self {
            player_id: player_id.as_u64(),
            status: ReportStatus::Success,
            message: None,
            formats,
        }
    }

    pub fn error(player_id: u64, message: impl Into<String>) -> Self {
        Self {
            player_id,
            status: ReportStatus::Error,
            message: Some(message.into()),
            formats: BTreeMap::new(),
        }
    }
}

/// One heuristic match from the Cricinfo name search page.
///
/// `country` and `role` are always empty: the link-pattern heuristics have
/// no reliable source for them. Duplicates are allowed; callers who need
/// unique results must dedup themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub player_id: String,
    pub name: String,
    pub country: String,
    pub role: String,
    pub url: String,
}
