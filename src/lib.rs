//! Cricket Dashboard API Library
//!
//! Scrapes player statistics from ESPN Cricinfo's Statsguru query engine,
//! aggregates them into per-format career summaries, and serves them as
//! JSON for the dashboard front end.
//!
//! ## Features
//!
//! - **Career Reports**: Team-wise and overall rollups for Test, ODI, and
//!   T20I cricket, built per request from the live Statsguru tables
//! - **Fail-soft Scraping**: missing or unreachable format data is served
//!   as a zeroed report, never as an error
//! - **Name Search**: best-effort player-ID lookup via link-pattern
//!   heuristics over the Cricinfo search page
//! - **Static Assets**: serves the dashboard front-end bundle
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cricket_dashboard::{
//!     report::build_report, statsguru::http::StatsClient, PlayerId,
//! };
//! use cricket_dashboard::statsguru::http::{SEARCH_BASE_URL, STATS_BASE_URL};
//!
//! # async fn example() -> cricket_dashboard::Result<()> {
//! let client = StatsClient::new(STATS_BASE_URL, SEARCH_BASE_URL)?;
//! let report = build_report(&client, PlayerId::new(253802)).await;
//! assert_eq!(report.formats.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export CRICKET_DASH_HOST=0.0.0.0
//! export CRICKET_DASH_PORT=5000
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod server;
pub mod stats;
pub mod statsguru;

// Re-export commonly used types
pub use error::{CricketError, Result};
pub use models::{
    Format, FormatOverview, FormatReport, PlayerId, PlayerReport, ReportStatus, SearchResult,
    TeamStat,
};

pub const HOST_ENV_VAR: &str = "CRICKET_DASH_HOST";
pub const PORT_ENV_VAR: &str = "CRICKET_DASH_PORT";
pub const FRONTEND_DIR_ENV_VAR: &str = "CRICKET_DASH_FRONTEND_DIR";
pub const STATS_URL_ENV_VAR: &str = "CRICKET_DASH_STATS_URL";
pub const SEARCH_URL_ENV_VAR: &str = "CRICKET_DASH_SEARCH_URL";
