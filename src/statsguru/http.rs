//! HTTP client for the Statsguru query engine and the Cricinfo search page.

use crate::error::Result;
use crate::models::{Format, PlayerId};
use reqwest::Client;
use std::time::Duration;

/// Base URL for Statsguru player queries.
pub const STATS_BASE_URL: &str = "https://stats.espncricinfo.com";

/// Base URL for the Cricinfo name search page.
pub const SEARCH_BASE_URL: &str = "https://search.espncricinfo.com";

const USER_AGENT: &str = "Mozilla/5.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin reqwest wrapper with injectable base URLs.
///
/// Tests point both bases at a mock server; production uses the Cricinfo
/// constants. One client is shared across requests; it holds no per-request
/// state.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Client,
    stats_base: String,
    search_base: String,
}

impl StatsClient {
    pub fn new(stats_base: impl Into<String>, search_base: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            stats_base: stats_base.into(),
            search_base: search_base.into(),
        })
    }

    /// Fetch the all-round career summary page for one player and format.
    ///
    /// One GET, no retries. Non-2xx responses become errors here; the
    /// report builder downgrades any failure to a zeroed format.
    pub async fn career_summary(&self, player_id: PlayerId, format: Format) -> Result<String> {
        let url = format!("{}/ci/engine/player/{}.html", self.stats_base, player_id);
        let res = self
            .http
            .get(&url)
            .query(&[
                ("class", format.class_code().to_string().as_str()),
                ("template", "results"),
                ("type", "allround"),
            ])
            .send()
            .await?
            .error_for_status()?;
        Ok(res.text().await?)
    }

    /// Fetch the name-search results page for a free-text player name.
    pub async fn search_page(&self, player_name: &str) -> Result<String> {
        let url = format!("{}/ci/content/player/search.html", self.search_base);
        let res = self
            .http
            .get(&url)
            .query(&[("search", player_name), ("type", "player")])
            .send()
            .await?
            .error_for_status()?;
        Ok(res.text().await?)
    }
}
