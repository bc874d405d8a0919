//! Heuristic player-profile link extraction from the Cricinfo search page.
//!
//! The search page offers no structured data, so this walks every
//! hyperlink and pattern-matches hrefs that look like player profiles. The
//! page structure is an unversioned external contract: this extractor has
//! no correctness guarantee against markup changes and fails soft (empty
//! result list) rather than erroring.

use crate::models::SearchResult;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

/// Default cap on identified results.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Path substrings conventionally used by player profile URLs, in
/// priority order.
const PROFILE_PATTERNS: [&str; 4] = ["/ci/content/player/", "/cricketers/", "/player/", "cricketers"];

/// At most this many candidate links are kept per pattern. A link matching
/// two patterns is kept twice; duplicates are accepted, not deduplicated.
const MATCHES_PER_PATTERN: usize = 5;

/// Origin for resolving root-relative profile hrefs.
const SITE_ORIGIN: &str = "https://www.espncricinfo.com";

fn id_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"/player/(\d+)\.html").unwrap(),
            Regex::new(r"/cricketers/[^/]+-(\d+)").unwrap(),
            Regex::new(r"-(\d+)$").unwrap(),
        ]
    })
}

/// Pull a numeric player ID out of a profile href, first pattern wins.
fn extract_player_id(href: &str) -> Option<String> {
    id_patterns()
        .iter()
        .find_map(|re| re.captures(href).map(|caps| caps[1].to_string()))
}

/// Extract best-effort player matches from a search-results document.
///
/// Candidates are every `<a>` with a non-empty href and visible text whose
/// href contains one of the profile path patterns; candidates without an
/// extractable numeric ID are dropped. Stops once `max_results` results
/// are collected. Never errors: an unrecognizable page yields an empty Vec.
pub fn parse_search(html: &str, max_results: usize) -> Vec<SearchResult> {
    let document = Html::parse_document(html);
    let anchor = Selector::parse("a[href]").unwrap();

    let links: Vec<(String, String)> = document
        .select(&anchor)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let text = a.text().collect::<String>().trim().to_string();
            if href.is_empty() || text.is_empty() {
                return None;
            }
            Some((href.to_string(), text))
        })
        .collect();

    let mut candidates: Vec<&(String, String)> = Vec::new();
    for pattern in PROFILE_PATTERNS {
        candidates.extend(
            links
                .iter()
                .filter(|(href, _)| href.contains(pattern))
                .take(MATCHES_PER_PATTERN),
        );
    }

    let mut results = Vec::new();
    for (href, name) in candidates {
        let Some(player_id) = extract_player_id(href) else {
            continue;
        };
        let url = if href.starts_with('/') {
            format!("{SITE_ORIGIN}{href}")
        } else {
            href.clone()
        };
        results.push(SearchResult {
            player_id,
            name: name.clone(),
            country: String::new(),
            role: String::new(),
            url,
        });
        if results.len() >= max_results {
            break;
        }
    }
    results
}
