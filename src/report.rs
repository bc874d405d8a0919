//! Per-player report orchestration across the three formats.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::{Format, FormatReport, PlayerId, PlayerReport};
use crate::stats::aggregate::aggregate;
use crate::statsguru::{http::StatsClient, table::parse_rows};
use tracing::{debug, warn};

/// Build the full report for one player.
///
/// The three format pipelines are independent, so they run concurrently;
/// each only writes its own slot in the output map. A failure in one
/// format is downgraded to the zeroed report without touching the others,
/// so this function never fails: partial data always beats a hard error.
pub async fn build_report(client: &StatsClient, player_id: PlayerId) -> PlayerReport {
    let (test, odi, t20) = tokio::join!(
        format_report(client, player_id, Format::Test),
        format_report(client, player_id, Format::Odi),
        format_report(client, player_id, Format::T20),
    );

    let mut formats = BTreeMap::new();
    formats.insert(Format::Test.key().to_string(), test);
    formats.insert(Format::Odi.key().to_string(), odi);
    formats.insert(Format::T20.key().to_string(), t20);

    PlayerReport::success(player_id, formats)
}

async fn format_report(client: &StatsClient, player_id: PlayerId, format: Format) -> FormatReport {
    match try_format_report(client, player_id, format).await {
        Ok(report) => report,
        Err(e) => {
            warn!(player = %player_id, format = %format, error = %e,
                "career summary unavailable, serving zeroed format");
            FormatReport::zeroed()
        }
    }
}

async fn try_format_report(
    client: &StatsClient,
    player_id: PlayerId,
    format: Format,
) -> Result<FormatReport> {
    let html = client.career_summary(player_id, format).await?;
    let rows = parse_rows(&html);
    debug!(player = %player_id, format = %format, rows = rows.len(), "parsed career summary");
    Ok(aggregate(&rows))
}
