//! HTTP API layer: health check, player reports, name search, and static
//! front-end assets.
//!
//! Every failure surfaced to a client is a well-formed JSON document. The
//! report builder already absorbs per-format failures; anything escaping it
//! is caught by the panic layer and reported as a 500 with an error body.

use std::any::Any;
use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    catch_panic::CatchPanicLayer, services::ServeDir, services::ServeFile, trace::TraceLayer,
};
use tracing::warn;

use crate::models::{PlayerId, PlayerReport, SearchResult};
use crate::report::build_report;
use crate::statsguru::http::StatsClient;
use crate::statsguru::search::{parse_search, DEFAULT_MAX_RESULTS};

/// Shared per-process state. Holds no mutable data; requests only read it.
pub struct AppState {
    pub client: StatsClient,
}

/// Build the application router.
///
/// `frontend_dir` is served for any path the API does not claim, with
/// `index.html` as the fallback document.
pub fn router(state: Arc<AppState>, frontend_dir: &FsPath) -> Router {
    let assets =
        ServeDir::new(frontend_dir).fallback(ServeFile::new(frontend_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health))
        .route("/api/player/:player_id", get(player))
        .route("/api/search/:name", get(search))
        .fallback_service(assets)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "cricket-dashboard-api"}))
}

/// `GET /api/player/{id}`.
///
/// The id is parsed here rather than by the extractor so a malformed id
/// still yields the JSON error shape instead of a plain-text rejection.
async fn player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
) -> Json<PlayerReport> {
    match player_id.parse::<PlayerId>() {
        Ok(id) => Json(build_report(&state.client, id).await),
        Err(e) => {
            warn!(raw = %player_id, error = %e, "rejected player ID");
            Json(PlayerReport::error(0, format!("invalid player ID `{player_id}`: {e}")))
        }
    }
}

/// `GET /api/search/{name}`.
///
/// An unreachable search page or a page with no recognizable profile
/// links both serve an empty array.
async fn search(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<Vec<SearchResult>> {
    let results = match state.client.search_page(&name).await {
        Ok(html) => parse_search(&html, DEFAULT_MAX_RESULTS),
        Err(e) => {
            warn!(name = %name, error = %e, "player search unavailable");
            Vec::new()
        }
    };
    Json(results)
}

/// Last-resort boundary: map an escaped panic to the JSON error shape.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "internal server error".to_string());

    let body = json!({
        "player_id": 0,
        "status": "error",
        "message": message,
        "formats": {},
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
