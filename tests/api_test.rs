//! End-to-end route tests against a mocked Cricinfo upstream.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use cricket_dashboard::{
    server::{router, AppState},
    statsguru::http::StatsClient,
};

const CAREER_SUMMARY_HTML: &str = r#"
    <html><body>
    <table class="engineTable">
      <thead><tr>
        <th>Grouping</th><th>Mat</th><th>Runs</th><th>HS</th><th>Bat Av</th>
        <th>100</th><th>Ct</th><th>Wkts</th><th>Bowl Av</th>
      </tr></thead>
      <tbody>
        <tr><td>v Australia</td><td>25</td><td>1979</td><td>186</td><td>47.12</td>
            <td>8</td><td>27</td><td>0</td><td>-</td></tr>
        <tr><td>v England</td><td>30</td><td>2016</td><td>254*</td><td>41.14</td>
            <td>5</td><td>31</td><td>1</td><td>54.00</td></tr>
        <tr><td>Career</td><td>113</td><td>8848</td><td>254*</td><td>49.15</td>
            <td>29</td><td>111</td><td>0</td><td>-</td></tr>
      </tbody>
    </table>
    </body></html>"#;

const SEARCH_HTML: &str = r#"
    <html><body>
    <a href="/cricketers/virat-kohli-253802">Virat Kohli</a>
    <a href="/live-scores">Live scores</a>
    </body></html>"#;

fn app(mock_base: &str) -> Router {
    let client = StatsClient::new(mock_base, mock_base).expect("client");
    let state = Arc::new(AppState { client });
    router(state, &PathBuf::from("frontend"))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).expect("JSON body");
    (status, json)
}

#[tokio::test]
async fn test_health_endpoint() {
    let mock_server = MockServer::start().await;
    let (status, body) = get_json(app(&mock_server.uri()), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({"status": "healthy", "service": "cricket-dashboard-api"})
    );
}

#[tokio::test]
async fn test_player_report_shape_and_totals() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ci/engine/player/253802.html"))
        .and(query_param("template", "results"))
        .and(query_param("type", "allround"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CAREER_SUMMARY_HTML))
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(app(&mock_server.uri()), "/api/player/253802").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player_id"], 253802);
    assert_eq!(body["status"], "success");

    let formats = body["formats"].as_object().unwrap();
    let mut keys: Vec<_> = formats.keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, vec!["odi", "t20", "test"]);

    for format in ["test", "odi", "t20"] {
        let overview = &formats[format]["overview"];
        assert_eq!(overview["total_matches"], 55);
        assert_eq!(overview["total_runs"], 3995);
        assert_eq!(overview["highest_score"], 254);
        assert_eq!(overview["batting_average"], 72.64);
        let teams = formats[format]["teams"].as_array().unwrap();
        assert_eq!(teams.len(), 2);
        // Ranked by runs descending; the Career summary row is excluded.
        assert_eq!(teams[0]["team"], "v England");
        assert_eq!(teams[1]["team"], "v Australia");
    }
}

#[tokio::test]
async fn test_all_formats_failing_yield_zeroed_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(app(&mock_server.uri()), "/api/player/253802").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    for format in ["test", "odi", "t20"] {
        let report = &body["formats"][format];
        assert_eq!(report["overview"]["total_matches"], 0);
        assert_eq!(report["overview"]["batting_average"], 0.0);
        assert_eq!(report["teams"].as_array().unwrap().len(), 0);
    }
}

#[tokio::test]
async fn test_one_format_failing_leaves_others_intact() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ci/engine/player/253802.html"))
        .and(query_param("class", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CAREER_SUMMARY_HTML))
        .mount(&mock_server)
        .await;
    for class in ["2", "3"] {
        Mock::given(method("GET"))
            .and(path("/ci/engine/player/253802.html"))
            .and(query_param("class", class))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
    }

    let (_, body) = get_json(app(&mock_server.uri()), "/api/player/253802").await;

    assert_eq!(body["status"], "success");
    assert_eq!(body["formats"]["test"]["overview"]["total_runs"], 3995);
    assert_eq!(body["formats"]["odi"]["overview"]["total_runs"], 0);
    assert_eq!(body["formats"]["t20"]["overview"]["total_runs"], 0);
}

#[tokio::test]
async fn test_invalid_player_id_yields_error_report() {
    let mock_server = MockServer::start().await;
    let (status, body) = get_json(app(&mock_server.uri()), "/api/player/kohli").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("kohli"));
    assert_eq!(body["formats"], serde_json::json!({}));
}

#[tokio::test]
async fn test_search_route_returns_matches() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ci/content/player/search.html"))
        .and(query_param("search", "kohli"))
        .and(query_param("type", "player"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_HTML))
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(app(&mock_server.uri()), "/api/search/kohli").await;

    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert!(!results.is_empty());
    assert_eq!(results[0]["player_id"], "253802");
    assert_eq!(results[0]["name"], "Virat Kohli");
}

#[tokio::test]
async fn test_search_route_fails_soft() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(app(&mock_server.uri()), "/api/search/kohli").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}
