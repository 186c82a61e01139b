//! Router tests over the file-backed adapters in a scratch directory.

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;
use tokio::sync::{Mutex, RwLock};
use tower::ServiceExt;

use warplog_application::commands::catalog_commands;
use warplog_application::{AppState, Metrics};
use warplog_domain::{BannerCatalog, RuntimeConfig};
use warplog_infrastructure::{BannerCatalogFile, DefaultHealthService, JsonPullStore};
use warplog_interfaces_http::build_router;

const TOKEN: &str = "test-token";
const PLAYER: &str = "800123456";

const CATALOG: &str = r#"[
    {"gacha_id": "2041", "type": "11", "name": "Butterfly on Swordtip",
     "startDate": "2024-01-01", "endDate": "2024-01-10",
     "pickupItems": [{"id": "1308", "name": "Acheron", "rarity": 5}]},
    {"gacha_id": "3041", "type": "12", "name": "Brilliant Fixation",
     "startDate": "2024-01-01", "endDate": "2024-01-20",
     "pickupItems": [{"id": "23024", "rarity": 5}]}
]"#;

struct TestApp {
    router: Router,
    state: AppState,
    _dir: TempDir,
}

async fn setup(load_catalog: bool) -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog_path = dir.path().join("banners.json");
    std::fs::write(&catalog_path, CATALOG).expect("write catalog");

    let config = RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        api_token: Some(TOKEN.to_string()),
        data_dir: dir.path().to_string_lossy().to_string(),
        banner_catalog_path: catalog_path.to_string_lossy().to_string(),
        source_utc_offset_hours: 8,
        max_body_bytes: 1024 * 1024,
        request_timeout_seconds: 5,
        max_import_records: 1000,
    };
    let pull_repo = Arc::new(JsonPullStore::new(dir.path()));
    let catalog = Arc::new(RwLock::new(BannerCatalog::default()));
    let state = AppState {
        config,
        pull_repo: pull_repo.clone(),
        catalog_repo: Arc::new(BannerCatalogFile::new(&catalog_path)),
        health_service: Arc::new(DefaultHealthService::new(pull_repo, catalog.clone())),
        catalog,
        import_lock: Arc::new(Mutex::new(())),
        metrics: Arc::new(Metrics::default()),
    };
    if load_catalog {
        catalog_commands::reload_catalog(&state)
            .await
            .expect("reload catalog");
    }
    TestApp {
        router: build_router(state.clone()),
        state,
        _dir: dir,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .body(Body::empty())
        .expect("request")
}

async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn record(id: u64, gacha_type: &str, rank: u8, item_id: &str, time: &str) -> String {
    format!(
        r#"{{"uid":"{PLAYER}","gacha_id":"2041","gacha_type":"{gacha_type}","item_id":"{item_id}",
            "count":"1","time":"{time}","name":"item","lang":"en-us","item_type":"",
            "rank_type":"{rank}","id":"{id}"}}"#
    )
}

fn vendor_response() -> String {
    let mut list: Vec<String> = (1..=6)
        .map(|n| record(n, "11", 3, "20000", &format!("2024-01-05 10:00:0{}", n)))
        .collect();
    list.push(record(7, "11", 5, "1308", "2024-01-05 10:00:07"));
    list.push(record(8, "11", 3, "20000", "2024-01-05 10:00:08"));
    format!(
        r#"{{"retcode":0,"message":"OK","data":{{"page":"1","size":"20","list":[{}]}}}}"#,
        list.join(",")
    )
}

async fn import(app: &TestApp, body: Vec<u8>, gzip: bool) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder()
        .method("POST")
        .uri(format!("/v1/players/{}/import", PLAYER))
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
        .header(header::CONTENT_TYPE, "application/json");
    if gzip {
        request = request.header(header::CONTENT_ENCODING, "gzip");
    }
    send(app, request.body(Body::from(body)).expect("request")).await
}

#[tokio::test]
async fn health_endpoints_skip_auth() {
    let app = setup(true).await;
    let live = Request::builder()
        .uri("/v1/ops/health/live")
        .body(Body::empty())
        .expect("request");
    assert_eq!(send(&app, live).await.0, StatusCode::OK);

    let ready = Request::builder()
        .uri("/v1/ops/health/ready")
        .body(Body::empty())
        .expect("request");
    let (status, json) = send(&app, ready).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["catalog"], "ok");
}

#[tokio::test]
async fn not_ready_without_catalog() {
    let app = setup(false).await;
    let (status, json) = send(&app, get("/v1/ops/health/ready")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["storage"], "ok");
    assert_eq!(json["catalog"], "empty");

    let (status, json) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/v1/catalog/reload")
            .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
            .body(Body::empty())
            .expect("request"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["banners"], 2);
    assert_eq!(send(&app, get("/v1/ops/health/ready")).await.0, StatusCode::OK);
}

#[tokio::test]
async fn rejects_missing_or_wrong_token() {
    let app = setup(true).await;
    let anonymous = Request::builder()
        .uri(format!("/v1/players/{}/overview", PLAYER))
        .body(Body::empty())
        .expect("request");
    let (status, json) = send(&app, anonymous).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "unauthorized");

    let wrong = Request::builder()
        .uri("/v1/catalog/banners")
        .header(header::AUTHORIZATION, "Bearer nope")
        .body(Body::empty())
        .expect("request");
    assert_eq!(send(&app, wrong).await.0, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn gzip_import_then_derived_views() {
    let app = setup(true).await;
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(vendor_response().as_bytes())
        .expect("compress");
    let (status, report) = import(&app, encoder.finish().expect("gzip"), true).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["received"], 8);
    assert_eq!(report["imported"], 8);
    assert_eq!(report["duplicates"], 0);

    let (status, report) = import(&app, vendor_response().into_bytes(), false).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["imported"], 0);
    assert_eq!(report["duplicates"], 8);

    let (status, pity) = send(&app, get(&format!("/v1/players/{}/pity?category=11", PLAYER))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pity["current_pity"], 1);
    assert_eq!(pity["records"][0]["pity_count"], 7);
    assert_eq!(pity["records"][0]["pull"]["outcome"], "WIN");
    assert_eq!(pity["records"][0]["pull"]["id"], "7");

    let (_, stats) = send(
        &app,
        get(&format!("/v1/players/{}/stats?category=CharacterEvent", PLAYER)),
    )
    .await;
    assert_eq!(stats["total_pulls"], 8);
    assert_eq!(stats["win_rate"], 100.0);
    assert_eq!(stats["pulls_until_cap"], 89);

    let (_, pulls) = send(&app, get(&format!("/v1/players/{}/pulls?limit=2", PLAYER))).await;
    let ids: Vec<&str> = pulls
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|pull| pull["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["8", "7"]);
    assert_eq!(pulls[1]["resolved_banner"]["banner_id"], "2041");

    let (_, banners) = send(&app, get(&format!("/v1/players/{}/banners", PLAYER))).await;
    assert_eq!(banners.as_array().expect("array").len(), 1);
    assert_eq!(banners[0]["banner"]["banner_id"], "2041");

    let (_, timeline) = send(&app, get(&format!("/v1/players/{}/timeline", PLAYER))).await;
    assert_eq!(timeline[0]["date"], "2024-01-05");
    assert_eq!(timeline[0]["pulls"], 8);
    assert_eq!(timeline[0]["banner"]["banner_id"], "2041");

    let text = app.state.metrics.render_prometheus();
    assert!(text.contains("warplog_imported_pulls_total 8\n"));
}

#[tokio::test]
async fn bad_rows_are_skipped_not_fatal() {
    let app = setup(true).await;
    let bad_rows = [
        r#"{"id":"99","time":"2024-01-05 10:00:09","gacha_type":"11","rank_type":"3","count":true}"#,
        "null",
        r#"{"id":"99","time":"2024-01-05 10:00:09","gacha_type":"11","rank_type":"3","rarity":"3"}"#,
    ];
    for (n, bad) in bad_rows.iter().enumerate() {
        let good = record(n as u64 + 1, "11", 3, "20000", "2024-01-05 10:00:01");
        let body = format!("[{},{}]", good, bad);
        let (status, report) = import(&app, body.into_bytes(), false).await;
        assert_eq!(status, StatusCode::OK, "row {}", bad);
        assert_eq!(report["received"], 2);
        assert_eq!(report["imported"], 1);
        assert_eq!(report["skipped"], 1);
        assert!(report["skipped_reasons"][0]
            .as_str()
            .unwrap_or_default()
            .starts_with("record 1:"));
    }

    let (_, pulls) = send(&app, get(&format!("/v1/players/{}/pulls", PLAYER))).await;
    assert_eq!(pulls.as_array().expect("array").len(), 3);
}

#[tokio::test]
async fn lists_and_deletes_players() {
    let app = setup(true).await;
    let (_, players) = send(&app, get("/v1/players")).await;
    assert_eq!(players, serde_json::json!([]));

    let (_, report) = import(&app, vendor_response().into_bytes(), false).await;
    assert_eq!(report["imported"], 8);
    let (_, players) = send(&app, get("/v1/players")).await;
    assert_eq!(players, serde_json::json!([PLAYER]));

    let delete = |token: Option<&str>| {
        let mut request = Request::builder()
            .method("DELETE")
            .uri(format!("/v1/players/{}", PLAYER));
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        request.body(Body::empty()).expect("request")
    };
    assert_eq!(send(&app, delete(None)).await.0, StatusCode::UNAUTHORIZED);

    let (status, deletion) = send(&app, delete(Some(TOKEN))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deletion["player_id"], PLAYER);
    assert_eq!(deletion["removed_pulls"], 8);

    let (_, players) = send(&app, get("/v1/players")).await;
    assert_eq!(players, serde_json::json!([]));
    assert_eq!(send(&app, delete(Some(TOKEN))).await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn maps_errors_to_status_codes() {
    let app = setup(true).await;
    let (status, json) = send(&app, get(&format!("/v1/players/{}/stats?category=99", PLAYER))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap_or_default().contains("99"));

    let (status, _) = send(&app, get(&format!("/v1/players/{}/banners/9999", PLAYER))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = import(&app, b"not json".to_vec(), false).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn catalog_listing_and_metrics_text() {
    let app = setup(true).await;
    let (status, banners) = send(&app, get("/v1/catalog/banners")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(banners.as_array().expect("array").len(), 2);

    let (_, diagnostics) = send(&app, get("/v1/catalog/diagnostics")).await;
    assert_eq!(diagnostics["banners"], 2);
    assert_eq!(diagnostics["overlaps"].as_array().expect("array").len(), 0);
    assert_eq!(diagnostics["revision"].as_str().map(str::len), Some(64));

    let response = app
        .router
        .clone()
        .oneshot(get("/v1/ops/metrics/prometheus"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap_or_default()
        .starts_with("text/plain"));
}
