//! Contract Test: GET /
//!
//! 給付額集約APIのステータスコードとレスポンス本文の契約テスト

use crate::support::{
    create_test_router,
    upstream::{benefit_body, start_untouched_upstream, start_upstream},
};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, content_type, body)
}

fn assert_json_content_type(content_type: Option<String>) {
    let content_type = content_type.expect("content-type header missing");
    assert!(content_type.contains("application/json"), "{}", content_type);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = create_test_router(Vec::new());

    let (status, content_type, body) = send(app, Method::GET, "/test").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_json_content_type(content_type);
    assert_eq!(body, json!({"error": "route not found"}));
}

#[tokio::test]
async fn non_get_method_on_root_returns_404() {
    let upstream = start_untouched_upstream().await;
    let app = create_test_router(vec![upstream.uri()]);

    let (status, _, body) = send(app, Method::POST, "/?member_id=1").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "route not found"}));
}

#[tokio::test]
async fn route_check_precedes_upstream_check() {
    // アップストリーム未設定でもルート不一致は404
    let app = create_test_router(Vec::new());

    let (status, _, _) = send(app, Method::DELETE, "/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn no_upstreams_returns_409() {
    let app = create_test_router(Vec::new());

    let (status, content_type, body) = send(app, Method::GET, "/?member_id=1").await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_json_content_type(content_type);
    assert_eq!(body, json!({"error": "no external API has been configured"}));
}

#[tokio::test]
async fn missing_member_id_returns_400_without_calling_upstreams() {
    let upstream = start_untouched_upstream().await;
    let app = create_test_router(vec![upstream.uri()]);

    let (status, content_type, body) = send(app, Method::GET, "/").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_content_type(content_type);
    assert_eq!(body, json!({"error": "member_id is undefined"}));
}

#[tokio::test]
async fn one_failing_upstream_returns_422_with_error_body() {
    let ok = start_upstream("1", 200, benefit_body(10, 20, 30)).await;
    let failing = start_upstream("1", 400, json!({"error": "Not Found"})).await;
    let app = create_test_router(vec![ok.uri(), failing.uri()]);

    let (status, content_type, body) = send(app, Method::GET, "/?member_id=1").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_json_content_type(content_type);
    assert_eq!(body["error"], "couldn't process request");

    let error_body: Value =
        serde_json::from_str(body["errorBody"].as_str().expect("errorBody missing")).unwrap();
    assert_eq!(error_body, json!({"error": "Not Found"}));
}

#[tokio::test]
async fn unreachable_upstream_returns_422_without_error_body() {
    let ok = start_upstream("1", 200, benefit_body(10, 20, 30)).await;
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let unreachable = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let app = create_test_router(vec![ok.uri(), unreachable]);

    let (status, _, body) = send(app, Method::GET, "/?member_id=1").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({"error": "couldn't process request"}));
}

#[tokio::test]
async fn default_strategy_is_average() {
    let first = start_upstream("1", 200, benefit_body(10, 20, 30)).await;
    let second = start_upstream("1", 200, benefit_body(30, 40, 50)).await;
    let app = create_test_router(vec![first.uri(), second.uri()]);

    let (status, content_type, body) = send(app, Method::GET, "/?member_id=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_json_content_type(content_type);
    assert_eq!(body, json!({"deductible": 20, "stop_loss": 30, "oop_max": 40}));
}

#[tokio::test]
async fn max_strategy_picks_highest_values() {
    let first = start_upstream("1", 200, benefit_body(10, 20, 30)).await;
    let second = start_upstream("1", 200, benefit_body(30, 40, 50)).await;
    let app = create_test_router(vec![first.uri(), second.uri()]);

    let (status, _, body) = send(app, Method::GET, "/?member_id=1&strategy=max").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deductible": 30, "stop_loss": 40, "oop_max": 50}));
}

#[tokio::test]
async fn every_strategy_is_applied_per_field() {
    let cases = [
        ("min", json!({"deductible": 10, "stop_loss": 5, "oop_max": 30})),
        ("max", json!({"deductible": 30, "stop_loss": 40, "oop_max": 50})),
        ("sum", json!({"deductible": 40, "stop_loss": 45, "oop_max": 80})),
        ("avg", json!({"deductible": 20, "stop_loss": 22.5, "oop_max": 40})),
        ("median", json!({"deductible": 20, "stop_loss": 22.5, "oop_max": 40})),
    ];

    for (strategy, expected) in cases {
        let first = start_upstream("42", 200, benefit_body(10, 40, 30)).await;
        let second = start_upstream("42", 200, benefit_body(30, 5, 50)).await;
        let app = create_test_router(vec![first.uri(), second.uri()]);

        let uri = format!("/?member_id=42&strategy={}", strategy);
        let (status, _, body) = send(app, Method::GET, &uri).await;

        assert_eq!(status, StatusCode::OK, "strategy {}", strategy);
        assert_eq!(body, expected, "strategy {}", strategy);
    }
}

#[tokio::test]
async fn member_id_is_forwarded_to_every_upstream() {
    let upstreams = [
        start_upstream("member-7", 200, benefit_body(1, 2, 3)).await,
        start_upstream("member-7", 200, benefit_body(4, 5, 6)).await,
        start_upstream("member-7", 200, benefit_body(7, 8, 9)).await,
    ];
    let app = create_test_router(upstreams.iter().map(|u| u.uri()).collect());

    let (status, _, body) = send(app, Method::GET, "/?member_id=member-7&strategy=sum").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deductible": 12, "stop_loss": 15, "oop_max": 18}));
}
