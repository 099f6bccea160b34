//! wiremockによるアップストリームのスタブ

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// アップストリームが返す給付額ペイロード
#[allow(dead_code)]
pub fn benefit_body(deductible: u64, stop_loss: u64, oop_max: u64) -> Value {
    json!({
        "deductible": deductible,
        "stop_loss": stop_loss,
        "oop_max": oop_max
    })
}

/// `GET /?member_id=<member_id>` に1回だけ応答するアップストリームを起動する
#[allow(dead_code)]
pub async fn start_upstream(member_id: &str, status: u16, body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("member_id", member_id))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// 呼び出されてはならないアップストリームを起動する
#[allow(dead_code)]
pub async fn start_untouched_upstream() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(benefit_body(0, 0, 0)))
        .expect(0)
        .mount(&server)
        .await;
    server
}
