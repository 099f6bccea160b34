//! テスト共通ユーティリティ

pub mod http;
pub mod upstream;

use axum::Router;
use benefits_aggregator::{api, AppState};
use benefits_aggregator_common::{config::AggregatorConfig, types::UpstreamTarget};

/// 指定したアップストリームを持つテスト用ルーターを作成する
#[allow(dead_code)]
pub fn create_test_router(upstreams: Vec<String>) -> Router {
    let config = AggregatorConfig {
        upstreams: upstreams.into_iter().map(UpstreamTarget::from).collect(),
        ..AggregatorConfig::default()
    };
    api::create_router(AppState::new(&config, reqwest::Client::new()))
}
