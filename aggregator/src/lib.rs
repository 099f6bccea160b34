//! Benefits Aggregator Server
//!
//! 複数アップストリームの給付額を同時に取得し、1つにまとめる中央サーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// ファンアウト集約
pub mod aggregator;

/// 集約ストラテジー（min / max / sum / avg）
pub mod strategy;

/// アップストリームクライアント
pub mod upstream;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// CLIインターフェース
pub mod cli;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

use benefits_aggregator_common::config::AggregatorConfig;

/// アプリケーション状態
///
/// 起動時に構築した読み取り専用の設定のみを保持する。
#[derive(Clone)]
pub struct AppState {
    /// アグリゲーター
    pub aggregator: aggregator::Aggregator,
}

impl AppState {
    /// 設定からアプリケーション状態を構築
    pub fn new(config: &AggregatorConfig, http_client: reqwest::Client) -> Self {
        Self {
            aggregator: aggregator::Aggregator::new(
                config.upstreams.clone(),
                upstream::UpstreamClient::new(http_client),
            ),
        }
    }
}
