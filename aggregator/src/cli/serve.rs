//! serve サブコマンド
//!
//! アグリゲーターサーバーを起動します。

use crate::config::load_from_env;
use benefits_aggregator_common::config::{parse_upstreams, AggregatorConfig};
use clap::Args;

/// serve サブコマンドの引数
///
/// 未指定の項目は環境変数（旧名 `PORT` / `EXTERNAL_APIS` / `HOST` を含む）、
/// それもなければデフォルト値を使う。
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Listen port [default: 3000]
    #[arg(short, long, env = "BENEFITS_AGGREGATOR_PORT")]
    pub port: Option<u16>,

    /// Bind address [default: 0.0.0.0]
    #[arg(short = 'H', long, env = "BENEFITS_AGGREGATOR_HOST")]
    pub host: Option<String>,

    /// Comma-separated upstream base URLs
    #[arg(short, long, env = "BENEFITS_AGGREGATOR_UPSTREAMS")]
    pub upstreams: Option<String>,
}

impl ServeArgs {
    /// 引数からアグリゲーター設定を構築
    pub fn into_config(self) -> AggregatorConfig {
        let fallback = load_from_env();
        AggregatorConfig {
            host: self.host.unwrap_or(fallback.host),
            port: self.port.unwrap_or(fallback.port),
            upstreams: self
                .upstreams
                .map(|raw| parse_upstreams(&raw))
                .unwrap_or(fallback.upstreams),
        }
    }
}
