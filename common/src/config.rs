//! 設定管理
//!
//! AggregatorConfig等の設定構造体

use crate::types::UpstreamTarget;
use serde::{Deserialize, Serialize};

/// アグリゲーター設定
///
/// 起動時に一度だけ構築し、以降は読み取り専用で共有する。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatorConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// アップストリームのベースURL一覧 (デフォルト: 空)
    #[serde(default)]
    pub upstreams: Vec<UpstreamTarget>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            upstreams: Vec::new(),
        }
    }
}

impl AggregatorConfig {
    /// バインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// カンマ区切りのアップストリーム一覧をパースする
///
/// 各要素の前後の空白は除去し、空の要素は捨てる。
pub fn parse_upstreams(raw: &str) -> Vec<UpstreamTarget> {
    raw.split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(UpstreamTarget::from)
        .collect()
}
