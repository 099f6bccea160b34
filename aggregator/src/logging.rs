//! ロギング初期化
//!
//! `tracing-subscriber` のfmtレイヤーをEnvFilter付きで登録する。

use crate::config::{get_env_with_fallback, LOG_LEVEL_ENV};
use tracing_subscriber::EnvFilter;

/// デフォルトのログレベル
const DEFAULT_LOG_LEVEL: &str = "info";

/// `DEBUG` が設定されているときのログレベル
const DEBUG_LOG_LEVEL: &str = "debug";

/// ログフィルタ文字列を決定する
///
/// `BENEFITS_AGGREGATOR_LOG_LEVEL`（旧: `LOG_LEVEL`）を優先し、未設定なら
/// `DEBUG` の有無で `debug` / `info` を選ぶ。
pub fn resolve_filter() -> String {
    get_env_with_fallback(LOG_LEVEL_ENV, "LOG_LEVEL").unwrap_or_else(|| {
        if std::env::var_os("DEBUG").is_some() {
            DEBUG_LOG_LEVEL.to_string()
        } else {
            DEFAULT_LOG_LEVEL.to_string()
        }
    })
}

/// グローバルsubscriberを初期化する
///
/// 二重初期化はエラーを返す。
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(resolve_filter())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}
