//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables with fallback
//! to deprecated variable names with warning logs.

use benefits_aggregator_common::config::{parse_upstreams, AggregatorConfig};

/// 待ち受けアドレスの環境変数名
pub const HOST_ENV: &str = "BENEFITS_AGGREGATOR_HOST";
/// 待ち受けポートの環境変数名
pub const PORT_ENV: &str = "BENEFITS_AGGREGATOR_PORT";
/// アップストリーム一覧（カンマ区切り）の環境変数名
pub const UPSTREAMS_ENV: &str = "BENEFITS_AGGREGATOR_UPSTREAMS";
/// ログレベルの環境変数名
pub const LOG_LEVEL_ENV: &str = "BENEFITS_AGGREGATOR_LOG_LEVEL";

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use benefits_aggregator::config::get_env_with_fallback;
///
/// let port = get_env_with_fallback("BENEFITS_AGGREGATOR_PORT", "PORT");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Returns `default` if neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// 環境変数からアグリゲーター設定を読み込む
///
/// 旧名 `HOST` / `PORT` / `EXTERNAL_APIS` も警告付きで受け付ける。
pub fn load_from_env() -> AggregatorConfig {
    let defaults = AggregatorConfig::default();
    let host = get_env_with_fallback_or(HOST_ENV, "HOST", &defaults.host);
    let port = get_env_with_fallback_parse(PORT_ENV, "PORT", defaults.port);
    let upstreams = get_env_with_fallback(UPSTREAMS_ENV, "EXTERNAL_APIS")
        .map(|raw| parse_upstreams(&raw))
        .unwrap_or_default();

    AggregatorConfig {
        host,
        port,
        upstreams,
    }
}
