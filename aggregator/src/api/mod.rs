//! REST APIハンドラー
//!
//! 給付額集約API（`GET /`）とルート未定義時のフォールバック

/// 給付額集約ハンドラー
pub mod benefits;
/// APIエラーレスポンス
pub mod error;

use crate::AppState;
use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
///
/// `/` はメソッドを問わずハンドラーで受け、GET以外は404として扱う。
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(benefits::get_benefits))
        .fallback(benefits::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
