//! 給付額集約APIハンドラー
//!
//! リクエストの検証は次の順で行い、最初に該当したものを返す。
//!
//! 1. パスが `/` 以外、またはメソッドがGET以外 → 404
//! 2. アップストリーム未設定 → 409（ネットワークアクセス前に判定）
//! 3. `member_id` 未指定 → 400
//! 4. 集約を実行し、失敗時は 422

use crate::{api::error::AppError, strategy::Strategy, AppState};
use axum::{
    extract::{RawQuery, State},
    http::{Method, Uri},
    Json,
};
use benefits_aggregator_common::{error::AggregatorError, types::BenefitRecord};
use tracing::debug;

/// `member_id` クエリパラメータ名
const MEMBER_ID_PARAM: &str = "member_id";

/// `strategy` クエリパラメータ名
const STRATEGY_PARAM: &str = "strategy";

/// GET / - 全アップストリームの給付額を集約
pub async fn get_benefits(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    RawQuery(query): RawQuery,
) -> Result<Json<BenefitRecord>, AppError> {
    if method != Method::GET {
        return Err(route_not_found_error(&method, &uri).into());
    }

    if state.aggregator.is_unconfigured() {
        return Err(AggregatorError::NoUpstreamsConfigured.into());
    }

    let query = query.as_deref();
    let member_id = query_param(query, MEMBER_ID_PARAM)
        .filter(|id| !id.is_empty())
        .ok_or(AggregatorError::MissingParameter(MEMBER_ID_PARAM))?;

    let strategy = Strategy::resolve(query_param(query, STRATEGY_PARAM).as_deref());
    debug!(member_id = %member_id, strategy = %strategy, "Aggregating benefits");

    let record = state.aggregator.aggregate(&member_id, strategy).await?;
    Ok(Json(record))
}

/// 未定義ルートのフォールバック
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    route_not_found_error(&method, &uri).into()
}

fn route_not_found_error(method: &Method, uri: &Uri) -> AggregatorError {
    AggregatorError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// クエリ文字列から最初に現れた値を取り出す
///
/// デコードできないクエリはパラメータなしとして扱う。
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query?).ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}
