//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use benefits_aggregator_common::error::AggregatorError;
use serde::Serialize;
use tracing::debug;

/// エラーレスポンス本文
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// クライアント向けエラーメッセージ
    pub error: &'static str,
    /// アップストリームが返した生のレスポンス本文
    #[serde(rename = "errorBody", skip_serializing_if = "Option::is_none")]
    pub error_body: Option<String>,
}

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub AggregatorError);

impl From<AggregatorError> for AppError {
    fn from(err: AggregatorError) -> Self {
        AppError(err)
    }
}

impl AppError {
    /// エラー種別に対応するHTTPステータス
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            AggregatorError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            AggregatorError::NoUpstreamsConfigured => StatusCode::CONFLICT,
            AggregatorError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AggregatorError::Upstream(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // 詳細はログにのみ出力し、クライアントには固定文言と上流の本文のみ返す
        debug!(error = %self.0, "Request failed");

        let status = self.status_code();
        let payload = ErrorResponse {
            error: self.0.external_message(),
            error_body: self.0.error_body().map(str::to_string),
        };

        (status, Json(payload)).into_response()
    }
}
