//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `AggregatorError::external_message()` はクライアントへ返す固定文言を返す。
//! 詳細（アップストリームURL等）は `Display` 経由でログにのみ出力する。

use thiserror::Error;

/// アップストリーム呼び出しのエラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UpstreamError {
    /// アップストリームが成功以外のステータスを返した
    #[error("Upstream {target} returned status {status}")]
    Status {
        /// 呼び出し先
        target: String,
        /// HTTPステータスコード
        status: u16,
        /// レスポンス本文（取得できた場合のみ）
        body: Option<String>,
    },

    /// 接続失敗・タイムアウト・不正なレスポンス本文
    #[error("Upstream {target} transport error: {message}")]
    Transport {
        /// 呼び出し先
        target: String,
        /// エラー詳細
        message: String,
    },
}

impl UpstreamError {
    /// 呼び出し先のベースURL
    pub fn target(&self) -> &str {
        match self {
            Self::Status { target, .. } | Self::Transport { target, .. } => target,
        }
    }

    /// 診断用のレスポンス本文
    ///
    /// ステータスエラーで本文を取得できた場合のみ `Some` を返す。
    pub fn diagnostic_body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.as_deref(),
            Self::Transport { .. } => None,
        }
    }
}

/// Aggregator error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AggregatorError {
    /// パスが `/` 以外、またはメソッドがGET以外
    #[error("Route not found: {method} {path}")]
    RouteNotFound {
        /// リクエストメソッド
        method: String,
        /// リクエストパス
        path: String,
    },

    /// アップストリームが1件も設定されていない
    #[error("No upstreams configured")]
    NoUpstreamsConfigured,

    /// 必須クエリパラメータが欠落している
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// アップストリーム呼び出しの失敗
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl AggregatorError {
    /// Returns the stable error message for external clients.
    ///
    /// Internal details such as upstream URLs are never included; use the
    /// `Display` implementation for server logs.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::RouteNotFound { .. } => "route not found",
            Self::NoUpstreamsConfigured => "no external API has been configured",
            Self::MissingParameter("member_id") => "member_id is undefined",
            Self::MissingParameter(_) => "required parameter is undefined",
            Self::Upstream(_) => "couldn't process request",
        }
    }

    /// クライアントへ返す診断用本文（アップストリームのレスポンス本文）
    pub fn error_body(&self) -> Option<&str> {
        match self {
            Self::Upstream(err) => err.diagnostic_body(),
            _ => None,
        }
    }
}
