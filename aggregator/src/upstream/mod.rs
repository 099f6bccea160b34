//! アップストリームクライアント
//!
//! 設定されたアップストリームに会員IDを問い合わせ、BenefitRecordを取得する。
//! リトライ・タイムアウト上書き・サーキットブレーカーは持たない。

use benefits_aggregator_common::{
    error::UpstreamError,
    types::{BenefitRecord, UpstreamTarget},
};
use reqwest::Client;
use tracing::debug;

/// アップストリームクライアント
#[derive(Debug, Clone, Default)]
pub struct UpstreamClient {
    http_client: Client,
}

impl UpstreamClient {
    /// 既存のHTTPクライアントを使って作成
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    /// `GET <target>/?member_id=<member_id>` を1回だけ呼び出す
    ///
    /// 成功以外のステータスでは本文をBenefitRecordとして解釈せず、
    /// 診断用に生の本文を [`UpstreamError::Status`] に格納する。
    pub async fn fetch(
        &self,
        target: &UpstreamTarget,
        member_id: &str,
    ) -> Result<BenefitRecord, UpstreamError> {
        debug!(upstream = %target, member_id, "Querying upstream");

        let response = self
            .http_client
            .get(target.query_url())
            .query(&[("member_id", member_id)])
            .send()
            .await
            .map_err(|e| UpstreamError::Transport {
                target: target.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.ok();
            return Err(UpstreamError::Status {
                target: target.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<BenefitRecord>()
            .await
            .map_err(|e| UpstreamError::Transport {
                target: target.to_string(),
                message: format!("Failed to parse upstream response: {}", e),
            })
    }
}
