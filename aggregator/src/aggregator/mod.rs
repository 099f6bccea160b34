//! ファンアウト集約
//!
//! 全アップストリームへ同時に問い合わせ、全件の完了を待ってから
//! フィールドごとにストラテジーを適用する。1件でも失敗すれば全体が失敗する。

use crate::strategy::Strategy;
use crate::upstream::UpstreamClient;
use benefits_aggregator_common::{
    error::AggregatorError,
    types::{BenefitRecord, UpstreamTarget},
};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

/// アグリゲーター
///
/// アップストリーム一覧は起動時に固定され、リクエスト間で共有される。
#[derive(Debug, Clone)]
pub struct Aggregator {
    targets: Arc<[UpstreamTarget]>,
    client: UpstreamClient,
}

impl Aggregator {
    /// 新しいアグリゲーターを作成
    pub fn new(targets: impl Into<Arc<[UpstreamTarget]>>, client: UpstreamClient) -> Self {
        Self {
            targets: targets.into(),
            client,
        }
    }

    /// 設定済みアップストリーム一覧
    pub fn targets(&self) -> &[UpstreamTarget] {
        &self.targets
    }

    /// アップストリームが設定されていないか
    pub fn is_unconfigured(&self) -> bool {
        self.targets.is_empty()
    }

    /// 会員IDの給付額を全アップストリームから集約する
    ///
    /// 最初の失敗で他の呼び出しを打ち切らない。全件完了後、設定順で
    /// 最初に見つかったエラーを返す。
    pub async fn aggregate(
        &self,
        member_id: &str,
        strategy: Strategy,
    ) -> Result<BenefitRecord, AggregatorError> {
        if self.is_unconfigured() {
            return Err(AggregatorError::NoUpstreamsConfigured);
        }

        let outcomes = join_all(
            self.targets
                .iter()
                .map(|target| self.client.fetch(target, member_id)),
        )
        .await;

        let mut records = Vec::with_capacity(outcomes.len());
        let mut first_error = None;
        for outcome in outcomes {
            match outcome {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(
                        error = %err,
                        body = err.diagnostic_body().unwrap_or_default(),
                        "Upstream request failed"
                    );
                    first_error.get_or_insert(err);
                }
            }
        }
        if let Some(err) = first_error {
            return Err(err.into());
        }

        debug!(
            upstreams = records.len(),
            strategy = %strategy,
            "Coalescing upstream responses"
        );
        Ok(coalesce(&records, strategy))
    }
}

/// フィールドごとに独立してストラテジーを適用する
pub fn coalesce(records: &[BenefitRecord], strategy: Strategy) -> BenefitRecord {
    let field = |select: fn(&BenefitRecord) -> f64| {
        let values: Vec<f64> = records.iter().map(select).collect();
        strategy.coalesce(&values)
    };

    BenefitRecord {
        deductible: field(|r| r.deductible),
        stop_loss: field(|r| r.stop_loss),
        oop_max: field(|r| r.oop_max),
    }
}
