//! 共通型定義
//!
//! BenefitRecord, UpstreamTarget等のコアデータ型

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// 会員ごとの給付額
///
/// アップストリームが返すペイロードと、アグリゲーター自身が返す
/// レスポンスの両方で同じ形を使う。フィールド間に制約はない。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct BenefitRecord {
    /// 免責額
    #[serde(serialize_with = "serialize_number")]
    pub deductible: f64,
    /// ストップロス
    #[serde(serialize_with = "serialize_number")]
    pub stop_loss: f64,
    /// 自己負担上限額
    #[serde(serialize_with = "serialize_number")]
    pub oop_max: f64,
}

impl BenefitRecord {
    /// 新しいレコードを作成
    pub fn new(deductible: f64, stop_loss: f64, oop_max: f64) -> Self {
        Self {
            deductible,
            stop_loss,
            oop_max,
        }
    }
}

/// 整数値の場合は小数部なしでシリアライズする（`20.0` ではなく `20`）
///
/// 1e21未満の整数値は指数表記にせず全桁を出力する（`1e+20` ではなく
/// `100000000000000000000`）。
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // この範囲の整数値はi128で正確に表現できる
    const MAX_PLAIN_INTEGER: f64 = 1e21;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_PLAIN_INTEGER {
        serializer.serialize_i128(*value as i128)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// アップストリームのベースURL
///
/// 起動時に一度だけ設定され、プロセス終了まで変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpstreamTarget(String);

impl UpstreamTarget {
    /// ベースURLからターゲットを作成
    pub fn new(base_url: impl Into<String>) -> Self {
        Self(base_url.into())
    }

    /// ベースURLを返す
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 会員IDを問い合わせるURL（クエリ部分を除く）
    pub fn query_url(&self) -> String {
        format!("{}/", self.0)
    }
}

impl From<String> for UpstreamTarget {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UpstreamTarget {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for UpstreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
