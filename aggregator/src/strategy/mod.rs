//! 集約ストラテジー
//!
//! 複数アップストリームから得た同一フィールドの値を1つの数値にまとめる。
//! ストラテジーは固定集合（min / max / sum / avg）で、実行時に追加できない。

use std::fmt;

/// 数値列を1つの数値にまとめる関数
pub type StrategyFunc = fn(&[f64]) -> f64;

/// 集約ストラテジー
///
/// 名前が未指定・未知の場合は [`Strategy::Avg`] にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// 最小値
    Min,
    /// 最大値
    Max,
    /// 合計
    Sum,
    /// 算術平均
    #[default]
    Avg,
}

impl Strategy {
    /// 登録済みの全ストラテジー
    pub const ALL: [Strategy; 4] = [Strategy::Min, Strategy::Max, Strategy::Sum, Strategy::Avg];

    /// 名前からストラテジーを引く（未登録なら `None`）
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "sum" => Some(Self::Sum),
            "avg" => Some(Self::Avg),
            _ => None,
        }
    }

    /// リクエストで指定された名前を解決する
    ///
    /// 空・未指定・未知の名前はエラーにせず平均を返す。
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::from_name).unwrap_or_default()
    }

    /// ストラテジー名
    pub fn name(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Sum => "sum",
            Self::Avg => "avg",
        }
    }

    /// 対応する集約関数
    pub fn func(self) -> StrategyFunc {
        match self {
            Self::Min => minimum,
            Self::Max => maximum,
            Self::Sum => summation,
            Self::Avg => average,
        }
    }

    /// 数値列を1つにまとめる
    pub fn coalesce(self, values: &[f64]) -> f64 {
        (self.func())(values)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// 空入力はすべてのストラテジーで0を返す

/// 最小値
pub fn minimum(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// 最大値
pub fn maximum(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// 合計
pub fn summation(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, value| acc + value)
}

/// 算術平均
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    summation(values) / values.len() as f64
}
