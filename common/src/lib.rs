//! Benefits Aggregator 共通ライブラリ
//!
//! アグリゲーターとアップストリーム間で共有する型・エラー・設定

#![warn(missing_docs)]

/// 設定構造体
pub mod config;

/// エラー型定義
pub mod error;

/// 共通型定義
pub mod types;
