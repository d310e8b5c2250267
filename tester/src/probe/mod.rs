//! エンドポイントプローブ
//!
//! 固定エンドポイント群へGETを1回ずつ送り、結果を分類・表示する。
//! プローブは常に1件ずつ順番に実行し、並列化しない。

/// テスター本体
pub mod checker;
/// 応答の分類
pub mod classify;

pub use checker::ApiTester;
pub use classify::{ProbeFailure, ProbeOutcome};
