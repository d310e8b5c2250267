//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Response body is not valid JSON
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
