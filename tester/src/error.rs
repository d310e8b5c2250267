//! エラー型定義
//!
//! ハーネス自体のエラー。個々のプローブ失敗は [`crate::probe::ProbeFailure`] で表し、
//! ここには含めない。

use thiserror::Error;

/// API tester error type
#[derive(Debug, Error)]
pub enum TesterError {
    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Report output error
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Logging initialization error
    #[error("Logging initialization error: {0}")]
    Logging(String),
}
