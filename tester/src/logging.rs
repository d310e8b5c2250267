//! ロギング初期化ユーティリティ
//!
//! レポートは標準出力に出すため、ログは標準エラーへ出力する。
//! フィルタは固定で、環境変数は参照しない。

use crate::error::TesterError;
use tracing_subscriber::EnvFilter;

/// ログフィルタ
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// 固定のログフィルタ
pub fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_LOG_LEVEL)
}

/// グローバルsubscriberを初期化
pub fn init() -> Result<(), TesterError> {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| TesterError::Logging(e.to_string()))
}
