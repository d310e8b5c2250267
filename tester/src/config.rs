//! 固定設定
//!
//! コマンドライン引数・環境変数・設定ファイルは読まない。実行時は常に `TesterConfig::default()`。

use reqwest::Url;
use std::time::Duration;

/// ベースURL
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// リクエストタイムアウト（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// ジャーニー検査に使うメールアドレス
pub const DEFAULT_JOURNEY_EMAIL: &str = "user@example.com";

/// テスター設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesterConfig {
    /// APIのベースURL（末尾の`/`なし）
    pub base_url: String,
    /// 1リクエストあたりのタイムアウト
    pub timeout: Duration,
    /// ジャーニー検査のメールアドレス
    pub journey_email: String,
    /// API利用例を表示するか（既定はオフ）
    pub show_usage: bool,
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            journey_email: DEFAULT_JOURNEY_EMAIL.to_string(),
            show_usage: false,
        }
    }
}

impl TesterConfig {
    /// トラブルシューティング表示用のポート番号
    pub fn port_hint(&self) -> String {
        port_hint(&self.base_url)
    }
}

/// ベースURLからポート番号を取り出す
///
/// 明示されたポート、なければスキームの既定ポート。
pub fn port_hint(base_url: &str) -> String {
    match Url::parse(base_url)
        .ok()
        .and_then(|url| url.port_or_known_default())
    {
        Some(port) => port.to_string(),
        None => base_url
            .rsplit(':')
            .next()
            .and_then(|tail| tail.split('/').next())
            .unwrap_or_default()
            .to_string(),
    }
}
