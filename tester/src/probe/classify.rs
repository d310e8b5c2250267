//! プローブ結果の分類
//!
//! 優先順位: 接続失敗 → タイムアウト → その他の例外 → 200以外 → 不正/失敗エンベロープ → 成功

use quiz_api_tester_common::Envelope;
use std::time::Duration;
use thiserror::Error;

/// エラー本文の抜粋として表示する最大文字数
pub const BODY_EXCERPT_MAX_CHARS: usize = 200;

/// プローブ失敗の種別
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    /// サーバーに接続できない
    #[error("Connection error - is the server running?")]
    Connection,

    /// タイムアウト内に応答がない
    #[error("Timeout - server took too long to respond")]
    Timeout,

    /// その他のリクエスト失敗
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// 200以外のステータス
    #[error("HTTP error {status}: {excerpt}")]
    HttpStatus {
        /// ステータスコード
        status: u16,
        /// 本文の先頭（最大200文字）
        excerpt: String,
    },

    /// 200だがJSONとして読めない
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    /// `success` が偽
    #[error("API returned error: {0}")]
    Unsuccessful(String),
}

/// 1回のプローブの結果
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    /// リクエストURL
    pub url: String,
    /// 受信したステータスコード（応答がなければ None）
    pub status_code: Option<u16>,
    /// 経過時間（表示専用）
    pub elapsed: Duration,
    /// 失敗理由（成功時は None）
    pub failure: Option<ProbeFailure>,
    /// パース済みの本文
    pub payload: Option<Envelope>,
}

impl ProbeOutcome {
    /// 応答を受け取れなかった失敗
    pub fn unreachable(url: String, elapsed: Duration, failure: ProbeFailure) -> Self {
        Self {
            url,
            status_code: None,
            elapsed,
            failure: Some(failure),
            payload: None,
        }
    }

    /// 受信した応答を分類して作成
    pub fn from_response(url: String, elapsed: Duration, status: u16, body: &str) -> Self {
        let (failure, payload) = classify_response(status, body);
        Self {
            url,
            status_code: Some(status),
            elapsed,
            failure,
            payload,
        }
    }

    /// 成功したか
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// 成功時の `data` 件数（失敗時は0）
    pub fn data_count(&self) -> usize {
        match (&self.failure, &self.payload) {
            (None, Some(envelope)) => envelope.record_count(),
            _ => 0,
        }
    }
}

/// 送信エラーを分類
pub fn classify_transport_error(err: &reqwest::Error) -> ProbeFailure {
    // 接続段階のタイムアウトは接続失敗として扱う
    if err.is_connect() {
        ProbeFailure::Connection
    } else if err.is_timeout() {
        ProbeFailure::Timeout
    } else {
        ProbeFailure::Unexpected(err.to_string())
    }
}

/// ステータスと本文から成否を判定
///
/// 200以外はペイロードなし。`success` が偽のエンベロープはペイロードを保持したまま失敗とする。
pub fn classify_response(status: u16, body: &str) -> (Option<ProbeFailure>, Option<Envelope>) {
    if status != 200 {
        return (
            Some(ProbeFailure::HttpStatus {
                status,
                excerpt: truncate_chars(body, BODY_EXCERPT_MAX_CHARS),
            }),
            None,
        );
    }

    match Envelope::parse(body) {
        Err(e) => (Some(ProbeFailure::InvalidBody(e.to_string())), None),
        Ok(envelope) if envelope.is_success() => (None, Some(envelope)),
        Ok(envelope) => (
            Some(ProbeFailure::Unsuccessful(envelope.as_value().to_string())),
            Some(envelope),
        ),
    }
}

/// 先頭 `max` 文字（バイトではなく文字単位）
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
