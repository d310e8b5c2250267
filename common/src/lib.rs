//! Quiz Quest API tester 共通型
//!
//! チェッカー本体とテストから共有されるデータ型・エラー型

#![warn(missing_docs)]

/// エラー型定義
pub mod error;

/// バックエンドのレスポンスエンベロープ
pub mod protocol;

/// エンドポイント記述子・プローブ結果
pub mod types;

pub use error::CommonError;
pub use protocol::{is_truthy, Envelope};
pub use types::{EndpointDescriptor, ProbeResult, DEFAULT_ENDPOINTS};
