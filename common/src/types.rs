//! 共通型定義
//!
//! エンドポイント記述子、プローブ結果

use serde::{Deserialize, Serialize};

/// 検査対象エンドポイント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointDescriptor {
    /// ベースURLからの相対パス
    pub path: &'static str,
    /// 表示用の説明
    pub description: &'static str,
}

/// 一括検査するエンドポイント（この順序で検査する）
pub const DEFAULT_ENDPOINTS: [EndpointDescriptor; 5] = [
    EndpointDescriptor {
        path: "/quiz-results",
        description: "Quiz results",
    },
    EndpointDescriptor {
        path: "/conversion-events",
        description: "Conversion events",
    },
    EndpointDescriptor {
        path: "/hotmart-purchases",
        description: "Hotmart purchases",
    },
    EndpointDescriptor {
        path: "/utm-analytics",
        description: "UTM analytics",
    },
    EndpointDescriptor {
        path: "/quiz-participants",
        description: "Quiz participants",
    },
];

/// 1エンドポイント分のプローブ結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// 検査したパス
    pub endpoint: String,
    /// 表示用の説明
    pub description: String,
    /// 成功したか
    pub success: bool,
    /// `data` の件数（失敗時は0）
    pub data_count: usize,
}
