//! 通信プロトコル定義
//!
//! バックエンドが返す `{"success": bool, "data": [...]}` 形式のエンベロープ。
//! スキーマの補正は行わず、フィールド欠落はそのまま「失敗」「0件」として扱う。

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CommonError;

/// レスポンスエンベロープ
///
/// 受信したJSONをそのまま保持する。オブジェクトのキー順は受信順のまま。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Envelope(Value);

impl Envelope {
    /// レスポンスボディをパース
    pub fn parse(body: &str) -> Result<Self, CommonError> {
        Ok(Self(serde_json::from_str(body)?))
    }

    /// パース済みの値から生成
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// `success` フィールドが真値か
    pub fn is_success(&self) -> bool {
        self.0.get("success").map(is_truthy).unwrap_or(false)
    }

    /// `data` 配列のレコード（配列でなければ空）
    pub fn records(&self) -> &[Value] {
        self.0
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `data` 配列の件数
    pub fn record_count(&self) -> usize {
        self.records().len()
    }

    /// 先頭レコード（オブジェクトの場合のみ）
    pub fn first_record(&self) -> Option<&Map<String, Value>> {
        self.records().first().and_then(Value::as_object)
    }

    /// 元のJSON値
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// JSON値の真偽判定
///
/// `false` / `null` / `0` / 空文字列 / 空配列 / 空オブジェクトを偽とする。
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
