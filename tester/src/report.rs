//! 標準出力向けレポート描画
//!
//! 描画関数はすべて `Write` に書き込むだけで、HTTPや状態を持たない。

use crate::probe::ProbeOutcome;
use quiz_api_tester_common::ProbeResult;
use serde_json::{Map, Value};
use std::io::{self, Write};

/// 区切り線の幅
const RULE_WIDTH: usize = 60;

/// サンプル表示するフィールド数
pub const SAMPLE_FIELD_LIMIT: usize = 3;

/// ダッシュボードのファイル名
pub const DASHBOARD_FILE: &str = "dashboard_analytics.html";

/// 一括検査の総合判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepVerdict {
    /// 全件成功
    AllPassed,
    /// 一部成功
    Partial,
    /// 全件失敗
    NonePassed,
}

impl SweepVerdict {
    /// 成功件数と総数から判定
    pub fn from_counts(success_count: usize, total: usize) -> Self {
        if success_count == total {
            Self::AllPassed
        } else if success_count > 0 {
            Self::Partial
        } else {
            Self::NonePassed
        }
    }

    /// 結果一覧から判定
    pub fn from_results(results: &[ProbeResult]) -> Self {
        Self::from_counts(success_count(results), results.len())
    }
}

/// 成功件数
pub fn success_count(results: &[ProbeResult]) -> usize {
    results.iter().filter(|r| r.success).count()
}

/// 成否マーカー
pub fn marker(success: bool) -> &'static str {
    if success {
        "✅"
    } else {
        "❌"
    }
}

/// 区切り線付きの見出し
pub fn write_header<W: Write + ?Sized>(out: &mut W, title: &str) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "🎯 {}", title)?;
    writeln!(out, "{}", rule)
}

/// 見出しなしの区切り線
pub fn write_separator<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// プローブ開始行
pub fn write_probe_start<W: Write + ?Sized>(
    out: &mut W,
    description: &str,
    url: &str,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📡 Testing: {}", description)?;
    writeln!(out, "URL: {}", url)
}

/// プローブ結果（時間・ステータス・分類・サンプル）
pub fn write_probe_outcome<W: Write + ?Sized>(
    out: &mut W,
    outcome: &ProbeOutcome,
) -> io::Result<()> {
    if let Some(status) = outcome.status_code {
        writeln!(out, "⏱️  Response time: {}ms", outcome.elapsed.as_millis())?;
        writeln!(out, "📊 Status Code: {}", status)?;
    }

    if let Some(failure) = &outcome.failure {
        return writeln!(out, "❌ {}", failure);
    }

    let count = outcome.data_count();
    writeln!(out, "✅ Success! {} records found", count)?;
    if let Some(record) = outcome.payload.as_ref().and_then(|p| p.first_record()) {
        writeln!(out, "📋 Sample of first record:")?;
        write_sample(out, record)?;
    }
    Ok(())
}

/// 先頭レコードのサンプル
///
/// 先頭3フィールドのみ表示し、残りは件数だけ示す。
pub fn write_sample<W: Write + ?Sized>(out: &mut W, record: &Map<String, Value>) -> io::Result<()> {
    for (key, value) in record.iter().take(SAMPLE_FIELD_LIMIT) {
        writeln!(out, "   • {}: {}", key, display_value(value))?;
    }
    if record.len() > SAMPLE_FIELD_LIMIT {
        writeln!(
            out,
            "   ... and {} more fields",
            record.len() - SAMPLE_FIELD_LIMIT
        )?;
    }
    Ok(())
}

/// 一括検査のサマリー
pub fn write_summary<W: Write + ?Sized>(
    out: &mut W,
    results: &[ProbeResult],
    base_url: &str,
    port: &str,
) -> io::Result<()> {
    let total = results.len();
    let ok = success_count(results);

    write_header(out, "TEST SUMMARY")?;
    writeln!(out, "✅ Working APIs: {}/{}", ok, total)?;
    writeln!(out, "❌ Failing APIs: {}/{}", total - ok, total)?;

    writeln!(out)?;
    writeln!(out, "📊 Breakdown:")?;
    for result in results {
        writeln!(
            out,
            "{} {} - {} ({} records)",
            marker(result.success),
            result.endpoint,
            result.description,
            result.data_count
        )?;
    }

    writeln!(out)?;
    match SweepVerdict::from_counts(ok, total) {
        SweepVerdict::AllPassed => {
            writeln!(out, "🎉 CONGRATULATIONS! All APIs are working perfectly!")
        }
        SweepVerdict::Partial => {
            writeln!(out, "⚠️  Some APIs are working. Check the errors above.")
        }
        SweepVerdict::NonePassed => {
            writeln!(
                out,
                "🚨 ATTENTION! No API is working. Check that the server is running:"
            )?;
            writeln!(out, "   1. Run: npm run dev")?;
            writeln!(out, "   2. Check that port {} is correct", port)?;
            writeln!(out, "   3. Test manually: curl {}/quiz-results", base_url)
        }
    }
}

/// ジャーニー1行分
pub fn journey_line(index: usize, event: &Value) -> String {
    let timestamp = event
        .get("createdAt")
        .map(display_value)
        .unwrap_or_else(|| "N/A".to_string());
    let event_type = event
        .get("eventType")
        .map(display_value)
        .unwrap_or_else(|| "N/A".to_string());
    let value = event
        .get("value")
        .map(display_value)
        .unwrap_or_else(|| "0".to_string());
    format!("   {}. {} - {} (R$ {})", index, timestamp, event_type, value)
}

/// ユーザージャーニー（サーバーの返却順）
pub fn write_journey<W: Write + ?Sized>(out: &mut W, events: &[Value]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📈 Full journey found:")?;
    for (i, event) in events.iter().enumerate() {
        writeln!(out, "{}", journey_line(i + 1, event))?;
    }
    Ok(())
}

/// API利用例
pub fn write_usage_examples<W: Write + ?Sized>(out: &mut W, base_url: &str) -> io::Result<()> {
    write_header(out, "API USAGE EXAMPLES")?;
    writeln!(out, "📝 How to use these APIs in your application:")?;
    writeln!(
        out,
        r#"
// 1. Fetch all quiz results
fetch('{base}/quiz-results')
  .then(response => response.json())
  .then(data => {{
    console.log('Results:', data.data);
  }});

// 2. Fetch conversion events
fetch('{base}/conversion-events')
  .then(response => response.json())
  .then(data => {{
    console.log('Total events:', data.data.length);
  }});

// 3. Fetch one user's journey
fetch('{base}/conversion-events/email/user@example.com')
  .then(response => response.json())
  .then(data => {{
    console.log('User journey:', data.data);
  }});"#,
        base = base_url
    )
}

/// 終了メッセージ
pub fn write_closing<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🏁 Test finished!")?;
    writeln!(
        out,
        "💡 To view the data in a dashboard, open: {}",
        DASHBOARD_FILE
    )
}

/// 表示用の値（文字列は引用符なし）
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
