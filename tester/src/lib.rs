//! Quiz Quest API tester
//!
//! RESTバックエンドの固定エンドポイント群を1回ずつ検査するスモークテストハーネス

#![warn(missing_docs)]

/// 固定設定
pub mod config;

/// エラー型定義
pub mod error;

/// ロギング初期化ユーティリティ
pub mod logging;

/// エンドポイントプローブ
pub mod probe;

/// レポート描画
pub mod report;

pub use config::TesterConfig;
pub use error::TesterError;
pub use probe::{ApiTester, ProbeFailure, ProbeOutcome};

use std::io::Write;

/// 一括検査 → ジャーニー検査 →（任意）利用例 → 終了メッセージ
///
/// プローブの成否に関わらず最後まで実行する。`Err` は出力失敗・クライアント作成失敗のみ。
pub async fn run<W: Write>(config: &TesterConfig, out: W) -> Result<W, TesterError> {
    let mut tester = ApiTester::with_writer(config, out)?;

    writeln!(tester.writer_mut(), "🚀 Starting REST API tests...")?;

    tester.run_all_probes().await?;

    report::write_separator(tester.writer_mut())?;
    tester.probe_user_journey(&config.journey_email).await?;

    if config.show_usage {
        tester.print_usage_examples()?;
    }

    report::write_closing(tester.writer_mut())?;
    Ok(tester.into_writer())
}
