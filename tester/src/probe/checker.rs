//! エンドポイントチェッカー
//!
//! ベースURLとHTTPクライアントを保持し、プローブ・一括検査・ジャーニー検査を行う。
//! 出力先は `Write` で差し替え可能（実行時は標準出力）。

use crate::config::TesterConfig;
use crate::error::TesterError;
use crate::probe::classify::{classify_transport_error, ProbeOutcome};
use crate::report;
use chrono::Local;
use quiz_api_tester_common::{ProbeResult, DEFAULT_ENDPOINTS};
use reqwest::Client;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// APIテスター
pub struct ApiTester<W: Write> {
    /// APIのベースURL
    base_url: String,
    /// 全プローブで再利用するHTTPクライアント
    client: Client,
    /// 出力先
    out: W,
    /// トラブルシューティング表示用のポート
    port_hint: String,
}

impl<W: Write> ApiTester<W> {
    /// 任意の出力先に書き込むテスターを作成
    pub fn with_writer(config: &TesterConfig, out: W) -> Result<Self, TesterError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
            out,
            port_hint: config.port_hint(),
        })
    }

    /// 出力先を取り出す
    pub fn into_writer(self) -> W {
        self.out
    }

    /// 出力先への可変参照
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// 単一エンドポイントを検査
    ///
    /// プローブ自体の失敗は `ProbeOutcome` に格納して返す。`Err` になるのは出力の書き込み失敗のみ。
    pub async fn probe(
        &mut self,
        path: &str,
        description: &str,
    ) -> Result<ProbeOutcome, TesterError> {
        let url = format!("{}{}", self.base_url, path);
        report::write_probe_start(&mut self.out, description, &url)?;

        let outcome = self.fetch(url).await;

        match &outcome.failure {
            None => debug!(
                path = %path,
                status = ?outcome.status_code,
                latency_ms = outcome.elapsed.as_millis() as u64,
                records = outcome.data_count(),
                "Probe succeeded"
            ),
            Some(failure) => debug!(
                path = %path,
                status = ?outcome.status_code,
                error = %failure,
                "Probe failed"
            ),
        }

        report::write_probe_outcome(&mut self.out, &outcome)?;
        Ok(outcome)
    }

    async fn fetch(&self, url: String) -> ProbeOutcome {
        let start = Instant::now();

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                return ProbeOutcome::unreachable(url, start.elapsed(), classify_transport_error(&e))
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => ProbeOutcome::from_response(url, start.elapsed(), status, &body),
            Err(e) => ProbeOutcome::unreachable(url, start.elapsed(), classify_transport_error(&e)),
        }
    }

    /// 固定エンドポイントを順番に検査し、サマリーを表示
    pub async fn run_all_probes(&mut self) -> Result<Vec<ProbeResult>, TesterError> {
        report::write_header(&mut self.out, "API TESTER - QUIZ QUEST")?;
        writeln!(self.out, "🔗 Base URL: {}", self.base_url)?;
        writeln!(
            self.out,
            "⏰ Timestamp: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;

        info!(
            base_url = %self.base_url,
            count = DEFAULT_ENDPOINTS.len(),
            "Starting endpoint sweep"
        );

        let mut results = Vec::with_capacity(DEFAULT_ENDPOINTS.len());
        for endpoint in DEFAULT_ENDPOINTS.iter() {
            let outcome = self.probe(endpoint.path, endpoint.description).await?;
            results.push(ProbeResult {
                endpoint: endpoint.path.to_string(),
                description: endpoint.description.to_string(),
                success: outcome.is_success(),
                data_count: outcome.data_count(),
            });
        }

        report::write_summary(&mut self.out, &results, &self.base_url, &self.port_hint)?;

        let success = report::success_count(&results);
        info!(
            success = success,
            failure = results.len() - success,
            "Endpoint sweep completed"
        );

        Ok(results)
    }

    /// 指定ユーザーのコンバージョンイベント履歴を検査
    ///
    /// メールアドレスは検証せずそのままパスに埋め込む。
    pub async fn probe_user_journey(&mut self, email: &str) -> Result<ProbeOutcome, TesterError> {
        report::write_header(&mut self.out, &format!("USER JOURNEY: {}", email))?;

        let path = format!("/conversion-events/email/{}", email);
        let description = format!("Events for user {}", email);
        let outcome = self.probe(&path, &description).await?;

        if let (true, Some(envelope)) = (outcome.is_success(), &outcome.payload) {
            let events = envelope.records();
            if !events.is_empty() {
                report::write_journey(&mut self.out, events)?;
            }
        }

        Ok(outcome)
    }

    /// API利用例を表示
    pub fn print_usage_examples(&mut self) -> Result<(), TesterError> {
        report::write_usage_examples(&mut self.out, &self.base_url)?;
        Ok(())
    }
}
