//! Integration Test: 単一プローブの分類

use quiz_api_tester::ProbeFailure;
use quiz_api_tester_common::DEFAULT_ENDPOINTS;
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::support::{
    buffered_tester, config_for, config_with_base, mount_envelope, mount_raw, output_of, records,
    unreachable_base_url, API_PREFIX,
};

#[tokio::test]
async fn test_probe_success_counts_records_for_every_endpoint() {
    let server = MockServer::start().await;
    for (i, endpoint) in DEFAULT_ENDPOINTS.iter().enumerate() {
        mount_envelope(&server, endpoint.path, records(i + 1)).await;
    }

    let mut tester = buffered_tester(&config_for(&server));
    for (i, endpoint) in DEFAULT_ENDPOINTS.iter().enumerate() {
        let outcome = tester
            .probe(endpoint.path, endpoint.description)
            .await
            .expect("probe");
        assert!(outcome.is_success(), "{} should succeed", endpoint.path);
        assert_eq!(outcome.data_count(), i + 1);
        assert_eq!(outcome.status_code, Some(200));
        assert!(outcome.payload.is_some());
    }

    let output = output_of(tester);
    assert!(output.contains("✅ Success! 1 records found"));
    assert!(output.contains("✅ Success! 5 records found"));
    assert!(output.contains("📊 Status Code: 200"));
    assert!(output.contains("⏱️  Response time:"));
}

#[tokio::test]
async fn test_probe_http_500_is_failure_regardless_of_body() {
    let server = MockServer::start().await;
    mount_raw(
        &server,
        "/quiz-results",
        500,
        r#"{"success": true, "data": [{"id": 1}]}"#,
    )
    .await;

    let mut tester = buffered_tester(&config_for(&server));
    let outcome = tester
        .probe("/quiz-results", "Quiz results")
        .await
        .expect("probe");

    assert!(!outcome.is_success());
    assert_eq!(outcome.data_count(), 0);
    assert!(outcome.payload.is_none());
    assert!(matches!(
        outcome.failure,
        Some(ProbeFailure::HttpStatus { status: 500, .. })
    ));

    let output = output_of(tester);
    assert!(output.contains("📊 Status Code: 500"));
    assert!(output.contains("❌ HTTP error 500:"));
}

#[tokio::test]
async fn test_probe_http_error_excerpt_is_truncated() {
    let server = MockServer::start().await;
    let long_body = "e".repeat(1000);
    mount_raw(&server, "/utm-analytics", 503, &long_body).await;

    let mut tester = buffered_tester(&config_for(&server));
    let outcome = tester
        .probe("/utm-analytics", "UTM analytics")
        .await
        .expect("probe");

    match outcome.failure {
        Some(ProbeFailure::HttpStatus { status, excerpt }) => {
            assert_eq!(status, 503);
            assert_eq!(excerpt.chars().count(), 200);
        }
        other => panic!("unexpected failure: {:?}", other),
    }
}

#[tokio::test]
async fn test_probe_success_false_is_failure_with_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/hotmart-purchases", API_PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "database offline",
            "data": [{"id": 1}]
        })))
        .mount(&server)
        .await;

    let mut tester = buffered_tester(&config_for(&server));
    let outcome = tester
        .probe("/hotmart-purchases", "Hotmart purchases")
        .await
        .expect("probe");

    assert!(!outcome.is_success());
    assert_eq!(outcome.data_count(), 0);
    assert!(matches!(outcome.failure, Some(ProbeFailure::Unsuccessful(_))));
    assert!(outcome.payload.is_some());

    let output = output_of(tester);
    assert!(output.contains("❌ API returned error:"));
    assert!(output.contains("database offline"));
}

#[tokio::test]
async fn test_probe_non_json_200_is_invalid_body() {
    let server = MockServer::start().await;
    mount_raw(&server, "/quiz-participants", 200, "<html>index</html>").await;

    let mut tester = buffered_tester(&config_for(&server));
    let outcome = tester
        .probe("/quiz-participants", "Quiz participants")
        .await
        .expect("probe");

    assert!(!outcome.is_success());
    assert!(outcome.payload.is_none());
    assert!(matches!(outcome.failure, Some(ProbeFailure::InvalidBody(_))));
}

#[tokio::test]
async fn test_probe_unreachable_host_is_connection_failure() {
    let config = config_with_base(&unreachable_base_url());
    let mut tester = buffered_tester(&config);

    let outcome = tester
        .probe("/quiz-results", "Quiz results")
        .await
        .expect("probe");

    assert!(!outcome.is_success());
    assert_eq!(outcome.failure, Some(ProbeFailure::Connection));
    assert_eq!(outcome.status_code, None);
    assert_eq!(outcome.data_count(), 0);

    let output = output_of(tester);
    assert!(output.contains("Connection error"));
    assert!(!output.contains("Timeout"));
    assert!(!output.contains("Status Code"));
}

#[tokio::test]
async fn test_probe_slow_server_is_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/conversion-events", API_PREFIX)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "data": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = quiz_api_tester::TesterConfig {
        timeout: Duration::from_millis(200),
        ..config_for(&server)
    };
    let mut tester = buffered_tester(&config);

    let outcome = tester
        .probe("/conversion-events", "Conversion events")
        .await
        .expect("probe");

    assert_eq!(outcome.failure, Some(ProbeFailure::Timeout));
    assert!(output_of(tester).contains("❌ Timeout"));
}

#[tokio::test]
async fn test_probe_sample_shows_first_three_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/quiz-results", API_PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"success": true, "data": [{"id": 42, "name": "Ana", "style": "natural", "score": 9, "city": "Recife"}]}"#,
        ))
        .mount(&server)
        .await;

    let mut tester = buffered_tester(&config_for(&server));
    tester
        .probe("/quiz-results", "Quiz results")
        .await
        .expect("probe");

    let output = output_of(tester);
    assert!(output.contains("📋 Sample of first record:"));
    assert!(output.contains("   • id: 42"));
    assert!(output.contains("   • name: Ana"));
    assert!(output.contains("   • style: natural"));
    assert!(!output.contains("• score"));
    assert!(output.contains("   ... and 2 more fields"));
}

#[tokio::test]
async fn test_probe_empty_data_has_no_sample() {
    let server = MockServer::start().await;
    mount_envelope(&server, "/quiz-results", vec![]).await;

    let mut tester = buffered_tester(&config_for(&server));
    let outcome = tester
        .probe("/quiz-results", "Quiz results")
        .await
        .expect("probe");

    assert!(outcome.is_success());
    assert_eq!(outcome.data_count(), 0);
    let output = output_of(tester);
    assert!(output.contains("✅ Success! 0 records found"));
    assert!(!output.contains("Sample of first record"));
}
