//! Verification engine tests against a mocked ledger service.

use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notary_client::{LedgerClient, Verifier, VerifyFailure};
use notary_core::{keccak256_str, Envelope};

const RECORD_ROUTE: &str = "/api/database/record-by-hash";

fn verifier_for(server: &MockServer) -> Verifier {
    Verifier::new(LedgerClient::with_base_url(server.uri()))
        .with_retry_delay(Duration::from_millis(50))
}

/// An envelope whose timestamp response points at `recorded`.
fn timestamped_envelope(data: serde_json::Value, recorded: &str) -> Envelope {
    Envelope::notarized(data, json!({"data": {"computed_hash_hex": recorded}}))
}

#[tokio::test]
async fn missing_hash_is_rejected_without_details() {
    let mut envelope = Envelope::local(json!("x"));
    envelope.metadata.hash = String::new();

    let verdict = Verifier::new(LedgerClient::new()).verify(&envelope).await;

    assert!(!verdict.valid);
    assert_eq!(verdict.error, Some(VerifyFailure::MissingHash));
    assert!(verdict.details.is_none());
}

#[tokio::test]
async fn local_only_envelope_verifies() {
    let envelope = Envelope::local(json!("x"));

    let verdict = Verifier::new(LedgerClient::new()).verify(&envelope).await;

    assert!(verdict.valid);
    let details = verdict.details.unwrap();
    assert!(details.hash_match);
    assert_eq!(details.remote_match, None);
    assert_eq!(details.computed_hash, keccak256_str("x"));
    assert_eq!(details.computed_hash, details.envelope_hash);
}

#[tokio::test]
async fn structured_data_is_hashed_over_canonical_json() {
    let envelope = Envelope::local(json!({"amount": 42, "currency": "EUR"}));

    let verdict = Verifier::new(LedgerClient::new()).verify(&envelope).await;

    assert!(verdict.valid);
    assert_eq!(
        verdict.details.unwrap().computed_hash,
        keccak256_str(&envelope.canonical_text())
    );
}

#[tokio::test]
async fn tampered_hash_is_detected_locally() {
    let mut envelope = Envelope::local(json!("x"));
    envelope.metadata.hash = keccak256_str("y");

    let verdict = Verifier::new(LedgerClient::new()).verify(&envelope).await;

    assert!(!verdict.valid);
    assert_eq!(verdict.error, Some(VerifyFailure::HashMismatch));
    let details = verdict.details.unwrap();
    assert!(!details.hash_match);
    assert_ne!(details.computed_hash, details.envelope_hash);
    assert_eq!(details.remote_match, None);
}

#[tokio::test]
async fn malformed_timestamp_response_is_a_structural_error() {
    let server = MockServer::start().await;
    // A structural failure must not reach the network at all.
    Mock::given(method("GET"))
        .and(path(RECORD_ROUTE))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let envelope = Envelope::notarized(json!("x"), json!({"data": {}}));
    let verdict = verifier_for(&server).verify(&envelope).await;

    assert!(!verdict.valid);
    assert!(matches!(
        verdict.error,
        Some(VerifyFailure::MalformedTimestamp(_))
    ));
    let details = verdict.details.unwrap();
    assert!(details.hash_match);
    assert_eq!(details.remote_match, None);
    assert_eq!(details.remote_hash, None);
}

#[tokio::test]
async fn timestamped_envelope_verifies_against_remote_record() {
    let computed = keccak256_str("payload");
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORD_ROUTE))
        .and(query_param("hash_item", computed.as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"data_item_hex": computed.clone()}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let envelope = timestamped_envelope(json!("payload"), &computed);
    let verdict = verifier_for(&server).verify(&envelope).await;

    assert!(verdict.valid);
    assert!(verdict.remotely_verified());
    let details = verdict.details.unwrap();
    assert!(details.hash_match);
    assert_eq!(details.remote_match, Some(true));
    assert_eq!(details.remote_hash, Some(computed));
}

#[tokio::test]
async fn remote_record_disagreement_fails_verification() {
    let computed = keccak256_str("payload");
    let other = keccak256_str("something else");
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORD_ROUTE))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"data_item_hex": other.clone()}})),
        )
        .mount(&server)
        .await;

    let envelope = timestamped_envelope(json!("payload"), &computed);
    let verdict = verifier_for(&server).verify(&envelope).await;

    assert!(!verdict.valid);
    assert_eq!(verdict.error, Some(VerifyFailure::RemoteMismatch));
    let details = verdict.details.unwrap();
    assert!(details.hash_match);
    assert_eq!(details.remote_match, Some(false));
    assert_eq!(details.remote_hash, Some(other));
}

#[tokio::test]
async fn failed_fetch_is_retried_exactly_once_after_a_delay() {
    let computed = keccak256_str("payload");
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RECORD_ROUTE))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(2)
        .mount(&server)
        .await;

    let envelope = timestamped_envelope(json!("payload"), &computed);
    let delay = Duration::from_millis(100);
    let verifier = Verifier::new(LedgerClient::with_base_url(server.uri()))
        .with_retry_delay(delay);

    let start = Instant::now();
    let verdict = verifier.verify(&envelope).await;
    assert!(start.elapsed() >= delay);

    assert!(!verdict.valid);
    match verdict.error {
        Some(VerifyFailure::RemoteFetch(message)) => {
            assert!(message.contains("503"));
            assert!(message.contains("maintenance"));
        }
        other => panic!("expected RemoteFetch, got {:?}", other),
    }
    // Details stop at the local stage: the remote check never completed.
    let details = verdict.details.unwrap();
    assert!(details.hash_match);
    assert_eq!(details.remote_match, None);
    assert_eq!(details.remote_hash, None);

    // MockServer verifies the expect(2) on drop.
}

#[tokio::test]
async fn fetch_recovers_on_the_retry_attempt() {
    let computed = keccak256_str("payload");
    let server = MockServer::start().await;
    // First attempt fails...
    Mock::given(method("GET"))
        .and(path(RECORD_ROUTE))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    // ...second succeeds.
    Mock::given(method("GET"))
        .and(path(RECORD_ROUTE))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"data_item_hex": computed.clone()}})),
        )
        .mount(&server)
        .await;

    let envelope = timestamped_envelope(json!("payload"), &computed);
    let verdict = verifier_for(&server).verify(&envelope).await;

    assert!(verdict.valid);
    assert!(verdict.remotely_verified());
}
