use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common_models::scan::ScanPayload;
use crate::http_client::imp::reqwest_client::ReqwestClient;
use crate::verification::error::VerificationError;
use crate::verification::imp::{resolver::RemoteResolver, Params};
use crate::verification::PayloadResolver;

const HASH: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";

fn resolver(base_url: String) -> RemoteResolver {
    RemoteResolver::new(
        Params {
            base_url,
            request_timeout: None,
        },
        Arc::new(ReqwestClient::default()),
        None,
    )
}

#[tokio::test]
async fn test_direct_payload_passes_through_unchanged() {
    // no server: a pass-through must not touch the network
    let resolver = resolver("http://127.0.0.1:1".to_string());
    let too_long = format!("{HASH}0");

    for payload in [
        "HC1:NCFOXN%TS3DH0YOJ58S S-W5HDC",
        "not-a-hash",
        &HASH[..63],
        too_long.as_str(),
        "g1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90",
    ] {
        let resolved = resolver
            .resolve(&ScanPayload::from(payload.to_string()))
            .await
            .unwrap();
        assert_eq!(payload, resolved.as_str());
    }
}

#[tokio::test]
async fn test_hash_reference_is_substituted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/document-verification/verify-hash"))
        .and(body_json(json!({ "hash": HASH })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "base45_data": "XYZ",
                "serial_number": "TR-2024-0001"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resolved = resolver(mock_server.uri())
        .resolve(&ScanPayload::from(HASH.to_string()))
        .await
        .unwrap();

    assert_eq!("XYZ", resolved.as_str());
}

#[tokio::test]
async fn test_uppercase_hash_is_still_a_hash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/document-verification/verify-hash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "base45_data": "XYZ" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resolved = resolver(mock_server.uri())
        .resolve(&ScanPayload::from(HASH.to_uppercase()))
        .await
        .unwrap();

    assert_eq!("XYZ", resolved.as_str());
}

#[tokio::test]
async fn test_unknown_hash_maps_to_hash_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/document-verification/verify-hash"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Hash not found"
        })))
        .mount(&mock_server)
        .await;

    let result = resolver(mock_server.uri())
        .resolve(&ScanPayload::from(HASH.to_string()))
        .await;

    assert!(matches!(result, Err(VerificationError::HashNotFound)));
}

#[tokio::test]
async fn test_failed_envelope_maps_to_hash_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/document-verification/verify-hash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Hash not found"
        })))
        .mount(&mock_server)
        .await;

    let result = resolver(mock_server.uri())
        .resolve(&ScanPayload::from(HASH.to_string()))
        .await;

    assert!(matches!(result, Err(VerificationError::HashNotFound)));
}
