use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common_models::document::DocumentKind;
use crate::common_models::scan::{ScanStatus, VerificationStatus};
use crate::http_client::imp::reqwest_client::ReqwestClient;
use crate::verification::error::VerificationError;
use crate::verification::imp::{decoder::RemoteDecoder, Params};
use crate::verification::model::ResolvedPayload;
use crate::verification::ScanDecoder;

fn decoder(base_url: String) -> RemoteDecoder {
    RemoteDecoder::new(
        Params {
            base_url,
            request_timeout: None,
        },
        Arc::new(ReqwestClient::default()),
        None,
    )
}

fn decode_data() -> serde_json::Value {
    json!({
        "document": {
            "id": "0b0ba695-33b7-4a62-a4e1-1e7d28e5f016",
            "document_type": "diploma",
            "serial_number": "DP-2024-0042",
            "version": 2,
            "issue_date": "2024-05-14T08:30:00Z",
            "attachments": null
        },
        "profile": {
            "id": "17d0fa4d-59a4-4a6f-91ef-3d8b0cc01e1b",
            "name": "Maria Santos",
            "id_number": "2020-00123",
            "course": "BS Computer Science",
            "birthdate": "2002-03-15",
            "gender": "female"
        },
        "verification_status": "valid",
        "scan_status": "success",
        "verification_details": { "checked_fields": 12 }
    })
}

#[tokio::test]
async fn test_successful_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/document-verification/decode-qr"))
        .and(body_json(json!({ "qr_data": "XYZ" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": decode_data()
        })))
        .mount(&mock_server)
        .await;

    let scan = decoder(mock_server.uri())
        .decode(&ResolvedPayload::from("XYZ".to_string()))
        .await
        .unwrap();

    assert_eq!(DocumentKind::Diploma, scan.document.document_type);
    assert_eq!("DP-2024-0042", scan.document.serial_number);
    assert_eq!(2, scan.document.version);
    assert!(scan.document.attachments.is_empty());
    assert_eq!("Maria Santos", scan.profile.name);
    assert_eq!(VerificationStatus::Valid, scan.verification_status);
    assert_eq!(ScanStatus::Success, scan.scan_status);
    assert_eq!(
        Some(json!({ "checked_fields": 12 })),
        scan.verification_details
    );
}

#[tokio::test]
async fn test_rejected_payload_carries_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/document-verification/decode-qr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "bad format"
        })))
        .mount(&mock_server)
        .await;

    let result = decoder(mock_server.uri())
        .decode(&ResolvedPayload::from("???".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(VerificationError::DecodeError(message)) if message == "bad format"
    ));
}

#[tokio::test]
async fn test_rejected_payload_without_message_uses_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/document-verification/decode-qr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false
        })))
        .mount(&mock_server)
        .await;

    let result = decoder(mock_server.uri())
        .decode(&ResolvedPayload::from("???".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(VerificationError::DecodeError(message)) if message == VerificationError::INVALID_FORMAT
    ));
}

#[tokio::test]
async fn test_unparseable_body_uses_default_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/document-verification/decode-qr"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&mock_server)
        .await;

    let result = decoder(mock_server.uri())
        .decode(&ResolvedPayload::from("XYZ".to_string()))
        .await;

    assert!(matches!(
        result,
        Err(VerificationError::DecodeError(message)) if message == VerificationError::INVALID_FORMAT
    ));
}
