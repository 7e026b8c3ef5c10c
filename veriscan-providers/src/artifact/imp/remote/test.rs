use std::sync::Arc;

use serde_json::json;
use time::OffsetDateTime;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::artifact::imp::remote::{Params, RemoteArtifactResolver};
use crate::artifact::model::ArtifactProvenance;
use crate::artifact::ArtifactResolver;
use crate::common_models::document::{DocumentDescriptor, DocumentKind};
use crate::common_models::profile::StudentProfile;
use crate::http_client::imp::reqwest_client::ReqwestClient;

fn resolver(base_url: String) -> RemoteArtifactResolver {
    RemoteArtifactResolver::new(
        Params {
            public_base_url: base_url.to_owned(),
            base_url,
            request_timeout: None,
        },
        Arc::new(ReqwestClient::default()),
        None,
    )
}

fn document(final_document_path: Option<&str>) -> DocumentDescriptor {
    DocumentDescriptor {
        id: Uuid::new_v4().into(),
        document_type: DocumentKind::Diploma,
        serial_number: "DP-2024-0042".to_string(),
        version: 2,
        issue_date: OffsetDateTime::now_utc(),
        revocation_reason: None,
        revocation_date: None,
        final_document_path: final_document_path.map(ToOwned::to_owned),
        attachments: vec![],
    }
}

fn profile() -> StudentProfile {
    StudentProfile {
        id: Uuid::new_v4().into(),
        name: "Maria Santos".to_string(),
        id_number: "2020-00123".to_string(),
        course: "BS Computer Science".to_string(),
        birthdate: None,
        gender: None,
    }
}

#[tokio::test]
async fn test_explicit_path_short_circuits() {
    // unreachable base URL: an explicit path must not trigger a lookup
    let resolver = resolver("http://127.0.0.1:1".to_string());

    let artifact = resolver
        .printable(&document(Some("storage/final/dp-2024-0042.pdf")), &profile())
        .await
        .unwrap();

    assert_eq!("storage/final/dp-2024-0042.pdf", artifact.path);
    assert_eq!(ArtifactProvenance::Explicit, artifact.provenance);
}

#[tokio::test]
async fn test_attachment_from_detail_lookup() {
    let mock_server = MockServer::start().await;
    let document = document(None);

    Mock::given(method("GET"))
        .and(path(format!(
            "/document-verification/details/{}",
            document.id
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "document": {
                    "id": document.id,
                    "document_type": "diploma",
                    "serial_number": "DP-2024-0042",
                    "version": 2,
                    "issue_date": "2024-05-14T08:30:00Z",
                    "attachments": [
                        { "attachment_type": "photo", "path": "storage/photos/maria.jpg" },
                        { "attachment_type": "final document", "path": "storage/final/dp-2024-0042.pdf" }
                    ]
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let artifact = resolver(mock_server.uri())
        .printable(&document, &profile())
        .await
        .unwrap();

    assert_eq!("storage/final/dp-2024-0042.pdf", artifact.path);
    assert_eq!(ArtifactProvenance::Attachment, artifact.provenance);
}

#[tokio::test]
async fn test_constructed_path_is_the_last_resort() {
    let mock_server = MockServer::start().await;
    let document = document(None);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "document": {
                    "id": document.id,
                    "document_type": "diploma",
                    "serial_number": "DP-2024-0042",
                    "version": 2,
                    "issue_date": "2024-05-14T08:30:00Z",
                    "attachments": []
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let artifact = resolver(mock_server.uri())
        .printable(&document, &profile())
        .await
        .unwrap();

    assert_eq!("storage/documents/diploma/2020-00123-v2.pdf", artifact.path);
    assert_eq!(ArtifactProvenance::ConstructedPath, artifact.provenance);
}

#[tokio::test]
async fn test_public_detail_uses_public_route() {
    let mock_server = MockServer::start().await;
    let document_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!(
            "/public/document-verification/details/{document_id}"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "document": {
                    "id": document_id,
                    "document_type": "transcript",
                    "serial_number": "TR-2024-0001",
                    "version": 1,
                    "issue_date": "2024-02-20T08:00:00Z",
                    "attachments": null
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let document = resolver(mock_server.uri())
        .public_detail(&document_id.into())
        .await
        .unwrap();

    assert_eq!("TR-2024-0001", document.serial_number);
}
