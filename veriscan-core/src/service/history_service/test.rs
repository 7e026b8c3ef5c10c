use std::sync::Arc;

use serde_json::json;
use time::OffsetDateTime;
use uuid::Uuid;

use veriscan_providers::common_dto::ApiPage;
use veriscan_providers::common_models::document::{DocumentDescriptor, DocumentKind};
use veriscan_providers::common_models::scan::ScanStatus;
use veriscan_providers::history::model::{HistoryBucket, ScanHistoryEntry};
use veriscan_providers::history::MockScanHistory;

use crate::presenter::OutcomeSeverity;
use crate::service::history_service::HistoryService;

fn entry(scan_status: ScanStatus, document_id: Option<Uuid>) -> ScanHistoryEntry {
    ScanHistoryEntry {
        id: Uuid::new_v4().into(),
        scanned_at: OffsetDateTime::now_utc(),
        document_id: document_id.map(Into::into),
        serial_number: Some("TR-2024-0001".to_string()),
        scan_status,
        scan_result: Some(json!({ "document": { "revocation_reason": "Lost" } })),
    }
}

fn document(id: Uuid) -> DocumentDescriptor {
    DocumentDescriptor {
        id: id.into(),
        document_type: DocumentKind::Transcript,
        serial_number: "TR-2024-0001".to_string(),
        version: 1,
        issue_date: time::macros::datetime!(2024-02-20 08:00 UTC),
        revocation_reason: Some("Lost".to_string()),
        revocation_date: None,
        final_document_path: None,
        attachments: vec![],
    }
}

#[tokio::test]
async fn test_page_applies_configured_page_size() {
    let mut history = MockScanHistory::new();
    history
        .expect_list()
        .withf(|query| {
            query.per_page == 50 && query.page == 3 && query.bucket == HistoryBucket::Invalid
        })
        .returning(|query| {
            Ok(ApiPage {
                data: vec![],
                current_page: query.page,
                per_page: query.per_page,
                last_page: 3,
                total: 120,
            })
        });

    let service = HistoryService::new(Arc::new(history), 50);
    let page = service.page(3, HistoryBucket::Invalid, None).await.unwrap();

    assert_eq!(3, page.current_page);
    assert_eq!(120, page.total);
}

#[tokio::test]
async fn test_replay_enriches_with_document_record() {
    let document_id = Uuid::new_v4();

    let mut history = MockScanHistory::new();
    history
        .expect_detail()
        .withf(move |id| *id == document_id.into())
        .returning(move |_| Ok(document(document_id)));

    let service = HistoryService::new(Arc::new(history), 20);
    let rendered = service
        .replay(&entry(ScanStatus::Revoked, Some(document_id)))
        .await
        .unwrap();

    assert_eq!(OutcomeSeverity::Warning, rendered.severity);
    assert_eq!("Document has been revoked: Lost", rendered.banner);
    assert_eq!("TR-2024-0001", rendered.document.unwrap().serial_number);
}

#[tokio::test]
async fn test_replay_without_document_reference() {
    let mut history = MockScanHistory::new();
    history.expect_detail().never();

    let service = HistoryService::new(Arc::new(history), 20);
    let rendered = service
        .replay(&entry(ScanStatus::HashMismatch, None))
        .await
        .unwrap();

    assert_eq!(OutcomeSeverity::Failure, rendered.severity);
    assert_eq!(None, rendered.document);
}

#[tokio::test]
async fn test_replaying_the_same_entry_twice_is_identical() {
    let document_id = Uuid::new_v4();

    let mut history = MockScanHistory::new();
    history
        .expect_detail()
        .returning(move |_| Ok(document(document_id)));

    let service = HistoryService::new(Arc::new(history), 20);
    let entry = entry(ScanStatus::Revoked, Some(document_id));

    let first = service.replay(&entry).await.unwrap();
    let second = service.replay(&entry).await.unwrap();

    assert_eq!(first, second);
}
