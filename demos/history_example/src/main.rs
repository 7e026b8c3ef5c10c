use std::sync::Arc;

use veriscan_core::service::error::HistoryServiceError;
use veriscan_core::session::SessionContext;
use veriscan_core::VeriscanCore;
use veriscan_providers::history::model::HistoryBucket;
use veriscan_providers::http_client::imp::reqwest_client::ReqwestClient;

#[tokio::main]
async fn main() -> Result<(), HistoryServiceError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,veriscan_providers=debug".into()),
        )
        .init();

    let core = VeriscanCore::new(
        None,
        SessionContext::anonymous(),
        Arc::new(ReqwestClient::default()),
    )
    .expect("Core initialization failed");

    // Walk the first page of failed scans: the `invalid` bucket unites
    // plain errors and hash mismatches.
    let page = core
        .history_service
        .page(1, HistoryBucket::Invalid, None)
        .await?;

    println!(
        "page {}/{} ({} entries total)",
        page.current_page, page.last_page, page.total
    );

    for entry in &page.data {
        println!(
            "{} {} {}",
            entry.scanned_at,
            entry.scan_status,
            entry.serial_number.as_deref().unwrap_or("-")
        );
    }

    // Replay the newest failed attempt the way the detail modal would.
    if let Some(entry) = page.data.first() {
        let rendered = core.history_service.replay(entry).await?;
        println!("replay: {}: {}", rendered.severity, rendered.banner);
    }

    Ok(())
}
