use std::sync::Arc;

use veriscan_core::service::error::VerificationServiceError;
use veriscan_core::session::SessionContext;
use veriscan_core::VeriscanCore;
use veriscan_providers::capture::imp::scripted::ScriptedSource;
use veriscan_providers::capture::ScanSource;
use veriscan_providers::common_models::scan::ScanPayload;
use veriscan_providers::http_client::imp::reqwest_client::ReqwestClient;

#[tokio::main]
async fn main() -> Result<(), VerificationServiceError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,veriscan_core=debug,veriscan_providers=debug".into()),
        )
        .init();

    // `None` initializes the core with the default configuration
    let core = VeriscanCore::new(
        None,
        SessionContext::anonymous(),
        Arc::new(ReqwestClient::default()),
    )
    .expect("Core initialization failed");

    // A scripted camera stands in for a real capture adapter: it plays
    // back two scans, a direct payload and a hash reference.
    let source = ScriptedSource::single_device(vec![
        ScanPayload::from("HC1:NCFOXN%TS3DH0YOJ58S S-W5HDC".to_string()),
        ScanPayload::from(
            "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90".to_string(),
        ),
    ]);

    let device = source
        .list_devices()
        .await?
        .into_iter()
        .next()
        .expect("scripted source has a device");
    println!("scanning on {}", device.label);

    let mut session = source.open(&device.id).await?;

    for _ in 0..2 {
        let report = core
            .verification_service
            .verify_next_candidate(&mut session)
            .await?;

        println!("{}: {}", report.rendered.severity, report.rendered.banner);
        if let Some(document) = &report.rendered.document {
            println!(
                "  {} {} (issued {})",
                document.document_type, document.serial_number, document.issue_date
            );

            if let Some(profile) = &report.rendered.profile {
                let artifact = core
                    .artifact_service
                    .printable(document, profile)
                    .await
                    .expect("artifact resolution failed");
                println!("  printable at {} ({})", artifact.path, artifact.provenance);
            }
        }

        // dismissing the result re-arms the scanner on the same device
        session.rearm();
    }

    session.close();
    Ok(())
}
