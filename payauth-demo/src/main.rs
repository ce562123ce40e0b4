use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use payauth::{
    Authenticatable, FlowOutcome, PaymentAuthService, PaymentAuthSettings,
    PaymentAuthenticatorRegistry, PaymentFlowResult, RecordingLauncher, RequestOptions,
    ResultCallback, init_tracing, ports::LaunchArgs,
};
use serde_json::json;
use tokio::sync::mpsc;

/// Headless checkout: a 3DS2 challenge whose host is recreated while the challenge
/// is on screen, then restored and resumed.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = PaymentAuthSettings::load()?;
    let (service, analytics) = PaymentAuthService::from_settings(&settings);
    if let Some(mut records) = analytics {
        tokio::spawn(async move {
            while let Some(record) = records.recv().await {
                match serde_json::to_string(&record) {
                    Ok(line) => tracing::info!(target: "payauth::analytics", %line),
                    Err(e) => tracing::warn!(error = %e, "Unserializable analytics record"),
                }
            }
        });
    }

    let launcher = Arc::new(RecordingLauncher::new());
    let (callback, _first_results) = host_callback();
    let registry = service.start_session(launcher.clone(), callback)?;

    let intent = Authenticatable::from_value(json!({
        "id": "pi_demo",
        "object": "payment_intent",
        "client_secret": "pi_demo_secret_42",
        "status": "requires_action",
        "next_action": {
            "type": "use_3ds2",
            "source": "src_demo",
            "server_name": "visa",
            "transaction_id": "txn_demo",
            "server_encryption": {
                "directory_server_id": "A000000003",
                "ds_certificate_data": "-----BEGIN CERTIFICATE-----",
                "key_id": null
            }
        }
    }))?;

    let checkout = {
        let registry = Arc::clone(&registry);
        let launcher = Arc::clone(&launcher);
        tokio::spawn(async move {
            registry
                .authenticate(
                    launcher.as_ref(),
                    &intent,
                    &RequestOptions::new("pk_test_demo"),
                )
                .await
        })
    };

    let launch = launcher.next_launch().await;
    let bundle = launch.args.to_bundle()?;
    tracing::info!(target_surface = ?launch.target(), "Challenge launched");

    // Host goes away mid-challenge
    registry.on_caller_invalidated();
    drop(registry);
    tracing::info!("Host recreated");

    let session_id = LaunchArgs::from_bundle(bundle.clone())?.session_id();
    let (callback, mut results) = host_callback();
    let _registry =
        service.restore_session(session_id, Arc::new(RecordingLauncher::new()), callback)?;

    service.resume_challenge(bundle, PaymentFlowResult::new(None, FlowOutcome::Completed))?;
    checkout.await??;

    let result = results
        .recv()
        .await
        .ok_or_else(|| eyre!("restored host received no result"))?;
    tracing::info!(%session_id, outcome = result.outcome.as_str(), "Checkout finished");

    Ok(())
}

fn host_callback() -> (ResultCallback, mpsc::UnboundedReceiver<PaymentFlowResult>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let callback: ResultCallback = Arc::new(move |result| {
        if sender.send(result).is_err() {
            tracing::debug!("Host is gone, result discarded");
        }
    });
    (callback, receiver)
}
