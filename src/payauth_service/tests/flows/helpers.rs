use std::sync::Arc;

use payauth_adapters::{PaymentAuthSettings, RecordingAnalyticsReporter, RecordingLauncher};
use payauth_application::{DefaultAuthenticatorRegistry, RegistryCache};
use payauth_core::{
    Authenticatable, PaymentAuthenticatorRegistry, PaymentFlowResult, RequestOptions,
    ResultCallback,
};
use payauth_service::PaymentAuthService;
use serde_json::json;
use tokio::sync::mpsc;

pub struct TestHost {
    pub launcher: Arc<RecordingLauncher>,
    pub callback: ResultCallback,
    pub results: mpsc::UnboundedReceiver<PaymentFlowResult>,
}

impl TestHost {
    pub fn new() -> Self {
        let (sender, results) = mpsc::unbounded_channel();
        let callback: ResultCallback = Arc::new(move |result| {
            let _ = sender.send(result);
        });
        Self {
            launcher: Arc::new(RecordingLauncher::new().with_status_bar_color(0x0063_5BFF)),
            callback,
            results,
        }
    }

    pub async fn next_result(&mut self) -> PaymentFlowResult {
        self.results.recv().await.expect("result channel closed")
    }
}

pub struct TestApp {
    pub service: PaymentAuthService,
    pub analytics: Arc<RecordingAnalyticsReporter>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(PaymentAuthSettings::default())
    }

    pub fn with_settings(settings: PaymentAuthSettings) -> Self {
        let analytics = Arc::new(RecordingAnalyticsReporter::new());
        let component = settings.component_with(analytics.clone());
        Self {
            service: PaymentAuthService::new(component, Arc::new(RegistryCache::new())),
            analytics,
        }
    }

    pub fn start(&self, host: &TestHost) -> Arc<DefaultAuthenticatorRegistry> {
        self.service
            .start_session(host.launcher.clone(), host.callback.clone())
            .expect("failed to start session")
    }
}

/// Run `authenticate` on its own task, the way a checkout screen would.
pub fn spawn_authenticate(
    registry: Arc<DefaultAuthenticatorRegistry>,
    launcher: Arc<RecordingLauncher>,
    authenticatable: Authenticatable,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        registry
            .get_authenticator(&authenticatable)
            .authenticate(
                launcher.as_ref(),
                &authenticatable,
                &RequestOptions::new("pk_test_123"),
            )
            .await
            .expect("authenticator rejected the object");
    })
}

pub fn payment_intent(next_action: serde_json::Value) -> Authenticatable {
    Authenticatable::from_value(json!({
        "id": "pi_3Nq",
        "object": "payment_intent",
        "client_secret": "pi_3Nq_secret_xyz",
        "status": "requires_action",
        "next_action": next_action,
    }))
    .expect("fixture intent should parse")
}

pub fn use_3ds2_action() -> serde_json::Value {
    json!({
        "type": "use_3ds2",
        "source": "src_3ds2",
        "server_name": "visa",
        "transaction_id": "txn_server_1",
        "server_encryption": {
            "directory_server_id": "A000000003",
            "ds_certificate_data": "-----BEGIN CERTIFICATE-----",
            "key_id": null
        },
        "three_ds2_intent_id": "pi_3Nq",
        "publishable_key": "pk_test_123"
    })
}

pub fn redirect_action() -> serde_json::Value {
    json!({
        "type": "redirect_to_url",
        "url": "https://hooks.example.com/redirect/pi_3Nq"
    })
}

pub fn redirect_source() -> Authenticatable {
    Authenticatable::from_value(json!({
        "id": "src_1Ab",
        "object": "source",
        "client_secret": "src_client_secret_xyz",
        "flow": "redirect",
        "redirect": {
            "url": "https://hooks.example.com/source/src_1Ab",
            "return_url": "shop://source-return"
        }
    }))
    .expect("fixture source should parse")
}
