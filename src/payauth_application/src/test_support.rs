//! Spies and fixtures shared by the unit tests of this crate.

use std::sync::{Arc, Mutex};

use payauth_core::{
    AnalyticsError, AnalyticsEvent, AnalyticsReporter, AuthHost, Authenticatable, ClientSecret,
    DirectoryServerEncryption, IntentKind, IntentStatus, LaunchError, LaunchRequest, NextAction,
    PaymentAuthConfig, PaymentFlowResult, ResultCallback, ResultCaller, Source, SourceFlow,
    SourceRedirect, StripeIntent, Use3ds2Data,
};

use crate::component::AuthenticationComponent;

#[derive(Default)]
pub struct RecordingAnalytics {
    pub events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl AnalyticsReporter for RecordingAnalytics {
    fn report(&self, event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

pub struct FailingAnalytics;

impl AnalyticsReporter for FailingAnalytics {
    fn report(&self, _event: AnalyticsEvent) -> Result<(), AnalyticsError> {
        Err(AnalyticsError::Closed)
    }
}

#[derive(Default)]
pub struct RecordingCaller {
    pub launches: Mutex<Vec<LaunchRequest>>,
    pub reject: bool,
}

impl RecordingCaller {
    pub fn rejecting() -> Self {
        Self {
            launches: Mutex::new(Vec::new()),
            reject: true,
        }
    }

    pub fn launches(&self) -> Vec<LaunchRequest> {
        self.launches.lock().unwrap().clone()
    }
}

impl ResultCaller for RecordingCaller {
    fn launch(&self, request: LaunchRequest) -> Result<(), LaunchError> {
        if self.reject {
            return Err(LaunchError::Rejected("surface unavailable".to_string()));
        }
        self.launches.lock().unwrap().push(request);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingHost {
    pub launches: Mutex<Vec<LaunchRequest>>,
}

impl RecordingHost {
    pub fn launches(&self) -> Vec<LaunchRequest> {
        self.launches.lock().unwrap().clone()
    }
}

impl AuthHost for RecordingHost {
    fn start_for_result(&self, request: LaunchRequest) -> Result<(), LaunchError> {
        self.launches.lock().unwrap().push(request);
        Ok(())
    }

    fn status_bar_color(&self) -> Option<u32> {
        Some(0x00FF_00FF)
    }
}

pub fn recording_callback() -> (ResultCallback, Arc<Mutex<Vec<PaymentFlowResult>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let callback: ResultCallback = Arc::new(move |result| sink.lock().unwrap().push(result));
    (callback, seen)
}

pub fn component(analytics: Arc<dyn AnalyticsReporter>) -> AuthenticationComponent {
    AuthenticationComponent::new(PaymentAuthConfig::default(), analytics)
}

pub fn intent(status: IntentStatus, next_action: Option<NextAction>) -> Authenticatable {
    Authenticatable::Intent(StripeIntent {
        id: "pi_1".to_string(),
        kind: IntentKind::PaymentIntent,
        client_secret: ClientSecret::parse("pi_1_secret_abc").unwrap(),
        status,
        next_action,
    })
}

pub fn use_3ds2() -> NextAction {
    NextAction::Use3ds2(Use3ds2Data {
        source: "src_3ds2".to_string(),
        server_name: "mastercard".to_string(),
        transaction_id: "txn_server".to_string(),
        server_encryption: DirectoryServerEncryption {
            directory_server_id: "A000000004".to_string(),
            ds_certificate_data: "-----BEGIN CERTIFICATE-----".to_string(),
            root_certs: Vec::new(),
            key_id: None,
        },
        three_ds2_intent_id: Some("pi_1".to_string()),
        publishable_key: Some("pk_test_123".to_string()),
    })
}

pub fn redirect_source(flow: SourceFlow) -> Authenticatable {
    Authenticatable::Source(Source {
        id: "src_1".to_string(),
        client_secret: ClientSecret::parse("src_client_secret_abc").unwrap(),
        flow,
        redirect: Some(SourceRedirect {
            url: Some("https://hooks.example.com/source/redirect".to_string()),
            return_url: Some("app://source-return".to_string()),
        }),
    })
}
