use std::{collections::HashSet, sync::Arc};

use payauth_adapters::{AnalyticsSettings, AnalyticsSink, PaymentAuthSettings};
use payauth_application::{RegistryCache, RegistryError};
use payauth_core::{
    AnalyticsEvent, Authenticatable, AuthenticatorKind, PaymentAuthenticatorRegistry,
    RequestOptions, SessionId,
};
use payauth_service::{PaymentAuthService, PaymentAuthServiceError};
use quickcheck_macros::quickcheck;
use serde_json::json;

use crate::helpers::{TestApp, TestHost};

#[quickcheck]
fn concurrently_started_sessions_have_distinct_ids(count: u8) -> bool {
    let count = usize::from(count % 32) + 1;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(4)
        .build()
        .unwrap();

    runtime.block_on(async {
        let app = TestApp::new();
        let handles: Vec<_> = (0..count)
            .map(|_| {
                let service = app.service.clone();
                tokio::spawn(async move {
                    let host = TestHost::new();
                    service
                        .start_session(host.launcher.clone(), host.callback.clone())
                        .unwrap()
                })
            })
            .collect();

        let mut registries = Vec::with_capacity(count);
        for handle in handles {
            registries.push(handle.await.unwrap());
        }
        let ids: HashSet<SessionId> = registries.iter().map(|r| r.session_id()).collect();
        ids.len() == count && app.service.cache().len() == count
    })
}

#[test]
fn session_ids_start_at_one_in_a_fresh_cache() {
    let app = TestApp::new();
    let host = TestHost::new();

    let first = app.start(&host);
    let second = app.start(&host);

    assert_eq!(first.session_id(), SessionId::new(1));
    assert_eq!(second.session_id(), SessionId::new(2));
}

#[test]
fn invalid_settings_start_no_session() {
    let settings = PaymentAuthSettings::from_env_vars(
        [(
            "PAYAUTH__THREE_DS2__TIMEOUT_MINUTES".to_string(),
            "120".to_string(),
        )]
        .into(),
    )
    .unwrap();
    let app = TestApp::with_settings(settings);
    let host = TestHost::new();

    let started = app
        .service
        .start_session(host.launcher.clone(), host.callback.clone());

    assert!(matches!(
        started,
        Err(PaymentAuthServiceError::Registry(RegistryError::Construction(_)))
    ));
    assert!(app.service.cache().is_empty());
}

#[test]
fn dropped_session_disappears_from_the_cache() {
    let app = TestApp::new();
    let host = TestHost::new();
    let registry = app.start(&host);
    let session_id = registry.session_id();

    assert!(app.service.cache().lookup(session_id).is_some());
    drop(registry);

    assert!(app.service.cache().lookup(session_id).is_none());
    assert!(app.service.cache().is_empty());
}

#[test]
fn service_from_settings_uses_the_shared_cache() {
    let (service, stream) = PaymentAuthService::from_settings(&PaymentAuthSettings::default());
    assert!(Arc::ptr_eq(service.cache(), &RegistryCache::shared()));
    assert!(stream.is_none());
}

#[tokio::test]
async fn channel_sink_streams_session_events_to_the_host() {
    let settings = PaymentAuthSettings {
        analytics: AnalyticsSettings {
            enabled: true,
            sink: AnalyticsSink::Channel,
        },
        ..PaymentAuthSettings::default()
    };
    let (service, stream) = PaymentAuthService::from_settings(&settings);
    let mut stream = stream.expect("channel sink opens a stream");
    let host = TestHost::new();
    let registry = service
        .start_session(host.launcher.clone(), host.callback.clone())
        .unwrap();
    let intent = Authenticatable::from_value(json!({
        "id": "pi_3Nq",
        "object": "payment_intent",
        "client_secret": "pi_3Nq_secret_xyz",
        "status": "succeeded"
    }))
    .unwrap();

    registry
        .authenticate(
            host.launcher.as_ref(),
            &intent,
            &RequestOptions::new("pk_test_123"),
        )
        .await
        .unwrap();

    let record = stream.recv().await.unwrap();
    assert_eq!(record.name, "payauth.authenticator_selected");
    assert_eq!(
        record.event,
        AnalyticsEvent::AuthenticatorSelected {
            session_id: registry.session_id(),
            authenticator: AuthenticatorKind::NoOp,
            object: "payment_intent".to_string(),
        }
    );
}
