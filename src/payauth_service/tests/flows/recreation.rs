use payauth_application::{RegistryError, ResumeChallengeError, RestoreSessionError};
use payauth_core::{FlowOutcome, PaymentAuthenticatorRegistry, PaymentFlowResult};
use payauth_service::PaymentAuthServiceError;

use crate::helpers::{TestApp, TestHost, payment_intent, spawn_authenticate, use_3ds2_action};

#[tokio::test]
async fn result_reaches_recreated_host() {
    let app = TestApp::new();
    let mut old_host = TestHost::new();
    let registry = app.start(&old_host);
    let session_id = registry.session_id();

    let task = spawn_authenticate(
        registry.clone(),
        old_host.launcher.clone(),
        payment_intent(use_3ds2_action()),
    );
    let bundle = old_host.launcher.next_launch().await.args.to_bundle().unwrap();

    // Host torn down while the challenge is on screen.
    registry.on_caller_invalidated();
    drop(registry);

    let mut new_host = TestHost::new();
    let restored = app
        .service
        .restore_session(session_id, new_host.launcher.clone(), new_host.callback.clone())
        .unwrap();
    assert_eq!(restored.session_id(), session_id);

    app.service
        .resume_challenge(bundle, PaymentFlowResult::new(None, FlowOutcome::Completed))
        .unwrap();
    task.await.unwrap();

    assert_eq!(new_host.next_result().await.outcome, FlowOutcome::Completed);
    assert!(old_host.results.try_recv().is_err());
}

#[tokio::test]
async fn result_without_attached_host_is_dropped() {
    let app = TestApp::new();
    let mut host = TestHost::new();
    let registry = app.start(&host);

    let task = spawn_authenticate(
        registry.clone(),
        host.launcher.clone(),
        payment_intent(use_3ds2_action()),
    );
    let bundle = host.launcher.next_launch().await.args.to_bundle().unwrap();
    registry.on_caller_invalidated();

    app.service
        .resume_challenge(bundle, PaymentFlowResult::new(None, FlowOutcome::Completed))
        .unwrap();
    task.await.unwrap();

    assert!(host.results.try_recv().is_err());
    assert_eq!(app.analytics.count("payauth.challenge_completed"), 1);
}

#[tokio::test]
async fn resume_after_session_dropped_is_session_not_found() {
    let app = TestApp::new();
    let host = TestHost::new();
    let registry = app.start(&host);
    let session_id = registry.session_id();

    let task = spawn_authenticate(
        registry.clone(),
        host.launcher.clone(),
        payment_intent(use_3ds2_action()),
    );
    let bundle = host.launcher.next_launch().await.args.to_bundle().unwrap();

    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());
    drop(registry);

    let resumed =
        app.service
            .resume_challenge(bundle, PaymentFlowResult::new(None, FlowOutcome::Completed));
    assert!(matches!(
        resumed,
        Err(PaymentAuthServiceError::ResumeChallenge(
            ResumeChallengeError::SessionNotFound(id)
        )) if id == session_id
    ));

    let restored =
        app.service
            .restore_session(session_id, host.launcher.clone(), host.callback.clone());
    assert!(matches!(
        restored,
        Err(PaymentAuthServiceError::RestoreSession(
            RestoreSessionError::SessionNotFound(_)
        ))
    ));
}

#[tokio::test]
async fn aborted_checkout_releases_its_challenge() {
    let app = TestApp::new();
    let host = TestHost::new();
    let registry = app.start(&host);

    let task = spawn_authenticate(
        registry.clone(),
        host.launcher.clone(),
        payment_intent(use_3ds2_action()),
    );
    let bundle = host.launcher.next_launch().await.args.to_bundle().unwrap();
    assert_eq!(registry.pending_challenges(), 1);

    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());
    assert_eq!(registry.pending_challenges(), 0);

    let resumed = app
        .service
        .resume_challenge(bundle, PaymentFlowResult::new(None, FlowOutcome::Completed));
    assert!(matches!(
        resumed,
        Err(PaymentAuthServiceError::ResumeChallenge(
            ResumeChallengeError::RegistryError(RegistryError::ChallengeNotFound(_))
        ))
    ));
}

#[tokio::test]
async fn malformed_bundle_is_rejected() {
    let app = TestApp::new();

    let resumed = app.service.resume_challenge(
        serde_json::json!({ "target": "payment_browser_auth" }),
        PaymentFlowResult::new(None, FlowOutcome::Completed),
    );

    assert!(matches!(
        resumed,
        Err(PaymentAuthServiceError::ResumeChallenge(
            ResumeChallengeError::MalformedBundle(_)
        ))
    ));
}
