use payauth_adapters::PaymentAuthSettings;
use payauth_core::{
    AnalyticsEvent, Authenticatable, AuthenticatableError, AuthenticatorKind, ClientSecret,
    FlowOutcome, LaunchArgs, LaunchTarget, NextActionKind, PaymentFlowResult,
    RequestOptions,
};
use serde_json::json;

use crate::helpers::{
    TestApp, TestHost, payment_intent, redirect_action, redirect_source, spawn_authenticate,
    use_3ds2_action,
};

#[tokio::test]
async fn three_ds2_challenge_completes_through_resume() {
    let app = TestApp::new();
    let mut host = TestHost::new();
    let registry = app.start(&host);

    let task = spawn_authenticate(
        registry.clone(),
        host.launcher.clone(),
        payment_intent(use_3ds2_action()),
    );
    let launch = host.launcher.next_launch().await;

    assert_eq!(launch.target(), LaunchTarget::Stripe3ds2Transaction);
    let LaunchArgs::Stripe3ds2Transaction(args) = &launch.args else {
        panic!("expected a 3DS2 launch");
    };
    assert_eq!(args.session_id, registry.session_id());
    assert_eq!(args.status_bar_color, Some(0x0063_5BFF));
    assert!(!args.sdk_transaction_id.to_string().is_empty());
    let token = args.sdk_transaction_id.clone();

    app.service
        .resume_challenge(
            launch.args.to_bundle().unwrap(),
            PaymentFlowResult::new(
                Some(ClientSecret::parse("pi_3Nq_secret_xyz").unwrap()),
                FlowOutcome::Completed,
            ),
        )
        .unwrap();
    task.await.unwrap();

    let result = host.next_result().await;
    assert_eq!(result.outcome, FlowOutcome::Completed);
    assert_eq!(result.correlation_token, Some(token));
    assert_eq!(app.analytics.count("payauth.challenge_started"), 1);
    assert_eq!(app.analytics.count("payauth.challenge_completed"), 1);
    assert_eq!(registry.pending_challenges(), 0);
}

#[tokio::test]
async fn intent_without_next_action_completes_without_launch() {
    let app = TestApp::new();
    let mut host = TestHost::new();
    let registry = app.start(&host);
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

    assert_eq!(host.next_result().await.outcome, FlowOutcome::Completed);
    assert!(host.launcher.history().is_empty());
    assert_eq!(app.analytics.count("payauth.selection_fallback"), 0);
}

#[tokio::test]
async fn unmapped_next_action_falls_back_with_one_event() {
    let app = TestApp::new();
    let mut host = TestHost::new();
    let registry = app.start(&host);

    registry
        .authenticate(
            host.launcher.as_ref(),
            &payment_intent(json!({ "type": "blik_authorize" })),
            &RequestOptions::new("pk_test_123"),
        )
        .await
        .unwrap();

    assert_eq!(host.next_result().await.outcome, FlowOutcome::Completed);
    assert_eq!(app.analytics.count("payauth.selection_fallback"), 1);
    assert!(host.launcher.history().is_empty());
}

#[tokio::test]
async fn unrecognized_next_action_falls_back_to_no_op() {
    let app = TestApp::new();
    let mut host = TestHost::new();
    let registry = app.start(&host);
    let intent = payment_intent(json!({
        "type": "wechat_pay_redirect_to_android_app",
        "wechat_pay_redirect_to_android_app": { "app_id": "wx_app", "prepay_id": "wx_prepay" }
    }));

    registry
        .authenticate(
            host.launcher.as_ref(),
            &intent,
            &RequestOptions::new("pk_test_123"),
        )
        .await
        .unwrap();

    assert_eq!(host.next_result().await.outcome, FlowOutcome::Completed);
    assert!(host.launcher.history().is_empty());
    assert_eq!(app.analytics.count("payauth.selection_fallback"), 1);
    let events = app.analytics.events();
    assert!(events.contains(&AnalyticsEvent::SelectionFallback {
        session_id: registry.session_id(),
        next_action: Some(NextActionKind::Unknown),
        object_id: "pi_3Nq".to_string(),
    }));
    assert!(events.contains(&AnalyticsEvent::AuthenticatorSelected {
        session_id: registry.session_id(),
        authenticator: AuthenticatorKind::NoOp,
        object: "payment_intent".to_string(),
    }));
}

#[tokio::test]
async fn source_is_challenged_in_the_browser() {
    let app = TestApp::new();
    let mut host = TestHost::new();
    let registry = app.start(&host);

    let task = spawn_authenticate(registry, host.launcher.clone(), redirect_source());
    let launch = host.launcher.next_launch().await;

    let LaunchArgs::PaymentBrowserAuth(args) = &launch.args else {
        panic!("expected a browser launch");
    };
    assert_eq!(args.url, "https://hooks.example.com/source/src_1Ab");
    assert_eq!(args.return_url, "shop://source-return");
    assert!(args.should_cancel_source);

    app.service
        .resume_challenge(
            launch.args.to_bundle().unwrap(),
            PaymentFlowResult::new(None, FlowOutcome::Canceled).with_source_id("src_1Ab"),
        )
        .unwrap();
    task.await.unwrap();

    let result = host.next_result().await;
    assert_eq!(result.outcome, FlowOutcome::Canceled);
    assert_eq!(result.source_id.as_deref(), Some("src_1Ab"));
}

#[tokio::test]
async fn redirect_without_return_url_uses_configured_scheme() {
    let settings = PaymentAuthSettings::from_env_vars(
        [(
            "PAYAUTH__BROWSER__RETURN_URL_SCHEME".to_string(),
            "shop".to_string(),
        )]
        .into(),
    )
    .unwrap();
    let app = TestApp::with_settings(settings);
    let host = TestHost::new();
    let registry = app.start(&host);

    let task = spawn_authenticate(
        registry.clone(),
        host.launcher.clone(),
        payment_intent(redirect_action()),
    );
    let launch = host.launcher.next_launch().await;

    let LaunchArgs::PaymentBrowserAuth(args) = &launch.args else {
        panic!("expected a browser launch");
    };
    assert_eq!(args.return_url, "shop://payment_auth/pi_3Nq");

    registry
        .complete_challenge(
            &args.correlation_token,
            PaymentFlowResult::new(None, FlowOutcome::TimedOut),
        )
        .unwrap();
    task.await.unwrap();
}

#[test]
fn unknown_object_kind_is_unsupported() {
    let result = Authenticatable::from_value(json!({
        "id": "ch_1",
        "object": "charge",
        "client_secret": "ch_1_secret_xyz"
    }));

    assert!(matches!(
        result,
        Err(AuthenticatableError::Unsupported { object }) if object == "charge"
    ));
}
