//! End-to-end controller tests: drive `update()` and the spawned request
//! tasks against a mock backend, the same path the event loop takes.

use std::sync::{Arc, mpsc};
use std::time::Duration;

use abide::api::{ApiResponse, GuidanceApi, HttpClient, Theme};
use abide::core::action::{Action, Effect, update};
use abide::core::state::{App, ToastKind};
use abide::tui::{spawn_devotion, spawn_feeling};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(server: &MockServer) -> App {
    let client: Arc<dyn GuidanceApi> =
        Arc::new(HttpClient::new(server.uri(), Duration::from_secs(5)));
    App::new(client, server.uri())
}

fn guidance_body() -> serde_json::Value {
    json!({
        "topic": "loneliness",
        "verses": [
            {
                "reference": "Deuteronomy 31:6",
                "text": "He will not fail thee, nor forsake thee.",
                "translation": "KJV"
            }
        ],
        "reflection": "You are never truly alone.",
        "prayer": "Lord, remind me of your presence.",
        "crisis_detected": false
    })
}

/// Blocks the test thread (multi_thread runtime) until the spawned task
/// reports back, then feeds the completion through `update()`.
fn pump_one(app: &mut App, rx: &mpsc::Receiver<Action>) {
    let action = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("background task must report a completion");
    update(app, action);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_submit_feeling_round_trip_stores_guidance() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/feel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(guidance_body()))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    let (tx, rx) = mpsc::channel();

    let effect = update(&mut app, Action::SubmitFeeling("I feel alone".into()));
    let Effect::SpawnFeeling { seq, request } = effect else {
        panic!("expected a spawn effect, got {effect:?}");
    };
    assert!(app.is_loading);

    spawn_feeling(app.client.clone(), seq, request, tx);
    pump_one(&mut app, &rx);

    assert!(!app.is_loading);
    match &app.response {
        Some(ApiResponse::Guidance(g)) => assert_eq!(g.topic, "loneliness"),
        other => panic!("expected guidance, got {other:?}"),
    }
    assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Success);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_request_keeps_previous_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/feel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(guidance_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/devotion"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    let (tx, rx) = mpsc::channel();

    // First a successful guidance round trip
    let Effect::SpawnFeeling { seq, request } =
        update(&mut app, Action::SubmitFeeling("lonely".into()))
    else {
        panic!("expected a spawn effect");
    };
    spawn_feeling(app.client.clone(), seq, request, tx.clone());
    pump_one(&mut app, &rx);
    assert!(matches!(app.response, Some(ApiResponse::Guidance(_))));

    // Then a devotion request that fails on the server
    let Effect::SpawnDevotion { seq, request } =
        update(&mut app, Action::GenerateDevotion(Some(Theme::Hope)))
    else {
        panic!("expected a spawn effect");
    };
    spawn_devotion(app.client.clone(), seq, request, tx);
    pump_one(&mut app, &rx);

    assert!(!app.is_loading);
    let toast = app.toast.as_ref().expect("exactly one error toast");
    assert_eq!(toast.kind, ToastKind::Error);
    assert!(
        rx.recv_timeout(Duration::from_millis(200)).is_err(),
        "a failure must produce a single completion"
    );
    // The guidance from before stays on screen untouched
    match &app.response {
        Some(ApiResponse::Guidance(g)) => assert_eq!(g.topic, "loneliness"),
        other => panic!("previous response lost: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_surprise_me_sends_a_known_theme() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/devotion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "theme": "hope",
            "plan": {
                "opening_prayer": "Open.",
                "scriptures": [],
                "reflection": "Still.",
                "action_steps": [],
                "closing_prayer": "Amen."
            }
        })))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    let (tx, rx) = mpsc::channel();

    // Surprise Me picks client-side, so the wire always carries a theme.
    let Effect::SpawnDevotion { seq, request } =
        update(&mut app, Action::GenerateDevotion(Some(Theme::random())))
    else {
        panic!("expected a spawn effect");
    };
    assert!(request.theme.is_some());
    spawn_devotion(app.client.clone(), seq, request, tx);
    pump_one(&mut app, &rx);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let sent = body["theme"].as_str().expect("theme field present");
    assert!(
        Theme::ALL.iter().any(|t| t.id() == sent),
        "unknown theme on the wire: {sent}"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_crisis_devotion_supersedes_previous_devotion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/devotion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "crisis_detected": true,
            "message": "Please reach out for support.",
            "supportive_verses": [],
            "prayer": "Lord, hold them close.",
            "topic": "crisis_support"
        })))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    let (tx, rx) = mpsc::channel();

    let Effect::SpawnDevotion { seq, request } =
        update(&mut app, Action::GenerateDevotion(None))
    else {
        panic!("expected a spawn effect");
    };
    spawn_devotion(app.client.clone(), seq, request, tx);
    pump_one(&mut app, &rx);

    let response = app.response.as_ref().expect("response stored");
    assert!(response.crisis().is_some());
    let toast = app.toast.as_ref().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.text, "Support resources are ready for you.");
}
