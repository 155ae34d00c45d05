use std::time::Duration;

use abide::api::{ApiError, ApiResponse, GuidanceApi, HttpClient, Theme};
use abide::api::{DevotionRequest, FeelingRequest};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(server.uri(), Duration::from_secs(5))
}

fn guidance_body() -> serde_json::Value {
    json!({
        "topic": "anxiety",
        "verses": [
            {
                "reference": "Philippians 4:6",
                "text": "Be careful for nothing...",
                "translation": "KJV"
            },
            {
                "reference": "1 Peter 5:7",
                "text": "Casting all your care upon him; for he careth for you.",
                "translation": "KJV"
            }
        ],
        "reflection": "God invites you to trade worry for prayer.",
        "prayer": "Lord, quiet my anxious heart.",
        "crisis_detected": false
    })
}

fn devotion_body() -> serde_json::Value {
    json!({
        "theme": "peace",
        "plan": {
            "opening_prayer": "Settle my thoughts, Lord.",
            "scriptures": [
                {
                    "reference": "John 14:27",
                    "text": "Peace I leave with you, my peace I give unto you...",
                    "translation": "KJV"
                }
            ],
            "reflection": "Where do you need peace today?",
            "action_steps": ["Sit quietly for two minutes", "Pray over one worry"],
            "closing_prayer": "Thank you for your peace."
        },
        "video": {
            "videoId": "abc123",
            "title": "Finding Peace",
            "channelTitle": "Daily Devotions",
            "thumbnailUrl": "https://img.example.org/abc123.jpg",
            "duration": 245
        }
    })
}

// ============================================================================
// Guidance Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_feel_posts_exact_request_body() {
    let server = MockServer::start().await;

    // The matcher fails the test if the body differs from the contract.
    Mock::given(method("POST"))
        .and(path("/api/v1/feel"))
        .and(body_json(json!({"text": "I feel anxious"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(guidance_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .feel(&FeelingRequest {
            text: "I feel anxious".to_string(),
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_feel_parses_guidance_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/feel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(guidance_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .feel(&FeelingRequest {
            text: "anxious".to_string(),
        })
        .await
        .unwrap();

    let ApiResponse::Guidance(guidance) = response else {
        panic!("expected a guidance response");
    };
    assert_eq!(guidance.topic, "anxiety");
    assert_eq!(guidance.verses.len(), 2);
    assert_eq!(guidance.verses[0].reference, "Philippians 4:6");
    assert_eq!(guidance.prayer, "Lord, quiet my anxious heart.");
    assert!(!guidance.crisis_detected);
}

#[tokio::test]
async fn test_feel_crisis_payload_is_detected() {
    let server = MockServer::start().await;
    let body = json!({
        "crisis_detected": true,
        "message": "You don't have to face this alone.",
        "supportive_verses": [
            {
                "reference": "Psalm 34:18",
                "text": "The LORD is nigh unto them that are of a broken heart...",
                "translation": "KJV"
            }
        ],
        "prayer": "Lord, be near.",
        "topic": "crisis"
    });
    Mock::given(method("POST"))
        .and(path("/api/v1/feel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .feel(&FeelingRequest {
            text: "I can't go on".to_string(),
        })
        .await
        .unwrap();

    let crisis = response.crisis().expect("crisis flag must surface");
    assert_eq!(crisis.message, Some("You don't have to face this alone."));
    assert_eq!(crisis.supportive_verses.len(), 1);
}

#[tokio::test]
async fn test_feel_non_2xx_is_an_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/feel"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .feel(&FeelingRequest {
            text: "anxious".to_string(),
        })
        .await;

    match result {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_feel_malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/feel"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .feel(&FeelingRequest {
            text: "anxious".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

// ============================================================================
// Devotion Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_devotion_with_theme_posts_it() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/devotion"))
        .and(body_json(json!({"theme": "peace"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(devotion_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .devotion(&DevotionRequest {
            theme: Some(Theme::Peace),
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_devotion_without_theme_omits_the_field() {
    let server = MockServer::start().await;
    // An absent theme is an empty object, not {"theme": null}.
    Mock::given(method("POST"))
        .and(path("/api/v1/devotion"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(devotion_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.devotion(&DevotionRequest { theme: None }).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_devotion_parses_plan_and_video() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/devotion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(devotion_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .devotion(&DevotionRequest {
            theme: Some(Theme::Peace),
        })
        .await
        .unwrap();

    let ApiResponse::Devotion(devotion) = response else {
        panic!("expected a devotion response");
    };
    assert_eq!(devotion.theme, "peace");
    assert_eq!(devotion.plan.scriptures.len(), 1);
    let video = devotion.video.expect("video present in payload");
    assert_eq!(video.video_id, "abc123");
    assert_eq!(video.duration, Some(245));
    assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=abc123");
}

#[tokio::test]
async fn test_devotion_endpoint_can_answer_with_crisis_shape() {
    let server = MockServer::start().await;
    // The crisis middleware intercepts this endpoint too, answering with a
    // guidance-shaped payload instead of a devotion.
    let body = json!({
        "crisis_detected": true,
        "message": "Please reach out for support.",
        "supportive_verses": [],
        "prayer": "Lord, hold them close.",
        "topic": "crisis"
    });
    Mock::given(method("POST"))
        .and(path("/api/v1/devotion"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.devotion(&DevotionRequest { theme: None }).await.unwrap();

    assert!(response.crisis().is_some());
    assert!(matches!(response, ApiResponse::Guidance(_)));
}
