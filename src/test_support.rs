//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{
    ApiError, ApiResponse, DevotionPlan, DevotionRequest, DevotionResponse, FeelingRequest,
    GuidanceApi, GuidanceResponse, Verse, VideoInfo,
};
use crate::core::state::App;

/// A canned backend for tests that don't need real HTTP calls.
pub struct StubApi;

#[async_trait]
impl GuidanceApi for StubApi {
    async fn feel(&self, _request: &FeelingRequest) -> Result<ApiResponse, ApiError> {
        Ok(ApiResponse::Guidance(sample_guidance()))
    }

    async fn devotion(&self, _request: &DevotionRequest) -> Result<ApiResponse, ApiError> {
        Ok(ApiResponse::Devotion(sample_devotion()))
    }
}

/// Creates a test App backed by `StubApi`.
pub fn test_app() -> App {
    App::new(Arc::new(StubApi), "http://localhost:8000".to_string())
}

pub fn sample_verse() -> Verse {
    Verse {
        reference: "Philippians 4:6".to_string(),
        text: "Be careful for nothing; but in every thing by prayer and supplication \
               with thanksgiving let your requests be made known unto God."
            .to_string(),
        translation: "KJV".to_string(),
    }
}

pub fn sample_guidance() -> GuidanceResponse {
    GuidanceResponse {
        topic: "anxiety".to_string(),
        verses: vec![sample_verse()],
        reflection: "God invites you to bring every worry to Him.".to_string(),
        prayer: "Lord, grant me Your peace. Amen.".to_string(),
        crisis_detected: false,
        message: None,
        supportive_verses: vec![],
        resources: vec![],
    }
}

pub fn sample_crisis() -> GuidanceResponse {
    GuidanceResponse {
        topic: "crisis_support".to_string(),
        verses: vec![],
        reflection: String::new(),
        prayer: "Lord, please be with this person in their time of need. Amen.".to_string(),
        crisis_detected: true,
        message: Some(
            "If you're in immediate danger, contact local emergency services. \
             In the U.S., call or text 988 (Suicide & Crisis Lifeline)."
                .to_string(),
        ),
        supportive_verses: vec![Verse {
            reference: "Psalm 34:18".to_string(),
            text: "The LORD is nigh unto them that are of a broken heart.".to_string(),
            translation: "KJV".to_string(),
        }],
        resources: vec!["988 Suicide & Crisis Lifeline: call or text 988".to_string()],
    }
}

pub fn sample_devotion() -> DevotionResponse {
    DevotionResponse {
        theme: "peace".to_string(),
        plan: DevotionPlan {
            opening_prayer: "Father, quiet my heart as I begin. Amen.".to_string(),
            scriptures: vec![sample_verse()],
            reflection: "Peace is not the absence of trouble but the presence of God."
                .to_string(),
            action_steps: vec![
                "Write down one worry and hand it to God.".to_string(),
                "Sit in silence for two minutes.".to_string(),
            ],
            closing_prayer: "Thank You for meeting me here. Amen.".to_string(),
        },
        video: Some(VideoInfo {
            video_id: "abc123".to_string(),
            title: "Peace Be Still".to_string(),
            channel_title: "Worship Together".to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/abc123/default.jpg".to_string(),
            duration: Some(245),
        }),
        crisis_detected: false,
    }
}
