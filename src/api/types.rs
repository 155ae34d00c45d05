//! # Wire Types
//!
//! Request and response types for the Abide backend API.
//!
//! The backend discriminates nothing for us: both endpoints return plain
//! JSON objects, and the crisis middleware may answer *either* endpoint
//! with a guidance-shaped payload carrying `crisis_detected: true`. The
//! client therefore models the result as a tagged union (`ApiResponse`)
//! and exposes the crisis case through [`ApiResponse::crisis`] so the UI
//! can pattern-match instead of probing for fields.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Body for `POST /api/v1/feel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeelingRequest {
    pub text: String,
}

/// Body for `POST /api/v1/devotion`. A missing theme lets the backend pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevotionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

/// A single Bible verse as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Verse {
    pub reference: String,
    pub text: String,
    pub translation: String,
}

/// Response from `/api/v1/feel`.
///
/// The crisis middleware reuses this shape with only `message`,
/// `supportive_verses`, `prayer`, and `topic` populated, so everything
/// except `prayer` is defaulted.
#[derive(Debug, Clone, Deserialize)]
pub struct GuidanceResponse {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub verses: Vec<Verse>,
    #[serde(default)]
    pub reflection: String,
    pub prayer: String,
    #[serde(default)]
    pub crisis_detected: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub supportive_verses: Vec<Verse>,
    #[serde(default)]
    pub resources: Vec<String>,
}

/// Response from `/api/v1/devotion`.
#[derive(Debug, Clone, Deserialize)]
pub struct DevotionResponse {
    pub theme: String,
    pub plan: DevotionPlan,
    #[serde(default)]
    pub video: Option<VideoInfo>,
    #[serde(default)]
    pub crisis_detected: bool,
}

/// The structured ten-minute devotion exercise.
#[derive(Debug, Clone, Deserialize)]
pub struct DevotionPlan {
    pub opening_prayer: String,
    #[serde(default)]
    pub scriptures: Vec<Verse>,
    pub reflection: String,
    #[serde(default)]
    pub action_steps: Vec<String>,
    pub closing_prayer: String,
}

/// YouTube video recommendation attached to a devotion.
/// The backend spells these fields in camelCase.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub duration: Option<u32>,
}

impl VideoInfo {
    /// Outbound watch link for the recommendation.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// The single "current response" slot held by the controller.
///
/// Discriminated by which request produced it; the crisis case cuts
/// across both variants via [`ApiResponse::crisis`].
#[derive(Debug, Clone)]
pub enum ApiResponse {
    Guidance(GuidanceResponse),
    Devotion(DevotionResponse),
}

/// Borrowed view of the crisis content of a response.
///
/// A devotion payload that carries the flag has none of the crisis fields;
/// the banner falls back to its fixed hotline affordances in that case.
#[derive(Debug, Clone, Copy)]
pub struct CrisisView<'a> {
    pub message: Option<&'a str>,
    pub supportive_verses: &'a [Verse],
    pub prayer: Option<&'a str>,
    pub resources: &'a [String],
}

impl ApiResponse {
    /// Returns the crisis view when the backend flagged this response.
    /// The crisis path supersedes normal rendering for both variants.
    pub fn crisis(&self) -> Option<CrisisView<'_>> {
        match self {
            ApiResponse::Guidance(g) if g.crisis_detected => Some(CrisisView {
                message: g.message.as_deref(),
                supportive_verses: &g.supportive_verses,
                prayer: Some(&g.prayer),
                resources: &g.resources,
            }),
            ApiResponse::Devotion(d) if d.crisis_detected => Some(CrisisView {
                message: None,
                supportive_verses: &[],
                prayer: None,
                resources: &[],
            }),
            _ => None,
        }
    }
}

/// Wire shape of a `/api/v1/devotion` body: either a real devotion plan or
/// the guidance-shaped crisis payload the middleware substitutes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DevotionWire {
    Devotion(DevotionResponse),
    Crisis(GuidanceResponse),
}

impl From<DevotionWire> for ApiResponse {
    fn from(wire: DevotionWire) -> Self {
        match wire {
            DevotionWire::Devotion(d) => ApiResponse::Devotion(d),
            DevotionWire::Crisis(g) => ApiResponse::Guidance(g),
        }
    }
}

/// The fixed set of devotion themes the backend recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Peace,
    Hope,
    Comfort,
    Strength,
    Love,
    Gratitude,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Peace,
        Theme::Hope,
        Theme::Comfort,
        Theme::Strength,
        Theme::Love,
        Theme::Gratitude,
    ];

    /// Wire identifier, as serialized into the request body.
    pub fn id(self) -> &'static str {
        match self {
            Theme::Peace => "peace",
            Theme::Hope => "hope",
            Theme::Comfort => "comfort",
            Theme::Strength => "strength",
            Theme::Love => "love",
            Theme::Gratitude => "gratitude",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Peace => "Peace",
            Theme::Hope => "Hope",
            Theme::Comfort => "Comfort",
            Theme::Strength => "Strength",
            Theme::Love => "Love",
            Theme::Gratitude => "Gratitude",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Theme::Peace => "Find inner calm and tranquility",
            Theme::Hope => "Discover renewed optimism and faith",
            Theme::Comfort => "Receive solace and encouragement",
            Theme::Strength => "Build resilience and courage",
            Theme::Love => "Experience God's unconditional love",
            Theme::Gratitude => "Cultivate thankfulness and joy",
        }
    }

    /// Uniformly random theme, used by "Surprise Me".
    pub fn random() -> Theme {
        Self::ALL[rand::rng().random_range(0..Self::ALL.len())]
    }
}

/// Formats a duration in seconds as `minutes:seconds`, seconds zero-padded
/// to two digits (`125` → `"2:05"`).
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
