//! HTTP contract with the Abide backend: wire types and the client seam.

pub mod client;
pub mod types;

pub use client::{ApiError, GuidanceApi, HttpClient};
pub use types::{
    ApiResponse, CrisisView, DevotionPlan, DevotionRequest, DevotionResponse, FeelingRequest,
    GuidanceResponse, Theme, Verse, VideoInfo, format_duration,
};
