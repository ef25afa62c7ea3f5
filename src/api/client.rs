//! HTTP API Client
//!
//! Functions for communicating with the Kalkman REST API. Every response
//! arrives wrapped in an envelope whose `data` field carries the payload;
//! any other shape is a contract violation surfaced as a decode error.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::types::{InterestTag, SimilarityResult, UserProfile, Video, VideoStats};

/// Default API base path
pub const DEFAULT_API_BASE: &str = "/api";

/// Fixed per-request timeout in milliseconds
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Default limit for interest tag queries
pub const DEFAULT_INTERESTS_LIMIT: u32 = 10;

/// Default limit for recommendation queries
pub const DEFAULT_RECOMMENDATION_LIMIT: u32 = 20;

/// Default minimum score for recommendation queries
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

/// Default limit for similar-video queries
pub const DEFAULT_SIMILAR_LIMIT: u32 = 10;

/// Request failure taxonomy
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    /// Transport failure: unreachable backend, aborted request, timeout
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Response body did not match the envelope contract
    #[error("invalid response: {0}")]
    Decode(String),
}

/// API base URL, overridable through local storage. Trailing slashes are
/// stripped so paths concatenate cleanly.
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("kalkman_api_url").ok().flatten());

    stored
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

// ============ Response Handling ============

#[derive(serde::Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Unwrap the response envelope around a payload.
fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| RequestError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

/// Extract the backend's error message from a failure body, falling back to
/// a generic status message.
fn status_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .unwrap_or_else(|| format!("request failed with status {}", status))
}

fn new_abort_controller() -> Result<web_sys::AbortController, RequestError> {
    web_sys::AbortController::new()
        .map_err(|_| RequestError::Network("abort controller unavailable".to_string()))
}

/// Send a built request with the fixed timeout armed and unwrap its payload.
async fn send_request<T: DeserializeOwned>(
    request: gloo_net::http::Request,
    controller: web_sys::AbortController,
) -> Result<T, RequestError> {
    let timeout = Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort());
    let result = request.send().await;
    timeout.cancel();

    let response = result.map_err(|e| RequestError::Network(e.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| RequestError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(RequestError::Status {
            status,
            message: status_message(status, &text),
        });
    }

    decode_envelope(&text)
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, RequestError> {
    let url = format!("{}{}", get_api_base(), path);
    let controller = new_abort_controller()?;
    let request = Request::get(&url)
        .abort_signal(Some(&controller.signal()))
        .build()
        .map_err(|e| RequestError::Network(e.to_string()))?;
    send_request(request, controller).await
}

async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
    path: &str,
    body: &B,
) -> Result<T, RequestError> {
    let url = format!("{}{}", get_api_base(), path);
    let controller = new_abort_controller()?;
    let request = Request::post(&url)
        .abort_signal(Some(&controller.signal()))
        .json(body)
        .map_err(|e| RequestError::Network(e.to_string()))?;
    send_request(request, controller).await
}

// ============ Request Paths ============

/// Optional filters for video listing queries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VideoQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub category: Option<String>,
    pub source_domain: Option<String>,
    /// Target the ranked endpoint variant with backend-precomputed ordering
    pub ranked: bool,
}

fn profile_path(user_id: &str) -> String {
    format!("/profile/{}", user_id)
}

fn interests_path(user_id: &str, limit: u32) -> String {
    format!("/profile/{}/interests?limit={}", user_id, limit)
}

fn compare_path(user1: &str, user2: &str) -> String {
    format!(
        "/profile/compare/similarity?user1={}&user2={}",
        urlencoding::encode(user1),
        urlencoding::encode(user2)
    )
}

fn videos_path(user_id: &str, query: &VideoQuery) -> String {
    let endpoint = if query.ranked {
        format!("/resources/user/{}/ranked", user_id)
    } else {
        format!("/resources/user/{}", user_id)
    };

    let mut params = Vec::new();
    if let Some(limit) = query.limit {
        params.push(format!("limit={}", limit));
    }
    if let Some(offset) = query.offset {
        params.push(format!("offset={}", offset));
    }
    if let Some(category) = &query.category {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if let Some(domain) = &query.source_domain {
        params.push(format!("sourceDomain={}", urlencoding::encode(domain)));
    }

    if params.is_empty() {
        endpoint
    } else {
        format!("{}?{}", endpoint, params.join("&"))
    }
}

fn stats_path(user_id: &str) -> String {
    format!("/resources/user/{}/stats", user_id)
}

fn recommendations_path(user_id: &str, limit: u32, min_score: f64) -> String {
    format!(
        "/recommendations/user/{}?limit={}&minScore={}",
        user_id, limit, min_score
    )
}

fn similar_videos_path(video_id: &str, user_id: &str, limit: u32) -> String {
    format!(
        "/recommendations/similar/{}?userId={}&limit={}",
        video_id,
        urlencoding::encode(user_id),
        limit
    )
}

#[derive(serde::Serialize)]
struct BatchRankRequest<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
    videos: &'a [Video],
}

// ============ API Functions ============

/// Fetch a single user profile
pub async fn get_user_profile(user_id: &str) -> Result<UserProfile, RequestError> {
    get_json(&profile_path(user_id)).await
}

/// Fetch all user profiles, keyed by user id
pub async fn get_all_profiles() -> Result<HashMap<String, UserProfile>, RequestError> {
    get_json("/profile").await
}

/// Fetch a user's top interest tags
pub async fn get_user_interests(
    user_id: &str,
    limit: u32,
) -> Result<Vec<InterestTag>, RequestError> {
    get_json(&interests_path(user_id, limit)).await
}

/// Compare two users and return their similarity score
pub async fn compare_users(user1: &str, user2: &str) -> Result<SimilarityResult, RequestError> {
    get_json(&compare_path(user1, user2)).await
}

/// Fetch a user's video list, optionally filtered and ranked
pub async fn get_user_videos(
    user_id: &str,
    query: &VideoQuery,
) -> Result<Vec<Video>, RequestError> {
    get_json(&videos_path(user_id, query)).await
}

/// Fetch aggregate statistics over a user's video library
pub async fn get_video_stats(user_id: &str) -> Result<VideoStats, RequestError> {
    get_json(&stats_path(user_id)).await
}

/// Fetch scored recommendations for a user
pub async fn get_recommendations(
    user_id: &str,
    limit: u32,
    min_score: f64,
) -> Result<Vec<Video>, RequestError> {
    get_json(&recommendations_path(user_id, limit, min_score)).await
}

/// Fetch videos similar to the given one, personalized for a user
pub async fn get_similar_videos(
    video_id: &str,
    user_id: &str,
    limit: u32,
) -> Result<Vec<Video>, RequestError> {
    get_json(&similar_videos_path(video_id, user_id, limit)).await
}

/// Re-score a whole candidate set in one round trip
pub async fn batch_rank(user_id: &str, videos: &[Video]) -> Result<Vec<Video>, RequestError> {
    post_json(
        "/recommendations/batch-rank",
        &BatchRankRequest { user_id, videos },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_paths() {
        assert_eq!(profile_path("u1"), "/profile/u1");
        assert_eq!(
            interests_path("u1", DEFAULT_INTERESTS_LIMIT),
            "/profile/u1/interests?limit=10"
        );
        assert_eq!(
            compare_path("alice", "bob"),
            "/profile/compare/similarity?user1=alice&user2=bob"
        );
    }

    #[test]
    fn videos_path_without_filters() {
        let query = VideoQuery::default();
        assert_eq!(videos_path("u1", &query), "/resources/user/u1");
    }

    #[test]
    fn videos_path_ranked_with_filters() {
        let query = VideoQuery {
            limit: Some(50),
            offset: None,
            category: Some("tech".to_string()),
            source_domain: Some("example.com".to_string()),
            ranked: true,
        };
        assert_eq!(
            videos_path("u1", &query),
            "/resources/user/u1/ranked?limit=50&category=tech&sourceDomain=example.com"
        );
    }

    #[test]
    fn videos_path_encodes_filter_values() {
        let query = VideoQuery {
            category: Some("sci fi".to_string()),
            ..VideoQuery::default()
        };
        assert_eq!(
            videos_path("u1", &query),
            "/resources/user/u1?category=sci%20fi"
        );
    }

    #[test]
    fn recommendation_paths() {
        assert_eq!(stats_path("u1"), "/resources/user/u1/stats");
        assert_eq!(
            recommendations_path("u1", DEFAULT_RECOMMENDATION_LIMIT, DEFAULT_MIN_SCORE),
            "/recommendations/user/u1?limit=20&minScore=0.3"
        );
        assert_eq!(
            similar_videos_path("v9", "u1", DEFAULT_SIMILAR_LIMIT),
            "/recommendations/similar/v9?userId=u1&limit=10"
        );
    }

    #[test]
    fn batch_rank_body_shape() {
        let request = BatchRankRequest {
            user_id: "u1",
            videos: &[],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"userId":"u1","videos":[]}"#);
    }

    #[test]
    fn envelope_unwraps_payload() {
        let similarity: SimilarityResult =
            decode_envelope(r#"{"data":{"similarity":0.85}}"#).unwrap();
        assert_eq!(similarity.similarity, 0.85);
    }

    #[test]
    fn envelope_unwraps_profile_map() {
        let body = r#"{"data":{"u1":{
            "userId": "u1",
            "totalRatings": 3,
            "averageScore": 6.0,
            "categories": [],
            "domains": [],
            "timePatterns": {
                "hourlyDistribution": {}, "weekdayDistribution": {}, "peakHours": []
            },
            "interests": [],
            "sentiment": {
                "positive": 0.5, "neutral": 0.4, "negative": 0.1,
                "overallSentiment": "neutral"
            }
        }}}"#;

        let profiles: HashMap<String, UserProfile> = decode_envelope(body).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles["u1"].total_ratings, 3);
    }

    #[test]
    fn envelope_rejects_missing_data_field() {
        let result = decode_envelope::<SimilarityResult>(r#"{"similarity":0.85}"#);
        assert!(matches!(result, Err(RequestError::Decode(_))));
    }

    #[test]
    fn envelope_rejects_non_object_body() {
        let result = decode_envelope::<SimilarityResult>("[1,2,3]");
        assert!(matches!(result, Err(RequestError::Decode(_))));
    }

    #[test]
    fn status_message_prefers_backend_error() {
        assert_eq!(
            status_message(404, r#"{"error":"profile not found"}"#),
            "profile not found"
        );
        assert_eq!(
            status_message(500, r#"{"message":"internal failure"}"#),
            "internal failure"
        );
        assert_eq!(
            status_message(502, "<html>bad gateway</html>"),
            "request failed with status 502"
        );
    }
}
