//! View-Model Types
//!
//! Backend-owned read models for user profiles, videos, and recommendations.
//! The backend returns every sequence pre-sorted by relevance or recency;
//! the UI only truncates, never re-sorts.

use std::collections::BTreeMap;

/// Aggregated behavioral profile for one user.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub total_ratings: u64,
    pub average_score: f64,
    pub categories: Vec<CategoryScore>,
    pub domains: Vec<DomainScore>,
    pub time_patterns: TimePattern,
    pub interests: Vec<InterestTag>,
    pub sentiment: SentimentAnalysis,
}

/// Per-category rating summary.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: String,
    pub count: u64,
    pub average_score: f64,
    pub weight: f64,
}

/// Per-domain visit summary.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainScore {
    pub domain: String,
    pub count: u64,
    pub average_score: f64,
    pub last_visited: String,
}

/// Visit distribution over hours of day and weekdays.
///
/// Ordered maps so chart buckets iterate in key order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePattern {
    #[serde(default)]
    pub hourly_distribution: BTreeMap<u32, u64>,
    #[serde(default)]
    pub weekday_distribution: BTreeMap<u32, u64>,
    #[serde(default)]
    pub peak_hours: Vec<u32>,
}

/// Weighted interest tag.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterestTag {
    pub tag: String,
    pub weight: f64,
    pub frequency: u64,
}

/// Sentiment proportions, expected to sum to roughly 1.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub overall_sentiment: Sentiment,
}

/// Backend-assigned overall sentiment classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Badge styling for sentiment chips.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Sentiment::Positive => "bg-green-900/50 text-green-400",
            Sentiment::Neutral => "bg-gray-700 text-gray-300",
            Sentiment::Negative => "bg-red-900/50 text-red-400",
        }
    }
}

/// One extracted video resource, optionally scored by the recommender.
///
/// The backend payload mixes naming styles: `source_domain` and
/// `extracted_at` are snake_case, `scoreBreakdown` is camelCase.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub source_domain: String,
    pub extracted_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(
        default,
        rename = "scoreBreakdown",
        skip_serializing_if = "Option::is_none"
    )]
    pub score_breakdown: Option<ScoreBreakdown>,
}

/// Decomposition of a recommendation score into named signals.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub category: f64,
    #[serde(default)]
    pub tags: f64,
    #[serde(default)]
    pub author: f64,
    #[serde(default)]
    pub domain: f64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub freshness: f64,
}

/// Aggregate counts over a user's video library.
///
/// Ordered maps so the filter dropdowns list options deterministically.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStats {
    pub total: u64,
    #[serde(default)]
    pub by_category: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_domain: BTreeMap<String, u64>,
}

/// Backend-computed similarity between two users, in [0, 1].
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SimilarityResult {
    pub similarity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_deserializes_camel_case_fields() {
        let json = r#"{
            "userId": "u1",
            "totalRatings": 42,
            "averageScore": 7.5,
            "categories": [
                {"category": "tech", "count": 10, "averageScore": 8.0, "weight": 0.4}
            ],
            "domains": [
                {"domain": "example.com", "count": 5, "averageScore": 6.5,
                 "lastVisited": "2024-05-01T10:00:00Z"}
            ],
            "timePatterns": {
                "hourlyDistribution": {"20": 7, "8": 3},
                "weekdayDistribution": {"0": 2},
                "peakHours": [20]
            },
            "interests": [{"tag": "rust", "weight": 0.9, "frequency": 12}],
            "sentiment": {
                "positive": 0.6, "neutral": 0.3, "negative": 0.1,
                "overallSentiment": "positive"
            }
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.user_id, "u1");
        assert_eq!(profile.total_ratings, 42);
        assert_eq!(profile.categories[0].average_score, 8.0);
        assert_eq!(profile.domains[0].last_visited, "2024-05-01T10:00:00Z");
        assert_eq!(profile.sentiment.overall_sentiment, Sentiment::Positive);

        // Integer-keyed JSON maps land in hour order
        let hours: Vec<u32> = profile
            .time_patterns
            .hourly_distribution
            .keys()
            .copied()
            .collect();
        assert_eq!(hours, vec![8, 20]);
    }

    #[test]
    fn video_fills_missing_optionals() {
        let json = r#"{
            "id": "v1",
            "title": "Intro to Ownership",
            "url": "https://example.com/v1",
            "source_domain": "example.com",
            "extracted_at": "2024-03-05T12:00:00Z"
        }"#;

        let video: Video = serde_json::from_str(json).unwrap();
        assert_eq!(video.author, None);
        assert_eq!(video.cover, None);
        assert!(video.tags.is_empty());
        assert_eq!(video.score, None);
        assert_eq!(video.score_breakdown, None);
    }

    #[test]
    fn video_reads_score_breakdown() {
        let json = r#"{
            "id": "v2",
            "title": "Borrow Checker Deep Dive",
            "url": "https://example.com/v2",
            "source_domain": "example.com",
            "extracted_at": "2024-03-06T09:00:00Z",
            "score": 0.82,
            "scoreBreakdown": {"category": 0.3, "tags": 0.2, "author": 0.1}
        }"#;

        let video: Video = serde_json::from_str(json).unwrap();
        let breakdown = video.score_breakdown.unwrap();
        assert_eq!(breakdown.category, 0.3);
        // Signals the backend omits default to zero
        assert_eq!(breakdown.freshness, 0.0);
    }

    #[test]
    fn video_round_trips_mixed_field_naming() {
        let video = Video {
            id: "v3".into(),
            title: "Async in Practice".into(),
            url: "https://example.com/v3".into(),
            author: Some("ferris".into()),
            duration: None,
            cover: None,
            category: Some("tech".into()),
            tags: vec!["async".into()],
            source_domain: "example.com".into(),
            extracted_at: "2024-04-01T00:00:00Z".into(),
            score: Some(0.5),
            score_breakdown: Some(ScoreBreakdown {
                category: 0.2,
                ..ScoreBreakdown::default()
            }),
        };

        let json = serde_json::to_string(&video).unwrap();
        assert!(json.contains("\"source_domain\""));
        assert!(json.contains("\"scoreBreakdown\""));

        let back: Video = serde_json::from_str(&json).unwrap();
        assert_eq!(back, video);
    }

    #[test]
    fn stats_keys_iterate_sorted() {
        let json = r#"{
            "total": 12,
            "byCategory": {"music": 4, "gaming": 5, "tech": 3},
            "byDomain": {"b.com": 6, "a.com": 6}
        }"#;

        let stats: VideoStats = serde_json::from_str(json).unwrap();
        let categories: Vec<&str> = stats.by_category.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["gaming", "music", "tech"]);
        let domains: Vec<&str> = stats.by_domain.keys().map(String::as_str).collect();
        assert_eq!(domains, vec!["a.com", "b.com"]);
    }
}
