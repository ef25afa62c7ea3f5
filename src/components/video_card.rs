//! Video Card Component
//!
//! One video tile: cover, score badge, title, chips, recommendation
//! reasons, and extraction date. Stateless given a `Video`.
//!
//! The score-to-color bands (0.7/0.5) and score-to-label bands
//! (0.8/0.6/0.4) are intentionally different and kept independent.

use leptos::*;

use crate::types::{ScoreBreakdown, Video};

/// Badge color for a recommendation score.
pub fn score_color(score: f64) -> &'static str {
    if score >= 0.7 {
        "#4CAF50"
    } else if score >= 0.5 {
        "#FF9800"
    } else {
        "#999"
    }
}

/// Qualitative label for a recommendation score.
pub fn score_label(score: f64) -> &'static str {
    if score >= 0.8 {
        "Strongly recommended"
    } else if score >= 0.6 {
        "Recommended"
    } else if score >= 0.4 {
        "Possibly of interest"
    } else {
        "General"
    }
}

/// Human-readable reasons derived from the score breakdown signals.
pub fn recommendation_reasons(breakdown: &ScoreBreakdown) -> Vec<&'static str> {
    let mut reasons = Vec::new();
    if breakdown.category > 0.1 {
        reasons.push("Category match");
    }
    if breakdown.tags > 0.1 {
        reasons.push("Related tags");
    }
    if breakdown.author > 0.05 {
        reasons.push("Favorite author");
    }
    reasons
}

/// Format an extraction timestamp for display, falling back to the raw
/// value when it is not RFC 3339.
pub fn format_extracted_date(value: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| value.to_string())
}

/// Video tile component
#[component]
pub fn VideoCard(video: Video) -> impl IntoView {
    let reasons = video
        .score_breakdown
        .as_ref()
        .map(|b| recommendation_reasons(b))
        .unwrap_or_default();
    let date = format_extracted_date(&video.extracted_at);

    view! {
        <a
            href=video.url.clone()
            target="_blank"
            rel="noopener"
            class="block bg-gray-800 rounded-xl border border-gray-700 hover:border-gray-600
                   overflow-hidden transition-colors"
        >
            // Cover with duration overlay
            {video.cover.as_ref().map(|cover| {
                let duration = video.duration.clone();
                view! {
                    <div
                        class="relative w-full h-44 bg-gray-700 bg-cover bg-center"
                        style=format!("background-image: url({})", cover)
                    >
                        {duration.map(|d| view! {
                            <span class="absolute bottom-2 right-2 bg-black/70 text-white
                                         text-xs px-1.5 py-0.5 rounded">
                                {d}
                            </span>
                        })}
                    </div>
                }
            })}

            <div class="p-4">
                // Score badge
                {video.score.map(|score| view! {
                    <div class="flex items-center space-x-2 mb-2">
                        <span
                            class="text-white text-xs font-bold px-2 py-1 rounded"
                            style=format!("background-color: {}", score_color(score))
                        >
                            {format!("{:.0}", score * 100.0)}
                        </span>
                        <span class="text-xs text-gray-400">{score_label(score)}</span>
                    </div>
                })}

                // Title
                <div class="font-medium leading-snug line-clamp-2 mb-2">
                    {video.title.clone()}
                </div>

                // Author
                {video.author.as_ref().map(|author| view! {
                    <div class="text-xs text-gray-400 mb-2">"👤 " {author.clone()}</div>
                })}

                // Category and source domain chips
                <div class="flex flex-wrap gap-2 mb-2">
                    {video.category.as_ref().map(|category| view! {
                        <span class="bg-blue-900/50 text-blue-400 text-xs px-2 py-0.5 rounded">
                            {category.clone()}
                        </span>
                    })}
                    <span class="bg-gray-700 text-gray-300 text-xs px-2 py-0.5 rounded">
                        {video.source_domain.clone()}
                    </span>
                </div>

                // Tags
                {(!video.tags.is_empty()).then(|| view! {
                    <div class="flex flex-wrap gap-1 mb-2">
                        {video.tags.iter().take(3).map(|tag| view! {
                            <span class="bg-orange-900/50 text-orange-400 text-xs
                                         px-1.5 py-0.5 rounded">
                                "#" {tag.clone()}
                            </span>
                        }).collect_view()}
                    </div>
                })}

                // Recommendation reasons
                {(!reasons.is_empty()).then(|| view! {
                    <div class="text-xs text-gray-500 border-t border-gray-700 pt-2 mt-2">
                        "Recommended for: " {reasons.join(", ")}
                    </div>
                })}

                // Extraction date
                <div class="text-xs text-gray-600 mt-2">{date}</div>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_color_bands() {
        assert_eq!(score_color(0.9), "#4CAF50");
        assert_eq!(score_color(0.7), "#4CAF50");
        assert_eq!(score_color(0.69), "#FF9800");
        assert_eq!(score_color(0.5), "#FF9800");
        assert_eq!(score_color(0.49), "#999");
    }

    #[test]
    fn score_label_bands() {
        assert_eq!(score_label(0.8), "Strongly recommended");
        assert_eq!(score_label(0.79), "Recommended");
        assert_eq!(score_label(0.6), "Recommended");
        assert_eq!(score_label(0.59), "Possibly of interest");
        assert_eq!(score_label(0.4), "Possibly of interest");
        assert_eq!(score_label(0.39), "General");
    }

    #[test]
    fn color_and_label_bands_stay_independent() {
        // 0.75 sits above the green color cutoff but below the top label band
        assert_eq!(score_color(0.75), "#4CAF50");
        assert_eq!(score_label(0.75), "Recommended");
    }

    #[test]
    fn reasons_follow_signal_thresholds() {
        let breakdown = ScoreBreakdown {
            category: 0.2,
            tags: 0.05,
            author: 0.06,
            ..ScoreBreakdown::default()
        };
        assert_eq!(
            recommendation_reasons(&breakdown),
            vec!["Category match", "Favorite author"]
        );
    }

    #[test]
    fn no_reasons_below_thresholds() {
        let breakdown = ScoreBreakdown {
            category: 0.1,
            tags: 0.1,
            author: 0.05,
            ..ScoreBreakdown::default()
        };
        assert!(recommendation_reasons(&breakdown).is_empty());
    }

    #[test]
    fn extracted_date_formats_rfc3339() {
        assert_eq!(
            format_extracted_date("2024-03-05T12:34:56Z"),
            "2024-03-05"
        );
        assert_eq!(format_extracted_date("yesterday"), "yesterday");
    }
}
