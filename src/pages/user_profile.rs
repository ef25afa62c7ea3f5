//! User Profile Page
//!
//! Detail view for one user, driven by the `:user_id` route parameter.
//! Chart projections reshape the already-fetched profile; no additional
//! computation happens client-side.

use leptos::*;
use leptos_router::{use_params_map, A};

use crate::api;
use crate::components::{BarChart, Card, ChartPoint, Loading, PieChart};
use crate::types::{CategoryScore, SentimentAnalysis, TimePattern, UserProfile};

/// How many categories the distribution chart shows
const CATEGORY_CHART_COUNT: usize = 6;

/// How many interest chips the profile shows
const INTEREST_COUNT: usize = 15;

/// How many domains the profile shows
const DOMAIN_COUNT: usize = 10;

fn category_chart_data(categories: &[CategoryScore]) -> Vec<ChartPoint> {
    categories
        .iter()
        .take(CATEGORY_CHART_COUNT)
        .map(|c| ChartPoint {
            label: c.category.clone(),
            value: c.count as f64,
        })
        .collect()
}

/// Sentiment proportions scaled to percentages, as three named slices.
fn sentiment_chart_data(sentiment: &SentimentAnalysis) -> Vec<ChartPoint> {
    vec![
        ChartPoint {
            label: "Positive".to_string(),
            value: sentiment.positive * 100.0,
        },
        ChartPoint {
            label: "Neutral".to_string(),
            value: sentiment.neutral * 100.0,
        },
        ChartPoint {
            label: "Negative".to_string(),
            value: sentiment.negative * 100.0,
        },
    ]
}

/// Hourly visit counts as `"H:00"`-labeled buckets, in hour order.
fn hourly_chart_data(patterns: &TimePattern) -> Vec<ChartPoint> {
    patterns
        .hourly_distribution
        .iter()
        .map(|(hour, count)| ChartPoint {
            label: format!("{}:00", hour),
            value: *count as f64,
        })
        .collect()
}

fn peak_hours_label(patterns: &TimePattern) -> String {
    patterns
        .peak_hours
        .iter()
        .map(|h| format!("{}:00", h))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Badge styling for a domain's average score.
fn domain_score_class(score: f64) -> &'static str {
    if score >= 7.0 {
        "bg-green-900/50 text-green-400"
    } else if score >= 4.0 {
        "bg-orange-900/50 text-orange-400"
    } else {
        "bg-red-900/50 text-red-400"
    }
}

/// Profile detail page component
#[component]
pub fn Profile() -> impl IntoView {
    let params = use_params_map();
    let user_id = create_memo(move |_| {
        params.with(|p| p.get("user_id").cloned().unwrap_or_default())
    });

    let (profile, set_profile) = create_signal(None::<UserProfile>);
    let (loading, set_loading) = create_signal(true);

    // Refetch whenever the route parameter changes
    create_effect(move |_| {
        let id = user_id.get();
        if id.is_empty() {
            set_profile.set(None);
            set_loading.set(false);
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            match api::get_user_profile(&id).await {
                Ok(data) => {
                    set_profile.set(Some(data));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load profile {}: {}", id, e).into(),
                    );
                    set_profile.set(None);
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div>
            <A
                href="/users"
                class="inline-flex items-center space-x-2 text-blue-400 text-sm mb-6"
            >
                "← Back to user list"
            </A>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else if let Some(p) = profile.get() {
                    view! { <ProfileDetail profile=p /> }.into_view()
                } else {
                    view! {
                        <div class="text-center py-16">
                            <p class="text-lg text-gray-400 mb-4">"User data not found"</p>
                            <A href="/users" class="text-blue-400">"Back to user list"</A>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// Full detail layout for one fetched profile
#[component]
fn ProfileDetail(profile: UserProfile) -> impl IntoView {
    let sentiment = profile.sentiment.overall_sentiment;
    let category_data = category_chart_data(&profile.categories);
    let sentiment_data = sentiment_chart_data(&profile.sentiment);
    let hourly_data = hourly_chart_data(&profile.time_patterns);
    let peak_hours = peak_hours_label(&profile.time_patterns);

    view! {
        <div class="space-y-6">
            // Header
            <Card>
                <div class="flex items-start justify-between">
                    <div>
                        <h1 class="text-3xl font-bold mb-2">
                            "User " {profile.user_id.clone()}
                        </h1>
                        <div class="flex items-center space-x-6 text-gray-400">
                            <span>{format!("📊 {} ratings", profile.total_ratings)}</span>
                            <span>{format!("⭐ avg {:.1}", profile.average_score)}</span>
                        </div>
                    </div>
                    <span class=format!(
                        "text-sm font-medium px-4 py-2 rounded-lg {}",
                        sentiment.badge_class()
                    )>
                        {sentiment.label()} " user"
                    </span>
                </div>
            </Card>

            // Category and sentiment charts
            <div class="grid lg:grid-cols-2 gap-6">
                <Card title="Category Distribution".to_string()>
                    <BarChart data=category_data />
                </Card>
                <Card title="Sentiment Analysis".to_string()>
                    <PieChart data=sentiment_data />
                </Card>
            </div>

            // Hourly activity
            <Card title="Browsing Time Distribution".to_string()>
                <BarChart data=hourly_data color="#4CAF50" />
                {(!peak_hours.is_empty()).then(|| view! {
                    <p class="text-sm text-gray-400 mt-4">
                        "Peak hours: " {peak_hours.clone()}
                    </p>
                })}
            </Card>

            // Interests and domains
            <div class="grid lg:grid-cols-2 gap-6">
                <Card title="Interest Tags".to_string()>
                    {if profile.interests.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-8">"No interest tags"</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="flex flex-wrap gap-3">
                                {profile.interests.iter().take(INTEREST_COUNT).map(|interest| view! {
                                    <span class="inline-flex items-center space-x-2
                                                 bg-blue-900/50 text-blue-400
                                                 px-4 py-1.5 rounded-full text-sm">
                                        <span>{interest.tag.clone()}</span>
                                        <span class="bg-blue-500 text-white text-xs
                                                     px-2 py-0.5 rounded-full">
                                            {interest.frequency}
                                        </span>
                                    </span>
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }}
                </Card>

                <Card title="Frequent Domains".to_string()>
                    {if profile.domains.is_empty() {
                        view! {
                            <p class="text-center text-gray-400 py-8">"No visit records"</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="space-y-3">
                                {profile.domains.iter().take(DOMAIN_COUNT).map(|domain| view! {
                                    <div class="flex items-center justify-between p-3
                                                bg-gray-700/50 rounded-lg">
                                        <div>
                                            <div class="font-medium mb-1">
                                                {domain.domain.clone()}
                                            </div>
                                            <div class="text-xs text-gray-400">
                                                {format!("{} visits", domain.count)}
                                            </div>
                                        </div>
                                        <span class=format!(
                                            "text-sm font-medium px-3 py-1 rounded {}",
                                            domain_score_class(domain.average_score)
                                        )>
                                            {format!("{:.1}", domain.average_score)}
                                        </span>
                                    </div>
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }}
                </Card>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn category(name: &str, count: u64) -> CategoryScore {
        CategoryScore {
            category: name.to_string(),
            count,
            average_score: 5.0,
            weight: 0.1,
        }
    }

    #[test]
    fn category_chart_truncates_to_six() {
        let categories: Vec<CategoryScore> = (0..8)
            .map(|i| category(&format!("cat{}", i), i as u64))
            .collect();

        let data = category_chart_data(&categories);
        assert_eq!(data.len(), 6);
        // Backend order is preserved, never re-sorted
        assert_eq!(data[0].label, "cat0");
        assert_eq!(data[5].label, "cat5");
    }

    #[test]
    fn sentiment_chart_scales_to_percentages() {
        let sentiment = SentimentAnalysis {
            positive: 0.6,
            neutral: 0.3,
            negative: 0.1,
            overall_sentiment: crate::types::Sentiment::Positive,
        };

        let data = sentiment_chart_data(&sentiment);
        assert_eq!(data.len(), 3);
        assert!((data[0].value - 60.0).abs() < 1e-9);
        assert!((data[1].value - 30.0).abs() < 1e-9);
        assert!((data[2].value - 10.0).abs() < 1e-9);
        let labels: Vec<&str> = data.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Positive", "Neutral", "Negative"]);
    }

    #[test]
    fn hourly_chart_labels_buckets_in_hour_order() {
        let mut hourly = BTreeMap::new();
        hourly.insert(20, 7);
        hourly.insert(8, 3);
        hourly.insert(9, 5);
        let patterns = TimePattern {
            hourly_distribution: hourly,
            weekday_distribution: BTreeMap::new(),
            peak_hours: vec![20],
        };

        let data = hourly_chart_data(&patterns);
        let labels: Vec<&str> = data.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["8:00", "9:00", "20:00"]);
        assert_eq!(data[2].value, 7.0);
    }

    #[test]
    fn peak_hours_join_as_clock_labels() {
        let patterns = TimePattern {
            hourly_distribution: BTreeMap::new(),
            weekday_distribution: BTreeMap::new(),
            peak_hours: vec![8, 20],
        };
        assert_eq!(peak_hours_label(&patterns), "8:00, 20:00");
    }

    #[test]
    fn domain_score_bands() {
        assert_eq!(domain_score_class(7.0), "bg-green-900/50 text-green-400");
        assert_eq!(domain_score_class(6.9), "bg-orange-900/50 text-orange-400");
        assert_eq!(domain_score_class(4.0), "bg-orange-900/50 text-orange-400");
        assert_eq!(domain_score_class(3.9), "bg-red-900/50 text-red-400");
    }
}
