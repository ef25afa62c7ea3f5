//! Dashboard Page
//!
//! Overview of all user profiles: aggregate statistics and a short preview
//! of users, with a link to the full list.

use leptos::*;
use leptos_router::A;
use std::collections::HashMap;

use crate::api;
use crate::components::{Card, Loading};
use crate::types::UserProfile;

/// How many profiles the preview list shows
const PREVIEW_COUNT: usize = 5;

/// Aggregate statistics folded over the fetched profile map.
#[derive(Clone, Debug, PartialEq)]
struct OverviewStats {
    user_count: usize,
    total_ratings: u64,
    average_score: String,
}

fn aggregate(profiles: &HashMap<String, UserProfile>) -> OverviewStats {
    let user_count = profiles.len();
    let total_ratings = profiles.values().map(|p| p.total_ratings).sum();
    let average_score = if user_count > 0 {
        let sum: f64 = profiles.values().map(|p| p.average_score).sum();
        format!("{:.1}", sum / user_count as f64)
    } else {
        "0".to_string()
    };

    OverviewStats {
        user_count,
        total_ratings,
        average_score,
    }
}

/// First few profiles ordered by user id. The backend map is unordered, so
/// the preview is sorted for a stable rendering.
fn preview_profiles(profiles: &HashMap<String, UserProfile>) -> Vec<UserProfile> {
    let mut all: Vec<UserProfile> = profiles.values().cloned().collect();
    all.sort_by(|a, b| a.user_id.cmp(&b.user_id));
    all.truncate(PREVIEW_COUNT);
    all
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (profiles, set_profiles) = create_signal(HashMap::<String, UserProfile>::new());
    let (loading, set_loading) = create_signal(true);

    // Fetch all profiles on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::get_all_profiles().await {
                Ok(data) => {
                    set_profiles.set(data);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load profiles: {}", e).into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    let stats = create_memo(move |_| profiles.with(aggregate));
    let preview = create_memo(move |_| profiles.with(preview_profiles));

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Overview"</h1>
                <p class="text-gray-400 mt-1">"User profiles at a glance"</p>
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading message="Loading profiles" /> }.into_view()
                } else {
                    view! {
                        // Aggregate stat cards
                        <div class="grid md:grid-cols-3 gap-6">
                            <Card>
                                <div class="text-sm text-gray-400 mb-2">"Total Users"</div>
                                <div class="text-4xl font-bold text-blue-400">
                                    {stats.get().user_count}
                                </div>
                            </Card>
                            <Card>
                                <div class="text-sm text-gray-400 mb-2">"Total Ratings"</div>
                                <div class="text-4xl font-bold text-green-400">
                                    {stats.get().total_ratings}
                                </div>
                            </Card>
                            <Card>
                                <div class="text-sm text-gray-400 mb-2">"Average Score"</div>
                                <div class="text-4xl font-bold text-orange-400">
                                    {stats.get().average_score}
                                </div>
                            </Card>
                        </div>

                        // Profile preview list
                        <Card title="Recently Active Users".to_string()>
                            {move || {
                                let rows = preview.get();
                                if rows.is_empty() {
                                    view! {
                                        <p class="text-center text-gray-400 py-8">
                                            "No user data yet"
                                        </p>
                                    }.into_view()
                                } else {
                                    view! {
                                        <div class="space-y-3">
                                            {rows.into_iter().map(|profile| view! {
                                                <ProfileRow profile=profile />
                                            }).collect_view()}
                                            <A
                                                href="/users"
                                                class="block text-center text-blue-400 text-sm py-2"
                                            >
                                                "View all users →"
                                            </A>
                                        </div>
                                    }.into_view()
                                }
                            }}
                        </Card>
                    }.into_view()
                }
            }}
        </div>
    }
}

/// One preview row linking to the profile detail page
#[component]
fn ProfileRow(profile: UserProfile) -> impl IntoView {
    let sentiment = profile.sentiment.overall_sentiment;

    view! {
        <A
            href=format!("/profile/{}", profile.user_id)
            class="flex items-center justify-between p-4 bg-gray-700/50 hover:bg-gray-700
                   rounded-lg transition-colors"
        >
            <div>
                <div class="font-medium mb-1">"User " {profile.user_id.clone()}</div>
                <div class="text-sm text-gray-400">
                    {format!(
                        "{} ratings · avg {:.1}",
                        profile.total_ratings, profile.average_score
                    )}
                </div>
            </div>
            <span class=format!(
                "text-xs font-medium px-3 py-1 rounded-full {}",
                sentiment.badge_class()
            )>
                {sentiment.label()}
            </span>
        </A>
    }
}
