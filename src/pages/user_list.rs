//! User List Page
//!
//! All user profiles with a client-side search filter. Filtering happens
//! against the already-fetched map; no server round-trip per keystroke.

use leptos::*;
use leptos_router::A;
use std::collections::HashMap;

use crate::api;
use crate::components::{Card, Loading};
use crate::types::UserProfile;

/// How many interest chips a row shows
const ROW_INTEREST_COUNT: usize = 5;

/// Profiles whose user id contains the term, case-insensitively, ordered by
/// user id. An empty term matches everything.
fn filter_profiles(profiles: &HashMap<String, UserProfile>, term: &str) -> Vec<UserProfile> {
    let needle = term.to_lowercase();
    let mut matched: Vec<UserProfile> = profiles
        .values()
        .filter(|p| p.user_id.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    matched.sort_by(|a, b| a.user_id.cmp(&b.user_id));
    matched
}

/// User list page component
#[component]
pub fn UserList() -> impl IntoView {
    let (profiles, set_profiles) = create_signal(HashMap::<String, UserProfile>::new());
    let (loading, set_loading) = create_signal(true);
    let (search_term, set_search_term) = create_signal(String::new());

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

    let filtered = create_memo(move |_| {
        profiles.with(|p| filter_profiles(p, &search_term.get()))
    });

    view! {
        <div class="space-y-8">
            // Header with search box
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Users"</h1>
                    <p class="text-gray-400 mt-1">"All analyzed user profiles"</p>
                </div>
                <input
                    type="text"
                    placeholder="Search user ID..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                    class="w-72 bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-blue-500 focus:outline-none"
                />
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading message="Loading profiles" /> }.into_view()
                } else {
                    view! {
                        <Card>
                            {move || {
                                let rows = filtered.get();
                                if rows.is_empty() {
                                    let message = if search_term.get().is_empty() {
                                        "No user data yet"
                                    } else {
                                        "No matching users"
                                    };
                                    view! {
                                        <p class="text-center text-gray-400 py-12">{message}</p>
                                    }.into_view()
                                } else {
                                    view! {
                                        <div class="space-y-4">
                                            {rows.into_iter().map(|profile| view! {
                                                <UserRow profile=profile />
                                            }).collect_view()}
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

/// One user row linking to the profile detail page
#[component]
fn UserRow(profile: UserProfile) -> impl IntoView {
    let sentiment = profile.sentiment.overall_sentiment;
    let interests: Vec<String> = profile
        .interests
        .iter()
        .take(ROW_INTEREST_COUNT)
        .map(|i| i.tag.clone())
        .collect();

    view! {
        <A
            href=format!("/profile/{}", profile.user_id)
            class="flex items-center justify-between p-5 bg-gray-700/50 hover:bg-gray-700
                   rounded-lg transition-colors"
        >
            <div>
                <div class="font-semibold mb-2">"User " {profile.user_id.clone()}</div>
                <div class="flex items-center space-x-6 text-sm text-gray-400">
                    <span>{format!("📊 {} ratings", profile.total_ratings)}</span>
                    <span>{format!("⭐ avg {:.1}", profile.average_score)}</span>
                    <span class=format!(
                        "text-xs font-medium px-2 py-0.5 rounded-full {}",
                        sentiment.badge_class()
                    )>
                        {sentiment.label()}
                    </span>
                </div>
                {(!interests.is_empty()).then(|| view! {
                    <div class="flex flex-wrap gap-2 mt-3">
                        {interests.into_iter().map(|tag| view! {
                            <span class="bg-blue-900/50 text-blue-400 text-xs
                                         px-3 py-1 rounded-full">
                                {tag}
                            </span>
                        }).collect_view()}
                    </div>
                })}
            </div>
            <span class="text-blue-400 text-2xl">"→"</span>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Sentiment, SentimentAnalysis, TimePattern};

    fn profile(user_id: &str) -> UserProfile {
        UserProfile {
            user_id: user_id.to_string(),
            total_ratings: 1,
            average_score: 5.0,
            categories: Vec::new(),
            domains: Vec::new(),
            time_patterns: TimePattern {
                hourly_distribution: Default::default(),
                weekday_distribution: Default::default(),
                peak_hours: Vec::new(),
            },
            interests: Vec::new(),
            sentiment: SentimentAnalysis {
                positive: 0.5,
                neutral: 0.4,
                negative: 0.1,
                overall_sentiment: Sentiment::Neutral,
            },
        }
    }

    fn profile_map(ids: &[&str]) -> HashMap<String, UserProfile> {
        ids.iter()
            .map(|id| (id.to_string(), profile(id)))
            .collect()
    }

    #[test]
    fn empty_term_returns_all_sorted() {
        let profiles = profile_map(&["charlie", "alice", "bob"]);
        let ids: Vec<String> = filter_profiles(&profiles, "")
            .into_iter()
            .map(|p| p.user_id)
            .collect();
        assert_eq!(ids, vec!["alice", "bob", "charlie"]);
    }

    #[test]
    fn filter_matches_case_insensitive_substring() {
        let profiles = profile_map(&["Alice-7", "bob", "MALICE"]);
        let ids: Vec<String> = filter_profiles(&profiles, "aLiCe")
            .into_iter()
            .map(|p| p.user_id)
            .collect();
        assert_eq!(ids, vec!["Alice-7", "MALICE"]);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let profiles = profile_map(&["alice", "bob"]);
        assert!(filter_profiles(&profiles, "zzz").is_empty());
    }
}
