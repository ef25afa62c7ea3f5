//! Video Library Page
//!
//! Browse a user's videos as backend-scored recommendations or as the full
//! ranked list with category/domain filters. Any tracked input change
//! refetches stats plus the matching video list.

use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::api::{self, VideoQuery};
use crate::components::{Card, Loading, VideoCard};
use crate::types::{Video, VideoStats};

/// How many videos a single fetch requests
const PAGE_LIMIT: u32 = 50;

/// Which listing the gallery shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewMode {
    Recommended,
    All,
}

/// Discards responses from superseded requests.
///
/// Requests are not canceled in flight; instead each fetch takes a token
/// from a monotonically increasing counter, and only the most recently
/// issued token may commit its results.
#[derive(Clone, Default)]
struct RequestGuard(Rc<Cell<u64>>);

impl RequestGuard {
    fn begin(&self) -> u64 {
        self.0.set(self.0.get() + 1);
        self.0.get()
    }

    fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

/// Filters for the full ranked listing. Empty selections mean no filter.
fn build_video_query(category: &str, domain: &str) -> VideoQuery {
    VideoQuery {
        limit: Some(PAGE_LIMIT),
        offset: None,
        category: (!category.is_empty()).then(|| category.to_string()),
        source_domain: (!domain.is_empty()).then(|| domain.to_string()),
        ranked: true,
    }
}

/// Video library page component
#[component]
pub fn VideoLibrary() -> impl IntoView {
    let (user_id, set_user_id) = create_signal(String::new());
    let (view_mode, set_view_mode) = create_signal(ViewMode::Recommended);
    let (category, set_category) = create_signal(String::new());
    let (domain, set_domain) = create_signal(String::new());
    let (videos, set_videos) = create_signal(Vec::<Video>::new());
    let (stats, set_stats) = create_signal(None::<VideoStats>);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let guard = RequestGuard::default();

    // Refetch stats and videos whenever a tracked input changes
    let guard_for_effect = guard.clone();
    create_effect(move |_| {
        let id = user_id.get();
        let mode = view_mode.get();
        let selected_category = category.get();
        let selected_domain = domain.get();

        let token = guard_for_effect.begin();
        if id.is_empty() {
            set_videos.set(Vec::new());
            set_stats.set(None);
            set_loading.set(false);
            set_error.set(None);
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        // Stats load independently of the video list
        let stats_guard = guard_for_effect.clone();
        let stats_id = id.clone();
        spawn_local(async move {
            let result = api::get_video_stats(&stats_id).await;
            if !stats_guard.is_current(token) {
                return;
            }
            match result {
                Ok(data) => {
                    set_stats.set(Some(data));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load video stats: {}", e).into(),
                    );
                }
            }
        });

        let videos_guard = guard_for_effect.clone();
        spawn_local(async move {
            let result = match mode {
                ViewMode::Recommended => {
                    api::get_recommendations(&id, PAGE_LIMIT, api::DEFAULT_MIN_SCORE).await
                }
                ViewMode::All => {
                    let query = build_video_query(&selected_category, &selected_domain);
                    api::get_user_videos(&id, &query).await
                }
            };

            if !videos_guard.is_current(token) {
                return;
            }

            match result {
                Ok(data) => {
                    set_videos.set(data);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load videos: {}", e).into());
                    set_videos.set(Vec::new());
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Video Library"</h1>
                <p class="text-gray-400 mt-1">"Recommendations and extracted videos"</p>
            </div>

            // User input
            <input
                type="text"
                placeholder="Enter user ID"
                prop:value=move || user_id.get()
                on:input=move |ev| set_user_id.set(event_target_value(&ev))
                class="w-80 bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-blue-500 focus:outline-none"
            />

            // Stats cards
            {move || stats.get().map(|s| view! {
                <div class="grid md:grid-cols-3 gap-6">
                    <Card>
                        <div class="text-3xl font-bold">{s.total}</div>
                        <div class="text-sm text-gray-400 mt-1">"Total videos"</div>
                    </Card>
                    <Card>
                        <div class="text-3xl font-bold">{s.by_category.len()}</div>
                        <div class="text-sm text-gray-400 mt-1">"Categories"</div>
                    </Card>
                    <Card>
                        <div class="text-3xl font-bold">{s.by_domain.len()}</div>
                        <div class="text-sm text-gray-400 mt-1">"Source domains"</div>
                    </Card>
                </div>
            })}

            // View mode toggle and filters
            <div class="flex items-center flex-wrap gap-3">
                <ModeButton
                    label="🎯 Recommended"
                    mode=ViewMode::Recommended
                    current=view_mode
                    set_current=set_view_mode
                />
                <ModeButton
                    label="📚 All videos"
                    mode=ViewMode::All
                    current=view_mode
                    set_current=set_view_mode
                />

                {move || {
                    (view_mode.get() == ViewMode::All)
                        .then(|| stats.get())
                        .flatten()
                        .map(|s| view! {
                            <select
                                on:change=move |ev| set_category.set(event_target_value(&ev))
                                prop:value=move || category.get()
                                class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                                       border border-gray-600 focus:border-blue-500
                                       focus:outline-none"
                            >
                                <option value="">"All categories"</option>
                                {s.by_category.iter().map(|(name, count)| view! {
                                    <option value=name.clone()>
                                        {format!("{} ({})", name, count)}
                                    </option>
                                }).collect_view()}
                            </select>

                            <select
                                on:change=move |ev| set_domain.set(event_target_value(&ev))
                                prop:value=move || domain.get()
                                class="bg-gray-700 rounded-lg px-3 py-2 text-sm
                                       border border-gray-600 focus:border-blue-500
                                       focus:outline-none"
                            >
                                <option value="">"All domains"</option>
                                {s.by_domain.iter().map(|(name, count)| view! {
                                    <option value=name.clone()>
                                        {format!("{} ({})", name, count)}
                                    </option>
                                }).collect_view()}
                            </select>
                        })
                }}
            </div>

            // Request failure
            {move || error.get().map(|message| view! {
                <div class="bg-red-900/50 text-red-400 text-sm rounded-lg p-3">
                    {message}
                </div>
            })}

            // Video grid
            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    let items = videos.get();
                    if items.is_empty() {
                        let message = if user_id.get().is_empty() {
                            "Enter a user ID to browse videos"
                        } else {
                            "No videos found"
                        };
                        view! {
                            <p class="text-center text-gray-400 py-12">{message}</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {items.into_iter().map(|video| view! {
                                    <VideoCard video=video />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// View mode toggle button
#[component]
fn ModeButton(
    label: &'static str,
    mode: ViewMode,
    current: ReadSignal<ViewMode>,
    set_current: WriteSignal<ViewMode>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_current.set(mode)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == mode {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_token_wins() {
        let guard = RequestGuard::default();
        let first = guard.begin();
        let second = guard.begin();

        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn rapid_rounds_invalidate_every_older_token() {
        let guard = RequestGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        let third = guard.begin();

        // Out-of-order resolution: only the latest round may commit
        assert!(!guard.is_current(first));
        assert!(!guard.is_current(second));
        assert!(guard.is_current(third));
    }

    #[test]
    fn query_drops_empty_filters() {
        let query = build_video_query("", "");
        assert_eq!(query.limit, Some(50));
        assert_eq!(query.category, None);
        assert_eq!(query.source_domain, None);
        assert!(query.ranked);
    }

    #[test]
    fn query_carries_selected_filters() {
        let query = build_video_query("tech", "example.com");
        assert_eq!(query.category.as_deref(), Some("tech"));
        assert_eq!(query.source_domain.as_deref(), Some("example.com"));
        assert!(query.ranked);
    }
}
