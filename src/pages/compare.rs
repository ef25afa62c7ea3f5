//! Compare Page
//!
//! Form-driven similarity comparison between two users. Validation happens
//! before any backend call; the similarity score itself is computed
//! server-side.

use leptos::*;

use crate::api;
use crate::components::Card;

/// Check both inputs before issuing a backend call.
fn validate_users(user1: &str, user2: &str) -> Result<(), &'static str> {
    if user1.is_empty() || user2.is_empty() {
        Err("Please enter both user IDs")
    } else {
        Ok(())
    }
}

fn format_similarity(similarity: f64) -> String {
    format!("{:.1}%", similarity * 100.0)
}

fn similarity_label(similarity: f64) -> &'static str {
    if similarity >= 0.7 {
        "Very similar"
    } else if similarity >= 0.4 {
        "Moderately similar"
    } else {
        "Low similarity"
    }
}

fn similarity_color(similarity: f64) -> &'static str {
    if similarity >= 0.7 {
        "#4CAF50"
    } else if similarity >= 0.4 {
        "#FF9800"
    } else {
        "#F44336"
    }
}

/// Compare page component
#[component]
pub fn Compare() -> impl IntoView {
    let (user1, set_user1) = create_signal(String::new());
    let (user2, set_user2) = create_signal(String::new());
    let (similarity, set_similarity) = create_signal(None::<f64>);
    let (loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let u1 = user1.get();
        let u2 = user2.get();

        if let Err(message) = validate_users(&u1, &u2) {
            set_error.set(Some(message.to_string()));
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::compare_users(&u1, &u2).await {
                Ok(result) => {
                    set_similarity.set(Some(result.similarity));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to compare users: {}", e).into(),
                    );
                    set_error.set(Some(e.to_string()));
                    set_similarity.set(None);
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"User Similarity"</h1>
                <p class="text-gray-400 mt-1">"Compare two user profiles"</p>
            </div>

            <div class="max-w-xl mx-auto">
                <Card>
                    <form on:submit=on_submit class="space-y-4">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"User 1 ID"</label>
                            <input
                                type="text"
                                placeholder="Enter user ID"
                                prop:value=move || user1.get()
                                on:input=move |ev| set_user1.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-blue-500
                                       focus:outline-none"
                            />
                        </div>

                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"User 2 ID"</label>
                            <input
                                type="text"
                                placeholder="Enter user ID"
                                prop:value=move || user2.get()
                                on:input=move |ev| set_user2.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-blue-500
                                       focus:outline-none"
                            />
                        </div>

                        // Validation or request failure
                        {move || error.get().map(|message| view! {
                            <div class="bg-red-900/50 text-red-400 text-sm rounded-lg p-3">
                                {message}
                            </div>
                        })}

                        <button
                            type="submit"
                            disabled=move || loading.get()
                            class="w-full px-4 py-3 bg-blue-600 hover:bg-blue-700
                                   disabled:bg-gray-600 rounded-lg font-medium
                                   transition-colors"
                        >
                            {move || if loading.get() { "Comparing..." } else { "Compare" }}
                        </button>

                        // Result panel
                        {move || similarity.get().map(|value| view! {
                            <div class="mt-6 bg-gray-700/50 rounded-lg p-8 text-center">
                                <div class="text-sm text-gray-400 mb-3">"Similarity"</div>
                                <div
                                    class="text-5xl font-bold mb-3"
                                    style=format!("color: {}", similarity_color(value))
                                >
                                    {format_similarity(value)}
                                </div>
                                <div class="text-sm text-gray-400">
                                    {similarity_label(value)}
                                </div>
                            </div>
                        })}
                    </form>
                </Card>
            </div>
        </div>
    }
}
