//! Card Component
//!
//! Stateless panel container with an optional title.

use leptos::*;

#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            {title.map(|t| view! {
                <h3 class="text-lg font-semibold mb-4">{t}</h3>
            })}
            {children()}
        </div>
    }
}
