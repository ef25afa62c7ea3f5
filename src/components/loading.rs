//! Loading Component
//!
//! Spinner block shown while a page fetch is in flight.

use leptos::*;

#[component]
pub fn Loading(
    /// Optional caption under the spinner
    #[prop(optional)]
    message: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 py-12">
            <div class="loading-spinner w-8 h-8" />
            {message.map(|m| view! { <span class="text-sm text-gray-400">{m}</span> })}
        </div>
    }
}
