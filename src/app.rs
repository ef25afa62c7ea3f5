//! App Root Component
//!
//! Routing shell: navigation header, content frame, and footer around the
//! five pages. The root path redirects to the dashboard.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Compare, Dashboard, Profile, UserList, VideoLibrary};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                // Routed page content
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path="/dashboard" /> } />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/users" view=UserList />
                        <Route path="/profile/:user_id" view=Profile />
                        <Route path="/compare" view=Compare />
                        <Route path="/videos" view=VideoLibrary />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-4 text-center
                       text-sm text-gray-400">
            "Kalkman · User Profile Analytics"
        </footer>
    }
}

/// Fallback view for unknown paths
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"404"</h1>
            <p class="text-gray-400 mb-6">"Nothing lives at this address."</p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium
                       transition-colors"
            >
                "Back to the dashboard"
            </A>
        </div>
    }
}
