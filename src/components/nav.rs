//! Navigation Component
//!
//! Header navigation bar with brand and links. The link whose path prefix
//! matches the current route is highlighted; the Users link also stays
//! highlighted while viewing a profile detail page.

use leptos::*;
use leptos_router::*;

/// True when the current path equals the target or sits under it.
fn is_active(path: &str, target: &str) -> bool {
    path == target || path.starts_with(&format!("{}/", target))
}

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto flex items-center justify-between h-16 px-4">
                // Brand
                <A href="/dashboard" class="flex items-center gap-3">
                    <span class="text-2xl">"🎬"</span>
                    <span class="text-xl font-bold text-white">"Kalkman"</span>
                </A>

                <div class="flex items-center gap-1">
                    <NavLink href="/dashboard" label="Dashboard" />
                    <NavLink href="/users" label="Users" also="/profile" />
                    <NavLink href="/compare" label="Compare" />
                    <NavLink href="/videos" label="Videos" />
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
    /// Additional path prefix that keeps this link highlighted
    #[prop(optional)]
    also: Option<&'static str>,
) -> impl IntoView {
    let location = use_location();
    let active = create_memo(move |_| {
        let path = location.pathname.get();
        is_active(&path, href) || also.map_or(false, |prefix| is_active(&path, prefix))
    });

    view! {
        <A
            href=href
            class=move || {
                let base = "px-4 py-2 rounded-lg transition-colors";
                if active.get() {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            {label}
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_path_is_active() {
        assert!(is_active("/videos", "/videos"));
        assert!(is_active("/dashboard", "/dashboard"));
    }

    #[test]
    fn nested_path_is_active() {
        assert!(is_active("/profile/u1", "/profile"));
    }

    #[test]
    fn sibling_prefix_is_not_active() {
        assert!(!is_active("/videoslib", "/videos"));
        assert!(!is_active("/profile/u1", "/users"));
        assert!(!is_active("/compare", "/videos"));
    }
}
