//! Kalkman Dashboard
//!
//! User-profile and video-recommendation dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All scoring, similarity, sentiment, and ranking are computed
//! by the Kalkman backend; this app fetches the precomputed read models over
//! HTTP, filters them client-side, and renders charts, lists, and a video
//! gallery.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod types;

fn main() {
    // Panics in WASM are silent without this hook
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
