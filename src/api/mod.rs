//! HTTP API Client
//!
//! Typed wrappers over the Kalkman REST API.

pub mod client;

pub use client::*;
