//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod card;
pub mod chart;
pub mod loading;
pub mod nav;
pub mod video_card;

pub use card::Card;
pub use chart::{BarChart, ChartPoint, PieChart};
pub use loading::Loading;
pub use nav::Nav;
pub use video_card::VideoCard;
