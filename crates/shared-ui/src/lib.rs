//! Dioxus components for the legal analysis dashboard.

pub mod analysis;
pub mod components;

pub use analysis::*;

/// Every component stylesheet, concatenated for hosts that inline CSS into
/// server-rendered pages instead of serving bundled assets.
pub const STYLESHEET: &str = concat!(
    include_str!("components/card/style.css"),
    include_str!("components/badge/style.css"),
    include_str!("components/progress/style.css"),
    include_str!("analysis/style.css"),
);
