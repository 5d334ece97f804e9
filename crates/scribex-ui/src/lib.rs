#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! ScribeX web client.
//! This crate holds the Yew front-end entrypoint: the layout guard, the page shell,
//! and the API connection check, plus the DOM-free logic behind them.

pub mod config;
pub mod core;
pub mod error;
pub mod services;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod components;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::config::UiConfig;
    use crate::core::layout::{
        LayoutDecision, MAX_STUDENT_WIDTH, UserRole, decide_layout, is_oversized,
    };

    #[test]
    fn default_config_gates_students_at_the_phone_threshold() {
        let config = UiConfig::default();
        assert_eq!(config.role, UserRole::Student);
        let wide = is_oversized(f64::from(MAX_STUDENT_WIDTH) + 1.0, MAX_STUDENT_WIDTH);
        let phone = is_oversized(f64::from(MAX_STUDENT_WIDTH), MAX_STUDENT_WIDTH);
        assert_eq!(
            decide_layout(config.role, wide),
            LayoutDecision::ScreenSizeWarning
        );
        assert_eq!(decide_layout(config.role, phone), LayoutDecision::Application);
    }
}
