//! HTTP client for the ScribeX API.
//!
//! `transport` is DOM-free and runs in native tests; `api` performs the fetch in the browser.

pub mod transport;

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
