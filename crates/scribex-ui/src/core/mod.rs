//! Core, DOM-free primitives and helpers for the web client.
pub mod health;
pub mod layout;
