//! API data transfer objects.
//!
//! Serializable request and response bodies exchanged over HTTP. Server-side domain
//! models convert into these at the controller boundary.

pub mod activity;
pub mod api;
pub mod exp_history;
pub mod level;
pub mod user;
