//! HTTP request handlers.
//!
//! Controllers check access with the middleware guards, convert DTOs into server
//! parameters, call the service layer and convert the result back into DTOs.

pub mod activity;
pub mod exp_history;
pub mod level;
pub mod user;
