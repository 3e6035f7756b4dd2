//! Request guards and session wrappers.
//!
//! Guards are invoked at the top of controller functions. `AuthGuard` resolves the user
//! stored in the session and checks permissions; `InternalKeyGuard` authenticates
//! service-to-service calls with a shared key.

pub mod auth;
pub mod internal;
pub mod session;
