//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models for unit tests of conversions and resolver
//! logic, and provide the default values used by factories.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity_builder().exp(150).build();
//! let levels = fixture::level_config::standard_table();
//! ```

pub mod level_config;
pub mod user;

pub use level_config::{entity as level_config_entity, standard_table};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
