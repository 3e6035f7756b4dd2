//! Ruang Tenang Test Utils
//!
//! Provides shared testing utilities for the gamification backend. This crate offers a
//! builder for test contexts backed by in-memory SQLite databases, factories that insert
//! users, level configurations, activity counters and history rows, and fixtures for
//! the standard level table.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert test rows with sensible defaults
//! - **fixture**: In-memory entity models without database insertion
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn awards_points() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_gamification_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
