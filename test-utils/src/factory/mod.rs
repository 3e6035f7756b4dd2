//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! into the database; use `fixture` for in-memory models.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let levels = factory::create_default_levels(&db).await?;
//!
//! let veteran = factory::user::UserFactory::new(&db)
//!     .name("Veteran")
//!     .exp(1500)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with an EXP balance
//! - `level_config` - Level configuration rows
//! - `user_activity` - Daily activity counters
//! - `exp_history` - History entries
//! - `helpers` - Unique ID generation

pub mod exp_history;
pub mod helpers;
pub mod level_config;
pub mod user;
pub mod user_activity;

pub use exp_history::create_exp_history;
pub use level_config::{create_default_levels, create_level};
pub use user::{create_admin, create_user};
pub use user_activity::create_user_activity;
