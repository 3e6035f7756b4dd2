//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Repositories that take part in the award transaction are generic over
//! `ConnectionTrait` so they accept either a connection or an open transaction.

pub mod activity;
pub mod exp_history;
pub mod level_config;
pub mod user;
