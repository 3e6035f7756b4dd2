//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Award rules, level table validation and resolution
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: The award engine commits balance, counter and history together

pub mod awarder;
pub mod exp_history;
pub mod gamification;
pub mod level;
pub mod user;

#[cfg(test)]
mod test;
