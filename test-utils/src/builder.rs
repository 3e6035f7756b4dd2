use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, ExpHistory};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(ExpHistory)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Pool size of a file-backed database, `None` for the in-memory default.
    file_connections: Option<u32>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            file_connections: None,
        }
    }

    /// Uses a temporary SQLite file with a pool of `max_connections` instead of the
    /// in-memory database.
    ///
    /// The in-memory pool has one connection, which serializes every transaction. Tests
    /// that need transactions from concurrent tasks to overlap use this instead.
    ///
    /// # Arguments
    /// - `max_connections` - Size of the connection pool
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_file_database(mut self, max_connections: u32) -> Self {
        self.file_connections = Some(max_connections);
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference. Composite primary keys declared on the entity are carried into the
    /// generated statement.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the award engine touches.
    ///
    /// Adds the following tables in dependency order:
    /// - User
    /// - LevelConfig
    /// - UserActivity
    /// - ExpHistory
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_gamification_tables(self) -> Self {
        self.with_table(User)
            .with_table(LevelConfig)
            .with_table(UserActivity)
            .with_table(ExpHistory)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    /// - `Err(TestError::TempDir)` - Failed to create the file database directory
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = match self.file_connections {
            Some(max_connections) => TestContext::with_file_database(max_connections),
            None => TestContext::new(),
        };

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
