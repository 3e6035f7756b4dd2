use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};
use std::sync::Arc;
use tempfile::TempDir;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Where the test database lives.
enum Storage {
    /// Private in-memory database. The pool holds a single connection, so queries run
    /// one at a time.
    Memory,
    /// SQLite file in a temporary directory, shared by a pool of `max_connections`.
    /// Transactions from different tasks really overlap on this storage.
    File { max_connections: u32 },
}

/// Test context holding a database and an optional session.
///
/// Both are created lazily on first access and live as long as the context. The
/// session is stored in the same database as the application tables.
pub struct TestContext {
    /// Connection to the SQLite database, set by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the same database, set by `session()`.
    pub session: Option<Session>,

    storage: Storage,

    /// Keeps the file-backed database alive; removed when the context is dropped.
    temp_dir: Option<TempDir>,
}

impl TestContext {
    /// Creates a new empty test context backed by an in-memory database.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
            storage: Storage::Memory,
            temp_dir: None,
        }
    }

    /// Creates a new empty test context backed by a temporary SQLite file.
    ///
    /// # Arguments
    /// - `max_connections` - Size of the connection pool
    pub fn with_file_database(max_connections: u32) -> Self {
        Self {
            storage: Storage::File { max_connections },
            ..Self::new()
        }
    }

    /// Gets or creates the SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    /// - `Err(TestError::TempDir)` - Failed to create the directory for a file database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if let Some(ref db) = self.db {
            return Ok(db);
        }

        let db = match self.storage {
            Storage::Memory => Database::connect("sqlite::memory:").await?,
            Storage::File { max_connections } => {
                let temp_dir = tempfile::tempdir()?;
                let url = format!(
                    "sqlite://{}?mode=rwc",
                    temp_dir.path().join("test.db").display()
                );
                self.temp_dir = Some(temp_dir);

                let mut opt = ConnectOptions::new(url);
                opt.max_connections(max_connections)
                    .min_connections(1)
                    .sqlx_logging(false);

                Database::connect(opt).await?
            }
        };

        Ok(&*self.db.insert(db))
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements executed in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session.
    ///
    /// On first call the database is initialized if needed, the session table is
    /// migrated and a fresh session with a seven day inactivity expiry is created.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError::Database)` - Failed to initialize the database connection
    /// - `Err(TestError::SessionStore)` - Failed to create the session table
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    ///
    /// session.insert("user_id", 1).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());
                session_store
                    .migrate()
                    .await
                    .map_err(|e| TestError::SessionStore(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                Ok(&*self.session.insert(session))
            }
        }
    }

    /// Gets or creates both database and session references.
    ///
    /// Avoids borrow checker conflicts when a test needs both at once.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - References to both
    /// - `Err(TestError)` - Failed to initialize database or session
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Database(sea_orm::DbErr::Custom(
                "Test context was not initialized".to_string(),
            ))),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
