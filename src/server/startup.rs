use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    model::gamification::{ActivityRules, GamificationConfig},
    service::level::LevelService,
};

const DEFAULT_LOG_FILTER: &str = "ruang_tenang=debug,tower_http=info,info";

/// Installs the global tracing subscriber.
///
/// Uses `RUST_LOG` when set, otherwise logs this crate at debug and everything else
/// at info.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// The session table is shared with the authentication service, which writes the
/// logged-in user's ID. Sessions expire after 7 days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session store migrated and ready
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let session_store = SqliteStore::new(pool);
    session_store.migrate().await?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Builds the gamification config from the production rules and the configured day offset.
pub fn gamification_config(config: &Config) -> Result<GamificationConfig, AppError> {
    Ok(GamificationConfig::with_offset_hours(
        ActivityRules::default(),
        config.day_offset_hours,
    )?)
}

/// Inserts the default level table when no levels are configured.
pub async fn seed_levels(db: &DatabaseConnection) -> Result<(), AppError> {
    if !LevelService::new(db).seed_defaults().await? {
        tracing::info!("Level configuration already present, skipping default levels");
    }

    Ok(())
}
