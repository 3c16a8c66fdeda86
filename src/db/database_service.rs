use crate::config::DatabaseConfig;
use crate::db::schema;
use crate::types::error::AppError;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::info;

/// Store handle shared by all requests. Each request draws its own session
/// from it with [`DatabaseService::begin`].
#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .sqlx_logging(config.sql_logging);
        if let Some(idle) = config.idle_timeout {
            options.idle_timeout(idle);
        }
        if let Some(lifetime) = config.max_lifetime {
            options.max_lifetime(lifetime);
        }

        info!(backend = backend_name(&config.url), "Connecting to database...");
        let database_connection = Database::connect(options).await?;
        info!("Creating tables...");
        schema::create_tables(&database_connection).await?;
        info!("Connected to database.");
        Ok(Self { database_connection })
    }

    /// Opens the per-request session. Commit it on success; dropping it
    /// without a commit rolls everything back.
    pub async fn begin(&self) -> Result<DatabaseTransaction, AppError> {
        Ok(self.database_connection.begin().await?)
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.database_connection
    }

    /// Shuts the pool down. Handles still held elsewhere share the pool and
    /// fail from here on.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.database_connection.close_by_ref().await
    }
}

// Never log the URL itself, it may carry credentials.
fn backend_name(url: &str) -> &'static str {
    if url.starts_with("postgres") {
        "postgres"
    } else if url.starts_with("sqlite") {
        "sqlite"
    } else {
        "unknown"
    }
}
