use crate::config::DatabaseSettings;
use crate::infrastructure::log_messages::database as messages;
use crate::{Error, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::{info, instrument};

/// Database connection pool wrapper
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `url`
    #[instrument(skip(url, settings), fields(host = %settings.host))]
    pub async fn connect(url: &str, settings: &DatabaseSettings) -> Result<Self> {
        info!("{}", messages::CONNECTING);
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect(url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the embedded migrations in `migrations/`
    pub async fn migrate(&self) -> Result<()> {
        info!("{}", messages::MIGRATION_STARTED);
        sqlx::migrate!().run(&self.pool).await?;
        info!("{}", messages::MIGRATION_COMPLETED);
        Ok(())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<()> {
        let row = sqlx::query("SELECT 1 as health_check")
            .fetch_one(&self.pool)
            .await?;

        let health_check: i32 = row.try_get("health_check")?;

        if health_check == 1 {
            Ok(())
        } else {
            Err(Error::application(messages::HEALTH_CHECK_FAILED))
        }
    }
}
