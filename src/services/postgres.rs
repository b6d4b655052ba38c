use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::models::{Swipe, SwipeOutcome, SwipeSide};
use crate::services::store::{StoreError, SwipeStore};

const LISTING_ON_RENTER_UPSERT: &str = r#"
    INSERT INTO listing_on_renter (listing_id, renter_profile_id, is_right)
    VALUES ($1, $2, $3)
    ON CONFLICT (listing_id, renter_profile_id) DO UPDATE
    SET is_right = EXCLUDED.is_right
    RETURNING id::BIGINT AS id
"#;

const RENTER_ON_LISTING_UPSERT: &str = r#"
    INSERT INTO renter_on_listing (renter_profile_id, listing_id, is_right)
    VALUES ($1, $2, $3)
    ON CONFLICT (renter_profile_id, listing_id) DO UPDATE
    SET is_right = EXCLUDED.is_right
    RETURNING id::BIGINT AS id
"#;

const MUTUAL_MATCH_EXISTS: &str = r#"
    SELECT EXISTS (
        SELECT 1 FROM mutual_matches
        WHERE listing_id = $1 AND renter_profile_id = $2
    ) AS is_match
"#;

fn upsert_query(side: SwipeSide) -> &'static str {
    match side {
        SwipeSide::Listing => LISTING_ON_RENTER_UPSERT,
        SwipeSide::Renter => RENTER_ON_LISTING_UPSERT,
    }
}

/// PostgreSQL-backed swipe store
///
/// Uniqueness and conflict resolution live in the table constraints; the
/// `mutual_matches` view derives matches. Nothing is cached here.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new PostgreSQL client from settings, running migrations if enabled
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        tracing::info!(
            "Connecting to PostgreSQL (max: {} connections)",
            settings.max_connections.unwrap_or(10)
        );

        let client = Self::new(
            &settings.url,
            settings.max_connections.unwrap_or(10),
            settings.min_connections.unwrap_or(1),
            Duration::from_secs(settings.acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(settings.idle_timeout_secs.unwrap_or(600)),
        )
        .await?;

        if settings.run_migrations {
            client.migrate().await?;
        }

        Ok(client)
    }

    /// Apply the bundled schema migrations
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl SwipeStore for PostgresClient {
    /// Both statements run on one pooled connection, returned to the pool
    /// when `conn` drops, on success or error alike.
    async fn record_swipe(&self, swipe: &Swipe) -> Result<SwipeOutcome, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query(upsert_query(swipe.side))
            .bind(swipe.source_id)
            .bind(swipe.target_id)
            .bind(swipe.is_right)
            .fetch_one(&mut *conn)
            .await?;
        let id: i64 = row.try_get("id")?;

        let is_match = if swipe.is_right {
            let (listing_id, renter_profile_id) = swipe.pair();
            let row = sqlx::query(MUTUAL_MATCH_EXISTS)
                .bind(listing_id)
                .bind(renter_profile_id)
                .fetch_one(&mut *conn)
                .await?;
            row.try_get("is_match")?
        } else {
            false
        };

        tracing::debug!(
            "Upserted {} row {}: {} -> {} (right: {})",
            swipe.side.table(),
            id,
            swipe.source_id,
            swipe.target_id,
            swipe.is_right
        );

        Ok(SwipeOutcome { id, is_match })
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
