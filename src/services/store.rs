use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Swipe, SwipeOutcome};

/// Errors that can occur while persisting swipes
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence for directional swipes and the derived mutual match relation
///
/// Implementations must keep at most one record per (source, target) pair and
/// report a match only for right swipes whose reciprocal is also right.
#[async_trait]
pub trait SwipeStore: Send + Sync {
    /// Upsert the swipe and, for right swipes, check for a mutual match
    async fn record_swipe(&self, swipe: &Swipe) -> Result<SwipeOutcome, StoreError>;

    /// Whether the backing store answers queries
    async fn health_check(&self) -> Result<bool, StoreError>;
}
