// Test doubles for the swipe store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use swipe_match::{StoreError, Swipe, SwipeOutcome, SwipeSide, SwipeStore};

#[derive(Default)]
struct Tables {
    next_id: i64,
    /// (side, source_id, target_id) -> (id, is_right)
    rows: HashMap<(SwipeSide, i64, i64), (i64, bool)>,
}

/// In-memory store mirroring the unique constraints and the mutual_matches view
#[derive(Default)]
pub struct InMemorySwipeStore {
    tables: Mutex<Tables>,
}

impl InMemorySwipeStore {
    /// Number of stored rows for one side
    pub fn row_count(&self, side: SwipeSide) -> usize {
        let tables = self.tables.lock().unwrap();
        tables.rows.keys().filter(|(s, _, _)| *s == side).count()
    }

    /// Stored direction for a (source, target) pair
    pub fn direction(&self, side: SwipeSide, source_id: i64, target_id: i64) -> Option<bool> {
        let tables = self.tables.lock().unwrap();
        tables.rows.get(&(side, source_id, target_id)).map(|(_, right)| *right)
    }
}

#[async_trait]
impl SwipeStore for InMemorySwipeStore {
    async fn record_swipe(&self, swipe: &Swipe) -> Result<SwipeOutcome, StoreError> {
        let mut tables = self.tables.lock().unwrap();

        let key = (swipe.side, swipe.source_id, swipe.target_id);
        let id = match tables.rows.get(&key) {
            Some((id, _)) => *id,
            None => {
                tables.next_id += 1;
                tables.next_id
            }
        };
        tables.rows.insert(key, (id, swipe.is_right));

        let is_match = swipe.is_right && {
            let (listing_id, renter_profile_id) = swipe.pair();
            let listing_right = tables
                .rows
                .get(&(SwipeSide::Listing, listing_id, renter_profile_id))
                .map_or(false, |(_, right)| *right);
            let renter_right = tables
                .rows
                .get(&(SwipeSide::Renter, renter_profile_id, listing_id))
                .map_or(false, |(_, right)| *right);
            listing_right && renter_right
        };

        Ok(SwipeOutcome { id, is_match })
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

/// Store whose pool never hands out a connection
pub struct UnavailableStore;

#[async_trait]
impl SwipeStore for UnavailableStore {
    async fn record_swipe(&self, _swipe: &Swipe) -> Result<SwipeOutcome, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}
