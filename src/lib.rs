//! Swipe Match - swipe recording for the rental matching app
//!
//! Listings and renters swipe on each other; each swipe is upserted as a
//! directional preference and checked against the derived `mutual_matches`
//! relation to report whether the pair now matches.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{record_swipe, SwipeError};
pub use models::{Swipe, SwipeOutcome, SwipeRequest, SwipeResponse, SwipeSide};
pub use routes::{configure_routes, AppState};
pub use services::{PostgresClient, StoreError, SwipeStore};
