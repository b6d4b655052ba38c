use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{Swipe, SwipeRequest, SwipeResponse, SwipeSide};
use crate::services::{StoreError, SwipeStore};

/// Reasons a swipe could not be recorded
#[derive(Debug, Error)]
pub enum SwipeError {
    #[error("invalid {side} id: {id}")]
    InvalidSource { side: SwipeSide, id: i64 },

    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Record a swipe from `source_id` on behalf of `side`
///
/// Upserts the directional record and, for right swipes, reports whether the
/// pair is now a mutual match. Left swipes never report a match.
pub async fn record_swipe(
    store: &dyn SwipeStore,
    side: SwipeSide,
    source_id: i64,
    request: &SwipeRequest,
) -> Result<SwipeResponse, SwipeError> {
    if source_id < 1 {
        return Err(SwipeError::InvalidSource { side, id: source_id });
    }
    request.validate()?;

    let swipe = Swipe {
        side,
        source_id,
        target_id: request.target_id,
        is_right: request.is_right,
    };

    let outcome = store.record_swipe(&swipe).await?;

    tracing::info!(
        "Recorded {} swipe {}: {} -> {} (right: {}, match: {})",
        side,
        outcome.id,
        source_id,
        request.target_id,
        request.is_right,
        outcome.is_match
    );

    Ok(SwipeResponse {
        message: side.recorded_message().to_string(),
        id: outcome.id,
        is_match: swipe.is_right && outcome.is_match,
    })
}
