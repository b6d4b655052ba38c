use actix_web::{web, HttpResponse};

use crate::core::record_swipe;
use crate::models::{SwipeRequest, SwipeSide};
use crate::routes::{errors::ApiError, AppState};

/// Configure swipe routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/swipes/listing/{listing_id}", web::post().to(listing_swipe))
        .route("/swipes/renter/{renter_profile_id}", web::post().to(renter_swipe));
}

/// Listing owner swipes on a renter
///
/// POST /swipes/listing/{listing_id}
///
/// Request body:
/// ```json
/// { "target_id": 9, "is_right": true }
/// ```
async fn listing_swipe(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<SwipeRequest>,
) -> Result<HttpResponse, ApiError> {
    handle_swipe(&state, SwipeSide::Listing, path.into_inner(), &req).await
}

/// Renter swipes on a listing
///
/// POST /swipes/renter/{renter_profile_id}
async fn renter_swipe(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<SwipeRequest>,
) -> Result<HttpResponse, ApiError> {
    handle_swipe(&state, SwipeSide::Renter, path.into_inner(), &req).await
}

async fn handle_swipe(
    state: &AppState,
    side: SwipeSide,
    source_id: i64,
    req: &SwipeRequest,
) -> Result<HttpResponse, ApiError> {
    match record_swipe(state.store.as_ref(), side, source_id, req).await {
        Ok(response) => Ok(HttpResponse::Created().json(response)),
        Err(e) => {
            tracing::warn!("Failed to record {} swipe from {}: {:?}", side, source_id, e);
            Err(ApiError::bad_request(
                "swipe_failed",
                format!("{}: {}", side.failure_message(), e),
            ))
        }
    }
}
