use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of both swipe endpoints
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwipeRequest {
    /// Renter profile for listing swipes, listing for renter swipes
    #[validate(range(min = 1))]
    pub target_id: i64,
    pub is_right: bool,
}
