// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Swipe, SwipeOutcome, SwipeSide};
pub use requests::SwipeRequest;
pub use responses::{ErrorResponse, HealthResponse, SwipeResponse};
