// Core swipe recording
pub mod recorder;

pub use recorder::{record_swipe, SwipeError};
