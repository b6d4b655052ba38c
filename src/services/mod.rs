// Service exports
pub mod postgres;
pub mod store;

pub use postgres::PostgresClient;
pub use store::{StoreError, SwipeStore};
