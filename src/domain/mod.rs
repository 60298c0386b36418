//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Record types, repository traits, the show partitioning rules and the
//! domain error type live here.

pub mod errors;
pub mod repositories;
pub mod shows;

pub use errors::DomainError;
pub use repositories::*;
pub use shows::{PartitionedShows, ShowTiming, count_upcoming, partition_shows};
