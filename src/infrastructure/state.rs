//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{ArtistRepository, ShowRepository, VenueRepository};
use crate::infrastructure::{SeaOrmArtistRepository, SeaOrmShowRepository, SeaOrmVenueRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection, used by the seeding helpers and tests
    db: DatabaseConnection,
    /// Venue repository
    pub venue_repo: Arc<dyn VenueRepository>,
    /// Artist repository
    pub artist_repo: Arc<dyn ArtistRepository>,
    /// Show repository
    pub show_repo: Arc<dyn ShowRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let venue_repo = Arc::new(SeaOrmVenueRepository::new(db.clone()));
        let artist_repo = Arc::new(SeaOrmArtistRepository::new(db.clone()));
        let show_repo = Arc::new(SeaOrmShowRepository::new(db.clone()));

        Self {
            db,
            venue_repo,
            artist_repo,
            show_repo,
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
