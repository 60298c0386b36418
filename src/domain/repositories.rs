//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::DomainError;

/// Venue record as seen by the rest of the application
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Artist record as seen by the rest of the application
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A stored show booking
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

/// A show joined with the venue and artist it links
#[derive(Debug, Clone, PartialEq)]
pub struct ShowListing {
    pub id: i32,
    pub start_time: NaiveDateTime,
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

/// Start time of a show keyed by the venue or artist that owns it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleEntry {
    pub owner_id: i32,
    pub start_time: NaiveDateTime,
}

/// Input for creating a venue
#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Input for updating a venue.
///
/// `None` leaves the stored value untouched. For nullable columns the inner
/// option distinguishes "clear" (`Some(None)`) from "keep" (`None`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenuePatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub website_link: Option<Option<String>>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<Option<String>>,
}

/// Input for creating an artist
#[derive(Debug, Clone, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Input for updating an artist, same conventions as [`VenuePatch`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistPatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
    pub image_link: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub website_link: Option<Option<String>>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<Option<String>>,
}

/// Input for booking a show
#[derive(Debug, Clone, PartialEq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

/// Repository trait for Venue entity
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Find all venues ordered by state, city, then name
    async fn find_all(&self) -> Result<Vec<Venue>, DomainError>;

    /// Find a venue by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Venue>, DomainError>;

    /// Venues whose name contains `term`, ignoring case, ordered by name
    async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>, DomainError>;

    /// Create a new venue
    async fn create(&self, input: NewVenue) -> Result<Venue, DomainError>;

    /// Apply a partial update to a venue
    async fn update(&self, id: i32, patch: VenuePatch) -> Result<Venue, DomainError>;

    /// Delete a venue and its shows
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Artist entity
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// Find all artists ordered by name
    async fn find_all(&self) -> Result<Vec<Artist>, DomainError>;

    /// Find an artist by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Artist>, DomainError>;

    /// Artists whose name contains `term`, ignoring case, ordered by name
    async fn search_by_name(&self, term: &str) -> Result<Vec<Artist>, DomainError>;

    /// Create a new artist
    async fn create(&self, input: NewArtist) -> Result<Artist, DomainError>;

    /// Apply a partial update to an artist
    async fn update(&self, id: i32, patch: ArtistPatch) -> Result<Artist, DomainError>;
}

/// Repository trait for Show entity
#[async_trait]
pub trait ShowRepository: Send + Sync {
    /// All shows joined with venue and artist, ordered by start time
    async fn find_all(&self) -> Result<Vec<ShowListing>, DomainError>;

    /// Shows held at a venue, ordered by start time
    async fn find_by_venue(&self, venue_id: i32) -> Result<Vec<ShowListing>, DomainError>;

    /// Shows an artist plays, ordered by start time
    async fn find_by_artist(&self, artist_id: i32) -> Result<Vec<ShowListing>, DomainError>;

    /// Start times of the shows held at the given venues
    async fn schedule_for_venues(
        &self,
        venue_ids: &[i32],
    ) -> Result<Vec<ScheduleEntry>, DomainError>;

    /// Start times of the shows played by the given artists
    async fn schedule_for_artists(
        &self,
        artist_ids: &[i32],
    ) -> Result<Vec<ScheduleEntry>, DomainError>;

    /// Book a show. Both the artist and the venue must exist.
    async fn create(&self, input: NewShow) -> Result<Show, DomainError>;
}
