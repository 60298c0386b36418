//! Show Service - the flat show listing

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{DomainError, ShowListing, ShowRepository};
use crate::utils::time::{DateFormat, format_datetime};

/// One booking in the show listing
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ShowView {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListing> for ShowView {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_datetime(show.start_time, DateFormat::Medium),
        }
    }
}

/// Every show, past and upcoming, by start time
pub async fn list_shows(shows: &dyn ShowRepository) -> Result<Vec<ShowView>, DomainError> {
    let all = shows.find_all().await?;
    tracing::debug!("Listing {} shows", all.len());
    Ok(all.into_iter().map(ShowView::from).collect())
}
