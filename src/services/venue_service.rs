//! Venue Service - listing, search and detail aggregation

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use super::{SearchHit, SearchResults, upcoming_counts};
use crate::domain::{
    DomainError, ShowListing, ShowRepository, Venue, VenueRepository, partition_shows,
};
use crate::utils::time::{DateFormat, format_datetime};

/// Venue line in the grouped listing
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing a city and state
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// A show on a venue page, described by the artist playing it
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListing> for VenueShow {
    fn from(show: ShowListing) -> Self {
        Self {
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_datetime(show.start_time, DateFormat::Full),
        }
    }
}

/// Everything the venue page shows
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// All venues grouped by (city, state), each with its upcoming-show count
pub async fn list_venues(
    venues: &dyn VenueRepository,
    shows: &dyn ShowRepository,
    now: NaiveDateTime,
) -> Result<Vec<Area>, DomainError> {
    // Ordered by state, city, name, so areas come out contiguous
    let all = venues.find_all().await?;
    let ids: Vec<i32> = all.iter().map(|v| v.id).collect();
    let counts = upcoming_counts(now, &shows.schedule_for_venues(&ids).await?);

    let mut areas: Vec<Area> = Vec::new();
    for venue in all {
        let summary = VenueSummary {
            id: venue.id,
            num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
            name: venue.name,
        };

        match areas.last_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(summary);
            }
            _ => areas.push(Area {
                city: venue.city,
                state: venue.state,
                venues: vec![summary],
            }),
        }
    }

    tracing::debug!("Listed {} venue areas", areas.len());
    Ok(areas)
}

/// Case-insensitive name search
pub async fn search_venues(
    venues: &dyn VenueRepository,
    shows: &dyn ShowRepository,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults, DomainError> {
    let matches = venues.search_by_name(term).await?;
    let ids: Vec<i32> = matches.iter().map(|v| v.id).collect();
    let counts = upcoming_counts(now, &shows.schedule_for_venues(&ids).await?);

    let hits = matches
        .into_iter()
        .map(|v| SearchHit {
            id: v.id,
            num_upcoming_shows: counts.get(&v.id).copied().unwrap_or(0),
            name: v.name,
        })
        .collect();

    Ok(SearchResults::new(hits))
}

/// Venue record plus its shows split around `now`
pub async fn venue_detail(
    venues: &dyn VenueRepository,
    shows: &dyn ShowRepository,
    id: i32,
    now: NaiveDateTime,
) -> Result<VenueDetail, DomainError> {
    let venue = venues.find_by_id(id).await?.ok_or(DomainError::NotFound)?;
    let venue_shows = shows.find_by_venue(id).await?;

    Ok(build_detail(venue, venue_shows, now))
}

fn build_detail(venue: Venue, venue_shows: Vec<ShowListing>, now: NaiveDateTime) -> VenueDetail {
    let split = partition_shows(now, venue_shows, |s| s.start_time).map(VenueShow::from);

    VenueDetail {
        id: venue.id,
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website_link,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link.map(|l| l.trim_matches('"').to_string()),
        past_shows_count: split.past_count(),
        upcoming_shows_count: split.upcoming_count(),
        past_shows: split.past,
        upcoming_shows: split.upcoming,
    }
}
