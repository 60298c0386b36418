//! Artist Service - listing, search and detail aggregation

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use super::{SearchHit, SearchResults, upcoming_counts};
use crate::domain::{
    Artist, ArtistRepository, DomainError, ShowListing, ShowRepository, partition_shows,
};
use crate::utils::time::{DateFormat, format_datetime};

/// Artist line in the flat listing
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
}

/// A show on an artist page, described by where it is held
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListing> for ArtistShow {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            venue_image_link: show.venue_image_link,
            start_time: format_datetime(show.start_time, DateFormat::Full),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// All artists ordered by name
pub async fn list_artists(artists: &dyn ArtistRepository) -> Result<Vec<ArtistSummary>, DomainError> {
    let all = artists.find_all().await?;
    Ok(all
        .into_iter()
        .map(|a| ArtistSummary {
            id: a.id,
            name: a.name,
        })
        .collect())
}

/// Case-insensitive name search
pub async fn search_artists(
    artists: &dyn ArtistRepository,
    shows: &dyn ShowRepository,
    term: &str,
    now: NaiveDateTime,
) -> Result<SearchResults, DomainError> {
    let matches = artists.search_by_name(term).await?;
    let ids: Vec<i32> = matches.iter().map(|a| a.id).collect();
    let counts = upcoming_counts(now, &shows.schedule_for_artists(&ids).await?);

    let hits = matches
        .into_iter()
        .map(|a| SearchHit {
            id: a.id,
            num_upcoming_shows: counts.get(&a.id).copied().unwrap_or(0),
            name: a.name,
        })
        .collect();

    Ok(SearchResults::new(hits))
}

/// Artist record plus its shows split around `now`
pub async fn artist_detail(
    artists: &dyn ArtistRepository,
    shows: &dyn ShowRepository,
    id: i32,
    now: NaiveDateTime,
) -> Result<ArtistDetail, DomainError> {
    let artist = artists.find_by_id(id).await?.ok_or(DomainError::NotFound)?;
    let artist_shows = shows.find_by_artist(id).await?;

    Ok(build_detail(artist, artist_shows, now))
}

fn build_detail(artist: Artist, artist_shows: Vec<ShowListing>, now: NaiveDateTime) -> ArtistDetail {
    let split = partition_shows(now, artist_shows, |s| s.start_time).map(ArtistShow::from);

    ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website_link,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: split.past_count(),
        upcoming_shows_count: split.upcoming_count(),
        past_shows: split.past,
        upcoming_shows: split.upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 3, 1)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap()
    }

    fn artist() -> Artist {
        Artist {
            id: 4,
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("326-123-5000".to_string()),
            genres: vec!["Rock n Roll".to_string()],
            image_link: None,
            facebook_link: None,
            website_link: None,
            seeking_venue: true,
            seeking_description: Some("Looking for shows".to_string()),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn show(venue_id: i32, start_time: NaiveDateTime) -> ShowListing {
        ShowListing {
            id: venue_id,
            start_time,
            venue_id,
            venue_name: format!("Venue {venue_id}"),
            venue_image_link: None,
            artist_id: 4,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: None,
        }
    }

    #[test]
    fn test_detail_uses_venue_side_of_show() {
        let shows = vec![
            show(1, now() - Duration::days(30)),
            show(2, now() - Duration::days(1)),
            show(3, now() + Duration::hours(2)),
        ];
        let detail = build_detail(artist(), shows, now());

        assert_eq!(detail.past_shows_count, 2);
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.upcoming_shows[0].venue_name, "Venue 3");
        assert_eq!(detail.upcoming_shows[0].start_time, "Friday March, 1, 2030 at 9:00PM");
        assert!(detail.seeking_venue);
    }

    #[test]
    fn test_detail_without_shows() {
        let detail = build_detail(artist(), Vec::new(), now());
        assert!(detail.past_shows.is_empty());
        assert!(detail.upcoming_shows.is_empty());
        assert_eq!(detail.upcoming_shows_count, 0);
    }
}
