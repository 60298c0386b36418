use crate::api;
use crate::services::{
    artist_service::{ArtistDetail, ArtistShow, ArtistSummary},
    show_service::ShowView,
    venue_service::{Area, VenueDetail, VenueShow, VenueSummary},
    SearchHit, SearchResults,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::json::list_venues,
        api::json::get_venue,
        api::json::list_artists,
        api::json::get_artist,
        api::json::list_shows,
    ),
    components(
        schemas(
            Area,
            VenueSummary,
            VenueDetail,
            VenueShow,
            ArtistSummary,
            ArtistDetail,
            ArtistShow,
            ShowView,
            SearchHit,
            SearchResults,
        )
    ),
    tags(
        (name = "fyyur", description = "Fyyur venue and artist directory")
    )
)]
pub struct ApiDoc;
