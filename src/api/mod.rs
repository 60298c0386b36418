pub mod artists;
pub mod error;
pub mod health;
pub mod home;
pub mod json;
pub mod shows;
pub mod venues;

use axum::{
    routing::{get, post},
    Router,
};

use crate::infrastructure::AppState;

/// HTML pages, the JSON API under `/api`, and the 404 fallback
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        // Venues
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/:id",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(venues::edit_venue_form).post(venues::edit_venue_submission),
        )
        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route("/artists/:id", get(artists::show_artist))
        .route(
            "/artists/:id/edit",
            get(artists::edit_artist_form).post(artists::edit_artist_submission),
        )
        // Shows
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
        .nest("/api", api_router())
        .fallback(home::not_found)
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/venues", get(json::list_venues))
        .route("/venues/:id", get(json::get_venue))
        .route("/artists", get(json::list_artists))
        .route("/artists/:id", get(json::get_artist))
        .route("/shows", get(json::list_shows))
}
