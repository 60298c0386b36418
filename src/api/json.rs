//! Read-only JSON views of the same data the pages render

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::services::{artist_service, show_service, venue_service};
use crate::utils::time::now;

fn error_response(err: DomainError, what: &str) -> Response {
    match err {
        DomainError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("{what} not found") })),
        )
            .into_response(),
        other => {
            tracing::error!("{} lookup failed: {}", what, other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": other.to_string() })),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/venues",
    responses(
        (status = 200, description = "Venues grouped by city and state", body = [crate::services::venue_service::Area])
    )
)]
pub async fn list_venues(State(state): State<AppState>) -> Response {
    match venue_service::list_venues(state.venue_repo.as_ref(), state.show_repo.as_ref(), now())
        .await
    {
        Ok(areas) => Json(areas).into_response(),
        Err(e) => error_response(e, "Venue"),
    }
}

#[utoipa::path(
    get,
    path = "/api/venues/{id}",
    params(("id" = i32, Path, description = "Venue id")),
    responses(
        (status = 200, description = "Venue with its past and upcoming shows", body = crate::services::venue_service::VenueDetail),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn get_venue(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Ok(id) = raw_id.parse::<i32>() else {
        return error_response(DomainError::NotFound, "Venue");
    };
    match venue_service::venue_detail(state.venue_repo.as_ref(), state.show_repo.as_ref(), id, now())
        .await
    {
        Ok(detail) => Json(detail).into_response(),
        Err(e) => error_response(e, "Venue"),
    }
}

#[utoipa::path(
    get,
    path = "/api/artists",
    responses(
        (status = 200, description = "Artists ordered by name", body = [crate::services::artist_service::ArtistSummary])
    )
)]
pub async fn list_artists(State(state): State<AppState>) -> Response {
    match artist_service::list_artists(state.artist_repo.as_ref()).await {
        Ok(artists) => Json(artists).into_response(),
        Err(e) => error_response(e, "Artist"),
    }
}

#[utoipa::path(
    get,
    path = "/api/artists/{id}",
    params(("id" = i32, Path, description = "Artist id")),
    responses(
        (status = 200, description = "Artist with its past and upcoming shows", body = crate::services::artist_service::ArtistDetail),
        (status = 404, description = "Artist not found")
    )
)]
pub async fn get_artist(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let Ok(id) = raw_id.parse::<i32>() else {
        return error_response(DomainError::NotFound, "Artist");
    };
    match artist_service::artist_detail(
        state.artist_repo.as_ref(),
        state.show_repo.as_ref(),
        id,
        now(),
    )
    .await
    {
        Ok(detail) => Json(detail).into_response(),
        Err(e) => error_response(e, "Artist"),
    }
}

#[utoipa::path(
    get,
    path = "/api/shows",
    responses(
        (status = 200, description = "All shows by start time", body = [crate::services::show_service::ShowView])
    )
)]
pub async fn list_shows(State(state): State<AppState>) -> Response {
    match show_service::list_shows(state.show_repo.as_ref()).await {
        Ok(shows) => Json(shows).into_response(),
        Err(e) => error_response(e, "Show"),
    }
}
