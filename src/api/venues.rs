//! Venue pages: listing, search, detail, create, edit and delete

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use super::error::{PageError, record_id};
use crate::domain::DomainError;
use crate::forms::{parse_new_venue, parse_venue_patch, FormData};
use crate::infrastructure::AppState;
use crate::services::venue_service;
use crate::utils::time::now;
use crate::views::forms::{edit_profile_page, new_profile_page, ProfileKind, ProfileValues};
use crate::views::{self, Flash};

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

pub async fn list_venues(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let areas =
        venue_service::list_venues(state.venue_repo.as_ref(), state.show_repo.as_ref(), now())
            .await?;
    Ok(Html(views::venues::venues_page(&areas, None)))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = venue_service::search_venues(
        state.venue_repo.as_ref(),
        state.show_repo.as_ref(),
        &form.search_term,
        now(),
    )
    .await?;

    tracing::debug!(
        "Venue search {:?} matched {} records",
        form.search_term,
        results.count
    );
    Ok(Html(views::venues::venue_search_page(
        &form.search_term,
        &results,
    )))
}

pub async fn show_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = record_id(&raw_id)?;
    let detail =
        venue_service::venue_detail(state.venue_repo.as_ref(), state.show_repo.as_ref(), id, now())
            .await
            .inspect_err(|e| {
                if matches!(e, DomainError::NotFound) {
                    tracing::warn!(venue_id = id, "Venue not found");
                }
            })?;
    Ok(Html(views::venues::venue_detail_page(&detail, None)))
}

pub async fn create_venue_form() -> Html<String> {
    Html(new_profile_page(ProfileKind::Venue, None))
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, PageError> {
    let form = FormData::new(pairs);
    let name = form.value("name").unwrap_or_default().to_string();

    let input = parse_new_venue(&form).map_err(|errors| {
        PageError::rejected(
            StatusCode::BAD_REQUEST,
            format!("An error occurred. Venue {name} could not be listed. {errors}"),
        )
    })?;

    let venue = state.venue_repo.create(input).await.map_err(|e| {
        tracing::error!("Failed to create venue {}: {}", name, e);
        PageError::rejected(
            StatusCode::BAD_REQUEST,
            format!("An error occurred. Venue {name} could not be listed."),
        )
    })?;

    let flash = Flash::success(format!("Venue {} was successfully listed!", venue.name));
    Ok(Html(views::home_page(Some(&flash))))
}

pub async fn delete_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, PageError> {
    let Ok(id) = record_id(&raw_id) else {
        tracing::warn!("Delete requested for invalid venue id {:?}", raw_id);
        return Ok(Redirect::to("/"));
    };

    match state.venue_repo.delete(id).await {
        Ok(()) => {
            tracing::info!(venue_id = id, "Venue deleted");
            Ok(Redirect::to("/"))
        }
        Err(DomainError::NotFound) => {
            tracing::warn!(venue_id = id, "Delete requested for missing venue");
            Ok(Redirect::to("/"))
        }
        Err(e) => {
            tracing::error!(venue_id = id, "Failed to delete venue: {}", e);
            Err(PageError::rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred. Venue {id} could not be deleted."),
            ))
        }
    }
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = record_id(&raw_id)?;
    let venue = state
        .venue_repo
        .find_by_id(id)
        .await?
        .ok_or(PageError::Missing)?;

    let values = ProfileValues::from_venue(&venue);
    Ok(Html(edit_profile_page(ProfileKind::Venue, id, &values, None)))
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, PageError> {
    let id = record_id(&raw_id)?;
    let form = FormData::new(pairs);

    let patch = match parse_venue_patch(&form) {
        Ok(patch) => patch,
        Err(errors) => {
            tracing::warn!(venue_id = id, "Rejected venue edit: {}", errors);
            let values = ProfileValues::from_form(&form, ProfileKind::Venue);
            let flash = Flash::error(format!(
                "An error occurred. Venue {} could not be updated. {errors}",
                values.name
            ));
            let page = edit_profile_page(ProfileKind::Venue, id, &values, Some(&flash));
            return Ok((StatusCode::BAD_REQUEST, Html(page)).into_response());
        }
    };

    match state.venue_repo.update(id, patch).await {
        Ok(venue) => Ok(Redirect::to(&format!("/venues/{}", venue.id)).into_response()),
        Err(DomainError::NotFound) => Err(PageError::Missing),
        Err(e) => {
            tracing::error!(venue_id = id, "Failed to update venue: {}", e);
            Err(PageError::rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred. Venue {id} could not be updated."),
            ))
        }
    }
}
