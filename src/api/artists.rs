//! Artist pages: listing, search, detail, create and edit

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use super::error::{PageError, record_id};
use super::venues::SearchForm;
use crate::domain::DomainError;
use crate::forms::{parse_artist_patch, parse_new_artist, FormData};
use crate::infrastructure::AppState;
use crate::services::artist_service;
use crate::utils::time::now;
use crate::views::forms::{edit_profile_page, new_profile_page, ProfileKind, ProfileValues};
use crate::views::{self, Flash};

pub async fn list_artists(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let artists = artist_service::list_artists(state.artist_repo.as_ref()).await?;
    Ok(Html(views::artists::artists_page(&artists, None)))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = artist_service::search_artists(
        state.artist_repo.as_ref(),
        state.show_repo.as_ref(),
        &form.search_term,
        now(),
    )
    .await?;

    Ok(Html(views::artists::artist_search_page(
        &form.search_term,
        &results,
    )))
}

pub async fn show_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = record_id(&raw_id)?;
    let detail = artist_service::artist_detail(
        state.artist_repo.as_ref(),
        state.show_repo.as_ref(),
        id,
        now(),
    )
    .await
    .inspect_err(|e| {
        if matches!(e, DomainError::NotFound) {
            tracing::warn!(artist_id = id, "Artist not found");
        }
    })?;
    Ok(Html(views::artists::artist_detail_page(&detail, None)))
}

pub async fn create_artist_form() -> Html<String> {
    Html(new_profile_page(ProfileKind::Artist, None))
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, PageError> {
    let form = FormData::new(pairs);
    let name = form.value("name").unwrap_or_default().to_string();

    let input = parse_new_artist(&form).map_err(|errors| {
        PageError::rejected(
            StatusCode::BAD_REQUEST,
            format!("An error occurred. Artist {name} could not be listed. {errors}"),
        )
    })?;

    let artist = state.artist_repo.create(input).await.map_err(|e| {
        tracing::error!("Failed to create artist {}: {}", name, e);
        PageError::rejected(
            StatusCode::BAD_REQUEST,
            format!("An error occurred. Artist {name} could not be listed."),
        )
    })?;

    let flash = Flash::success(format!("Artist {} was successfully listed!", artist.name));
    Ok(Html(views::home_page(Some(&flash))))
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = record_id(&raw_id)?;
    let artist = state
        .artist_repo
        .find_by_id(id)
        .await?
        .ok_or(PageError::Missing)?;

    let values = ProfileValues::from_artist(&artist);
    Ok(Html(edit_profile_page(ProfileKind::Artist, id, &values, None)))
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, PageError> {
    let id = record_id(&raw_id)?;
    let form = FormData::new(pairs);

    let patch = match parse_artist_patch(&form) {
        Ok(patch) => patch,
        Err(errors) => {
            tracing::warn!(artist_id = id, "Rejected artist edit: {}", errors);
            let values = ProfileValues::from_form(&form, ProfileKind::Artist);
            let flash = Flash::error(format!(
                "An error occurred. Artist {} could not be updated. {errors}",
                values.name
            ));
            let page = edit_profile_page(ProfileKind::Artist, id, &values, Some(&flash));
            return Ok((StatusCode::BAD_REQUEST, Html(page)).into_response());
        }
    };

    match state.artist_repo.update(id, patch).await {
        Ok(artist) => Ok(Redirect::to(&format!("/artists/{}", artist.id)).into_response()),
        Err(DomainError::NotFound) => Err(PageError::Missing),
        Err(e) => {
            tracing::error!(artist_id = id, "Failed to update artist: {}", e);
            Err(PageError::rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred. Artist {id} could not be updated."),
            ))
        }
    }
}
