//! Show pages: listing and booking

use axum::{extract::State, http::StatusCode, response::Html, Form};

use super::error::PageError;
use crate::domain::DomainError;
use crate::forms::{parse_new_show, FormData};
use crate::infrastructure::AppState;
use crate::services::{artist_service, show_service};
use crate::utils::time::{input_value, now};
use crate::views::{self, Flash};

pub async fn list_shows(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let shows = show_service::list_shows(state.show_repo.as_ref()).await?;
    Ok(Html(views::shows::shows_page(&shows, None)))
}

pub async fn create_show_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let artists: Vec<(i32, String)> = artist_service::list_artists(state.artist_repo.as_ref())
        .await?
        .into_iter()
        .map(|a| (a.id, a.name))
        .collect();

    let mut venues: Vec<(i32, String)> = state
        .venue_repo
        .find_all()
        .await?
        .into_iter()
        .map(|v| (v.id, v.name))
        .collect();
    venues.sort_by(|a, b| a.1.cmp(&b.1));

    Ok(Html(views::forms::new_show_page(
        &artists,
        &venues,
        &input_value(now()),
        None,
    )))
}

pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Html<String>, PageError> {
    let form = FormData::new(pairs);

    let input = parse_new_show(&form).map_err(|errors| {
        PageError::rejected(
            StatusCode::BAD_REQUEST,
            format!("An error occurred. Show could not be listed. {errors}"),
        )
    })?;

    state.show_repo.create(input).await.map_err(|e| {
        let message = match &e {
            DomainError::Validation(reason) => {
                format!("An error occurred. Show could not be listed. {reason}")
            }
            _ => {
                tracing::error!("Failed to create show: {}", e);
                "An error occurred. Show could not be listed.".to_string()
            }
        };
        PageError::rejected(StatusCode::BAD_REQUEST, message)
    })?;

    Ok(Html(views::home_page(Some(&Flash::success(
        "Show was successfully listed!",
    )))))
}
