use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use crate::views;

pub async fn index() -> Html<String> {
    Html(views::home_page(None))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::not_found_page()))
}
