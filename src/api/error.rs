//! Page-level failures and how they turn into responses

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use thiserror::Error;

use crate::domain::DomainError;
use crate::views::{self, Flash};

#[derive(Debug, Error)]
pub enum PageError {
    /// The requested record does not exist; the visitor is sent home
    #[error("record not found")]
    Missing,
    /// A submission or write was refused; the home page carries the message
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    /// Reading the store failed
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl PageError {
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        PageError::Rejected {
            status,
            message: message.into(),
        }
    }
}

/// Id segment of a record URL. Anything that is not an `i32` names no record.
pub fn record_id(raw: &str) -> Result<i32, PageError> {
    raw.trim().parse::<i32>().map_err(|_| PageError::Missing)
}

impl From<DomainError> for PageError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound => PageError::Missing,
            DomainError::Validation(msg) => PageError::rejected(StatusCode::BAD_REQUEST, msg),
            DomainError::Database(msg) | DomainError::Internal(msg) => PageError::Unavailable(msg),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::Missing => Redirect::to("/").into_response(),
            PageError::Rejected { status, message } => {
                tracing::warn!(status = status.as_u16(), "{}", message);
                (status, Html(views::home_page(Some(&Flash::error(message))))).into_response()
            }
            PageError::Unavailable(msg) => {
                tracing::error!("Page failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::server_error_page()),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    #[test]
    fn test_missing_redirects_home() {
        let response = PageError::from(DomainError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
    }

    #[test]
    fn test_record_id_rejects_non_ids() {
        assert_eq!(record_id("17").ok(), Some(17));
        assert!(matches!(record_id("abc"), Err(PageError::Missing)));
        assert!(matches!(record_id("99999999999"), Err(PageError::Missing)));
        assert!(matches!(record_id(""), Err(PageError::Missing)));
    }

    #[test]
    fn test_validation_is_client_error() {
        let response = PageError::from(DomainError::Validation("bad".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_database_failure_is_server_error() {
        let response = PageError::from(DomainError::Database("locked".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
