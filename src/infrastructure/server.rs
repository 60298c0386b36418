//! HTTP application assembly and serving

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;

/// Pages, JSON API, Swagger UI and static assets, with request tracing
pub fn build_router(db: DatabaseConnection) -> Router {
    let state = AppState::new(db);

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/static", ServeDir::new("static"))
        .merge(api::router(state))
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(db: DatabaseConnection, addr: &str) -> Result<(), std::io::Error> {
    let app = build_router(db);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Fyyur listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
