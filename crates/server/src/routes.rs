use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod fournisseurs;

pub const FOURNISSEURS_BASE: &str = "/api/v1/fournisseurs";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: health, supplier CRUD and API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route(FOURNISSEURS_BASE, get(fournisseurs::list).post(fournisseurs::create))
        .route(&format!("{FOURNISSEURS_BASE}/count"), get(fournisseurs::count))
        .route(
            &format!("{FOURNISSEURS_BASE}/:id"),
            get(fournisseurs::get).put(fournisseurs::update).delete(fournisseurs::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
