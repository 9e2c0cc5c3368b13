pub mod pizzas;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub const OPENAPI_JSON_PATH: &str = "/swagger/v1/swagger.json";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router: pizza CRUD, health and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let pizzas = Router::new()
        .route("/pizzas", get(pizzas::get_all_pizzas))
        .route(
            "/pizzas/:id",
            get(pizzas::get_pizza)
                .put(pizzas::edit_pizza)
                .delete(pizzas::delete_pizza),
        )
        .route("/pizza", post(pizzas::create_pizza))
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(pizzas)
        .merge(SwaggerUi::new("/swagger").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
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
                // 5xx responses
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
