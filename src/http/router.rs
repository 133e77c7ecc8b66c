use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::{health, sessions};
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::create))
        .route("/:session-id", delete(sessions::handlers::close))
        .route("/:session-id/spots", post(sessions::handlers::new_spot))
        .route("/:session-id/view", get(sessions::handlers::view))
        .route(
            "/:session-id/mode/toggle",
            post(sessions::handlers::toggle_mode),
        )
        .route("/:session-id/zoom-in", post(sessions::handlers::zoom_in));

    Router::new()
        .nest("/health", health_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
