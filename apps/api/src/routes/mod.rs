pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::cors::{reject_unknown_origins, OriginAllowList};
use crate::petition::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let allow_list = OriginAllowList::new(&state.config.allowed_origins);

    Router::new()
        .route("/", get(health::liveness_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-petition",
            post(handlers::handle_generate_petition),
        )
        .with_state(state)
        .layer(allow_list.cors_layer())
        // Outermost: unknown origins never reach CORS handling or the handlers.
        .layer(middleware::from_fn_with_state(
            allow_list,
            reject_unknown_origins,
        ))
}
