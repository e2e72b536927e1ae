use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{domes, health_check, reservations, sessions, shows, themes};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let media_dir = ServeDir::new(&state.config.media_root);

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/show_themes",
            get(themes::list_themes).post(themes::create_theme),
        )
        .route(
            "/astronomy_shows",
            get(shows::list_shows).post(shows::create_show),
        )
        .route("/astronomy_shows/:id", get(shows::get_show))
        .route("/astronomy_shows/:id/upload-image", post(shows::upload_image))
        .route(
            "/planetarium_domes",
            get(domes::list_domes).post(domes::create_dome),
        )
        .route(
            "/show_sessions",
            get(sessions::list_sessions).post(sessions::create_session),
        )
        .route("/show_sessions/:id", get(sessions::get_session))
        .route(
            "/reservations",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route("/admin/resources", get(admin::list_resources))
        .nest_service("/media", media_dir)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .with_state(state)
}
