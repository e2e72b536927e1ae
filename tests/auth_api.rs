//! Access-policy tests over the real router.
//!
//! Every rejection asserted here happens before any query runs, so the pool
//! is a lazy handle that never connects.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use planetarium_server::auth::{USER_ID_HEADER, USER_ROLE_HEADER};
use planetarium_server::config::Config;
use planetarium_server::media::MediaStore;
use planetarium_server::routes::create_routes;
use planetarium_server::state::AppState;
use planetarium_server::store::Store;

fn test_server() -> TestServer {
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/planetarium_unreachable")
        .expect("lazy pool");

    let config = Config {
        database_url: "postgres://localhost/planetarium_unreachable".to_string(),
        port: 0,
        media_root: std::env::temp_dir()
            .join("planetarium-auth-test")
            .to_string_lossy()
            .into_owned(),
        media_url: "/media".to_string(),
        reservation_page_size: 3,
        reservation_max_page_size: 100,
    };

    let media = MediaStore::new(config.media_root.clone(), config.media_url.clone());
    let state = AppState::new(Store::new(pool), media, config);
    TestServer::new(create_routes(state)).expect("test server")
}

fn id_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(USER_ID_HEADER),
        HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap(),
    )
}

fn staff_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(USER_ROLE_HEADER),
        HeaderValue::from_static("staff"),
    )
}

#[tokio::test]
async fn health_is_public() {
    let server = test_server();
    server.get("/health").await.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn unauthenticated_requests_are_rejected() {
    let server = test_server();

    for path in [
        "/show_themes",
        "/astronomy_shows",
        "/planetarium_domes",
        "/show_sessions",
        "/reservations",
        "/admin/resources",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn malformed_user_id_is_unauthenticated() {
    let server = test_server();
    let response = server
        .get("/astronomy_shows")
        .add_header(
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_static("not-a-uuid"),
        )
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn catalog_writes_require_staff() {
    let server = test_server();
    let (id_name, id_value) = id_header();

    let attempts = [
        ("/show_themes", json!({ "name": "Cosmology" })),
        (
            "/astronomy_shows",
            json!({ "title": "New Show", "description": "Description" }),
        ),
        (
            "/planetarium_domes",
            json!({ "name": "Main", "rows": 10, "seats_in_row": 10 }),
        ),
        (
            "/show_sessions",
            json!({
                "astronomy_show": Uuid::new_v4(),
                "planetarium_dome": Uuid::new_v4(),
                "show_time": "2023-10-22T14:00:00Z"
            }),
        ),
    ];

    for (path, payload) in attempts {
        let response = server
            .post(path)
            .add_header(id_name.clone(), id_value.clone())
            .json(&payload)
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
async fn admin_surface_requires_staff() {
    let server = test_server();
    let (id_name, id_value) = id_header();

    let response = server
        .get("/admin/resources")
        .add_header(id_name, id_value)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn dome_with_empty_grid_is_rejected_before_persistence() {
    let server = test_server();
    let (id_name, id_value) = id_header();
    let (role_name, role_value) = staff_header();

    let response = server
        .post("/planetarium_domes")
        .add_header(id_name, id_value)
        .add_header(role_name, role_value)
        .json(&json!({ "name": "Main", "rows": 0, "seats_in_row": 10 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["rows"].is_string());
}

#[tokio::test]
async fn empty_reservation_is_rejected_before_persistence() {
    let server = test_server();
    let (id_name, id_value) = id_header();

    let response = server
        .post("/reservations")
        .add_header(id_name, id_value)
        .json(&json!({ "tickets": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
