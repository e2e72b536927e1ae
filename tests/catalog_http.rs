//! End-to-end catalog flows over HTTP with a real database behind the
//! router.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use planetarium_server::auth::{USER_ID_HEADER, USER_ROLE_HEADER};
use planetarium_server::config::Config;
use planetarium_server::media::MediaStore;
use planetarium_server::routes::create_routes;
use planetarium_server::state::AppState;
use planetarium_server::store::Store;

fn server_with(pool: PgPool) -> TestServer {
    let media_root = std::env::temp_dir()
        .join(format!("planetarium-http-test-{}", Uuid::new_v4()))
        .to_string_lossy()
        .into_owned();

    let config = Config {
        database_url: String::new(),
        port: 0,
        media_root: media_root.clone(),
        media_url: "/media".to_string(),
        reservation_page_size: 3,
        reservation_max_page_size: 100,
    };

    let media = MediaStore::new(media_root, "/media");
    let state = AppState::new(Store::new(pool), media, config);
    TestServer::new(create_routes(state)).expect("test server")
}

fn user_headers() -> [(HeaderName, HeaderValue); 1] {
    [(
        HeaderName::from_static(USER_ID_HEADER),
        HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap(),
    )]
}

fn staff_headers() -> [(HeaderName, HeaderValue); 2] {
    [
        (
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from_str(&Uuid::new_v4().to_string()).unwrap(),
        ),
        (
            HeaderName::from_static(USER_ROLE_HEADER),
            HeaderValue::from_static("staff"),
        ),
    ]
}

fn png_bytes() -> Vec<u8> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    image::RgbImage::new(2, 2)
        .write_to(&mut buffer, image::ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}

#[sqlx::test]
async fn staff_created_show_round_trips_through_the_api(pool: PgPool) {
    let server = server_with(pool);
    let [id, role] = staff_headers();

    let theme = server
        .post("/show_themes")
        .add_header(id.0.clone(), id.1.clone())
        .add_header(role.0.clone(), role.1.clone())
        .json(&json!({ "name": "Cosmology" }))
        .await;
    theme.assert_status(StatusCode::CREATED);
    let theme_id = theme.json::<serde_json::Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let payload = json!({
        "title": "Edge of the Void",
        "description": "A tour of black holes",
        "show_themes": [theme_id],
    });
    let created = server
        .post("/astronomy_shows")
        .add_header(id.0.clone(), id.1.clone())
        .add_header(role.0.clone(), role.1.clone())
        .json(&payload)
        .await;
    created.assert_status(StatusCode::CREATED);

    let body: serde_json::Value = created.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], payload["title"]);
    assert_eq!(body["data"]["description"], payload["description"]);
    assert_eq!(body["data"]["show_themes"], payload["show_themes"]);
    let show_id = body["data"]["id"].as_str().unwrap().to_string();

    // Any authenticated user can read it back; the list shape carries theme
    // names, the detail shape nested theme objects.
    let [user] = user_headers();
    let listed = server
        .get("/astronomy_shows")
        .add_header(user.0.clone(), user.1.clone())
        .await;
    listed.assert_status(StatusCode::OK);
    let listed: serde_json::Value = listed.json();
    assert_eq!(listed["data"][0]["themes"][0], "Cosmology");
    assert!(listed["data"][0].get("description").is_none());

    let detail = server
        .get(&format!("/astronomy_shows/{show_id}"))
        .add_header(user.0.clone(), user.1.clone())
        .await;
    detail.assert_status(StatusCode::OK);
    let detail: serde_json::Value = detail.json();
    assert_eq!(detail["data"]["themes"][0]["name"], "Cosmology");
    assert_eq!(detail["data"]["description"], payload["description"]);
}

#[sqlx::test]
async fn dome_creation_reports_capacity(pool: PgPool) {
    let server = server_with(pool);
    let [id, role] = staff_headers();

    let response = server
        .post("/planetarium_domes")
        .add_header(id.0, id.1)
        .add_header(role.0, role.1)
        .json(&json!({ "name": "Main dome", "rows": 12, "seats_in_row": 10 }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["data"]["capacity"], 120);
}

#[sqlx::test]
async fn uploaded_poster_is_validated_and_linked(pool: PgPool) {
    let server = server_with(pool);
    let [id, role] = staff_headers();

    let show = server
        .post("/astronomy_shows")
        .add_header(id.0.clone(), id.1.clone())
        .add_header(role.0.clone(), role.1.clone())
        .json(&json!({ "title": "Edge of the Void", "description": "d" }))
        .await;
    show.assert_status(StatusCode::CREATED);
    let show_id = show.json::<serde_json::Value>()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Garbage payload is a validation failure.
    let garbage = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"not an image".to_vec())
            .file_name("poster.png")
            .mime_type("image/png"),
    );
    let rejected = server
        .post(&format!("/astronomy_shows/{show_id}/upload-image"))
        .add_header(id.0.clone(), id.1.clone())
        .add_header(role.0.clone(), role.1.clone())
        .multipart(garbage)
        .await;
    rejected.assert_status(StatusCode::BAD_REQUEST);

    // A decodable image is stored and its URI persisted on the show.
    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(png_bytes())
            .file_name("poster.png")
            .mime_type("image/png"),
    );
    let accepted = server
        .post(&format!("/astronomy_shows/{show_id}/upload-image"))
        .add_header(id.0.clone(), id.1.clone())
        .add_header(role.0.clone(), role.1.clone())
        .multipart(form)
        .await;
    accepted.assert_status(StatusCode::OK);
    let uri = accepted.json::<serde_json::Value>()["data"]["image"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(uri.starts_with("/media/uploads/shows/edge-of-the-void-"));

    let detail = server
        .get(&format!("/astronomy_shows/{show_id}"))
        .add_header(id.0, id.1)
        .await;
    assert_eq!(detail.json::<serde_json::Value>()["data"]["image"], uri);
}

#[sqlx::test]
async fn upload_to_unknown_show_is_not_found(pool: PgPool) {
    let server = server_with(pool);
    let [id, role] = staff_headers();

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(png_bytes())
            .file_name("poster.png")
            .mime_type("image/png"),
    );
    let response = server
        .post(&format!("/astronomy_shows/{}/upload-image", Uuid::new_v4()))
        .add_header(id.0, id.1)
        .add_header(role.0, role.1)
        .multipart(form)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
