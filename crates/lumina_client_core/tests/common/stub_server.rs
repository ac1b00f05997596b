//! Minimal axum stand-in for the gallery backend, bound to an ephemeral local port.

use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const EVENT_ID: &str = "f27978af-e56a-4b45-aede-fb450557699a";
/// Uploads to this event get an empty array back.
pub const EMPTY_EVENT_ID: &str = "00000000-0000-4000-8000-000000000000";
pub const PHOTO_ID: &str = "cb203efe-c27c-470e-bbc6-588172c3b1ae";
pub const ADMIN_PASSWORD: &str = "secret";

/// What the stub observed, for assertions.
#[derive(Default, Debug)]
pub struct Seen {
    /// (field name, file name) of every multipart part.
    pub upload_parts: Vec<(Option<String>, Option<String>)>,
    pub favorite_had_admin_header: Option<bool>,
}

pub struct StubServer {
    /// `http://127.0.0.1:<port>/api`
    pub api_url: String,
    pub origin: String,
    pub seen: Arc<Mutex<Seen>>,
}

type Shared = Arc<Mutex<Seen>>;

fn event_json(title: &str, slug: &str) -> Value {
    json!({
        "id": EVENT_ID,
        "title": title,
        "slug": slug,
        "date": "2024-06-01",
        "coverPhotoId": null,
        "description": "Golden hour by the lake",
        "watermarkText": null,
        "createdAt": 1717200000000i64
    })
}

fn photo_json(url: &str, is_favorite: bool) -> Value {
    json!({
        "id": PHOTO_ID,
        "eventId": EVENT_ID,
        "eventSlug": "smith-wedding",
        "filename": "a1.jpg",
        "url": url,
        "name": "IMG_0001.jpg",
        "type": "image/jpeg",
        "size": 2048,
        "width": 2000,
        "height": 1333,
        "caption": null,
        "uploadedAt": 1717200000000i64,
        "isFavorite": is_favorite
    })
}

fn is_admin(headers: &HeaderMap) -> bool {
    headers
        .get("x-admin-password")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == ADMIN_PASSWORD)
}

async fn list_events() -> Json<Value> {
    Json(json!([event_json("Smith Wedding", "smith-wedding")]))
}

async fn create_event(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !is_admin(&headers) {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }
    let title = body["title"].as_str().unwrap_or_default();
    let slug = body["slug"].as_str().unwrap_or_default();
    Json(event_json(title, slug)).into_response()
}

async fn delete_event(Path(_id): Path<String>) -> Response {
    (StatusCode::NOT_FOUND, "Event not found").into_response()
}

async fn list_photos() -> Json<Value> {
    Json(json!([
        photo_json("/static/smith-wedding/a1.jpg", false),
        photo_json("https://cdn.example.com/b2.jpg", true),
    ]))
}

async fn event_zip(Path(id): Path<String>) -> Response {
    if id != "smith-wedding" {
        return (StatusCode::NOT_FOUND, "Event not found").into_response();
    }
    ([("content-type", "application/zip")], b"PK\x03\x04album".to_vec()).into_response()
}

async fn upload(
    State(seen): State<Shared>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().map(str::to_string);
        let file = field.file_name().map(str::to_string);
        let _ = field.bytes().await;
        seen.lock().unwrap().upload_parts.push((name, file));
    }
    if id == EMPTY_EVENT_ID {
        return Json(json!([])).into_response();
    }
    Json(json!([photo_json("/static/smith-wedding/a1.jpg", false)])).into_response()
}

async fn favorite(State(seen): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    seen.lock().unwrap().favorite_had_admin_header = Some(headers.contains_key("x-admin-password"));
    let value = body["isFavorite"].as_bool().unwrap_or(false);
    Json(photo_json("/static/smith-wedding/a1.jpg", value))
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"].as_str() == Some(ADMIN_PASSWORD) {
        Json(json!({ "success": true })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Invalid password" }))).into_response()
    }
}

pub async fn spawn() -> StubServer {
    let seen: Shared = Arc::default();
    let app = Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/:id", delete(delete_event))
        .route("/api/events/:id/photos", post(upload))
        .route("/api/events/:id/zip", get(event_zip))
        .route("/api/photos", get(list_photos))
        .route("/api/photos/:id/favorite", patch(favorite))
        .route("/api/auth/login", post(login))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        api_url: format!("http://{addr}/api"),
        origin: format!("http://{addr}"),
        seen,
    }
}
