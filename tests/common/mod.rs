#![allow(dead_code)]

//! In-process fake of the Spotify accounts service and Web API.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use artistcli::spotify::{Endpoints, SpotifyClient};
use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::json;

pub const CLIENT_ID: &str = "test-client-id";
pub const CLIENT_SECRET: &str = "test-client-secret";
pub const TOKEN: &str = "test-access-token";

pub const KALUSH_ID: &str = "46rVVJwHWNS7C7MaWXd842";
pub const SILENT_ID: &str = "silent-artist-id";
pub const STEFANIA_ID: &str = "stefania-track-id";
pub const UNLISTED_ID: &str = "unlisted-track-id";

#[derive(Clone, Default)]
pub struct Hits {
    pub top_tracks: Arc<AtomicUsize>,
    pub markets: Arc<AtomicUsize>,
}

impl Hits {
    pub fn top_tracks(&self) -> usize {
        self.top_tracks.load(Ordering::SeqCst)
    }

    pub fn markets(&self) -> usize {
        self.markets.load(Ordering::SeqCst)
    }
}

pub struct FakeSpotify {
    pub client: SpotifyClient,
    pub hits: Hits,
}

pub async fn start() -> FakeSpotify {
    let hits = Hits::default();

    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/search", get(search))
        .route("/v1/artists/{id}/top-tracks", get(top_tracks))
        .route("/v1/tracks/{id}", get(track))
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let endpoints = Endpoints {
        token_url: format!("http://{}/api/token", addr),
        api_url: format!("http://{}/v1", addr),
    };
    let http = reqwest::Client::builder().no_proxy().build().unwrap();

    FakeSpotify {
        client: SpotifyClient::with_http_client(http, endpoints),
        hits,
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TOKEN))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": {"status": 401, "message": "Invalid access token"}})),
    )
        .into_response()
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"error": {"status": 400, "message": message}})),
    )
        .into_response()
}

async fn token(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> Response {
    let expected = format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", CLIENT_ID, CLIENT_SECRET))
    );
    let basic_ok = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);

    if form.get("grant_type").map(String::as_str) != Some("client_credentials") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "unsupported_grant_type"})),
        )
            .into_response();
    }
    if !basic_ok {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid_client"})),
        )
            .into_response();
    }

    Json(json!({
        "access_token": TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .into_response()
}

async fn search(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if params.get("type").map(String::as_str) != Some("artist")
        || params.get("limit").map(String::as_str) != Some("1")
    {
        return bad_request("expected type=artist&limit=1");
    }

    let items = match params.get("q").map(String::as_str) {
        Some("kalush") | Some("Kalush") => json!([{
            "id": KALUSH_ID,
            "name": "KALUSH",
            "genres": ["ukrainian hip hop", "UKRAINIAN POP"],
            "popularity": 57
        }]),
        Some("Red Hot Chili Peppers") => json!([{
            "id": "0L8ExT028jH3ddEcZwqJJ5",
            "name": "Red Hot Chili Peppers",
            "genres": ["alternative rock", "funk metal"]
        }]),
        Some("Антитіла") => json!([{
            "id": "5lLVx3mMyUvZ9QKzM09CZa",
            "name": "Antytila",
            "genres": []
        }]),
        Some("Silent") => json!([{
            "id": SILENT_ID,
            "name": "Silent",
            "genres": []
        }]),
        _ => json!([]),
    };

    Json(json!({"artists": {"href": "", "items": items, "total": 1}})).into_response()
}

async fn top_tracks(
    State(hits): State<Hits>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if params.get("country").map(String::as_str) != Some("US") {
        return bad_request("expected country=US");
    }
    hits.top_tracks.fetch_add(1, Ordering::SeqCst);

    let tracks = match id.as_str() {
        KALUSH_ID => json!([
            {"id": STEFANIA_ID, "name": "Stefania (Kalush Orchestra)", "popularity": 60},
            {"id": "track-2", "name": "Додому"},
            {"id": "track-3", "name": "Пісні"}
        ]),
        SILENT_ID => json!([]),
        _ => return bad_request("invalid id"),
    };

    Json(json!({"tracks": tracks})).into_response()
}

async fn track(
    State(hits): State<Hits>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if params.get("country").map(String::as_str) != Some("US") {
        return bad_request("expected country=US");
    }
    hits.markets.fetch_add(1, Ordering::SeqCst);

    match id.as_str() {
        STEFANIA_ID => Json(json!({
            "id": STEFANIA_ID,
            "name": "Stefania (Kalush Orchestra)",
            "available_markets": ["PL", "XK", "UA", "ZZ", "ET"]
        }))
        .into_response(),
        UNLISTED_ID => Json(json!({"id": UNLISTED_ID, "name": "Unlisted"})).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": {"status": 404, "message": "Non existing id"}})),
        )
            .into_response(),
    }
}
