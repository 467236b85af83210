//! # Spotify Module
//!
//! This module provides the integration with the Spotify Web API. It covers the
//! client-credentials token exchange and the three read-only endpoints the
//! interactive session needs.
//!
//! ## API Coverage
//!
//! ### Authentication
//! - `POST /api/token` - Client-credentials token exchange
//!
//! ### Artist Information
//! - `GET /search?type=artist` - First artist matching a name
//! - `GET /artists/{id}/top-tracks` - Most popular tracks of an artist
//!
//! ### Track Details
//! - `GET /tracks/{id}` - Markets a track is available in
//!
//! ## Usage Patterns
//!
//! ```rust
//! let client = SpotifyClient::new();
//! let token = client.get_token(&credentials).await?;
//!
//! let artist = client
//!     .search_artist(&token, "Kalush")
//!     .await?
//!     .into_first_artist("Kalush")?;
//! let tracks = client.top_tracks(&artist.id, &token).await?;
//! let markets = client.get_markets(&tracks[0].id, &token).await?;
//! ```
//!
//! ## Error Types
//!
//! Every call returns [`crate::errors::Result`]. Non-success statuses are mapped
//! to [`Error::Unauthorized`] for `401` and [`Error::Api`] for anything else;
//! nothing is retried.
//!
//! ## Tokens
//!
//! The token is fetched once and never refreshed. Calls made after it expired
//! fail with [`Error::Unauthorized`].

pub mod artists;
pub mod auth;
pub mod tracks;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::{Error, Result};

pub use auth::auth_header;

pub const SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Country passed to the top-tracks and track endpoints.
pub const MARKET_COUNTRY: &str = "US";

/// Base URLs the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub api_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: SPOTIFY_API_TOKEN_URL.to_string(),
            api_url: SPOTIFY_API_URL.to_string(),
        }
    }
}

/// Thin wrapper around a `reqwest::Client` bound to a set of Spotify endpoints.
///
/// No timeout is configured; a hung connection stalls the caller.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    endpoints: Endpoints,
}

impl SpotifyClient {
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self::with_http_client(Client::new(), endpoints)
    }

    pub fn with_http_client(http: Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{uri}/{path}",
            uri = self.endpoints.api_url.trim_end_matches('/'),
            path = path.trim_start_matches('/')
        )
    }

    /// Sends an authorized GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: &str,
    ) -> Result<T> {
        let request = auth_header(token)
            .into_iter()
            .fold(request, |req, (name, value)| req.header(name, value));

        let response = request.send().await?;
        let status = response.status();
        log::debug!("GET {} -> {}", response.url().path(), status);

        if status == StatusCode::UNAUTHORIZED {
            return Err(Error::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        Ok(response.json::<T>().await?)
    }
}

impl Default for SpotifyClient {
    fn default() -> Self {
        Self::new()
    }
}
