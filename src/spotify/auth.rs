use std::collections::HashMap;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::{
    errors::{Error, Result},
    spotify::SpotifyClient,
    types::{Credentials, TokenResponse},
};

/// Builds the header map that authorizes a Web API request.
///
/// The token is used as is, without any validation of its shape.
///
/// # Example
///
/// ```
/// let header = auth_header("token");
/// assert_eq!(header["Authorization"], "Bearer token");
/// ```
pub fn auth_header(token: &str) -> HashMap<&'static str, String> {
    HashMap::from([("Authorization", format!("Bearer {}", token))])
}

/// Encodes `client_id:client_secret` for HTTP Basic authentication.
pub fn basic_credentials(credentials: &Credentials) -> String {
    STANDARD.encode(format!(
        "{}:{}",
        credentials.client_id, credentials.client_secret
    ))
}

impl SpotifyClient {
    /// Exchanges application credentials for an access token.
    ///
    /// Performs the client-credentials grant against the accounts service. The
    /// returned token is never refreshed by this application.
    ///
    /// # Errors
    ///
    /// - [`Error::AuthFailed`] if the accounts service rejects the credentials
    /// - [`Error::MalformedResponse`] if the body carries no `access_token`
    /// - [`Error::Network`] / [`Error::Timeout`] for transport failures
    pub async fn get_token(&self, credentials: &Credentials) -> Result<String> {
        log::debug!("POST {}", self.endpoints.token_url);

        let response = self
            .http
            .post(&self.endpoints.token_url)
            .header(
                "Authorization",
                format!("Basic {}", basic_credentials(credentials)),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::AuthFailed { status, body });
        }

        let json: TokenResponse = response.json().await?;
        json.access_token
            .ok_or_else(|| Error::MalformedResponse("token response has no access_token".into()))
    }
}
