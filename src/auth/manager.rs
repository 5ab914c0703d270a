use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::Error as _;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::client::rejection_reason;
use crate::config::settings::Settings;
use crate::error::Error;
use crate::store::{TokenStore, TOKEN_KEY};
use crate::utils::constants::{CONTENT_TYPE_JSON_UTF8, TOKEN_TTL_SECONDS};

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    login: &'a str,
    pass: &'a str,
}

/// Authorization token lifecycle manager.
///
/// Holds no token itself; the shared store is authoritative on every call.
/// When the store has no live entry, one login exchange is performed and the
/// fresh token is written back with a 24h TTL.
///
/// The miss -> login -> set sequence is not mutually exclusive: two callers
/// observing a miss at once each log in and the last write wins. Any valid
/// token works, so the extra login is wasted work, not an error.
#[derive(Debug, Clone)]
pub struct TokenManager<S: TokenStore> {
    http: Client,
    settings: Settings,
    store: S,
}

impl<S: TokenStore> TokenManager<S> {
    pub fn new(http: Client, settings: Settings, store: S) -> Self {
        Self { http, settings, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Return a currently valid token, logging in when the store has none.
    pub async fn get_valid_token(&self) -> Result<String, Error> {
        if let Some(token) = self.store.get(TOKEN_KEY).await {
            let remaining = self.store.ttl(TOKEN_KEY).await.unwrap_or(0);
            debug!(ttl_seconds = remaining, "using cached token");
            return Ok(token);
        }

        let url = self.settings.endpoint("getToken");
        let body = AuthRequest {
            login: &self.settings.login,
            pass: &self.settings.password,
        };

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON_UTF8)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "authorization request failed");
                Error::Transport(e)
            })?;

        let raw = response.text().await?;
        let body: Value = serde_json::from_str(&raw)?;

        if let Some(reason) = rejection_reason(&body) {
            error!(reason = %reason, "authorization rejected");
            return Err(Error::AuthRejected(reason));
        }

        // a success body without a usable token must never reach the store
        let token = body
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                error!("authorization response carries no token");
                Error::MalformedResponse(serde_json::Error::custom("token field absent or empty"))
            })?;

        self.store.set(TOKEN_KEY, token, TOKEN_TTL_SECONDS).await;
        info!("obtained new token");
        Ok(token.to_string())
    }
}
