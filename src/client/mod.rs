use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use crate::auth::manager::TokenManager;
use crate::config::settings::Settings;
use crate::error::Error;
use crate::receipt::SellRequest;
use crate::store::TokenStore;
use crate::utils::constants::{CONTENT_TYPE_JSON_UTF8, DEFAULT_HTTP_TIMEOUT_MS, TOKEN_HEADER};

/// Fiscal API client.
///
/// Attaches the current token to every outgoing call by asking the token
/// manager per call; a token refreshed mid-session is picked up on the very
/// next request. Response bodies are returned as parsed JSON without
/// structural validation; only the provider's error field is inspected.
#[derive(Debug, Clone)]
pub struct KktClient<S: TokenStore> {
    http: Client,
    settings: Settings,
    tokens: TokenManager<S>,
}

impl<S: TokenStore> KktClient<S> {
    pub fn new(settings: Settings, store: S) -> Result<Self, Error> {
        let http = Client::builder()
            .timeout(Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS))
            .build()?;
        let tokens = TokenManager::new(http.clone(), settings.clone(), store);
        Ok(Self { http, settings, tokens })
    }

    pub fn tokens(&self) -> &TokenManager<S> {
        &self.tokens
    }

    /// Submit a receipt for fiscalization.
    ///
    /// Returns the provider's acknowledgment body unchanged.
    pub async fn sell(&self, request: &SellRequest) -> Result<Value, Error> {
        let token = self.tokens.get_valid_token().await?;
        let url = self
            .settings
            .endpoint(&format!("{}/sell", self.settings.group_code));

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON_UTF8)
            .header(TOKEN_HEADER, token)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "sell request failed");
                Error::Transport(e)
            })?;

        let body = parse_body(response).await?;
        if let Some(reason) = rejection_reason(&body) {
            error!(external_id = %request.external_id, reason = %reason, "sell rejected");
            return Err(Error::SellRejected(reason));
        }
        debug!(external_id = %request.external_id, ack = %body, "sell acknowledged");
        Ok(body)
    }

    /// Fetch the fiscalization report for a previously submitted receipt.
    pub async fn report(&self, uuid: &str) -> Result<Value, Error> {
        let token = self.tokens.get_valid_token().await?;
        let url = self
            .settings
            .endpoint(&format!("{}/report/{}", self.settings.group_code, uuid));

        let response = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, token)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, uuid = %uuid, "report request failed");
                Error::Transport(e)
            })?;

        let body = parse_body(response).await?;
        if let Some(reason) = rejection_reason(&body) {
            error!(uuid = %uuid, reason = %reason, "report rejected");
            return Err(Error::ReportRejected(reason));
        }
        debug!(uuid = %uuid, status = %body, "report received");
        Ok(body)
    }
}

async fn parse_body(response: reqwest::Response) -> Result<Value, Error> {
    let raw = response.text().await?;
    let body: Value = serde_json::from_str(&raw)?;
    Ok(body)
}

/// Non-empty provider error field, if any. The provider signals rejection
/// with a string; anything else non-null is rendered as-is. Shared by the
/// authorization and provider call paths.
pub(crate) fn rejection_reason(body: &Value) -> Option<String> {
    match body.get("error") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
