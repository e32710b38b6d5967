use crate::error::{DashboardError, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Established session returned by the identity provider on sign-up or
/// sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    #[serde(rename = "localId")]
    pub user_id: String,
    pub email: String,
    #[serde(rename = "idToken")]
    pub id_token: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: String,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Client for the managed identity provider (identity-toolkit REST shape).
/// The provider is an opaque success/failure contract; its error messages are
/// surfaced to the user verbatim.
pub struct IdentityClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl IdentityClient {
    pub fn new(base_url: String, api_key: String) -> Result<Self> {
        let base = Url::parse(&base_url).map_err(|e| {
            DashboardError::EnvError(format!("invalid identity provider URL: {}", e))
        })?;

        let client = Client::builder()
            .user_agent("Repo Dashboard Server/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(IdentityClient {
            client,
            base_url: base.as_str().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn post_op(&self, op: &str, body: serde_json::Value) -> Result<reqwest::Response> {
        let url = format!("{}/v1/accounts:{}?key={}", self.base_url, op, self.api_key);
        let response = self.client.post(&url).json(&body).send().await?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ProviderError>(&text)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| format!("identity provider returned status {}", status));

        debug!(op, %status, "identity provider rejected request");
        Err(DashboardError::AuthError(message))
    }

    /// Create a new account and return the fresh session.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .post_op(
                "signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        Ok(response.json().await?)
    }

    /// Verify credentials and return the session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let response = self
            .post_op(
                "signInWithPassword",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        Ok(response.json().await?)
    }

    /// Ask the provider to send a password-reset email.
    pub async fn send_password_reset(&self, email: &str) -> Result<()> {
        self.post_op(
            "sendOobCode",
            json!({
                "requestType": "PASSWORD_RESET",
                "email": email,
            }),
        )
        .await?;

        Ok(())
    }
}
