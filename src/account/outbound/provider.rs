//! Client for the external email/password identity service.
//!
//! The provider owns all credential handling; this module only issues REST
//! calls and republishes the resulting identity state to subscribers.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::watch;

use crate::account::domain::identity::Identity;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Provider rejected the request: {0}")]
    Rejected(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A handle on the provider's authentication-state stream.
///
/// The receiver observes the current identity immediately on subscription and
/// every change exactly once afterward; dropping it releases the
/// subscription.
pub type IdentityWatch = watch::Receiver<Option<Identity>>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, ProviderError>;
    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Observes identity changes for the lifetime of the returned handle.
    fn subscribe(&self) -> IdentityWatch;
}

/// Response payload shared by the provider's credential endpoints.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CredentialResponse {
    local_id: String,
    email: String,
}

#[derive(Deserialize, Debug)]
struct RejectionBody {
    error: RejectionDetail,
}

#[derive(Deserialize, Debug)]
struct RejectionDetail {
    message: String,
}

// Coded messages the provider uses for credential problems. Anything else on
// a 400 is a malformed request rather than a failed authentication attempt.
const CREDENTIAL_REJECTIONS: &[&str] = &[
    "EMAIL_NOT_FOUND",
    "INVALID_PASSWORD",
    "INVALID_LOGIN_CREDENTIALS",
    "INVALID_EMAIL",
    "EMAIL_EXISTS",
    "WEAK_PASSWORD",
    "USER_DISABLED",
];

fn classify_rejection(status: StatusCode, message: String) -> ProviderError {
    if status == StatusCode::BAD_REQUEST && CREDENTIAL_REJECTIONS.iter().any(|code| message.starts_with(code)) {
        ProviderError::InvalidCredentials(message)
    } else {
        ProviderError::Rejected(message)
    }
}

pub struct HttpIdentityProvider {
    http: Client,
    base_url: String,
    api_key: String,
    state_tx: watch::Sender<Option<Identity>>,
}

impl HttpIdentityProvider {
    pub fn new(base_url: String, api_key: String) -> Result<Self, ProviderError> {
        let http = Client::builder().build()?;
        let (state_tx, _) = watch::channel(None);

        Ok(Self {
            http,
            base_url,
            api_key,
            state_tx,
        })
    }

    /// Issues a credential call (`signInWithPassword` or `signUp`) and, on
    /// success, publishes the new identity to all subscribers.
    async fn credential_call(&self, endpoint: &str, email: &str, password: &str) -> Result<Identity, ProviderError> {
        let url = format!("{}/v1/accounts:{}?key={}", self.base_url, endpoint, self.api_key);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<RejectionBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(classify_rejection(status, message));
        }

        let payload = response.json::<CredentialResponse>().await?;
        let identity = Identity {
            uid: payload.local_id,
            email: payload.email,
        };

        self.state_tx.send_replace(Some(identity.clone()));

        Ok(identity)
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        self.credential_call("signInWithPassword", email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        self.credential_call("signUp", email, password).await
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        // The provider keeps no server-side session for this flow; signing
        // out is a state transition subscribers observe.
        self.state_tx.send_replace(None);
        Ok(())
    }

    fn subscribe(&self) -> IdentityWatch {
        self.state_tx.subscribe()
    }
}
