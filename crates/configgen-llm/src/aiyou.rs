//! AI.YOU Client Implementation
//!
//! Streaming chat completions against the AI.YOU API.
//!
//! # Features
//!
//! - Email/password login with a cached bearer token
//! - Re-login when the cached token has expired
//! - Server-sent event streaming of completion chunks
//!
//! Requests are never retried: any failure is reported to the caller.
//!
//! # Examples
//!
//! ```no_run
//! use configgen_llm::{AiYouClient, AiYouConfig};
//!
//! let config = AiYouConfig::new("ops@example.com", "secret");
//! let client = AiYouClient::new(config).unwrap();
//! ```

use crate::protocol::{ChatCompletionRequest, LoginRequest, LoginResponse};
use crate::{sse, ChunkStream, CompletionClient, LlmError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Default AI.YOU API endpoint
pub const DEFAULT_BASE_URL: &str = "https://ai.dragonflygroup.fr";

/// Default timeout for establishing a connection (30 seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

const LOGIN_PATH: &str = "/api/login";
const CHAT_COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

/// Connection settings for [`AiYouClient`]
#[derive(Clone)]
pub struct AiYouConfig {
    /// API base URL, without trailing path
    pub base_url: String,

    /// Account email
    pub email: String,

    /// Account password
    pub password: String,

    /// Timeout for establishing the TCP/TLS connection
    pub connect_timeout: Duration,
}

impl AiYouConfig {
    /// Create a config for the default endpoint
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            email: email.into(),
            password: password.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Use a different API endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the connect timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LlmError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(LlmError::Config("email and password are required".to_string()));
        }
        if self.base_url.is_empty() {
            return Err(LlmError::Config("base_url must not be empty".to_string()));
        }
        Ok(())
    }
}

// Keeps the password out of debug logs.
impl fmt::Debug for AiYouConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiYouConfig")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// An authenticated session
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token
    pub token: String,

    /// When the token stops being accepted, if the service said so
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the token is no longer valid at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| expiry <= now)
    }
}

/// AI.YOU API client
///
/// Logs in lazily on the first request and reuses the token afterwards.
pub struct AiYouClient {
    config: AiYouConfig,
    client: reqwest::Client,
    session: Mutex<Option<Session>>,
}

impl AiYouClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] if credentials are missing or the HTTP
    /// client cannot be built.
    pub fn new(config: AiYouConfig) -> Result<Self, LlmError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            client,
            session: Mutex::new(None),
        })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Log in with the configured credentials
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The service cannot be reached
    /// - The credentials are rejected
    /// - The response has no usable token
    pub async fn login(&self) -> Result<Session, LlmError> {
        let url = self.endpoint(LOGIN_PATH);
        debug!("Logging in to {} as {}", url, self.config.email);

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest {
                email: &self.config.email,
                password: &self.config.password,
            })
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Login request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Authentication(format!(
                "Login failed with HTTP {}: {}",
                status, error_text
            )));
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse login response: {}", e)))?;

        if login.token.is_empty() {
            return Err(LlmError::Authentication("Login returned an empty token".to_string()));
        }

        info!("Authenticated with AI.YOU");
        Ok(Session {
            token: login.token,
            expires_at: login.expires_at,
        })
    }

    /// Return a valid token, logging in if needed
    async fn bearer_token(&self) -> Result<String, LlmError> {
        let mut session = self.session.lock().await;

        match session.as_ref() {
            Some(current) if !current.is_expired(Utc::now()) => return Ok(current.token.clone()),
            Some(_) => debug!("Session expired, logging in again"),
            None => {}
        }

        let fresh = self.login().await?;
        let token = fresh.token.clone();
        *session = Some(fresh);
        Ok(token)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl CompletionClient for AiYouClient {
    async fn stream_chat(&self, request: ChatCompletionRequest) -> Result<ChunkStream, LlmError> {
        let token = self.bearer_token().await?;
        let url = self.endpoint(CHAT_COMPLETIONS_PATH);

        debug!(
            "Opening completion stream at {} (temperature {}, top_p {})",
            url, request.temperature, request.top_p
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(ACCEPT, "text/event-stream")
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    LlmError::Authentication(format!("HTTP {}: {}", status, error_text))
                }
                StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
                _ => LlmError::Communication(format!("HTTP {}: {}", status, error_text)),
            });
        }

        Ok(sse::chunk_stream(response.bytes_stream()))
    }
}
