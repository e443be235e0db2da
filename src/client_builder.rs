// client_builder.rs
//! Builder pattern for constructing SkillSync clients with better ergonomics and validation

use std::sync::Arc;
use std::time::Duration;

use crate::client_http::SkillSyncClient;
use crate::endpoints;
use crate::error::SkillSyncError;
use crate::session::Session;

type Result<T> = std::result::Result<T, SkillSyncError>;

/// Builder for creating SkillSync HTTP clients
///
/// # Examples
///
/// ```no_run
/// use skillsync_sdk::ClientBuilder;
///
/// # fn main() -> Result<(), skillsync_sdk::SkillSyncError> {
/// let client = ClientBuilder::new()
///     .base_url("https://api.skillsync.dev")
///     .timeout_secs(30)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    token: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-configured from the `SKILLSYNC_BASE_URL` environment
    /// variable (falls back to the default origin when unset).
    pub fn from_env() -> Self {
        Self { base_url: Some(endpoints::base_url_from_env()), ..Self::default() }
    }

    /// Set the API base origin
    ///
    /// Default: `https://api.skillsync.dev`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set request timeout in seconds
    ///
    /// Default: 60 seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Set request timeout
    ///
    /// Default: 60 seconds
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Pre-seed the session with an existing token (skips login)
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Validate the configuration before building
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base_url {
            url::Url::parse(url)
                .map_err(|e| SkillSyncError::ConfigurationError(format!("Invalid URL '{}': {}", url, e)))?;
        }
        Ok(())
    }

    /// Build the HTTP client
    pub fn build(self) -> Result<Arc<SkillSyncClient>> {
        self.validate()?;

        let session = match self.token {
            Some(token) => Arc::new(Session::with_token(token)),
            None => Arc::new(Session::new()),
        };

        SkillSyncClient::with_session(self.base_url, self.timeout, session)
    }
}
