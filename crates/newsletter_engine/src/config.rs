use std::fmt;
use std::time::Duration;

/// Period between task status queries.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Placeholder sent for configuration values that were never supplied.
pub(crate) const UNDEFINED: &str = "undefined";

/// Backend address and admin credentials. Nothing here is validated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// `{base}/{path}`; a missing base becomes the literal `undefined`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.as_deref().unwrap_or(UNDEFINED);
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field(
                "password",
                &newsletter_logging::redact(self.password.as_deref()),
            )
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub api: ApiConfig,
    pub poll_interval: Duration,
}

impl EngineConfig {
    pub fn new(api: ApiConfig) -> Self {
        Self {
            api,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
