use std::env;
use std::fmt;
use thiserror::Error;

/// Default GitHub REST API endpoint.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
/// Default port for the HTTP mirror.
pub const DEFAULT_SERVER_PORT: u16 = 8080;
/// Default bind host for the HTTP mirror.
pub const DEFAULT_SERVER_HOST: &str = "localhost";

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable was not provided.
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Runtime configuration for the starred-repositories server.
///
/// Loaded once at startup and handed to the components that need it; nothing reads the
/// environment after that.
#[derive(Clone)]
pub struct Config {
    /// Personal access token used to authenticate against GitHub.
    pub github_token: String,
    /// Base URL of the GitHub REST API.
    pub github_api_url: String,
    /// Port the HTTP mirror binds to.
    pub server_port: u16,
    /// Host the HTTP mirror binds to.
    pub server_host: String,
    /// Reserved OAuth client identifier.
    pub oauth_client_id: Option<String>,
    /// Reserved OAuth client secret.
    pub oauth_client_secret: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset for every variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            github_token: read("GITHUB_TOKEN")
                .ok_or_else(|| ConfigError::MissingVariable("GITHUB_TOKEN".to_string()))?,
            github_api_url: read("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            server_port: read("SERVER_PORT")
                .map(|value| {
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".into()))
                })
                .transpose()?
                .unwrap_or(DEFAULT_SERVER_PORT),
            server_host: read("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            oauth_client_id: read("OAUTH_CLIENT_ID"),
            oauth_client_secret: read("OAUTH_CLIENT_SECRET"),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &"<redacted>")
            .field("github_api_url", &self.github_api_url)
            .field("server_port", &self.server_port)
            .field("server_host", &self.server_host)
            .field("oauth_client_id", &self.oauth_client_id)
            .field(
                "oauth_client_secret",
                &self.oauth_client_secret.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Load configuration from `.env` and the process environment.
pub fn load() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    tracing::debug!(
        github_api_url = %config.github_api_url,
        server_host = %config.server_host,
        server_port = config.server_port,
        oauth_configured = config.oauth_client_id.is_some(),
        "Loaded configuration"
    );
    Ok(config)
}
