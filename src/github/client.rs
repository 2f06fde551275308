//! HTTP client wrapper for the GitHub starred-repositories endpoints.

use crate::config::Config;
use crate::github::{
    pager::stream_starred,
    types::{FetchError, GitHubError, StarredQuery, StarredRepository},
};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use reqwest::{Client, RequestBuilder, Response, Url, header};

const STAR_MEDIA_TYPE: &str = "application/vnd.github.star+json";
const API_VERSION: &str = "2022-11-28";

/// Source of starred repositories consumed by the resource adapter.
#[async_trait]
pub trait StarredSource: Send + Sync {
    /// Fetch the complete starred list, walking every page.
    ///
    /// `None` targets the token owner; `Some(username)` targets that user's public stars.
    async fn fetch_starred(
        &self,
        username: Option<&str>,
    ) -> Result<Vec<StarredRepository>, FetchError>;
}

/// Lightweight authenticated client for GitHub's REST API.
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
    token: String,
}

impl GitHubClient {
    /// Construct a client from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, GitHubError> {
        Self::with_base_url(&config.github_api_url, config.github_token.clone())
    }

    /// Construct a client against an explicit API base URL.
    pub fn with_base_url(base_url: &str, token: impl Into<String>) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .user_agent(concat!("starred-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = normalize_base_url(base_url).map_err(GitHubError::InvalidUrl)?;
        tracing::debug!(url = %base_url, "Initialized GitHub HTTP client");

        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    /// Fetch every starred repository for the token owner or a named user.
    pub async fn fetch_starred(
        &self,
        username: Option<&str>,
    ) -> Result<Vec<StarredRepository>, FetchError> {
        let query = StarredQuery::from_username(username);
        tracing::debug!(%query, "Fetching starred repositories");

        let repositories: Vec<StarredRepository> = stream_starred(self, &query)
            .try_collect()
            .await
            .map_err(|source| FetchError {
                query: query.clone(),
                source,
            })?;

        tracing::info!(%query, count = repositories.len(), "Fetched starred repositories");
        Ok(repositories)
    }

    /// Resolve the list endpoint for `query`, percent-encoding the username segment.
    pub(crate) fn starred_url(&self, query: &StarredQuery) -> Result<Url, GitHubError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                GitHubError::InvalidUrl(format!("{} cannot be a base URL", self.base_url))
            })?;
            segments.pop_if_empty();
            match query {
                StarredQuery::Authenticated => {
                    segments.extend(["user", "starred"]);
                }
                StarredQuery::User(name) => {
                    segments.extend(["users", name.as_str(), "starred"]);
                }
            }
        }
        Ok(url)
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, STAR_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", API_VERSION)
    }
}

#[async_trait]
impl StarredSource for GitHubClient {
    async fn fetch_starred(
        &self,
        username: Option<&str>,
    ) -> Result<Vec<StarredRepository>, FetchError> {
        GitHubClient::fetch_starred(self, username).await
    }
}

/// Pass successful responses through; turn anything else into [`GitHubError::UnexpectedStatus`].
pub(crate) async fn ensure_success(response: Response) -> Result<Response, GitHubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GitHubError::UnexpectedStatus { status, body })
}

fn normalize_base_url(url: &str) -> Result<Url, String> {
    let mut parsed = Url::parse(url).map_err(|err| err.to_string())?;
    let path = parsed.path().trim_end_matches('/').to_string();
    parsed.set_path(&path);
    Ok(parsed)
}
