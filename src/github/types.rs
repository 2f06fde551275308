//! Shared types used by the GitHub client and pager.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors returned while talking to the GitHub REST API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Base URL failed to parse or could not carry a path.
    #[error("Invalid GitHub API URL: {0}")]
    InvalidUrl(String),
    /// HTTP layer failed before a response arrived, or the body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// GitHub responded with a non-success status code.
    #[error("Unexpected GitHub response ({status}): {body}")]
    UnexpectedStatus {
        /// HTTP status returned by GitHub.
        status: StatusCode,
        /// Body payload associated with the failing response.
        body: String,
    },
}

/// Which starred list a fetch targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarredQuery {
    /// The user owning the access token.
    Authenticated,
    /// A named GitHub user.
    User(String),
}

impl StarredQuery {
    /// Build a query from an optional username; `None` targets the token owner.
    pub fn from_username(username: Option<&str>) -> Self {
        match username {
            Some(name) => Self::User(name.to_string()),
            None => Self::Authenticated,
        }
    }

    /// Username for user-scoped queries.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated => None,
            Self::User(name) => Some(name),
        }
    }
}

impl fmt::Display for StarredQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated => f.write_str("for the authenticated user"),
            Self::User(name) => write!(f, "for user {name}"),
        }
    }
}

/// A failed starred-list fetch, tagged with the query that failed.
///
/// Partial results are never returned alongside this error.
#[derive(Debug, Error)]
#[error("failed to fetch starred repos {query}: {source}")]
pub struct FetchError {
    /// Query that was being walked when the failure happened.
    pub query: StarredQuery,
    /// Underlying transport or status failure.
    #[source]
    pub source: GitHubError,
}

/// Normalized view of a starred repository.
///
/// Every field is populated; absent upstream values become empty strings or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StarredRepository {
    /// Repository name without the owner.
    pub name: String,
    /// `owner/name`, unique per repository.
    pub full_name: String,
    /// Login of the owning account.
    pub owner: String,
    /// Free-form description; may be empty.
    pub description: String,
    /// Canonical API URL.
    pub url: String,
    /// Browser URL.
    pub html_url: String,
    /// Primary language; may be empty.
    pub language: String,
    /// Stargazer count.
    pub stars: u64,
    /// Fork count.
    pub forks: u64,
    /// Last-updated timestamp as reported by GitHub.
    pub updated_at: String,
}

/// One element of the `application/vnd.github.star+json` list payload.
#[derive(Debug, Deserialize)]
pub(crate) struct RawStarred {
    pub(crate) repo: Option<RawRepository>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRepository {
    pub(crate) name: Option<String>,
    pub(crate) full_name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) html_url: Option<String>,
    pub(crate) language: Option<String>,
    pub(crate) stargazers_count: Option<u64>,
    pub(crate) forks_count: Option<u64>,
    pub(crate) updated_at: Option<String>,
    pub(crate) owner: Option<RawOwner>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawOwner {
    pub(crate) login: Option<String>,
}

impl From<RawRepository> for StarredRepository {
    fn from(raw: RawRepository) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            full_name: raw.full_name.unwrap_or_default(),
            owner: raw.owner.and_then(|owner| owner.login).unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            html_url: raw.html_url.unwrap_or_default(),
            language: raw.language.unwrap_or_default(),
            stars: raw.stargazers_count.unwrap_or_default(),
            forks: raw.forks_count.unwrap_or_default(),
            updated_at: raw.updated_at.unwrap_or_default(),
        }
    }
}
