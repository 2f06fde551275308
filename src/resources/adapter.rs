//! Adapter turning starred repositories into MCP resources.

use std::sync::Arc;

use crate::{
    github::{StarredRepository, StarredSource},
    resources::{
        mappers::{repo_to_resource, repo_to_user_resource},
        types::{McpResource, ResourceError},
    },
    routing::StarredRoute,
};
use serde::Serialize;

/// Materializes starred repositories as resources, fetching fresh data on every call.
///
/// Holds nothing but a shared handle to the upstream source, so one instance can serve
/// concurrent requests without locking. Lookups re-fetch the full list and scan it.
#[derive(Clone)]
pub struct StarredAdapter {
    source: Arc<dyn StarredSource>,
}

impl StarredAdapter {
    /// Build an adapter over the given starred source.
    pub fn new(source: Arc<dyn StarredSource>) -> Self {
        Self { source }
    }

    /// Every repository starred by the token owner.
    pub async fn list_all(&self) -> Result<Vec<McpResource>, ResourceError> {
        let repos = self.source.fetch_starred(None).await?;
        Ok(repos.into_iter().map(repo_to_resource).collect())
    }

    /// Every repository starred by `username`, tagged with `starred_by`.
    pub async fn list_for_user(&self, username: &str) -> Result<Vec<McpResource>, ResourceError> {
        let repos = self.source.fetch_starred(Some(username)).await?;
        Ok(repos
            .into_iter()
            .map(|repo| repo_to_user_resource(repo, username))
            .collect())
    }

    /// The token owner's starred repository whose full name matches exactly.
    pub async fn get_by_full_name(&self, full_name: &str) -> Result<McpResource, ResourceError> {
        let repos = self.source.fetch_starred(None).await?;
        find_by_full_name(repos, full_name).map(repo_to_resource)
    }

    /// `username`'s starred repository whose full name matches exactly.
    pub async fn get_for_user(
        &self,
        username: &str,
        full_name: &str,
    ) -> Result<McpResource, ResourceError> {
        let repos = self.source.fetch_starred(Some(username)).await?;
        find_by_full_name(repos, full_name).map(|repo| repo_to_user_resource(repo, username))
    }

    /// Run the operation addressed by `route` and serialize its result.
    ///
    /// Lists render as JSON arrays, single lookups as one JSON object.
    pub async fn render(&self, route: &StarredRoute) -> Result<String, ResourceError> {
        tracing::info!(?route, "Resolving starred resource");
        match route {
            StarredRoute::GlobalList => {
                let resources = self.list_all().await?;
                tracing::info!(count = resources.len(), "Returning starred repositories");
                to_json(&resources)
            }
            StarredRoute::UserList(username) => {
                let resources = self.list_for_user(username).await?;
                tracing::info!(
                    username = %username,
                    count = resources.len(),
                    "Returning user starred repositories"
                );
                to_json(&resources)
            }
            StarredRoute::SingleRepo(full_name) => {
                let resource = self.get_by_full_name(full_name).await?;
                to_pretty_json(&resource)
            }
            StarredRoute::UserRepo {
                username,
                full_name,
            } => {
                let resource = self.get_for_user(username, full_name).await?;
                to_pretty_json(&resource)
            }
        }
    }
}

/// Serialize resources as indented JSON.
pub fn to_json(resources: &[McpResource]) -> Result<String, ResourceError> {
    to_pretty_json(resources)
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ResourceError> {
    serde_json::to_string_pretty(value).map_err(|error| {
        tracing::error!(%error, "Failed to serialize resources to JSON");
        ResourceError::Serialization(error)
    })
}

fn find_by_full_name(
    repos: Vec<StarredRepository>,
    full_name: &str,
) -> Result<StarredRepository, ResourceError> {
    repos
        .into_iter()
        .find(|repo| repo.full_name == full_name)
        .ok_or_else(|| ResourceError::NotFound {
            full_name: full_name.to_string(),
        })
}
