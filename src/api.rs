//! HTTP mirror of the starred resources.
//!
//! A compact Axum router serving the same JSON bodies the MCP front-end returns:
//!
//! - `GET /starred` – Repositories starred by the token owner.
//! - `GET /starred/users/:username` – Repositories starred by `username`.
//! - `GET /starred/users/:username/:owner/:repo` – One repository from `username`'s stars.
//! - `GET /starred/:owner/:repo` – One repository from the token owner's stars.
//! - `GET /health` – Liveness probe.
//!
//! The literal `users` routes take priority over `/:owner/:repo`, matching MCP dispatch.

use crate::resources::{APPLICATION_JSON, ResourceError, StarredAdapter};
use crate::routing::StarredRoute;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;

/// Build the HTTP router exposing the starred resources.
pub fn create_router(adapter: Arc<StarredAdapter>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/starred", get(list_starred))
        .route("/starred/users/:username", get(list_user_starred))
        .route(
            "/starred/users/:username/:owner/:repo",
            get(get_user_starred_repo),
        )
        .route("/starred/:owner/:repo", get(get_starred_repo))
        .with_state(adapter)
}

/// Response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn list_starred(State(adapter): State<Arc<StarredAdapter>>) -> Result<Response, AppError> {
    render(&adapter, StarredRoute::GlobalList).await
}

async fn list_user_starred(
    State(adapter): State<Arc<StarredAdapter>>,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    render(&adapter, StarredRoute::UserList(username)).await
}

async fn get_starred_repo(
    State(adapter): State<Arc<StarredAdapter>>,
    Path((owner, repo)): Path<(String, String)>,
) -> Result<Response, AppError> {
    render(&adapter, StarredRoute::SingleRepo(format!("{owner}/{repo}"))).await
}

async fn get_user_starred_repo(
    State(adapter): State<Arc<StarredAdapter>>,
    Path((username, owner, repo)): Path<(String, String, String)>,
) -> Result<Response, AppError> {
    let route = StarredRoute::UserRepo {
        username,
        full_name: format!("{owner}/{repo}"),
    };
    render(&adapter, route).await
}

async fn render(adapter: &StarredAdapter, route: StarredRoute) -> Result<Response, AppError> {
    let body = adapter.render(&route).await?;
    Ok(([(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response())
}

struct AppError(ResourceError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ResourceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ResourceError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ResourceError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(status = %status, error = %self.0, "HTTP request failed");
        (status, self.0.to_string()).into_response()
    }
}

impl From<ResourceError> for AppError {
    fn from(inner: ResourceError) -> Self {
        Self(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::create_router;
    use crate::github::{FetchError, GitHubError, StarredQuery, StarredRepository, StarredSource};
    use crate::resources::StarredAdapter;
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubSource {
        repos: Vec<StarredRepository>,
        fail: bool,
    }

    #[async_trait]
    impl StarredSource for StubSource {
        async fn fetch_starred(
            &self,
            username: Option<&str>,
        ) -> Result<Vec<StarredRepository>, FetchError> {
            if self.fail {
                return Err(FetchError {
                    query: StarredQuery::from_username(username),
                    source: GitHubError::InvalidUrl("offline".into()),
                });
            }
            Ok(self.repos.clone())
        }
    }

    fn router(repos: Vec<StarredRepository>, fail: bool) -> axum::Router {
        let adapter = StarredAdapter::new(Arc::new(StubSource { repos, fail }));
        create_router(Arc::new(adapter))
    }

    fn repo(full_name: &str) -> StarredRepository {
        StarredRepository {
            full_name: full_name.into(),
            ..StarredRepository::default()
        }
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
    }

    #[tokio::test]
    async fn users_path_resolves_to_user_list() {
        let (status, body) = get(
            router(vec![repo("owner/test-repo")], false),
            "/starred/users/timduly4",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).expect("json");
        assert_eq!(value[0]["contents"]["starred_by"], "timduly4");
        assert_eq!(
            value[0]["uri"],
            "github://starred/users/timduly4/owner/test-repo"
        );
    }

    #[tokio::test]
    async fn owner_repo_path_returns_single_object() {
        let (status, body) = get(
            router(vec![repo("facebook/react")], false),
            "/starred/facebook/react",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).expect("json");
        assert_eq!(value["name"], "facebook/react");
    }

    #[tokio::test]
    async fn missing_repo_is_not_found() {
        let (status, body) = get(router(Vec::new(), false), "/starred/facebook/react").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("facebook/react"));
    }

    #[tokio::test]
    async fn upstream_failure_is_bad_gateway() {
        let (status, _) = get(router(Vec::new(), true), "/starred").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn empty_list_is_an_empty_array() {
        let (status, body) = get(router(Vec::new(), false), "/starred").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get(router(Vec::new(), false), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"ok\""));
    }
}
