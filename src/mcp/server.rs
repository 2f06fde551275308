//! MCP server bootstrap and request dispatch.

use std::sync::Arc;

use crate::{
    mcp::format::{json_resource_contents, resource_error, route_error},
    resources::{APPLICATION_JSON, StarredAdapter},
    routing::{self, OWNER_REPO_TEMPLATE, STARRED_URI, USER_LIST_TEMPLATE, USER_REPO_TEMPLATE},
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        AnnotateAble, ListResourceTemplatesResult, ListResourcesResult, RawResource,
        RawResourceTemplate, ReadResourceRequestParam, ReadResourceResult, Resource,
        ResourceTemplate, ServerCapabilities, ServerInfo,
    },
};

/// MCP server exposing starred repositories as read-only resources.
#[derive(Clone)]
pub struct StarredMcpServer {
    adapter: Arc<StarredAdapter>,
}

impl StarredMcpServer {
    /// Create a new MCP server backed by the supplied adapter.
    pub fn new(adapter: Arc<StarredAdapter>) -> Self {
        Self { adapter }
    }

    /// Resolve a resource URI and return its JSON contents.
    ///
    /// Unknown URIs fail with `invalid_params`, repositories missing from the starred list
    /// with `resource_not_found`, and upstream or encoding failures with `internal_error`.
    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        let route = routing::route(uri).map_err(|error| {
            tracing::warn!(uri, %error, "Rejected resource URI");
            route_error(error)
        })?;

        let text = self.adapter.render(&route).await.map_err(|error| {
            tracing::error!(uri, %error, "Failed to read starred resource");
            resource_error(uri, error)
        })?;

        Ok(ReadResourceResult {
            contents: vec![json_resource_contents(uri, text)],
        })
    }

    fn describe_resources(&self) -> Vec<Resource> {
        let mut starred = RawResource::new(STARRED_URI, "All Starred Repositories");
        starred.description =
            Some("List of all GitHub repositories starred by the authenticated user".into());
        starred.mime_type = Some(APPLICATION_JSON.into());

        vec![starred.no_annotation()]
    }

    /// Templates are listed most specific first, mirroring dispatch order.
    fn describe_resource_templates(&self) -> Vec<ResourceTemplate> {
        let user_repo = RawResourceTemplate {
            uri_template: USER_REPO_TEMPLATE.into(),
            name: "user-starred-repository".into(),
            title: Some("User Starred Repository Details".into()),
            description: Some(
                "Details of one repository starred by a specific GitHub user".into(),
            ),
            mime_type: Some(APPLICATION_JSON.into()),
        };

        let user_list = RawResourceTemplate {
            uri_template: USER_LIST_TEMPLATE.into(),
            name: "user-starred-repositories".into(),
            title: Some("User Starred Repositories".into()),
            description: Some("List of repositories starred by a specific GitHub user".into()),
            mime_type: Some(APPLICATION_JSON.into()),
        };

        let owner_repo = RawResourceTemplate {
            uri_template: OWNER_REPO_TEMPLATE.into(),
            name: "starred-repository".into(),
            title: Some("Starred Repository Details".into()),
            description: Some("Details of a specific starred repository".into()),
            mime_type: Some(APPLICATION_JSON.into()),
        };

        vec![
            user_repo.no_annotation(),
            user_list.no_annotation(),
            owner_repo.no_annotation(),
        ]
    }
}

impl ServerHandler for StarredMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = rmcp::model::Implementation::from_build_env();
        implementation.name = "github-starred".to_string();
        implementation.title = Some("GitHub Starred Repos MCP Server".to_string());
        implementation.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_resources().build(),
            server_info: implementation,
            instructions: Some(
                "Read `github://starred` for your starred repositories, `github://starred/users/{username}` for another user's, and `github://starred/{owner}/{repo}` for one repository. Data is fetched fresh from GitHub on every read.".into(),
            ),
            ..ServerInfo::default()
        }
    }

    fn list_resources(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        let resources = self.describe_resources();
        std::future::ready(Ok(ListResourcesResult::with_all_items(resources)))
    }

    fn list_resource_templates(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourceTemplatesResult, McpError>> + Send + '_
    {
        let templates = self.describe_resource_templates();
        std::future::ready(Ok(ListResourceTemplatesResult::with_all_items(templates)))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move { self.read(&request.uri).await }
    }
}
