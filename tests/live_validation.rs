use std::sync::Arc;

use starredmcp::{
    config::Config,
    github::GitHubClient,
    resources::StarredAdapter,
    routing::{self, STARRED_URI},
};

fn live_adapter() -> StarredAdapter {
    let _ = dotenvy::dotenv();
    let config = Config::from_env().expect("GITHUB_TOKEN must be set for live validation");
    let client = GitHubClient::new(&config).expect("failed to build GitHub client");
    StarredAdapter::new(Arc::new(client))
}

#[tokio::test]
#[ignore = "Requires GITHUB_TOKEN"]
async fn live_authenticated_starred_list() {
    let adapter = live_adapter();
    let resources = adapter
        .list_all()
        .await
        .expect("failed to list starred repositories from GitHub");
    for resource in &resources {
        assert!(resource.uri.starts_with("github://starred/"));
        assert!(!resource.description.is_empty());
    }

    let route = routing::route(STARRED_URI).expect("static uri routes");
    let body = adapter.render(&route).await.expect("render list");
    assert!(body.trim_start().starts_with('['));
}

#[tokio::test]
#[ignore = "Requires GITHUB_TOKEN"]
async fn live_public_user_starred_list() {
    let adapter = live_adapter();
    let resources = adapter
        .list_for_user("octocat")
        .await
        .expect("failed to list octocat's starred repositories");
    for resource in &resources {
        assert!(resource.uri.starts_with("github://starred/users/octocat/"));
    }
}
