use crate::{
    github::StarredRepository,
    resources::types::{APPLICATION_JSON, McpResource, RepositoryContents},
    routing::{STARRED_PREFIX, USER_STARRED_PREFIX},
};

/// Shape a repository from the token owner's stars.
pub(crate) fn repo_to_resource(repo: StarredRepository) -> McpResource {
    let uri = format!("{STARRED_PREFIX}{}", repo.full_name);
    let description = if repo.description.is_empty() {
        format!("Starred repository: {}", repo.full_name)
    } else {
        repo.description.clone()
    };

    McpResource {
        uri,
        name: repo.full_name.clone(),
        description,
        mime_type: APPLICATION_JSON.to_string(),
        contents: RepositoryContents {
            repository: repo,
            starred_by: None,
        },
    }
}

/// Shape a repository from `username`'s stars.
pub(crate) fn repo_to_user_resource(repo: StarredRepository, username: &str) -> McpResource {
    let uri = format!("{USER_STARRED_PREFIX}{username}/{}", repo.full_name);
    let description = if repo.description.is_empty() {
        format!("Repository {} starred by {username}", repo.full_name)
    } else {
        repo.description.clone()
    };

    McpResource {
        uri,
        name: repo.full_name.clone(),
        description,
        mime_type: APPLICATION_JSON.to_string(),
        contents: RepositoryContents {
            repository: repo,
            starred_by: Some(username.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repo() -> StarredRepository {
        StarredRepository {
            name: "test-repo".into(),
            full_name: "owner/test-repo".into(),
            owner: "owner".into(),
            description: "A test repository".into(),
            url: "https://api.github.com/repos/owner/test-repo".into(),
            html_url: "https://github.com/owner/test-repo".into(),
            language: "Rust".into(),
            stars: 42,
            forks: 10,
            updated_at: "2024-01-01".into(),
        }
    }

    fn bare_repo() -> StarredRepository {
        StarredRepository {
            name: "test-repo".into(),
            full_name: "owner/test-repo".into(),
            ..StarredRepository::default()
        }
    }

    #[test]
    fn global_resource_uses_starred_uri() {
        let resource = repo_to_resource(sample_repo());
        assert_eq!(resource.uri, "github://starred/owner/test-repo");
        assert_eq!(resource.name, "owner/test-repo");
        assert_eq!(resource.description, "A test repository");
        assert_eq!(resource.mime_type, "application/json");
        assert_eq!(resource.contents.repository.stars, 42);
        assert!(resource.contents.starred_by.is_none());
    }

    #[test]
    fn global_description_falls_back() {
        let resource = repo_to_resource(bare_repo());
        assert_eq!(resource.description, "Starred repository: owner/test-repo");
        assert_eq!(resource.contents.repository.description, "");
    }

    #[test]
    fn user_resource_embeds_username() {
        let resource = repo_to_user_resource(sample_repo(), "testuser");
        assert_eq!(resource.uri, "github://starred/users/testuser/owner/test-repo");
        assert_eq!(resource.name, "owner/test-repo");
        assert_eq!(resource.mime_type, "application/json");
        assert_eq!(resource.contents.starred_by.as_deref(), Some("testuser"));
        assert_eq!(resource.contents.repository.name, "test-repo");
    }

    #[test]
    fn user_description_falls_back() {
        let resource = repo_to_user_resource(bare_repo(), "testuser");
        assert_eq!(
            resource.description,
            "Repository owner/test-repo starred by testuser"
        );
    }

    #[test]
    fn contents_serialize_as_a_flat_map() {
        let value = serde_json::to_value(repo_to_user_resource(sample_repo(), "testuser"))
            .expect("json value");
        assert_eq!(value["mimeType"], "application/json");
        let contents = &value["contents"];
        for key in [
            "name",
            "full_name",
            "owner",
            "description",
            "url",
            "html_url",
            "language",
            "stars",
            "forks",
            "updated_at",
            "starred_by",
        ] {
            assert!(contents.get(key).is_some(), "missing {key}");
        }
        assert_eq!(contents["stars"], 42);
        assert_eq!(contents["starred_by"], "testuser");
    }

    #[test]
    fn global_contents_omit_starred_by() {
        let value = serde_json::to_value(repo_to_resource(sample_repo())).expect("json value");
        assert!(value["contents"].get("starred_by").is_none());
    }
}
