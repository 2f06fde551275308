//! Addressing for the `github://starred` resource namespace.
//!
//! Every inbound URI is classified into a [`StarredRoute`] before any handler runs. The
//! literal `users` forms are tested before the generic `{owner}/{repo}` form, and the
//! generic form refuses a leading `users` segment, so `github://starred/users/octocat`
//! can never be read as the repository `users/octocat`.

use thiserror::Error;

/// Static resource listing the token owner's stars.
pub const STARRED_URI: &str = "github://starred";
/// Prefix shared by every addressable starred resource.
pub const STARRED_PREFIX: &str = "github://starred/";
/// Prefix of user-scoped resources.
pub const USER_STARRED_PREFIX: &str = "github://starred/users/";

/// Template for a single starred repository.
pub const OWNER_REPO_TEMPLATE: &str = "github://starred/{owner}/{repo}";
/// Template for another user's starred list.
pub const USER_LIST_TEMPLATE: &str = "github://starred/users/{username}";
/// Template for a single repository within another user's starred list.
pub const USER_REPO_TEMPLATE: &str = "github://starred/users/{username}/{owner}/{repo}";

const USERS_SEGMENT: &str = "users";

/// Resolved target of a resource URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarredRoute {
    /// `github://starred`
    GlobalList,
    /// `github://starred/users/{username}`
    UserList(String),
    /// `github://starred/users/{username}/{owner}/{repo}`
    UserRepo {
        /// User whose stars are searched.
        username: String,
        /// `owner/repo` to look up.
        full_name: String,
    },
    /// `github://starred/{owner}/{repo}`
    SingleRepo(String),
}

/// Errors raised while classifying a resource URI.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// URI does not match any registered resource or template.
    #[error("Unknown resource URI: {0}")]
    Malformed(String),
}

/// Remainder of `uri` after `github://starred/`, verbatim.
///
/// Returns `None` when the prefix is missing or nothing follows it. The remainder is not
/// validated; a malformed value simply fails the later lookup.
pub fn parse_owner_repo(uri: &str) -> Option<&str> {
    uri.strip_prefix(STARRED_PREFIX)
        .filter(|rest| !rest.is_empty())
}

/// Remainder of `uri` after `github://starred/users/`, verbatim.
///
/// Returns `None` when the prefix is missing or nothing follows it.
pub fn parse_username(uri: &str) -> Option<&str> {
    uri.strip_prefix(USER_STARRED_PREFIX)
        .filter(|rest| !rest.is_empty())
}

/// Classify `uri`, most specific shape first; the first match wins.
pub fn route(uri: &str) -> Result<StarredRoute, RouteError> {
    if uri == STARRED_URI {
        return Ok(StarredRoute::GlobalList);
    }

    if let Some(rest) = parse_username(uri) {
        let segments: Vec<&str> = rest.split('/').collect();
        return match segments.as_slice() {
            [username] => Ok(StarredRoute::UserList((*username).to_string())),
            [username, owner, repo]
                if !username.is_empty() && !owner.is_empty() && !repo.is_empty() =>
            {
                Ok(StarredRoute::UserRepo {
                    username: (*username).to_string(),
                    full_name: format!("{owner}/{repo}"),
                })
            }
            _ => Err(RouteError::Malformed(uri.to_string())),
        };
    }

    match parse_owner_repo(uri) {
        Some(full_name) if !is_users_segment(full_name) => {
            Ok(StarredRoute::SingleRepo(full_name.to_string()))
        }
        _ => Err(RouteError::Malformed(uri.to_string())),
    }
}

fn is_users_segment(remainder: &str) -> bool {
    remainder.split('/').next() == Some(USERS_SEGMENT)
}
