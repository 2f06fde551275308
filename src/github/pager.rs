//! Streaming helpers for walking GitHub's page-numbered list endpoints.

use async_stream::try_stream;
use futures_core::Stream;
use reqwest::header::LINK;

use super::client::{GitHubClient, ensure_success};
use super::types::{GitHubError, RawStarred, StarredQuery, StarredRepository};

/// Items requested per page; GitHub's maximum.
pub const PAGE_SIZE: u32 = 100;

/// Stream every starred repository for `query`, following `rel="next"` links.
///
/// Items without a repository payload are skipped. The first error ends the stream.
pub fn stream_starred<'a>(
    client: &'a GitHubClient,
    query: &'a StarredQuery,
) -> impl Stream<Item = Result<StarredRepository, GitHubError>> + 'a {
    try_stream! {
        let url = client.starred_url(query)?;
        let mut page = Some(1_u32);

        while let Some(current) = page {
            tracing::debug!(%query, page = current, "Requesting starred page");
            let response = client
                .get(url.clone())
                .query(&[("per_page", PAGE_SIZE), ("page", current)])
                .send()
                .await?;
            let response = ensure_success(response).await.inspect_err(|error| {
                tracing::error!(%query, page = current, error = %error, "Starred page request failed");
            })?;

            page = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page)
                .filter(|next| *next > current);

            let items: Vec<RawStarred> = response.json().await?;
            for item in items {
                match item.repo {
                    Some(raw) => {
                        yield StarredRepository::from(raw);
                    }
                    None => {
                        tracing::debug!(%query, page = current, "Skipping starred item without repository");
                    }
                }
            }
        }
    }
}

/// Extract the `rel="next"` page number from a GitHub `Link` header.
///
/// Headers look like
/// `<https://api.github.com/user/starred?per_page=100&page=2>; rel="next", <...&page=5>; rel="last"`.
pub fn next_page(link_header: &str) -> Option<u32> {
    link_header.split(',').find_map(|part| {
        let mut url = None;
        let mut is_next = false;

        for segment in part.split(';').map(str::trim) {
            if let Some(inner) = segment
                .strip_prefix('<')
                .and_then(|rest| rest.strip_suffix('>'))
            {
                url = Some(inner);
            } else if let Some(rel) = segment.strip_prefix("rel=") {
                is_next = rel.trim_matches('"').split_whitespace().any(|r| r == "next");
            }
        }

        if is_next { url.and_then(page_param) } else { None }
    })
}

fn page_param(url: &str) -> Option<u32> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .find_map(|param| param.strip_prefix("page="))
        .and_then(|value| value.parse().ok())
}
