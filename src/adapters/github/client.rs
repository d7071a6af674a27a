//! GitHub REST adapter. Implements ForgeGateway via the v3 API.
//!
//! Issues, issue comments, and pull requests all deserialize to the same
//! `body` + `user.login` shape, so one fetch helper serves all three.
//! Metadata files come through the contents API base64-encoded.

use crate::domain::{DomainError, Event, MetadataEntry};
use crate::ports::ForgeGateway;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

const USER_AGENT: &str = concat!("mention-relay/", env!("CARGO_PKG_VERSION"));

/// GitHub API adapter.
///
/// `api_url` is the REST root (e.g. "https://api.github.com"); `token` is a
/// personal access or installation token with repo scope.
pub struct GithubForge {
    client: Client,
    api_url: String,
    token: String,
}

impl GithubForge {
    pub fn new(api_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), path)
    }

    async fn get(&self, url: &str) -> Result<Response, DomainError> {
        debug!(url, "GET");
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| DomainError::Forge(format!("request failed: {}", e)))
    }

    /// Fetch one of the body-bearing records (issue, comment, PR).
    async fn fetch_event(&self, url: &str, what: &str) -> Result<Event, DomainError> {
        let response = self.get(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(DomainError::EventNotFound(what.to_string()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DomainError::Forge(format!(
                "API error {} fetching {}: {}",
                status,
                what,
                text.chars().take(200).collect::<String>()
            )));
        }
        let record: EventResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Forge(format!("failed to parse {}: {}", what, e)))?;
        Ok(Event {
            body: record.body.unwrap_or_default(),
            author: record.user.login,
        })
    }

    /// Decode a contents-API payload: base64 with transport line breaks.
    fn decode_content(raw: &str) -> Result<String, String> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = BASE64
            .decode(compact.as_bytes())
            .map_err(|e| format!("base64 decode failed: {}", e))?;
        String::from_utf8(bytes).map_err(|e| format!("metadata is not UTF-8: {}", e))
    }

    /// Parse the metadata YAML mapping, preserving document order.
    fn parse_metadata(yaml: &str) -> Result<Vec<MetadataEntry>, String> {
        let mapping: serde_yaml::Mapping =
            serde_yaml::from_str(yaml).map_err(|e| format!("invalid metadata YAML: {}", e))?;
        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let name = match key {
                serde_yaml::Value::String(s) => s,
                other => return Err(format!("non-string metadata key: {:?}", other)),
            };
            let entry_type = value
                .get("type")
                .and_then(serde_yaml::Value::as_str)
                .unwrap_or_default()
                .to_string();
            entries.push(MetadataEntry { name, entry_type });
        }
        Ok(entries)
    }
}

#[derive(Deserialize)]
struct ContentsResponse {
    content: String,
}

#[derive(Deserialize)]
struct EventResponse {
    body: Option<String>,
    user: UserResponse,
}

#[derive(Deserialize)]
struct UserResponse {
    login: String,
}

#[async_trait::async_trait]
impl ForgeGateway for GithubForge {
    async fn fetch_metadata(
        &self,
        repo: &str,
        path: &str,
    ) -> Result<Vec<MetadataEntry>, DomainError> {
        let url = self.url(&format!("repos/{}/contents/{}", repo, path));
        let response = self
            .get(&url)
            .await
            .map_err(|e| DomainError::MetadataUnavailable(e.to_string()))?;
        if !response.status().is_success() {
            return Err(DomainError::MetadataUnavailable(format!(
                "repository \"{}\" does not contain {} (HTTP {})",
                repo,
                path,
                response.status()
            )));
        }
        let contents: ContentsResponse = response.json().await.map_err(|e| {
            DomainError::MetadataUnavailable(format!("failed to parse contents response: {}", e))
        })?;
        let yaml =
            Self::decode_content(&contents.content).map_err(DomainError::MetadataUnavailable)?;
        Self::parse_metadata(&yaml).map_err(DomainError::MetadataUnavailable)
    }

    async fn get_issue(&self, repo: &str, number: &str) -> Result<Event, DomainError> {
        let url = self.url(&format!("repos/{}/issues/{}", repo, number));
        self.fetch_event(&url, &format!("issue #{}", number)).await
    }

    async fn get_issue_comment(
        &self,
        repo: &str,
        comment_id: &str,
    ) -> Result<Event, DomainError> {
        let url = self.url(&format!("repos/{}/issues/comments/{}", repo, comment_id));
        self.fetch_event(&url, &format!("comment {}", comment_id))
            .await
    }

    async fn get_pull_request(&self, repo: &str, number: &str) -> Result<Event, DomainError> {
        let url = self.url(&format!("repos/{}/pulls/{}", repo, number));
        self.fetch_event(&url, &format!("pull request #{}", number))
            .await
    }

    async fn post_comment(
        &self,
        repo: &str,
        number: &str,
        body: &str,
    ) -> Result<(), DomainError> {
        let url = self.url(&format!("repos/{}/issues/{}/comments", repo, number));
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
            .json(&serde_json::json!({ "body": body }))
            .send()
            .await
            .map_err(|e| DomainError::Publish(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_else(|_| "unknown".to_string());
            return Err(DomainError::Publish(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_content_plain() {
        // "reviewers:\n  type: group\n"
        let encoded = "cmV2aWV3ZXJzOgogIHR5cGU6IGdyb3VwCg==";
        let decoded = GithubForge::decode_content(encoded).unwrap();
        assert_eq!(decoded, "reviewers:\n  type: group\n");
    }

    #[test]
    fn test_decode_content_with_transport_line_breaks() {
        let encoded = "cmV2aWV3ZXJzOgog\nIHR5cGU6IGdyb3Vw\nCg==\n";
        let decoded = GithubForge::decode_content(encoded).unwrap();
        assert_eq!(decoded, "reviewers:\n  type: group\n");
    }

    #[test]
    fn test_decode_content_rejects_garbage() {
        assert!(GithubForge::decode_content("!!not base64!!").is_err());
    }

    #[test]
    fn test_parse_metadata_preserves_order() {
        let yaml = "zeta:\n  type: group\nalpha:\n  type: user\nmid:\n  type: GROUP\n";
        let entries = GithubForge::parse_metadata(yaml).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert!(entries[0].is_group());
        assert!(!entries[1].is_group());
        // type matching is case-insensitive
        assert!(entries[2].is_group());
    }

    #[test]
    fn test_parse_metadata_missing_type_is_not_group() {
        let yaml = "someone:\n  email: someone@example.org\n";
        let entries = GithubForge::parse_metadata(yaml).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_group());
    }

    #[test]
    fn test_parse_metadata_rejects_non_mapping() {
        assert!(GithubForge::parse_metadata("- just\n- a\n- list\n").is_err());
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let forge = GithubForge::new("https://api.github.com/".to_string(), String::new());
        assert_eq!(
            forge.url("repos/org/repo/issues/1"),
            "https://api.github.com/repos/org/repo/issues/1"
        );
    }
}
