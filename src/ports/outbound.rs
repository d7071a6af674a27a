//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Event, GroupDirectory, MetadataEntry};

/// Forge API gateway. Fetch repository metadata, resolve events,
/// publish comments. Every call is a single attempt, no retry.
#[async_trait::async_trait]
pub trait ForgeGateway: Send + Sync {
    /// Fetch and decode the repository metadata file at `path`.
    /// Entry order follows the document. Missing or undecodable file
    /// fails with `MetadataUnavailable`.
    async fn fetch_metadata(
        &self,
        repo: &str,
        path: &str,
    ) -> Result<Vec<MetadataEntry>, DomainError>;

    /// Fetch an issue by number.
    async fn get_issue(&self, repo: &str, number: &str) -> Result<Event, DomainError>;

    /// Fetch an issue comment by comment id.
    async fn get_issue_comment(&self, repo: &str, comment_id: &str)
        -> Result<Event, DomainError>;

    /// Fetch a pull request by number.
    async fn get_pull_request(&self, repo: &str, number: &str) -> Result<Event, DomainError>;

    /// Post `body` as a new comment on the given issue or PR number.
    async fn post_comment(&self, repo: &str, number: &str, body: &str)
        -> Result<(), DomainError>;
}

/// Group-definition source. Loads and merges the group directory.
#[async_trait::async_trait]
pub trait GroupSource: Send + Sync {
    /// Build the merged directory. Zero definition files is not an error;
    /// it yields an empty directory.
    async fn load_groups(&self) -> Result<GroupDirectory, DomainError>;
}
