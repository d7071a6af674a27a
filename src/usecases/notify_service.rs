//! Notify service. Orchestrates the single-run relay workflow.
//!
//! Sequence: validate event kind, fetch repository metadata, load the group
//! directory, resolve the triggering event, expand tags, compose and publish.
//! Everything is sequential; each remote call is attempted exactly once.

use crate::domain::{
    compose_notification, expand_tags, DomainError, Event, EventKind,
};
use crate::ports::{ForgeGateway, GroupSource};
use std::sync::Arc;
use tracing::{info, warn};

/// Identifiers supplied by the orchestrator for one run. All opaque strings;
/// only the event name is validated (against the kind whitelist).
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub repo: String,
    pub event_name: String,
    pub issue_number: String,
    pub pr_number: String,
    pub comment_id: String,
    pub metadata_path: String,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A notification comment was posted.
    Published,
    /// No group tag triggered; nothing to publish. Legitimate no-op.
    NothingToNotify,
}

/// Service wiring the relay workflow through the outbound ports.
pub struct NotifyService {
    forge: Arc<dyn ForgeGateway>,
    groups: Arc<dyn GroupSource>,
}

impl NotifyService {
    pub fn new(forge: Arc<dyn ForgeGateway>, groups: Arc<dyn GroupSource>) -> Self {
        Self { forge, groups }
    }

    pub async fn run(&self, req: &RunRequest) -> Result<RunOutcome, DomainError> {
        // Kind is validated before any remote call.
        let kind = EventKind::parse(&req.event_name)
            .ok_or_else(|| DomainError::UnsupportedEvent(req.event_name.clone()))?;

        let metadata = self
            .forge
            .fetch_metadata(&req.repo, &req.metadata_path)
            .await?;
        let directory = self.groups.load_groups().await?;
        let event = self.resolve_event(kind, req).await?;

        let expansion = expand_tags(&event.body, &metadata, &directory, &event.author);
        for group in &expansion.notified_groups {
            info!(group = %group, "handling notified group");
        }
        for group in &expansion.unknown_groups {
            warn!(group = %group, "unrecognized group");
        }

        if !expansion.has_mentions() {
            info!("no group tags triggered; nothing to publish");
            return Ok(RunOutcome::NothingToNotify);
        }

        let notification =
            compose_notification(&expansion.body, &event.author, &expansion.mention_text());
        let number = if kind.is_issue_scoped() {
            &req.issue_number
        } else {
            &req.pr_number
        };

        info!(number = %number, "posting notification");
        self.forge
            .post_comment(&req.repo, number, &notification)
            .await?;
        Ok(RunOutcome::Published)
    }

    async fn resolve_event(
        &self,
        kind: EventKind,
        req: &RunRequest,
    ) -> Result<Event, DomainError> {
        match kind {
            EventKind::Issues => self.forge.get_issue(&req.repo, &req.issue_number).await,
            EventKind::IssueComment => {
                self.forge
                    .get_issue_comment(&req.repo, &req.comment_id)
                    .await
            }
            EventKind::PullRequestTarget | EventKind::PullRequestReview => {
                self.forge.get_pull_request(&req.repo, &req.pr_number).await
            }
        }
    }
}
