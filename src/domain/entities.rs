//! Domain entities. Pure data structures for the core business.
//!
//! No GitHub/IO types here — these are mapped from adapters.

use std::collections::HashMap;

/// Kind of the triggering forge event. Parsed from the orchestrator-supplied
/// event name (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Issues,
    IssueComment,
    PullRequestTarget,
    PullRequestReview,
}

impl EventKind {
    /// Parse an event name. Returns `None` for anything outside the whitelist.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("issues") {
            Some(Self::Issues)
        } else if raw.eq_ignore_ascii_case("issue_comment") {
            Some(Self::IssueComment)
        } else if raw.eq_ignore_ascii_case("pull_request_target") {
            Some(Self::PullRequestTarget)
        } else if raw.eq_ignore_ascii_case("pull_request_review") {
            Some(Self::PullRequestReview)
        } else {
            None
        }
    }

    /// Issue-scoped events are commented on by issue number, the rest by PR number.
    pub fn is_issue_scoped(&self) -> bool {
        matches!(self, Self::Issues | Self::IssueComment)
    }
}

/// One entry of the repository metadata file, in document order.
#[derive(Debug, Clone)]
pub struct MetadataEntry {
    pub name: String,
    /// The `type` property. Only `"group"` (case-insensitive) marks a tag key.
    pub entry_type: String,
}

impl MetadataEntry {
    pub fn is_group(&self) -> bool {
        self.entry_type.eq_ignore_ascii_case("group")
    }
}

/// The resolved triggering event: the text to scan and who wrote it.
#[derive(Debug, Clone)]
pub struct Event {
    pub body: String,
    pub author: String,
}

/// Merged group directory: group name -> ordered member list.
///
/// Built once per run by merging zero or more group-definition files;
/// later files overwrite earlier ones per key. Immutable afterwards.
#[derive(Debug, Default, Clone)]
pub struct GroupDirectory {
    groups: HashMap<String, Vec<String>>,
}

impl GroupDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one file's mapping into the directory (last writer wins per key).
    pub fn merge(&mut self, entries: HashMap<String, Vec<String>>) {
        self.groups.extend(entries);
    }

    /// Member list for a group, in its stored order.
    pub fn members(&self, name: &str) -> Option<&[String]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
