//! Group-tag expansion. Pure text scanning, no I/O.
//!
//! A tag is `$<name>` or `${<name>}` where `<name>` is a metadata entry of
//! type `"group"`. Scanning runs in three passes: collect every triggered
//! tag, substitute both surface forms with the bare name, then resolve
//! members. Substituting before resolving strips the sigil from the quoted
//! excerpt and keeps the tag from re-triggering downstream.

use crate::domain::{GroupDirectory, MetadataEntry};

/// Result of scanning one event body.
#[derive(Debug, Clone, Default)]
pub struct Expansion {
    /// Body with every triggered tag replaced by its bare group name.
    pub body: String,
    /// Members to mention, author excluded. A member belonging to several
    /// triggered groups appears once per group (no cross-group dedup).
    pub mentions: Vec<String>,
    /// Triggered groups found in the directory, in metadata order.
    pub notified_groups: Vec<String>,
    /// Triggered groups missing from the directory. Warned about, skipped.
    pub unknown_groups: Vec<String>,
}

impl Expansion {
    pub fn has_mentions(&self) -> bool {
        !self.mentions.is_empty()
    }

    /// Mention text as posted: space-terminated `@member` tokens.
    pub fn mention_text(&self) -> String {
        self.mentions
            .iter()
            .map(|m| format!("@{} ", m))
            .collect()
    }
}

/// Scan `body` for group tags and expand them against the directory.
///
/// Metadata entries are visited in stored order; member lists in theirs.
/// Tag matching is plain case-sensitive substring containment. The `author`
/// is excluded from the mention list case-insensitively.
pub fn expand_tags(
    body: &str,
    metadata: &[MetadataEntry],
    groups: &GroupDirectory,
    author: &str,
) -> Expansion {
    // Pass 1: collect triggered group names in metadata order.
    let mut triggered = Vec::new();
    for entry in metadata {
        if !entry.is_group() {
            continue;
        }
        let plain = format!("${}", entry.name);
        let braced = format!("${{{}}}", entry.name);
        if body.contains(&plain) || body.contains(&braced) {
            triggered.push(entry.name.clone());
        }
    }

    // Pass 2: strip the sigils.
    let mut body = body.to_string();
    for name in &triggered {
        body = body.replace(&format!("${{{}}}", name), name);
        body = body.replace(&format!("${}", name), name);
    }

    // Pass 3: resolve members, leaving the author out.
    let mut expansion = Expansion {
        body,
        ..Expansion::default()
    };
    for name in triggered {
        match groups.members(&name) {
            Some(members) => {
                for member in members {
                    if !member.eq_ignore_ascii_case(author) {
                        expansion.mentions.push(member.clone());
                    }
                }
                expansion.notified_groups.push(name);
            }
            None => expansion.unknown_groups.push(name),
        }
    }
    expansion
}
