//! Notification composition. Quoted excerpt plus mention list, no I/O.

/// Longest excerpt of the original body quoted in the notification,
/// in characters.
pub const HEADER_MAX_CHARS: usize = 500;

/// Quote the leading excerpt of `body`: truncate to [`HEADER_MAX_CHARS`]
/// characters (appending `...` when cut) and prefix every line with `>`.
/// Line boundaries are preserved exactly.
pub fn quote_excerpt(body: &str) -> String {
    let header = if body.chars().count() <= HEADER_MAX_CHARS {
        body.to_string()
    } else {
        let mut truncated: String = body.chars().take(HEADER_MAX_CHARS).collect();
        truncated.push_str("...");
        truncated
    };
    format!(">{}", header).replace('\n', "\n>")
}

/// Build the final notification text.
///
/// The caller must skip composition (and publication) entirely when the
/// mention text is empty; that is the legitimate no-op outcome, not an error.
pub fn compose_notification(body: &str, author: &str, mention_text: &str) -> String {
    format!(
        "{}\n\n@{} wanted to notify the following collaborators:\n\n{}",
        quote_excerpt(body),
        author,
        mention_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_quoted_verbatim() {
        assert_eq!(quote_excerpt("hello"), ">hello");
    }

    #[test]
    fn test_every_line_quoted_line_count_preserved() {
        let body = "one\ntwo\n\nfour";
        let quoted = quote_excerpt(body);
        assert_eq!(quoted, ">one\n>two\n>\n>four");
        assert_eq!(quoted.lines().count(), body.lines().count());
        assert!(quoted.lines().all(|l| l.starts_with('>')));
        assert!(quoted.lines().all(|l| !l.starts_with(">>")));
    }

    #[test]
    fn test_body_at_limit_not_truncated() {
        let body = "a".repeat(HEADER_MAX_CHARS);
        let quoted = quote_excerpt(&body);
        assert_eq!(quoted, format!(">{}", body));
        assert!(!quoted.ends_with("..."));
    }

    #[test]
    fn test_long_body_truncated_with_ellipsis() {
        let body = "a".repeat(HEADER_MAX_CHARS + 50);
        let quoted = quote_excerpt(&body);
        // ">" + 500 chars + "..."
        assert_eq!(quoted.chars().count(), 1 + HEADER_MAX_CHARS + 3);
        assert!(quoted.ends_with("..."));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        // Multi-byte characters must not split; count is in chars.
        let body = "é".repeat(HEADER_MAX_CHARS + 1);
        let quoted = quote_excerpt(&body);
        assert!(quoted.ends_with("..."));
        assert_eq!(quoted.chars().count(), 1 + HEADER_MAX_CHARS + 3);
    }

    #[test]
    fn test_compose_notification_layout() {
        let text = compose_notification("please check reviewers", "carol", "@alice @bob ");
        assert_eq!(
            text,
            ">please check reviewers\n\n@carol wanted to notify the following collaborators:\n\n@alice @bob "
        );
    }

    #[test]
    fn test_compose_multiline_body() {
        let text = compose_notification("first\nsecond", "dave", "@erin ");
        assert_eq!(
            text,
            ">first\n>second\n\n@dave wanted to notify the following collaborators:\n\n@erin "
        );
    }
}
