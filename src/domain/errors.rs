//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Every variant is fatal
//! for the run except where the use case explicitly recovers; an
//! unrecognized group is not an error at all, only a logged warning.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("repository metadata unavailable: {0}")]
    MetadataUnavailable(String),

    #[error("unhandled event kind \"{0}\"")]
    UnsupportedEvent(String),

    #[error("no event record found: {0}")]
    EventNotFound(String),

    #[error("group source error: {0}")]
    GroupSource(String),

    #[error("forge gateway error: {0}")]
    Forge(String),

    #[error("publish failed: {0}")]
    Publish(String),
}
