//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod compose;
pub mod entities;
pub mod errors;
pub mod expand;

pub use compose::{compose_notification, quote_excerpt, HEADER_MAX_CHARS};
pub use entities::{Event, EventKind, GroupDirectory, MetadataEntry};
pub use errors::DomainError;
pub use expand::{expand_tags, Expansion};
