//! Application use cases. Orchestrate domain logic via ports.

pub mod notify_service;

pub use notify_service::{NotifyService, RunOutcome, RunRequest};
