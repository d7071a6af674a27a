//! Infrastructure adapters. Implement outbound ports.
//!
//! GitHub REST, local filesystem. Map errors to DomainError.

pub mod github;
pub mod persistence;
