//! mention-relay: group-tag notification relay with Hexagonal Architecture.
//!
//! One triggering issue/PR event in, at most one notification comment out.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
