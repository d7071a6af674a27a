//! Shared application plumbing.

pub mod config;
