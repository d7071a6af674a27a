//! GitHub REST adapter.

pub mod client;

pub use client::GithubForge;
