//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application calls into infrastructure. The single
//! inbound entry point is the process invocation itself.

pub mod outbound;

pub use outbound::{ForgeGateway, GroupSource};
