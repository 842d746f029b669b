//! Service plumbing shared by every Roster service: tracing setup, health
//! probes, request-id tagging and wire-format helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
