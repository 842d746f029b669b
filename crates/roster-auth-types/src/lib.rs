//! Auth types shared across Roster services.
//!
//! Services sit behind the gateway, which authenticates the caller and forwards
//! the resulting identity as headers. This crate parses them.

pub mod identity;
