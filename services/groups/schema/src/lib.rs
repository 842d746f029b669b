//! sea-orm entities for the groups service schema.

pub mod group_members;
pub mod groups;
pub mod profiles;
