//! Group membership roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role a profile holds inside a group.
///
/// Stored as free-form text. Only [`MemberRole::TEACHER`] is written by group
/// creation; other values may be written by other parts of the system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberRole(String);

impl MemberRole {
    /// Role assigned to the profile that creates a group.
    pub const TEACHER: &'static str = "teacher";

    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn teacher() -> Self {
        Self::new(Self::TEACHER)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
