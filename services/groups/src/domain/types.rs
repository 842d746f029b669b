use chrono::{DateTime, Utc};

use roster_domain::id::{GroupId, ProfileId, UserId};
use roster_domain::join_code::JoinCode;
use roster_domain::role::MemberRole;

/// Join code candidates drawn before the prober gives up.
pub const DEFAULT_MAX_CODE_ATTEMPTS: u32 = 10;

/// The authenticated caller, as reported by the auth collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: UserId,
}

/// A group row as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub owner_id: ProfileId,
    pub join_code: JoinCode,
    pub created_at: DateTime<Utc>,
}

/// Values for a group insert. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub name: String,
    pub owner_id: ProfileId,
    pub join_code: JoinCode,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub group_id: GroupId,
    pub member_id: ProfileId,
    pub role: MemberRole,
    pub created_at: DateTime<Utc>,
}

/// A group together with its membership rows.
#[derive(Debug, Clone)]
pub struct GroupDetail {
    pub group: Group,
    pub members: Vec<Membership>,
}

/// Trim a user-supplied group name. `None` if nothing but whitespace remains.
pub fn normalize_group_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
