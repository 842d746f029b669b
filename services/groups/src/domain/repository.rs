#![allow(async_fn_in_trait)]

use roster_domain::id::{GroupId, UserId};
use roster_domain::join_code::JoinCode;

use crate::domain::types::{AuthUser, Group, Membership, NewGroup, Profile};
use crate::error::GroupsServiceError;

/// Port for resolving the caller's identity.
pub trait AuthPort: Send + Sync {
    /// The authenticated user, or `None` when nobody is signed in.
    async fn current_user(&self) -> Result<Option<AuthUser>, GroupsServiceError>;
}

/// Read-only access to profiles.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: UserId)
    -> Result<Option<Profile>, GroupsServiceError>;
}

/// Repository for groups and their memberships.
///
/// Calls are independent round trips; nothing here spans a transaction.
pub trait GroupRepository: Send + Sync {
    /// `true` if any group already uses `code`.
    async fn join_code_exists(&self, code: &JoinCode) -> Result<bool, GroupsServiceError>;

    /// Insert a group and return the stored row. Fails if `join_code` is taken.
    async fn insert_group(&self, group: &NewGroup) -> Result<Group, GroupsServiceError>;

    async fn insert_membership(&self, membership: &Membership) -> Result<(), GroupsServiceError>;

    /// Delete a group. Returns `true` if a row was deleted.
    async fn delete_group(&self, id: GroupId) -> Result<bool, GroupsServiceError>;

    async fn find_by_id(&self, id: GroupId) -> Result<Option<Group>, GroupsServiceError>;

    /// Members of a group, oldest first.
    async fn list_members(&self, id: GroupId) -> Result<Vec<Membership>, GroupsServiceError>;
}
