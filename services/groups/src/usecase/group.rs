#![allow(async_fn_in_trait)]

use chrono::Utc;
use tracing::{error, info, warn};

use roster_domain::id::GroupId;
use roster_domain::role::MemberRole;

use crate::domain::repository::{AuthPort, GroupRepository, ProfileRepository};
use crate::domain::types::{Group, GroupDetail, Membership, NewGroup};
use crate::error::GroupsServiceError;
use crate::usecase::join_code::{JoinCodeSource, reserve_unique_code};

/// Anything that can create a group on behalf of the current user.
pub trait GroupCreator {
    async fn create_group(&self, name: &str) -> Result<GroupId, GroupsServiceError>;
}

// ── CreateGroup ──────────────────────────────────────────────────────────────

pub struct CreateGroupInput {
    /// Already trimmed and non-empty; see `normalize_group_name`.
    pub name: String,
}

pub struct CreateGroupUseCase<A, P, G, C>
where
    A: AuthPort,
    P: ProfileRepository,
    G: GroupRepository,
    C: JoinCodeSource,
{
    pub auth: A,
    pub profiles: P,
    pub groups: G,
    pub codes: C,
    pub max_code_attempts: u32,
}

impl<A, P, G, C> CreateGroupUseCase<A, P, G, C>
where
    A: AuthPort,
    P: ProfileRepository,
    G: GroupRepository,
    C: JoinCodeSource,
{
    pub async fn execute(&self, input: CreateGroupInput) -> Result<Group, GroupsServiceError> {
        // 1. Who is calling → 401 if nobody
        let user = self
            .auth
            .current_user()
            .await?
            .ok_or(GroupsServiceError::NoUser)?;

        // 2. Their profile → 404 if missing
        let profile = self
            .profiles
            .find_by_user_id(user.id)
            .await?
            .ok_or(GroupsServiceError::ProfileNotFound)?;

        // 3. Probe for a free join code
        let join_code =
            reserve_unique_code(&self.groups, &self.codes, self.max_code_attempts).await?;

        // 4. Group row
        let now = Utc::now();
        let group = self
            .groups
            .insert_group(&NewGroup {
                name: input.name,
                owner_id: profile.id,
                join_code,
                created_at: now,
            })
            .await?;

        // 5. Creator becomes the first member; undo the group if that fails
        let membership = Membership {
            group_id: group.id,
            member_id: profile.id,
            role: MemberRole::teacher(),
            created_at: now,
        };
        if let Err(err) = self.groups.insert_membership(&membership).await {
            self.discard_group(group.id, &err).await;
            return Err(err);
        }

        info!(group_id = %group.id, join_code = %group.join_code, owner_id = %profile.id, "group created");
        Ok(group)
    }

    /// Compensating delete after a failed membership insert. A failure here
    /// leaves an orphan group behind; it is logged, never returned.
    async fn discard_group(&self, group_id: GroupId, cause: &GroupsServiceError) {
        match self.groups.delete_group(group_id).await {
            Ok(true) => {
                warn!(%group_id, cause = %cause, "membership insert failed, group discarded")
            }
            Ok(false) => {
                warn!(%group_id, cause = %cause, "membership insert failed, group already gone")
            }
            Err(delete_err) => error!(
                %group_id,
                cause = %cause,
                error = %delete_err,
                "membership insert failed and group could not be discarded, group is orphaned"
            ),
        }
    }
}

impl<A, P, G, C> GroupCreator for CreateGroupUseCase<A, P, G, C>
where
    A: AuthPort,
    P: ProfileRepository,
    G: GroupRepository,
    C: JoinCodeSource,
{
    async fn create_group(&self, name: &str) -> Result<GroupId, GroupsServiceError> {
        let group = self
            .execute(CreateGroupInput {
                name: name.to_owned(),
            })
            .await?;
        Ok(group.id)
    }
}

// ── GetGroup ─────────────────────────────────────────────────────────────────

/// Reads a group for one of its members.
///
/// Callers who neither own nor belong to the group get `GroupNotFound`, so the
/// join code and member list never leak and existence is not confirmed.
pub struct GetGroupUseCase<A, P, G>
where
    A: AuthPort,
    P: ProfileRepository,
    G: GroupRepository,
{
    pub auth: A,
    pub profiles: P,
    pub groups: G,
}

impl<A, P, G> GetGroupUseCase<A, P, G>
where
    A: AuthPort,
    P: ProfileRepository,
    G: GroupRepository,
{
    pub async fn execute(&self, group_id: GroupId) -> Result<GroupDetail, GroupsServiceError> {
        let user = self
            .auth
            .current_user()
            .await?
            .ok_or(GroupsServiceError::NoUser)?;
        let profile = self
            .profiles
            .find_by_user_id(user.id)
            .await?
            .ok_or(GroupsServiceError::ProfileNotFound)?;

        let group = self
            .groups
            .find_by_id(group_id)
            .await?
            .ok_or(GroupsServiceError::GroupNotFound)?;
        let members = self.groups.list_members(group_id).await?;

        let visible =
            group.owner_id == profile.id || members.iter().any(|m| m.member_id == profile.id);
        if !visible {
            return Err(GroupsServiceError::GroupNotFound);
        }
        Ok(GroupDetail { group, members })
    }
}
