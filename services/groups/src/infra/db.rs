use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

use roster_domain::id::{GroupId, ProfileId, UserId};
use roster_domain::join_code::JoinCode;
use roster_domain::role::MemberRole;
use roster_groups_schema::{group_members, groups, profiles};

use crate::domain::repository::{GroupRepository, ProfileRepository};
use crate::domain::types::{Group, Membership, NewGroup, Profile};
use crate::error::GroupsServiceError;

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Profile>, GroupsServiceError> {
        let model = profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user_id.as_uuid()))
            .one(&*self.db)
            .await
            .context("find profile by user id")?;
        Ok(model.map(profile_from_model))
    }
}

fn profile_from_model(model: profiles::Model) -> Profile {
    Profile {
        id: ProfileId(model.id),
        user_id: UserId(model.user_id),
    }
}

// ── Group repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGroupRepository {
    pub db: Arc<DatabaseConnection>,
}

impl GroupRepository for DbGroupRepository {
    async fn join_code_exists(&self, code: &JoinCode) -> Result<bool, GroupsServiceError> {
        let model = groups::Entity::find()
            .filter(groups::Column::JoinCode.eq(code.as_str()))
            .one(&*self.db)
            .await
            .context("look up join code")?;
        Ok(model.is_some())
    }

    async fn insert_group(&self, group: &NewGroup) -> Result<Group, GroupsServiceError> {
        let model = groups::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(group.name.clone()),
            owner_id: Set(group.owner_id.as_uuid()),
            join_code: Set(group.join_code.as_str().to_owned()),
            created_at: Set(group.created_at),
        }
        .insert(&*self.db)
        .await
        .map_err(insert_group_error)?;
        Ok(group_from_model(model)?)
    }

    async fn insert_membership(&self, membership: &Membership) -> Result<(), GroupsServiceError> {
        group_members::ActiveModel {
            group_id: Set(membership.group_id.as_uuid()),
            member_id: Set(membership.member_id.as_uuid()),
            role: Set(membership.role.as_str().to_owned()),
            created_at: Set(membership.created_at),
        }
        .insert(&*self.db)
        .await
        .context("insert group member")?;
        Ok(())
    }

    async fn delete_group(&self, id: GroupId) -> Result<bool, GroupsServiceError> {
        let result = groups::Entity::delete_by_id(id.as_uuid())
            .exec(&*self.db)
            .await
            .context("delete group")?;
        Ok(result.rows_affected > 0)
    }

    async fn find_by_id(&self, id: GroupId) -> Result<Option<Group>, GroupsServiceError> {
        let model = groups::Entity::find_by_id(id.as_uuid())
            .one(&*self.db)
            .await
            .context("find group by id")?;
        Ok(model.map(group_from_model).transpose()?)
    }

    async fn list_members(&self, id: GroupId) -> Result<Vec<Membership>, GroupsServiceError> {
        let models = group_members::Entity::find()
            .filter(group_members::Column::GroupId.eq(id.as_uuid()))
            .order_by_asc(group_members::Column::CreatedAt)
            .all(&*self.db)
            .await
            .context("list group members")?;
        Ok(models.into_iter().map(membership_from_model).collect())
    }
}

fn insert_group_error(err: DbErr) -> anyhow::Error {
    let context = insert_group_context(err.sql_err());
    anyhow::Error::new(err).context(context)
}

/// A unique violation here means another creator inserted the same join code
/// between our probe and our insert.
fn insert_group_context(sql_err: Option<SqlErr>) -> &'static str {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => "insert group: join code already taken",
        _ => "insert group",
    }
}

fn group_from_model(model: groups::Model) -> anyhow::Result<Group> {
    let join_code = JoinCode::parse(&model.join_code)
        .with_context(|| format!("malformed join code on group {}", model.id))?;
    Ok(Group {
        id: GroupId(model.id),
        name: model.name,
        owner_id: ProfileId(model.owner_id),
        join_code,
        created_at: model.created_at,
    })
}

fn membership_from_model(model: group_members::Model) -> Membership {
    Membership {
        group_id: GroupId(model.group_id),
        member_id: ProfileId(model.member_id),
        role: MemberRole::new(model.role),
        created_at: model.created_at,
    }
}
