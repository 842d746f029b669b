use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use roster_auth_types::identity::IdentityHeaders;
use roster_domain::id::GroupId;

use crate::domain::types::{Group, Membership, normalize_group_name};
use crate::error::GroupsServiceError;
use crate::infra::auth::GatewayAuth;
use crate::state::AppState;
use crate::usecase::group::{CreateGroupInput, CreateGroupUseCase, GetGroupUseCase};

#[derive(Serialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub join_code: String,
    #[serde(serialize_with = "roster_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id.to_string(),
            name: group.name,
            owner_id: group.owner_id.to_string(),
            join_code: group.join_code.into(),
            created_at: group.created_at,
        }
    }
}

// ── POST /groups ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

/// Missing identity headers are not rejected here; the use case reports
/// them as "no user found".
pub async fn create_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), GroupsServiceError> {
    let name = normalize_group_name(&body.name).ok_or(GroupsServiceError::InvalidGroupName)?;
    let usecase = CreateGroupUseCase {
        auth: GatewayAuth {
            identity: IdentityHeaders::from_headers(&headers),
        },
        profiles: state.profile_repo(),
        groups: state.group_repo(),
        codes: state.join_codes(),
        max_code_attempts: state.join_code_max_attempts,
    };
    let group = usecase.execute(CreateGroupInput { name }).await?;
    Ok((StatusCode::CREATED, Json(group.into())))
}

// ── GET /groups/{id} ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MemberResponse {
    pub member_id: String,
    pub role: String,
}

impl From<Membership> for MemberResponse {
    fn from(membership: Membership) -> Self {
        Self {
            member_id: membership.member_id.to_string(),
            role: membership.role.as_str().to_owned(),
        }
    }
}

#[derive(Serialize)]
pub struct GroupDetailResponse {
    #[serde(flatten)]
    pub group: GroupResponse,
    pub members: Vec<MemberResponse>,
}

/// Only the owner and members see a group; anyone else gets 404.
pub async fn get_group(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GroupDetailResponse>, GroupsServiceError> {
    let usecase = GetGroupUseCase {
        auth: GatewayAuth {
            identity: Some(identity),
        },
        profiles: state.profile_repo(),
        groups: state.group_repo(),
    };
    let detail = usecase.execute(GroupId(id)).await?;
    Ok(Json(GroupDetailResponse {
        group: detail.group.into(),
        members: detail.members.into_iter().map(Into::into).collect(),
    }))
}
