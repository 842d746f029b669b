use uuid::Uuid;

use roster_domain::id::{GroupId, ProfileId, UserId};
use roster_domain::role::MemberRole;
use roster_groups::domain::types::Profile;
use roster_groups::error::GroupsServiceError;
use roster_groups::usecase::group::{CreateGroupInput, CreateGroupUseCase, GetGroupUseCase};
use roster_groups::usecase::join_code::SeededJoinCodes;

use crate::helpers::{
    MockAuth, MockGroupRepo, MockProfileRepo, TEST_MAX_ATTEMPTS, test_profile, test_user_id,
};

fn outsider() -> Profile {
    Profile {
        id: ProfileId(Uuid::parse_str("00000000-0000-0000-0000-0000000000b2").unwrap()),
        user_id: UserId(Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap()),
    }
}

async fn create_physics(groups: MockGroupRepo) -> (MockGroupRepo, GroupId) {
    let create = CreateGroupUseCase {
        auth: MockAuth::signed_in(test_user_id()),
        profiles: MockProfileRepo::new(vec![test_profile()]),
        groups,
        codes: SeededJoinCodes::new(7),
        max_code_attempts: TEST_MAX_ATTEMPTS,
    };
    let group = create
        .execute(CreateGroupInput {
            name: "Physics".to_owned(),
        })
        .await
        .unwrap();
    (create.groups, group.id)
}

#[tokio::test]
async fn should_return_created_group_with_teacher_member() {
    let profile = test_profile();
    let (groups, group_id) = create_physics(MockGroupRepo::empty()).await;

    let get = GetGroupUseCase {
        auth: MockAuth::signed_in(test_user_id()),
        profiles: MockProfileRepo::new(vec![profile.clone()]),
        groups,
    };
    let detail = get.execute(group_id).await.unwrap();

    assert_eq!(detail.group.id, group_id);
    assert_eq!(detail.group.name, "Physics");
    assert_eq!(detail.members.len(), 1);
    assert_eq!(detail.members[0].member_id, profile.id);
    assert_eq!(detail.members[0].role, MemberRole::teacher());
}

#[tokio::test]
async fn should_hide_group_from_non_member() {
    let stranger = outsider();
    let (groups, group_id) = create_physics(MockGroupRepo::empty()).await;

    let get = GetGroupUseCase {
        auth: MockAuth::signed_in(stranger.user_id),
        profiles: MockProfileRepo::new(vec![test_profile(), stranger]),
        groups,
    };
    let result = get.execute(group_id).await;

    assert!(
        matches!(result, Err(GroupsServiceError::GroupNotFound)),
        "expected GroupNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_no_user_when_signed_out() {
    let (groups, group_id) = create_physics(MockGroupRepo::empty()).await;

    let get = GetGroupUseCase {
        auth: MockAuth::signed_out(),
        profiles: MockProfileRepo::new(vec![test_profile()]),
        groups,
    };
    let result = get.execute(group_id).await;

    assert!(
        matches!(result, Err(GroupsServiceError::NoUser)),
        "expected NoUser, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_group_not_found_for_unknown_id() {
    let get = GetGroupUseCase {
        auth: MockAuth::signed_in(test_user_id()),
        profiles: MockProfileRepo::new(vec![test_profile()]),
        groups: MockGroupRepo::empty(),
    };

    let result = get.execute(GroupId(Uuid::now_v7())).await;

    assert!(
        matches!(result, Err(GroupsServiceError::GroupNotFound)),
        "expected GroupNotFound, got {result:?}"
    );
}
