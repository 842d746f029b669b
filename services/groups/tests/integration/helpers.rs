use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use uuid::Uuid;

use roster_domain::id::{GroupId, ProfileId, UserId};
use roster_domain::join_code::JoinCode;
use roster_groups::domain::repository::{AuthPort, GroupRepository, ProfileRepository};
use roster_groups::domain::types::{AuthUser, Group, Membership, NewGroup, Profile};
use roster_groups::error::GroupsServiceError;
use roster_groups::usecase::join_code::JoinCodeSource;

// ── MockAuth ─────────────────────────────────────────────────────────────────

pub struct MockAuth {
    pub user: Option<AuthUser>,
}

impl MockAuth {
    pub fn signed_in(user_id: UserId) -> Self {
        Self {
            user: Some(AuthUser { id: user_id }),
        }
    }

    pub fn signed_out() -> Self {
        Self { user: None }
    }
}

impl AuthPort for MockAuth {
    async fn current_user(&self) -> Result<Option<AuthUser>, GroupsServiceError> {
        Ok(self.user)
    }
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

pub struct MockProfileRepo {
    pub profiles: Vec<Profile>,
}

impl MockProfileRepo {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    pub fn empty() -> Self {
        Self { profiles: vec![] }
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Profile>, GroupsServiceError> {
        Ok(self.profiles.iter().find(|p| p.user_id == user_id).cloned())
    }
}

// ── MockGroupRepo ────────────────────────────────────────────────────────────

/// One observed call against the group store, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Lookup(JoinCode),
    InsertGroup(NewGroup),
    InsertMembership(Membership),
    DeleteGroup(GroupId),
}

#[derive(Default)]
pub struct MockGroupRepo {
    pub taken: HashSet<String>,
    pub groups: Arc<Mutex<Vec<Group>>>,
    pub members: Arc<Mutex<Vec<Membership>>>,
    pub calls: Arc<Mutex<Vec<StoreCall>>>,
    pub fail_lookup: bool,
    pub fail_group_insert: bool,
    pub fail_membership_insert: bool,
    pub fail_delete: bool,
}

impl MockGroupRepo {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_taken(codes: impl IntoIterator<Item = String>) -> Self {
        Self {
            taken: codes.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Shared handle to the recorded calls for post-execution inspection.
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<StoreCall>>> {
        Arc::clone(&self.calls)
    }

    pub fn groups_handle(&self) -> Arc<Mutex<Vec<Group>>> {
        Arc::clone(&self.groups)
    }

    pub fn members_handle(&self) -> Arc<Mutex<Vec<Membership>>> {
        Arc::clone(&self.members)
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl GroupRepository for MockGroupRepo {
    async fn join_code_exists(&self, code: &JoinCode) -> Result<bool, GroupsServiceError> {
        self.record(StoreCall::Lookup(code.clone()));
        if self.fail_lookup {
            return Err(anyhow!("lookup timed out").into());
        }
        let in_groups = self
            .groups
            .lock()
            .unwrap()
            .iter()
            .any(|g| &g.join_code == code);
        Ok(in_groups || self.taken.contains(code.as_str()))
    }

    async fn insert_group(&self, group: &NewGroup) -> Result<Group, GroupsServiceError> {
        self.record(StoreCall::InsertGroup(group.clone()));
        if self.fail_group_insert {
            return Err(anyhow!("duplicate key value violates unique constraint").into());
        }
        let stored = Group {
            id: GroupId(Uuid::now_v7()),
            name: group.name.clone(),
            owner_id: group.owner_id,
            join_code: group.join_code.clone(),
            created_at: group.created_at,
        };
        self.groups.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn insert_membership(&self, membership: &Membership) -> Result<(), GroupsServiceError> {
        self.record(StoreCall::InsertMembership(membership.clone()));
        if self.fail_membership_insert {
            return Err(anyhow!("insert group member: connection reset").into());
        }
        self.members.lock().unwrap().push(membership.clone());
        Ok(())
    }

    async fn delete_group(&self, id: GroupId) -> Result<bool, GroupsServiceError> {
        self.record(StoreCall::DeleteGroup(id));
        if self.fail_delete {
            return Err(anyhow!("delete group: connection reset").into());
        }
        let mut groups = self.groups.lock().unwrap();
        let before = groups.len();
        groups.retain(|g| g.id != id);
        Ok(groups.len() < before)
    }

    async fn find_by_id(&self, id: GroupId) -> Result<Option<Group>, GroupsServiceError> {
        Ok(self
            .groups
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.id == id)
            .cloned())
    }

    async fn list_members(&self, id: GroupId) -> Result<Vec<Membership>, GroupsServiceError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.group_id == id)
            .cloned()
            .collect())
    }
}

// ── ScriptedCodes ────────────────────────────────────────────────────────────

/// Yields the given codes in order, starting over when exhausted.
pub struct ScriptedCodes {
    codes: Vec<JoinCode>,
    next: AtomicUsize,
}

impl ScriptedCodes {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: codes.iter().map(|c| JoinCode::parse(c).unwrap()).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

impl JoinCodeSource for ScriptedCodes {
    fn next_code(&self) -> JoinCode {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.codes[i % self.codes.len()].clone()
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user_id() -> UserId {
    UserId(Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap())
}

pub fn test_profile() -> Profile {
    Profile {
        id: ProfileId(Uuid::parse_str("00000000-0000-0000-0000-0000000000a1").unwrap()),
        user_id: test_user_id(),
    }
}

/// `AAAAAA` through `AAAAAZ`.
pub fn taken_a_block() -> Vec<String> {
    ('A'..='Z').map(|c| format!("AAAAA{c}")).collect()
}

pub const TEST_MAX_ATTEMPTS: u32 = 10;
