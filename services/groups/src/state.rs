use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::{DbGroupRepository, DbProfileRepository};
use crate::usecase::join_code::RandomJoinCodes;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub join_code_max_attempts: u32,
}

impl AppState {
    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn group_repo(&self) -> DbGroupRepository {
        DbGroupRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn join_codes(&self) -> RandomJoinCodes {
        RandomJoinCodes
    }
}
