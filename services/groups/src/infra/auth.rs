use roster_auth_types::identity::IdentityHeaders;
use roster_domain::id::UserId;

use crate::domain::repository::AuthPort;
use crate::domain::types::AuthUser;
use crate::error::GroupsServiceError;

/// `AuthPort` backed by the identity headers the gateway forwarded with the request.
#[derive(Debug, Clone, Copy)]
pub struct GatewayAuth {
    pub identity: Option<IdentityHeaders>,
}

impl AuthPort for GatewayAuth {
    async fn current_user(&self) -> Result<Option<AuthUser>, GroupsServiceError> {
        Ok(self.identity.map(|identity| AuthUser {
            id: UserId(identity.user_id),
        }))
    }
}
