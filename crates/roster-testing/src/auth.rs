//! Mock gateway identity.
//!
//! Services trust the `x-roster-user-*` headers the gateway injects. Tests set
//! them directly so no gateway or token is involved.

use http::{HeaderName, HeaderValue};
use uuid::Uuid;

use roster_auth_types::identity::{USER_ID_HEADER, USER_ROLE_HEADER};

/// Identity to inject into test requests.
#[derive(Debug, Clone, Copy)]
pub struct MockAuth {
    pub user_id: Uuid,
    pub user_role: u8,
}

impl MockAuth {
    pub fn new(user_id: Uuid, user_role: u8) -> Self {
        Self { user_id, user_role }
    }

    /// A regular (role 0) user.
    pub fn user(user_id: Uuid) -> Self {
        Self::new(user_id, 0)
    }

    /// Header pairs as the gateway would inject them.
    pub fn header_pairs(&self) -> [(HeaderName, HeaderValue); 2] {
        [
            (
                HeaderName::from_static(USER_ID_HEADER),
                HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
            ),
            (
                HeaderName::from_static(USER_ROLE_HEADER),
                HeaderValue::from(u16::from(self.user_role)),
            ),
        ]
    }
}
