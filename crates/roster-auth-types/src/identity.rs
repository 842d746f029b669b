//! Gateway-injected identity headers.

use axum::extract::FromRequestParts;
use http::request::Parts;
use http::{HeaderMap, StatusCode};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "x-roster-user-id";
pub const USER_ROLE_HEADER: &str = "x-roster-user-role";

/// Caller identity injected by the gateway via `x-roster-user-id` and `x-roster-user-role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub user_role: u8,
}

impl IdentityHeaders {
    /// Parse identity from raw headers. `None` if either header is absent or malformed.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let user_id = headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok())?;
        let user_role = headers
            .get(USER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u8>().ok())?;
        Some(Self { user_id, user_role })
    }
}

/// Rejects with 401 when the identity is missing. Handlers that need to run
/// without an identity use [`IdentityHeaders::from_headers`] instead.
impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // Parse synchronously and hand back a 'static future; an `async fn` here
    // trips E0195 against axum-core's `impl Future + Send` signature.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = Self::from_headers(&parts.headers);
        async move { identity.ok_or(StatusCode::UNAUTHORIZED) }
    }
}
