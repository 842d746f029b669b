use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Groups service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum GroupsServiceError {
    #[error("no user found")]
    NoUser,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("group not found")]
    GroupNotFound,
    #[error("invalid group name")]
    InvalidGroupName,
    #[error("no unique join code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },
    /// Any lookup or insert failure from the record store, message chain included.
    #[error("{0:#}")]
    Store(#[from] anyhow::Error),
}

impl GroupsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoUser => "NO_USER",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::GroupNotFound => "GROUP_NOT_FOUND",
            Self::InvalidGroupName => "INVALID_GROUP_NAME",
            Self::CodeSpaceExhausted { .. } => "CODE_SPACE_EXHAUSTED",
            Self::Store(_) => "STORE",
        }
    }
}

impl IntoResponse for GroupsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NoUser => StatusCode::UNAUTHORIZED,
            Self::ProfileNotFound | Self::GroupNotFound => StatusCode::NOT_FOUND,
            Self::InvalidGroupName => StatusCode::BAD_REQUEST,
            Self::CodeSpaceExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors; TraceLayer already records their status.
        match &self {
            Self::Store(e) => tracing::error!(error = %format!("{e:#}"), kind = "STORE", "store error"),
            Self::CodeSpaceExhausted { attempts } => {
                tracing::warn!(attempts, kind = "CODE_SPACE_EXHAUSTED", "join code space exhausted")
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
