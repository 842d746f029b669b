use std::fmt::Display;
use std::future::Future;

use axum::http::StatusCode;

/// `GET /healthz`: the process is up and serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness from a dependency check: 200 when it succeeds, 503 otherwise.
///
/// Services wrap their own check (database ping, ...) in a `/readyz` handler.
pub async fn readiness<F, E>(dependency: &str, check: F) -> StatusCode
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match check.await {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            tracing::warn!(dependency, error = %err, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
