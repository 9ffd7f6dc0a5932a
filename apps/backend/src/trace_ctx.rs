//! Task-local trace id for the request being served.
//!
//! `RequestTrace` opens the scope; `AppError::error_response` reads it so the
//! problem-details body and the `x-trace-id` header agree.

use std::future::Future;

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

const UNKNOWN: &str = "unknown";

/// Trace id of the current task, or `"unknown"` outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

/// Run `future` with `trace_id` visible through [`trace_id`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
