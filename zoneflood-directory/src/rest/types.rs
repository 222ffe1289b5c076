//! Response envelope for the directory REST API.
//!
//! The directory wraps every response in
//! `{ "success": bool, "result": ..., "errors": [{code, message}] }`.
//! Domain types ([`HostedZone`](crate::HostedZone),
//! [`RecordSetPage`](crate::RecordSetPage), ...) double as the wire payloads
//! inside `result`, so only the envelope itself needs dedicated types.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope<T> {
    pub success: bool,
    pub result: Option<T>,
    pub errors: Option<Vec<ApiError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub code: Option<String>,
    pub message: String,
}

impl<T> ApiEnvelope<T> {
    /// First reported error as `(code, message)`, with a fallback when the
    /// directory flags failure without populating `errors`.
    pub(crate) fn first_error(self) -> (Option<String>, String) {
        self.errors
            .and_then(|errors| errors.into_iter().next())
            .map_or_else(
                || (None, "Unknown error".to_string()),
                |e| (e.code, e.message),
            )
    }
}
