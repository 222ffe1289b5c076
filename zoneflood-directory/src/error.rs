use serde::{Deserialize, Serialize};

/// Unified error type for all zone directory operations.
///
/// Transport-level failures and directory API errors are folded into one
/// enum so callers can match on the failure mode without caring which layer
/// produced it. All variants are serializable for structured error
/// reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum DirectoryError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, bad gateway, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API token is missing, invalid, or expired.
    InvalidCredentials {
        /// Original error message from the directory, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429 or equivalent).
    ///
    /// The client does not retry; the error is surfaced to the caller,
    /// which for this tool means the run aborts.
    RateLimited {
        /// Suggested wait in seconds before retrying, if the directory
        /// provided one.
        retry_after: Option<u64>,
        /// Original error message from the directory, if available.
        raw_message: Option<String>,
    },

    /// The specified hosted zone was not found.
    ZoneNotFound {
        /// Zone identifier that was not found.
        zone_id: String,
        /// Original error message from the directory, if available.
        raw_message: Option<String>,
    },

    /// A hosted zone with the same name already exists.
    ZoneExists {
        /// The colliding zone name.
        zone_name: String,
        /// Original error message from the directory, if available.
        raw_message: Option<String>,
    },

    /// The zone still holds non-bookkeeping record sets and cannot be
    /// deleted.
    ZoneNotEmpty {
        /// Zone identifier the deletion was attempted on.
        zone_id: String,
        /// Original error message from the directory, if available.
        raw_message: Option<String>,
    },

    /// The network identifier given for zone association does not exist.
    NetworkNotFound {
        /// The unknown network identifier.
        network_id: String,
        /// Original error message from the directory, if available.
        raw_message: Option<String>,
    },

    /// The change batch was rejected as a whole (malformed change, missing
    /// record set on delete, too many changes in one call, empty batch).
    InvalidChangeBatch {
        /// Description of what the directory objected to.
        detail: String,
    },

    /// A request parameter is invalid (bad TTL, malformed record value,
    /// out-of-range page size).
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The account's zone or record quota has been exceeded.
    ///
    /// Unlike [`RateLimited`](Self::RateLimited), waiting does not help.
    QuotaExceeded {
        /// Original error message from the directory, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the directory's response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the directory API.
    Unknown {
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl DirectoryError {
    /// Whether this error reflects expected operator-visible conditions
    /// (bad input, missing resources) rather than infrastructure failure.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::ZoneNotFound { .. }
                | Self::ZoneExists { .. }
                | Self::ZoneNotEmpty { .. }
                | Self::NetworkNotFound { .. }
                | Self::InvalidChangeBatch { .. }
                | Self::InvalidParameter { .. }
                | Self::QuotaExceeded { .. }
        )
    }
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::RateLimited {
                retry_after,
                raw_message: _,
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "Rate limited")
                }
            }
            Self::ZoneNotFound {
                zone_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Zone '{zone_id}' not found: {msg}")
                } else {
                    write!(f, "Zone '{zone_id}' not found")
                }
            }
            Self::ZoneExists {
                zone_name,
                raw_message: _,
            } => {
                write!(f, "Zone '{zone_name}' already exists")
            }
            Self::ZoneNotEmpty {
                zone_id,
                raw_message: _,
            } => {
                write!(f, "Zone '{zone_id}' still contains record sets")
            }
            Self::NetworkNotFound {
                network_id,
                raw_message: _,
            } => {
                write!(f, "Network '{network_id}' not found")
            }
            Self::InvalidChangeBatch { detail } => {
                write!(f, "Invalid change batch: {detail}")
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "Invalid parameter '{param}': {detail}")
            }
            Self::QuotaExceeded { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Quota exceeded: {msg}")
                } else {
                    write!(f, "Quota exceeded")
                }
            }
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::Unknown {
                raw_code: _,
                raw_message,
            } => f.write_str(raw_message),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// Convenience type alias for `Result<T, DirectoryError>`.
pub type Result<T> = std::result::Result<T, DirectoryError>;
