//! Directory error-code mapping.

use crate::error::DirectoryError;

/// Request context threaded into error mapping so resource-specific
/// variants can name the resource that was being operated on.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    pub zone_id: Option<String>,
    pub zone_name: Option<String>,
    pub network_id: Option<String>,
}

impl ErrorContext {
    pub(crate) fn for_zone(zone_id: &str) -> Self {
        Self {
            zone_id: Some(zone_id.to_string()),
            ..Self::default()
        }
    }
}

/// Map a symbolic directory error code onto [`DirectoryError`].
///
/// The directory reports errors with stable symbolic codes; anything not in
/// the table falls through to [`DirectoryError::Unknown`] carrying the raw
/// code and message verbatim.
pub(crate) fn map_api_error(
    code: Option<String>,
    message: String,
    context: &ErrorContext,
) -> DirectoryError {
    match code.as_deref() {
        Some("AccessDenied" | "InvalidToken" | "ExpiredToken") => {
            DirectoryError::InvalidCredentials {
                raw_message: Some(message),
            }
        }

        Some("NoSuchZone") => DirectoryError::ZoneNotFound {
            zone_id: context
                .zone_id
                .clone()
                .unwrap_or_else(|| "<unknown>".to_string()),
            raw_message: Some(message),
        },

        Some("ZoneAlreadyExists") => DirectoryError::ZoneExists {
            zone_name: context
                .zone_name
                .clone()
                .unwrap_or_else(|| "<unknown>".to_string()),
            raw_message: Some(message),
        },

        Some("ZoneNotEmpty") => DirectoryError::ZoneNotEmpty {
            zone_id: context
                .zone_id
                .clone()
                .unwrap_or_else(|| "<unknown>".to_string()),
            raw_message: Some(message),
        },

        Some("NoSuchNetwork") => DirectoryError::NetworkNotFound {
            network_id: context
                .network_id
                .clone()
                .unwrap_or_else(|| "<unknown>".to_string()),
            raw_message: Some(message),
        },

        Some("InvalidChangeBatch") => DirectoryError::InvalidChangeBatch { detail: message },

        Some("InvalidInput") => DirectoryError::InvalidParameter {
            param: "general".to_string(),
            detail: message,
        },

        Some("LimitExceeded") => DirectoryError::QuotaExceeded {
            raw_message: Some(message),
        },

        Some("Throttling") => DirectoryError::RateLimited {
            retry_after: None,
            raw_message: Some(message),
        },

        _ => DirectoryError::Unknown {
            raw_code: code,
            raw_message: message,
        },
    }
}
