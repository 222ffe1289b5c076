use thiserror::Error;

use zoneflood_directory::DirectoryError;

/// Top-level error type for a zoneflood run.
#[derive(Error, Debug)]
pub enum AppError {
    /// Creating a new zone needs a network to associate it with.
    #[error("--network-id is required when --zone-id is not provided")]
    MissingNetworkId,

    /// Any failure reported by the zone directory.
    #[error("{0}")]
    Directory(#[from] DirectoryError),

    /// Zone metadata could not be rendered for display.
    #[error("Failed to render zone metadata: {0}")]
    Render(#[from] serde_json::Error),
}

impl AppError {
    /// Whether this is an expected operator-facing condition.
    ///
    /// Mirrors [`DirectoryError::is_expected`]; used to pick the log level
    /// at exit.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingNetworkId => true,
            Self::Directory(e) => e.is_expected(),
            Self::Render(_) => false,
        }
    }
}
