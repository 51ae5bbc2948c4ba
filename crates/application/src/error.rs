//! Application-level errors

use thiserror::Error;

/// Errors that can occur while running the announcement pipeline
///
/// One variant per failure class; the binary maps these to distinct
/// exit codes. Nothing here is recovered internally.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Retrieving the weather observation failed
    #[error("Weather fetch failed: {0}")]
    WeatherFetch(String),

    /// The announce service could not be reached or refused the login
    #[error("Announce connection failed: {0}")]
    AnnounceConnection(String),

    /// The announce service rejected the playback command
    #[error("Announce command rejected: {0}")]
    AnnounceCommand(String),
}
