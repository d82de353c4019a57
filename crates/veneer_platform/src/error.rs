//! Platform error types

use thiserror::Error;

/// Platform-related errors
///
/// Capability lookups are total and never produce errors; these variants only
/// cover the genuinely fallible edges, such as parsing names supplied by
/// configuration or test fixtures.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// A platform name did not match any supported platform
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// A device type name did not match any supported device type
    #[error("Unknown device type: {0}")]
    UnknownDeviceType(String),

    /// A device context name did not match any supported context
    #[error("Unknown device context: {0}")]
    UnknownDeviceContext(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
