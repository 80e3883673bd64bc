use thiserror::Error;

/// Errors raised when writing to the settings store.
///
/// Reads never fail: absent or malformed stored values are treated as
/// "not set" by the callers.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be written.
    #[error("Failed to access settings file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings map could not be serialized.
    #[error("Failed to encode settings: {0}")]
    EncodeError(#[from] serde_json::Error),
}
