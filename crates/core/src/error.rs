//! Error types
//!
//! None of these ever reach the user: every caller logs them and falls back
//! to a safe default.

/// Key/value store failure
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage at all (disabled, sandboxed, private browsing)
    #[error("storage unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Stored revenue payload could not be used
#[derive(Debug, thiserror::Error)]
pub enum RevenueError {
    #[error("malformed revenue JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an array of at least 3 numbers")]
    Shape,
}

/// Configuration block could not be parsed
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Json(#[from] serde_json::Error),
}
