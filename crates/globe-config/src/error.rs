//! Configuration error types.

/// Errors that can occur when loading, saving, or parsing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read `config.ron` from disk.
    #[error("failed to read globe config: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to write `config.ron` to disk.
    #[error("failed to write globe config: {0}")]
    Write(#[source] std::io::Error),

    /// The file exists but is not valid RON for this config schema.
    #[error("failed to parse globe config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// Failed to serialize the config to RON.
    #[error("failed to serialize globe config: {0}")]
    Serialize(#[source] ron::Error),
}
