//! Error types for catalog loading

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a catalog
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing failed
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A playlist or category refers to an id the catalog does not hold
    #[error("{collection} '{name}' refers to unknown item '{id}'")]
    UnknownReference {
        collection: &'static str,
        name: String,
        id: String,
    },

    /// The provider section is unusable (empty id)
    #[error("Invalid provider identity: {0}")]
    InvalidProvider(String),
}
