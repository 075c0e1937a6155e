//! Error types for console-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for console routing
#[derive(Debug, Error)]
pub enum Error {
    /// Route pattern failed to compile
    #[error(transparent)]
    Route(#[from] console_router::Error),

    /// Href is not an absolute URL
    #[error("Invalid URL {href:?}: {source}")]
    InvalidUrl {
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// Manifest file could not be read
    #[error("Failed to read route manifest {}: {source}", path.display())]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid TOML or has unknown pages/guards
    #[error("Failed to parse route manifest: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// Manifest could not be rendered as TOML
    #[error("Failed to serialize route manifest: {0}")]
    ManifestSerialize(#[from] toml::ser::Error),
}
