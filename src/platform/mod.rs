// Build target classification
//
// This module resolves the build target into a single platform kind at
// compile time and exposes predicates, type selection, selectors and
// reports built on top of that constant.

pub mod types;
pub mod markers;
pub mod detection;
pub mod predicates;
pub mod select;
pub mod selector;
pub mod report;

// Re-exports
pub use types::*;
pub use markers::TargetMarkers;
pub use detection::{must_resolve, resolve, UnsupportedPlatform, TARGET_PLATFORM};
pub use predicates::*;
pub use select::{Conditional, If, Select};
pub use selector::{PlatformGate, PlatformSelector};
pub use report::{log_target_platform, TargetReport};

use thiserror::Error;

/// Platform classification errors
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(#[from] UnsupportedPlatform),

    #[error("Unknown platform name: {0}")]
    UnknownPlatformName(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type PlatformResult<T> = Result<T, PlatformError>;
