//! Error types for prereq operations.
//!
//! This module defines [`PrereqError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing tool or a declined install is not an error; those are
//!   reported as outcomes
//! - Use `PrereqError` for failures the caller must act on (unknown
//!   dependency, failed install command)
//! - Use `anyhow::Error` (via `PrereqError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for prereq operations.
#[derive(Debug, Error)]
pub enum PrereqError {
    /// The name or probe does not match any supported dependency.
    #[error("Unknown dependency '{input}' (expected one of: git, docker, heroku-cli)")]
    UnknownDependency { input: String },

    /// No install method is known for this dependency on this platform.
    #[error("No install method for {dependency} on {platform}")]
    UnsupportedPlatform {
        dependency: String,
        platform: String,
    },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for prereq operations.
pub type Result<T> = std::result::Result<T, PrereqError>;
