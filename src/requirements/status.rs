//! Result of probing for a dependency.

use serde::Serialize;

/// What a probe said about a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InstallStatus {
    /// The probe command exited zero.
    Installed,

    /// The probe command ran and exited non-zero.
    Absent,

    /// The probe command could not be run at all (e.g. no shell).
    ProbeError {
        /// Why the probe could not run.
        message: String,
    },
}

impl InstallStatus {
    /// Whether the dependency is available.
    pub fn is_installed(&self) -> bool {
        matches!(self, InstallStatus::Installed)
    }
}
