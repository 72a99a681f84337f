//! Installation checker.
//!
//! Runs a dependency's probe command and reports whether it is present.

use crate::shell::CommandRunner;

use super::status::InstallStatus;

/// Run `probe` and classify the result.
pub fn check(runner: &dyn CommandRunner, probe: &str) -> InstallStatus {
    match runner.probe(probe) {
        Ok(true) => InstallStatus::Installed,
        Ok(false) => InstallStatus::Absent,
        Err(e) => {
            tracing::warn!("Probe `{}` could not run: {}", probe, e);
            InstallStatus::ProbeError {
                message: e.to_string(),
            }
        }
    }
}

/// Run `probe` and report whether it exited zero.
///
/// Never fails; a probe that cannot run counts as not installed.
pub fn is_installed(runner: &dyn CommandRunner, probe: &str) -> bool {
    check(runner, probe).is_installed()
}
