//! Dependency detection and installation.
//!
//! This module decides whether an external tool is present, asks the user
//! whether to install it when it is not, and runs the platform's install
//! commands or points at a download page.
//!
//! # Modules
//!
//! - [`dependency`] - The supported dependencies and their probe commands
//! - [`checker`] - Probe execution and install status
//! - [`plan`] - Per-platform install plans
//! - [`executor`] - Runs an install plan behind a spinner
//! - [`messages`] - User-facing notices for the install flow
//! - [`installer`] - The check, ask, install orchestrator

pub mod checker;
pub mod dependency;
pub mod executor;
pub mod installer;
pub mod messages;
pub mod plan;
pub mod status;

pub use checker::{check, is_installed};
pub use dependency::Dependency;
pub use executor::run_install;
pub use installer::{ensure_installed, ensure_installed_probe, EnsureOutcome, InstallerContext};
pub use plan::{install_plan, InstallPlan};
pub use status::InstallStatus;
