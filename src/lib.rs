//! Prereq - Check for and install the external tools a project depends on.
//!
//! Prereq probes for git, docker and the Heroku CLI, asks before installing
//! anything that is missing, and then either runs the platform's package
//! manager or points the user at a download page.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Dependency probes, install plans and the install flow
//! - [`shell`] - Shell command execution and platform detection
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`validate`] - Input validation
//!
//! # Example
//!
//! ```
//! use prereq::requirements::{install_plan, Dependency};
//! use prereq::shell::Platform;
//!
//! let plan = install_plan(Dependency::Docker, Platform::Linux).unwrap();
//! assert_eq!(plan.shell_commands(), vec!["sudo apt update", "apt install docker.io"]);
//! ```

pub mod cli;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;
pub mod validate;

pub use error::{PrereqError, Result};
