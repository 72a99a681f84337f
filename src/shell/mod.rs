//! Shell command execution and host platform detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult, CommandRunner, SystemRunner};
pub use mock::MockRunner;
pub use platform::{is_ci, Platform};
