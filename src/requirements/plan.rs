//! Platform installers.
//!
//! Each dependency maps a [`Platform`] to an [`InstallPlan`]: either shell
//! commands for the platform's package manager, or a page the user has to
//! visit to install it by hand.

use crate::error::{PrereqError, Result};
use crate::shell::Platform;

use super::dependency::Dependency;

/// Package index refresh run before installing on Debian-family hosts.
pub const APT_REFRESH: &str = "sudo apt update";

pub const GIT_WINDOWS_URL: &str = "https://git-scm.com/download/win";
pub const DOCKER_WINDOWS_URL: &str =
    "https://hub.docker.com/editions/community/docker-ce-desktop-windows";
pub const DOCKER_MACOS_URL: &str = "https://docs.docker.com/docker-for-mac/install/";
pub const HEROKU_MANUAL_URL: &str = "https://devcenter.heroku.com/articles/heroku-cli";

/// How to install a dependency on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallPlan {
    /// Run `refresh` (if any), then each command in order.
    Commands {
        refresh: Option<String>,
        commands: Vec<String>,
    },
    /// No automated install; point the user at a download page.
    Manual { url: String },
}

impl InstallPlan {
    fn commands(platform: Platform, commands: &[&str]) -> Self {
        InstallPlan::Commands {
            refresh: refresh_command(platform).map(String::from),
            commands: commands.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn manual(url: &str) -> Self {
        InstallPlan::Manual {
            url: url.to_string(),
        }
    }

    /// Every shell command the plan runs, refresh first.
    pub fn shell_commands(&self) -> Vec<&str> {
        match self {
            InstallPlan::Commands { refresh, commands } => refresh
                .iter()
                .chain(commands.iter())
                .map(String::as_str)
                .collect(),
            InstallPlan::Manual { .. } => Vec::new(),
        }
    }
}

/// Package index refresh for a platform's package manager, if it needs one.
pub fn refresh_command(platform: Platform) -> Option<&'static str> {
    match platform {
        Platform::Linux => Some(APT_REFRESH),
        _ => None,
    }
}

/// Choose how to install `dependency` on `platform`.
pub fn install_plan(dependency: Dependency, platform: Platform) -> Result<InstallPlan> {
    let plan = match dependency {
        Dependency::Git => git_plan(platform),
        Dependency::Docker => docker_plan(platform)?,
        Dependency::HerokuCli => heroku_plan(platform),
    };
    tracing::debug!("Install plan for {} on {}: {:?}", dependency, platform, plan);
    Ok(plan)
}

fn git_plan(platform: Platform) -> InstallPlan {
    if platform.is_windows() {
        InstallPlan::manual(GIT_WINDOWS_URL)
    } else if platform.is_linux() {
        InstallPlan::commands(platform, &["apt install git"])
    } else {
        InstallPlan::commands(platform, &["brew install git"])
    }
}

fn docker_plan(platform: Platform) -> Result<InstallPlan> {
    match platform {
        Platform::Linux => Ok(InstallPlan::commands(platform, &["apt install docker.io"])),
        Platform::Windows => Ok(InstallPlan::manual(DOCKER_WINDOWS_URL)),
        Platform::MacOS => Ok(InstallPlan::manual(DOCKER_MACOS_URL)),
        Platform::Other(os) => Err(PrereqError::UnsupportedPlatform {
            dependency: Dependency::Docker.name().to_string(),
            platform: os.to_string(),
        }),
    }
}

fn heroku_plan(platform: Platform) -> InstallPlan {
    if platform.is_windows() {
        InstallPlan::manual(HEROKU_MANUAL_URL)
    } else if platform.is_linux() {
        InstallPlan::commands(platform, &["snap install --classic heroku"])
    } else {
        InstallPlan::commands(platform, &["brew tap heroku/brew", "brew install heroku"])
    }
}
