//! The set of dependencies prereq knows how to install.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PrereqError;

/// A supported external dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dependency {
    Git,
    Docker,
    HerokuCli,
}

impl Dependency {
    /// Every supported dependency, in check order.
    pub const ALL: [Dependency; 3] = [Dependency::Git, Dependency::Docker, Dependency::HerokuCli];

    /// Name shown to the user and accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Dependency::Git => "git",
            Dependency::Docker => "docker",
            Dependency::HerokuCli => "heroku-cli",
        }
    }

    /// Shell command that exits zero only when the dependency is installed.
    pub fn probe_command(&self) -> &'static str {
        match self {
            Dependency::Git => "git help -g",
            Dependency::Docker => "docker",
            Dependency::HerokuCli => "heroku --version",
        }
    }

    /// What the dependency is used for, shown when the user declines.
    pub fn purpose(&self) -> &'static str {
        match self {
            Dependency::Git => "initialise and version your project",
            Dependency::Docker => "build and run your project in containers",
            Dependency::HerokuCli => "deploy your project to Heroku",
        }
    }

    /// Look up a dependency by the exact text of its probe command.
    pub fn from_probe(probe: &str) -> Result<Self, PrereqError> {
        Self::ALL
            .into_iter()
            .find(|dep| dep.probe_command() == probe)
            .ok_or_else(|| PrereqError::UnknownDependency {
                input: probe.to_string(),
            })
    }
}

impl FromStr for Dependency {
    type Err = PrereqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "git" => Ok(Dependency::Git),
            "docker" => Ok(Dependency::Docker),
            "heroku-cli" | "heroku" => Ok(Dependency::HerokuCli),
            _ => Err(PrereqError::UnknownDependency {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
