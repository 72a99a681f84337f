//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`prereq check`, `prereq install`)
//! - Shared runner and platform selection
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use crate::error::Result;
use crate::requirements::Dependency;

/// Parse dependency names from the command line.
///
/// An empty list means every supported dependency. Duplicates are dropped,
/// keeping the first occurrence.
pub(crate) fn resolve_dependencies(names: &[String]) -> Result<Vec<Dependency>> {
    if names.is_empty() {
        return Ok(Dependency::ALL.to_vec());
    }

    let mut deps = Vec::with_capacity(names.len());
    for name in names {
        let dep: Dependency = name.parse()?;
        if !deps.contains(&dep) {
            deps.push(dep);
        }
    }
    Ok(deps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_means_all() {
        assert_eq!(resolve_dependencies(&[]).unwrap(), Dependency::ALL.to_vec());
    }

    #[test]
    fn keeps_order_and_drops_duplicates() {
        let deps = resolve_dependencies(&names(&["docker", "git", "docker"])).unwrap();
        assert_eq!(deps, vec![Dependency::Docker, Dependency::Git]);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(resolve_dependencies(&names(&["git", "svn"])).is_err());
    }
}
