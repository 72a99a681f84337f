//! Installation orchestrator.
//!
//! Ties the checker, the confirmation prompt, the platform installers and
//! the shell executor together: probe, ask, then install or point the user
//! at a download page.

use crate::error::Result;
use crate::shell::{CommandRunner, Platform};
use crate::ui::{Prompt, UserInterface};

use super::checker;
use super::dependency::Dependency;
use super::executor;
use super::messages;
use super::plan::{self, InstallPlan};
use super::status::InstallStatus;

/// Collaborators for one orchestrator call.
pub struct InstallerContext<'a> {
    /// Where prompts, messages and spinners go.
    pub ui: &'a mut dyn UserInterface,
    /// Runs probe and install commands.
    pub runner: &'a dyn CommandRunner,
    /// Platform the install plan is chosen for.
    pub platform: Platform,
    /// Skip the confirmation and install straight away.
    pub assume_yes: bool,
}

/// How an [`ensure_installed`] call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The probe succeeded; nothing was asked or run.
    AlreadyInstalled,
    /// The install commands all exited zero.
    Installed,
    /// The user chose not to install.
    Declined,
    /// The user was sent to a download page.
    ManualInstall { url: String },
}

/// Make sure `dependency` is installed, offering to install it if not.
pub fn ensure_installed(
    dependency: Dependency,
    ctx: &mut InstallerContext<'_>,
) -> Result<EnsureOutcome> {
    let status = checker::check(ctx.runner, dependency.probe_command());
    tracing::debug!("{} probe: {:?}", dependency, status);

    if let InstallStatus::ProbeError { message } = &status {
        ctx.ui.warning(&format!(
            "Could not check for {} ({}); assuming it is missing.",
            dependency, message
        ));
    }
    if status.is_installed() {
        return Ok(EnsureOutcome::AlreadyInstalled);
    }

    if !confirm_install(dependency, ctx)? {
        messages::dependency_not_installed(ctx.ui, dependency);
        return Ok(EnsureOutcome::Declined);
    }

    let mut spinner = ctx.ui.start_spinner(&format!("Installing {}", dependency));

    let plan = match plan::install_plan(dependency, ctx.platform) {
        Ok(plan) => plan,
        Err(e) => {
            spinner.finish_error(executor::FAILURE_MESSAGE);
            return Err(e);
        }
    };

    match plan {
        InstallPlan::Manual { url } => {
            messages::show_installation_info(ctx.ui, spinner.as_mut(), dependency, &url);
            Ok(EnsureOutcome::ManualInstall { url })
        }
        InstallPlan::Commands { .. } => {
            executor::run_install(ctx.runner, spinner.as_mut(), &plan.shell_commands())?;
            Ok(EnsureOutcome::Installed)
        }
    }
}

/// Same as [`ensure_installed`], with the dependency named by its probe command.
///
/// The probe must match one of the supported probes exactly; anything else
/// is an [`UnknownDependency`](crate::PrereqError::UnknownDependency) error
/// and nothing is run.
pub fn ensure_installed_probe(probe: &str, ctx: &mut InstallerContext<'_>) -> Result<EnsureOutcome> {
    let dependency = Dependency::from_probe(probe)?;
    ensure_installed(dependency, ctx)
}

fn confirm_install(dependency: Dependency, ctx: &mut InstallerContext<'_>) -> Result<bool> {
    if ctx.assume_yes {
        tracing::debug!("Installing {} without asking (--yes)", dependency);
        return Ok(true);
    }

    let prompt = Prompt {
        key: format!("install_{}", dependency.name()),
        question: messages::install_question(dependency),
        default: true,
    };

    ctx.ui.confirm(&prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrereqError;
    use crate::shell::MockRunner;
    use crate::ui::{MockUI, SpinnerStatus};

    fn run(
        dependency: Dependency,
        platform: Platform,
        ui: &mut MockUI,
        runner: &MockRunner,
    ) -> Result<EnsureOutcome> {
        let mut ctx = InstallerContext {
            ui,
            runner,
            platform,
            assume_yes: false,
        };
        ensure_installed(dependency, &mut ctx)
    }

    #[test]
    fn installed_dependency_is_a_no_op() {
        for dep in Dependency::ALL {
            let mut ui = MockUI::new();
            let runner = MockRunner::new();
            runner.set_probe(dep.probe_command(), true);

            let outcome = run(dep, Platform::Linux, &mut ui, &runner).unwrap();

            assert_eq!(outcome, EnsureOutcome::AlreadyInstalled);
            assert!(ui.prompts_shown().is_empty());
            assert!(ui.spinners().is_empty());
            assert!(runner.commands_run().is_empty());
        }
    }

    #[test]
    fn declining_runs_nothing() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_docker", "no");
        let runner = MockRunner::new();

        let outcome = run(Dependency::Docker, Platform::Linux, &mut ui, &runner).unwrap();

        assert_eq!(outcome, EnsureOutcome::Declined);
        assert!(runner.commands_run().is_empty());
        assert!(ui.spinners().is_empty());
        assert!(ui.has_warning("docker is not installed"));
    }

    #[test]
    fn prompt_names_the_dependency() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_git", "no");
        let runner = MockRunner::new();

        run(Dependency::Git, Platform::Linux, &mut ui, &runner).unwrap();

        let prompt = &ui.prompts_shown()[0];
        assert!(prompt.default);
        assert_eq!(
            prompt.question,
            "Sorry, git is not installed on your system, Do you want to install it?"
        );
    }

    #[test]
    fn docker_on_linux_refreshes_then_installs() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_docker", "yes");
        let runner = MockRunner::new();

        let outcome = run(Dependency::Docker, Platform::Linux, &mut ui, &runner).unwrap();

        assert_eq!(outcome, EnsureOutcome::Installed);
        assert_eq!(
            runner.commands_run(),
            vec!["sudo apt update", "apt install docker.io"]
        );
        let spinners = ui.spinners();
        assert_eq!(spinners.len(), 1);
        assert_eq!(spinners[0].start_message, "Installing docker");
        assert_eq!(spinners[0].status, Some(SpinnerStatus::Success));
        assert_eq!(spinners[0].suspended, 2);
        assert!(ui.messages().iter().all(|m| !m.contains("https://")));
    }

    #[test]
    fn docker_on_windows_and_macos_shows_url_only() {
        for (platform, url) in [
            (Platform::Windows, plan::DOCKER_WINDOWS_URL),
            (Platform::MacOS, plan::DOCKER_MACOS_URL),
        ] {
            let mut ui = MockUI::new();
            ui.set_prompt_response("install_docker", "yes");
            let runner = MockRunner::new();

            let outcome = run(Dependency::Docker, platform, &mut ui, &runner).unwrap();

            assert_eq!(
                outcome,
                EnsureOutcome::ManualInstall {
                    url: url.to_string()
                }
            );
            assert!(runner.commands_run().is_empty());
            assert!(ui.has_message(url));
        }
    }

    #[test]
    fn git_on_windows_shows_download_url() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_git", "yes");
        let runner = MockRunner::new();

        let outcome = run(Dependency::Git, Platform::Windows, &mut ui, &runner).unwrap();

        assert_eq!(
            outcome,
            EnsureOutcome::ManualInstall {
                url: "https://git-scm.com/download/win".to_string()
            }
        );
        assert!(runner.commands_run().is_empty());
        assert!(ui.has_message("https://git-scm.com/download/win"));
        assert_eq!(ui.spinners()[0].status, Some(SpinnerStatus::Skipped));
    }

    #[test]
    fn heroku_on_macos_runs_both_brew_commands() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_heroku-cli", "yes");
        let runner = MockRunner::new();

        let outcome = run(Dependency::HerokuCli, Platform::MacOS, &mut ui, &runner).unwrap();

        assert_eq!(outcome, EnsureOutcome::Installed);
        assert_eq!(
            runner.commands_run(),
            vec!["brew tap heroku/brew", "brew install heroku"]
        );
    }

    #[test]
    fn install_failure_propagates_and_marks_spinner() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_git", "yes");
        let runner = MockRunner::new();
        runner.fail_command("apt install git", 100);

        let err = run(Dependency::Git, Platform::Linux, &mut ui, &runner).unwrap_err();

        assert!(matches!(err, PrereqError::CommandFailed { code: Some(100), .. }));
        assert_eq!(ui.spinners()[0].status, Some(SpinnerStatus::Error));
    }

    #[test]
    fn unsupported_platform_fails_the_spinner() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_docker", "yes");
        let runner = MockRunner::new();

        let err = run(Dependency::Docker, Platform::Other("freebsd"), &mut ui, &runner)
            .unwrap_err();

        assert!(matches!(err, PrereqError::UnsupportedPlatform { .. }));
        assert!(runner.commands_run().is_empty());
        assert_eq!(ui.spinners()[0].status, Some(SpinnerStatus::Error));
    }

    #[test]
    fn probe_error_warns_then_prompts() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_git", "no");
        let runner = MockRunner::new();
        runner.set_probe_error("git help -g");

        let outcome = run(Dependency::Git, Platform::Linux, &mut ui, &runner).unwrap();

        assert_eq!(outcome, EnsureOutcome::Declined);
        assert!(ui.has_warning("Could not check for git"));
        assert_eq!(ui.prompts_shown().len(), 1);
    }

    #[test]
    fn assume_yes_skips_prompt() {
        let mut ui = MockUI::new();
        let runner = MockRunner::new();
        let mut ctx = InstallerContext {
            ui: &mut ui,
            runner: &runner,
            platform: Platform::Linux,
            assume_yes: true,
        };

        let outcome = ensure_installed(Dependency::HerokuCli, &mut ctx).unwrap();

        assert_eq!(outcome, EnsureOutcome::Installed);
        assert!(ui.prompts_shown().is_empty());
        assert_eq!(
            runner.commands_run(),
            vec!["sudo apt update", "snap install --classic heroku"]
        );
    }

    #[test]
    fn probe_string_selects_installer() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_docker", "yes");
        let runner = MockRunner::new();
        let mut ctx = InstallerContext {
            ui: &mut ui,
            runner: &runner,
            platform: Platform::Linux,
            assume_yes: false,
        };

        ensure_installed_probe("docker", &mut ctx).unwrap();

        assert_eq!(runner.probes_run(), vec!["docker"]);
        assert_eq!(
            runner.commands_run(),
            vec!["sudo apt update", "apt install docker.io"]
        );
    }

    #[test]
    fn unknown_probe_is_rejected_before_anything_runs() {
        let mut ui = MockUI::new();
        let runner = MockRunner::new();
        let mut ctx = InstallerContext {
            ui: &mut ui,
            runner: &runner,
            platform: Platform::Linux,
            assume_yes: true,
        };

        let err = ensure_installed_probe("heroku", &mut ctx).unwrap_err();

        assert!(matches!(err, PrereqError::UnknownDependency { .. }));
        assert!(runner.probes_run().is_empty());
        assert!(runner.commands_run().is_empty());
        assert!(ui.prompts_shown().is_empty());
    }
}
