//! User-facing messages for the install flow.

use crate::ui::{SpinnerHandle, UserInterface};

use super::dependency::Dependency;

/// Question asked before installing a missing dependency.
pub fn install_question(dependency: Dependency) -> String {
    format!(
        "Sorry, {} is not installed on your system, Do you want to install it?",
        dependency
    )
}

/// Tell the user a dependency stays missing and what that means for them.
pub fn dependency_not_installed(ui: &mut dyn UserInterface, dependency: Dependency) {
    ui.warning(&format!("{} is not installed.", dependency));
    ui.show_hint(&format!(
        "{} is needed to {}. Run `prereq install {}` when you are ready.",
        dependency,
        dependency.purpose(),
        dependency.name()
    ));
}

/// Point the user at a manual download page and close the spinner.
pub fn show_installation_info(
    ui: &mut dyn UserInterface,
    spinner: &mut dyn SpinnerHandle,
    dependency: Dependency,
    url: &str,
) {
    spinner.finish_skipped(&format!("Install {} manually", dependency));
    ui.message(&format!("Download {} from {}", dependency, url));
    ui.show_hint("Run this command again once the installation has finished.");
}
