//! Output verbosity mode.

/// How much the UI prints besides warnings, errors and spinners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show the command used to check each dependency.
    Verbose,
    /// Show status lines and hints.
    #[default]
    Normal,
    /// Drop success lines and hints.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows how each dependency is checked.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows success lines.
    pub fn shows_success(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows hints and explanatory detail.
    pub fn shows_hints(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
