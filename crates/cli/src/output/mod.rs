//! Output formatting for verification reports.

pub mod json;
pub mod text;

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Print a line for passing flavors too.
    pub show_passed: bool,
}

impl FormatOptions {
    /// Options that list every flavor, passing or not.
    pub fn verbose() -> Self {
        Self { show_passed: true }
    }
}
