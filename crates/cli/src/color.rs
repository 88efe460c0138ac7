// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var (any value) → no color
//! 3. COLOR env var (any value) → color
//! 4. stdout not a TTY, or CI set → no color
//! 5. otherwise auto

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Resolve color choice from CLI flags, then the environment.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if disable {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    resolve_color_from_env(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("COLOR").is_some(),
        std::env::var_os("CI").is_some(),
        std::io::stdout().is_terminal(),
    )
}

fn resolve_color_from_env(no_color: bool, color: bool, ci: bool, tty: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if color {
        ColorChoice::Always
    } else if !tty || ci {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

/// Color scheme for verification output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold flavor name.
    pub fn flavor() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Red "FAIL" indicator.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Green "PASS" indicator.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Cyan artifact path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow failure kind.
    pub fn kind() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
