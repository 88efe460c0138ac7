// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verification cases and artifact path resolution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Placeholder substituted with the flavor name in artifact patterns.
pub const FLAVOR_PLACEHOLDER: &str = "{flavor}";

/// Artifact pattern emitted by wasm-bindgen test builds.
pub const DEFAULT_PATTERN: &str =
    "test/hello_world_{flavor}_wasm_bindgen/hello_world_{flavor}_wasm_bindgen_bg.wasm";

/// Flavors verified when none are configured.
pub const DEFAULT_FLAVORS: &[&str] = &["bundler", "web", "deno", "nomodules", "nodejs"];

/// The call made against each loaded artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Exported function name.
    pub export: String,
    /// Argument passed to the export.
    pub input: i64,
    /// Value the export must return.
    pub expected: i64,
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            export: "double".to_string(),
            input: 2,
            expected: 4,
        }
    }
}

/// Maps flavor names to artifact paths.
#[derive(Debug, Clone)]
pub struct ArtifactLayout {
    root: PathBuf,
    pattern: String,
}

impl ArtifactLayout {
    /// Create a layout, rejecting patterns that ignore the flavor.
    pub fn new(root: impl Into<PathBuf>, pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains(FLAVOR_PLACEHOLDER) {
            return Err(Error::Config {
                message: format!(
                    "artifact pattern `{}` has no {} placeholder",
                    pattern, FLAVOR_PLACEHOLDER
                ),
                path: None,
            });
        }
        Ok(Self {
            root: root.into(),
            pattern,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Resolve the artifact path for `flavor`.
    pub fn resolve(&self, flavor: &str) -> PathBuf {
        let relative = self.pattern.replace(FLAVOR_PLACEHOLDER, flavor);
        self.root.join(relative)
    }
}

/// One flavor's worth of load-and-assert work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCase {
    pub flavor: String,
    pub artifact: PathBuf,
    pub invocation: Invocation,
}

impl VerificationCase {
    pub fn new(flavor: impl Into<String>, artifact: impl Into<PathBuf>, invocation: Invocation) -> Self {
        Self {
            flavor: flavor.into(),
            artifact: artifact.into(),
            invocation,
        }
    }
}

/// Build one case per flavor, preserving order.
///
/// Flavor names must be non-empty and unique within a run.
pub fn build_cases(
    layout: &ArtifactLayout,
    flavors: &[String],
    invocation: &Invocation,
) -> Result<Vec<VerificationCase>> {
    validate_flavors(flavors)?;

    Ok(flavors
        .iter()
        .map(|flavor| {
            let artifact = layout.resolve(flavor);
            tracing::trace!("{} -> {}", flavor, artifact.display());
            VerificationCase::new(flavor.clone(), artifact, invocation.clone())
        })
        .collect())
}

/// Reject empty or duplicated flavor names.
pub fn validate_flavors(flavors: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(flavors.len());
    for flavor in flavors {
        if flavor.trim().is_empty() {
            return Err(Error::Config {
                message: "flavor names must be non-empty".to_string(),
                path: None,
            });
        }
        if !seen.insert(flavor.as_str()) {
            return Err(Error::Config {
                message: format!("duplicate flavor `{}`", flavor),
                path: None,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
