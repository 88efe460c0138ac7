// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles wasmcheck.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::case::{DEFAULT_FLAVORS, DEFAULT_PATTERN, Invocation};
use crate::error::{Error, Result};

/// Config file name looked up by discovery and written by `init`.
pub const CONFIG_FILE_NAME: &str = "wasmcheck.toml";

/// The only config version this build understands.
pub const SUPPORTED_VERSION: i64 = 1;

const KNOWN_KEYS: &[&str] = &["version", "artifacts", "invoke"];
const ARTIFACTS_KEYS: &[&str] = &["root", "pattern", "flavors"];
const INVOKE_KEYS: &[&str] = &["export", "input", "expected"];

/// Top-level shape, capturing unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    artifacts: Option<toml::Value>,

    #[serde(default)]
    invoke: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Where artifacts live and which flavors to verify.
    pub artifacts: ArtifactsConfig,

    /// The call made against each artifact.
    pub invoke: InvokeConfig,
}

/// `[artifacts]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Artifact root, relative to the config file's directory.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Path pattern below the root; `{flavor}` is substituted.
    #[serde(default = "ArtifactsConfig::default_pattern")]
    pub pattern: String,

    /// Flavors to verify, in report order.
    #[serde(default = "ArtifactsConfig::default_flavors")]
    pub flavors: Vec<String>,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            root: None,
            pattern: Self::default_pattern(),
            flavors: Self::default_flavors(),
        }
    }
}

impl ArtifactsConfig {
    pub(crate) fn default_pattern() -> String {
        DEFAULT_PATTERN.to_string()
    }

    pub(crate) fn default_flavors() -> Vec<String> {
        DEFAULT_FLAVORS.iter().map(|s| s.to_string()).collect()
    }

    /// Resolve the configured root against `base` (the config file's directory).
    pub fn resolve_root(&self, base: &Path) -> PathBuf {
        match &self.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => base.join(root),
            None => base.to_path_buf(),
        }
    }
}

/// `[invoke]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct InvokeConfig {
    #[serde(default = "InvokeConfig::default_export")]
    pub export: String,

    #[serde(default = "InvokeConfig::default_input")]
    pub input: i64,

    #[serde(default = "InvokeConfig::default_expected")]
    pub expected: i64,
}

impl Default for InvokeConfig {
    fn default() -> Self {
        let invocation = Invocation::default();
        Self {
            export: invocation.export,
            input: invocation.input,
            expected: invocation.expected,
        }
    }
}

impl InvokeConfig {
    fn default_export() -> String {
        Invocation::default().export
    }

    fn default_input() -> i64 {
        Invocation::default().input
    }

    fn default_expected() -> i64 {
        Invocation::default().expected
    }

    pub fn to_invocation(&self) -> Invocation {
        Invocation {
            export: self.export.clone(),
            input: self.input,
            expected: self.expected,
        }
    }
}

/// Load config, printing a warning for each unknown key.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let (config, unknown_keys) = parse_with_unknown_keys(content, path)?;
    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }
    Ok(config)
}

/// Parse config and return the dotted names of any unknown keys.
pub fn parse_with_unknown_keys(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade wasmcheck to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let mut unknown_keys: Vec<String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    let artifacts: ArtifactsConfig = parse_section(
        flexible.artifacts,
        "artifacts",
        ARTIFACTS_KEYS,
        &mut unknown_keys,
    )
    .map_err(config_error)?;

    let invoke: InvokeConfig =
        parse_section(flexible.invoke, "invoke", INVOKE_KEYS, &mut unknown_keys)
            .map_err(config_error)?;

    tracing::trace!("parsed config: {:?} {:?}", artifacts, invoke);

    Ok((
        Config {
            version,
            artifacts,
            invoke,
        },
        unknown_keys,
    ))
}

/// Deserialize an optional section table, recording unknown sub-keys.
fn parse_section<T>(
    value: Option<toml::Value>,
    name: &str,
    known: &[&str],
    unknown_keys: &mut Vec<String>,
) -> std::result::Result<T, String>
where
    T: DeserializeOwned + Default,
{
    let Some(value) = value else {
        return Ok(T::default());
    };

    let toml::Value::Table(table) = &value else {
        return Err(format!("`{}` must be a table", name));
    };

    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            unknown_keys.push(format!("{}.{}", name, key));
        }
    }

    value
        .try_into()
        .map_err(|e: toml::de::Error| format!("invalid `{}` section: {}", name, e))
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "wasmcheck: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
