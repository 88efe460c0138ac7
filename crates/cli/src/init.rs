// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `wasmcheck init` command.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, ExitCode, Result};

/// Default wasmcheck.toml contents.
pub const DEFAULT_TEMPLATE: &str = r#"version = 1

[artifacts]
# Directory containing the build outputs, relative to this file.
# root = "bazel-bin"
pattern = "test/hello_world_{flavor}_wasm_bindgen/hello_world_{flavor}_wasm_bindgen_bg.wasm"
flavors = ["bundler", "web", "deno", "nomodules", "nodejs"]

[invoke]
export = "double"
input = 2
expected = 4
"#;

/// Write the default config into `dir`.
///
/// Returns `Ok(None)` when a config already exists and `force` is off.
pub fn write_default_config(dir: &Path, force: bool) -> Result<Option<PathBuf>> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Ok(None);
    }

    std::fs::write(&config_path, DEFAULT_TEMPLATE).map_err(|e| Error::Io {
        path: config_path.clone(),
        source: e,
    })?;
    tracing::debug!("wrote {}", config_path.display());

    Ok(Some(config_path))
}

/// Run the `init` command in the current directory.
pub fn run(force: bool) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    match write_default_config(&cwd, force)? {
        Some(path) => {
            println!("Created {}", path.display());
            Ok(ExitCode::Success)
        }
        None => {
            eprintln!(
                "{} already exists. Use --force to overwrite.",
                CONFIG_FILE_NAME
            );
            Ok(ExitCode::ConfigError)
        }
    }
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
