//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for laying out wasm artifacts and running the
//! wasmcheck binary against them.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// The wasm-bindgen layout used by default.
pub const PATTERN: &str =
    "test/hello_world_{flavor}_wasm_bindgen/hello_world_{flavor}_wasm_bindgen_bg.wasm";

pub const FLAVORS: &[&str] = &["bundler", "web", "deno", "nomodules", "nodejs"];

pub const DOUBLE_WAT: &str = r#"(module
  (func (export "double") (param i32) (result i32)
    local.get 0
    i32.const 2
    i32.mul))"#;

pub const WRONG_WAT: &str = r#"(module
  (func (export "double") (param i32) (result i32)
    local.get 0
    i32.const 3
    i32.mul))"#;

pub const TRAP_WAT: &str = r#"(module
  (func (export "double") (param i32) (result i32)
    unreachable))"#;

/// Returns a Command configured to run the wasmcheck binary
pub fn wasmcheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wasmcheck"));
    cmd.env_remove("WASMCHECK_CONFIG")
        .env_remove("WASMCHECK_LOG")
        .env_remove("WASMCHECK_DEBUG")
        .env("NO_COLOR", "1");
    cmd
}

/// A temporary project directory holding artifacts.
///
/// A `.git` marker stops config discovery from escaping the temp dir.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Every default flavor with a correct `double`.
    pub fn all_valid() -> Self {
        let project = Self::empty();
        for flavor in FLAVORS {
            project.artifact_wat(flavor, DOUBLE_WAT);
        }
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn artifact_path(&self, flavor: &str) -> PathBuf {
        self.path().join(PATTERN.replace("{flavor}", flavor))
    }

    pub fn artifact_bytes(&self, flavor: &str, bytes: &[u8]) -> &Self {
        let path = self.artifact_path(flavor);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, bytes).unwrap();
        self
    }

    pub fn artifact_wat(&self, flavor: &str, wat: &str) -> &Self {
        self.artifact_bytes(flavor, &wat::parse_str(wat).unwrap())
    }

    pub fn remove_artifact(&self, flavor: &str) -> &Self {
        std::fs::remove_file(self.artifact_path(flavor)).unwrap();
        self
    }

    pub fn config(&self, content: &str) -> &Self {
        std::fs::write(self.path().join("wasmcheck.toml"), content).unwrap();
        self
    }

    /// `wasmcheck check` run from the project directory.
    pub fn check(&self) -> Command {
        let mut cmd = wasmcheck_cmd();
        cmd.arg("check").current_dir(self.path());
        cmd
    }

    /// `wasmcheck check -o json`, parsed.
    pub fn check_json(&self, extra: &[&str]) -> (i32, serde_json::Value) {
        let output = self
            .check()
            .args(["-o", "json"])
            .args(extra)
            .output()
            .unwrap();
        let json = serde_json::from_slice(&output.stdout).expect("output should be valid JSON");
        (output.status.code().unwrap(), json)
    }
}
