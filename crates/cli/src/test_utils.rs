//! Shared unit test utilities.
//!
//! Wasm fixtures are written as WAT and assembled on demand.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `double(i32) -> i32` returning twice its argument.
pub const DOUBLE_WAT: &str = r#"(module
  (func (export "double") (param i32) (result i32)
    local.get 0
    i32.const 2
    i32.mul))"#;

/// `double(i64) -> i64` returning twice its argument.
pub const DOUBLE_I64_WAT: &str = r#"(module
  (func (export "double") (param i64) (result i64)
    local.get 0
    i64.const 2
    i64.mul))"#;

/// `double` that is off by one.
pub const WRONG_WAT: &str = r#"(module
  (func (export "double") (param i32) (result i32)
    local.get 0
    i32.const 2
    i32.mul
    i32.const 1
    i32.add))"#;

/// `double` that always traps.
pub const TRAP_WAT: &str = r#"(module
  (func (export "double") (param i32) (result i32)
    unreachable))"#;

/// Assemble WAT text into wasm bytes.
pub fn wasm(wat: &str) -> Vec<u8> {
    wat::parse_str(wat).unwrap()
}

/// Write raw bytes to `root/relative`, creating parent directories.
pub fn write_artifact(root: &Path, relative: &str, bytes: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, bytes).unwrap();
    path
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("wasmcheck.toml"), config).unwrap();
    dir
}
