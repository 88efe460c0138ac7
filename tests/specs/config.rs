//! Specs for wasmcheck.toml handling.

use crate::prelude::*;

#[test]
fn config_changes_layout_and_flavors() {
    let project = Project::empty();
    project.config(
        r#"version = 1

[artifacts]
root = "out"
pattern = "{flavor}/lib_bg.wasm"
flavors = ["web", "nodejs"]
"#,
    );
    for flavor in ["web", "nodejs"] {
        let path = project.path().join("out").join(flavor).join("lib_bg.wasm");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, wat::parse_str(DOUBLE_WAT).unwrap()).unwrap();
    }

    project
        .check()
        .assert()
        .success()
        .stdout("2 flavors passed\n");
}

#[test]
fn config_invoke_section_is_used() {
    let project = Project::all_valid();
    project.config("version = 1\n[invoke]\ninput = 5\nexpected = 11\n");

    project
        .check()
        .assert()
        .code(1)
        .stderr(predicates::str::contains("expected 11, got 10"));
}

#[test]
fn config_discovered_from_subdirectory() {
    let project = Project::all_valid();
    project.config("version = 1\n[artifacts]\nflavors = [\"web\"]\n");
    let subdir = project.path().join("nested");
    std::fs::create_dir(&subdir).unwrap();

    wasmcheck_cmd()
        .arg("check")
        .current_dir(&subdir)
        .assert()
        .success()
        .stdout("1 flavor passed\n");
}

#[test]
fn explicit_config_flag() {
    let project = Project::all_valid();
    let custom = project.path().join("ci.toml");
    std::fs::write(&custom, "version = 1\n[artifacts]\nflavors = [\"deno\"]\n").unwrap();

    project
        .check()
        .args(["-C", custom.to_str().unwrap()])
        .assert()
        .success()
        .stdout("1 flavor passed\n");
}

#[test]
fn config_env_var() {
    let project = Project::all_valid();
    let custom = project.path().join("ci.toml");
    std::fs::write(&custom, "version = 1\n[artifacts]\nflavors = [\"web\", \"deno\"]\n").unwrap();

    project
        .check()
        .env("WASMCHECK_CONFIG", &custom)
        .assert()
        .success()
        .stdout("2 flavors passed\n");
}

#[test]
fn missing_explicit_config_is_config_error() {
    let project = Project::all_valid();

    project
        .check()
        .args(["-C", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

#[test]
fn unsupported_version_is_config_error() {
    let project = Project::all_valid();
    project.config("version = 9\n");

    project
        .check()
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version"));
}

#[test]
fn duplicate_configured_flavors_is_config_error() {
    let project = Project::all_valid();
    project.config("version = 1\n[artifacts]\nflavors = [\"web\", \"web\"]\n");

    project.check().assert().code(2);
}

#[test]
fn unknown_config_key_warns() {
    let project = Project::all_valid();
    project.config("version = 1\nretries = 3\n[invoke]\ntimeout = 1\n");

    project
        .check()
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `retries`"))
        .stderr(predicates::str::contains("unrecognized field `invoke.timeout`"));
}

#[test]
fn log_env_enables_debug_logging() {
    let project = Project::all_valid();

    project
        .check()
        .env("WASMCHECK_LOG", "debug")
        .assert()
        .success()
        .stderr(predicates::str::contains("DEBUG"));
}
