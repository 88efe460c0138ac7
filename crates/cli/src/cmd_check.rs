// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::path::PathBuf;
use std::time::Instant;

use wasmcheck::case::ArtifactLayout;
use wasmcheck::cli::{CheckArgs, Cli, OutputFormat};
use wasmcheck::color::resolve_color;
use wasmcheck::config::{self, Config};
use wasmcheck::discovery;
use wasmcheck::error::ExitCode;
use wasmcheck::output::FormatOptions;
use wasmcheck::output::json::JsonFormatter;
use wasmcheck::output::text::TextFormatter;
use wasmcheck::runtime::WasmiRuntime;
use wasmcheck::verbose::{VerboseLogger, debug_env};
use wasmcheck::verify::Verifier;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let total_start = Instant::now();
    let verbose = VerboseLogger::new(args.verbose || debug_env());

    let cwd = std::env::current_dir()?;
    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;

    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let config_dir = config_path
        .as_deref()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| cwd.clone());

    let root: PathBuf = match &args.root {
        Some(root) if root.is_absolute() => root.clone(),
        Some(root) => cwd.join(root),
        None => config.artifacts.resolve_root(&config_dir),
    };

    let pattern = args
        .pattern
        .clone()
        .unwrap_or_else(|| config.artifacts.pattern.clone());
    let layout = ArtifactLayout::new(root, pattern)?;

    let flavors = if args.flavors.is_empty() {
        config.artifacts.flavors.clone()
    } else {
        args.flavors.clone()
    };

    let mut invocation = config.invoke.to_invocation();
    if let Some(export) = &args.export {
        invocation.export = export.clone();
    }
    if let Some(input) = args.input {
        invocation.input = input;
    }
    if let Some(expected) = args.expected {
        invocation.expected = expected;
    }

    verbose.section("Configuration");
    match &config_path {
        Some(path) => verbose.log(&format!("config: {}", path.display())),
        None => verbose.log("config: (defaults)"),
    }
    verbose.log(&format!("root: {}", layout.root().display()));
    verbose.log(&format!("pattern: {}", layout.pattern()));
    verbose.log(&format!(
        "call: {}({}) == {}",
        invocation.export, invocation.input, invocation.expected
    ));
    for flavor in &flavors {
        verbose.log(&format!("{}: {}", flavor, layout.resolve(flavor).display()));
    }

    let runtime = WasmiRuntime::new();
    let mut verifier = Verifier::new(&runtime);
    if let Some(jobs) = args.jobs {
        verifier = verifier.with_jobs(jobs);
    }
    let report = verifier.run(&layout, &flavors, &invocation)?;

    match args.output {
        OutputFormat::Text => {
            let options = if verbose.is_enabled() {
                FormatOptions::verbose()
            } else {
                FormatOptions::default()
            };
            let color = resolve_color(args.color, args.no_color);
            TextFormatter::new(color, options).write_report(&report)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write(&report)?;
        }
    }

    verbose.section("Summary");
    verbose.log(&format!("total: {}ms", total_start.elapsed().as_millis()));
    tracing::trace!("check command finished");

    Ok(report.exit_code())
}
