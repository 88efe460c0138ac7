// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Verify compiled WebAssembly artifacts across build flavors
#[derive(Parser)]
#[command(name = "wasmcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "WASMCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Verify every configured flavor
    Check(CheckArgs),
    /// Write a default wasmcheck.toml
    Init(InitArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Artifact root directory (overrides `artifacts.root`)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Verify only these flavors (repeatable, replaces the configured list)
    #[arg(long = "flavor", value_name = "NAME")]
    pub flavors: Vec<String>,

    /// Artifact path pattern below ROOT; `{flavor}` is substituted
    #[arg(long, value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Exported function to call
    #[arg(long, value_name = "NAME")]
    pub export: Option<String>,

    /// Argument passed to the export
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub input: Option<i64>,

    /// Value the export must return
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub expected: Option<i64>,

    /// Number of worker threads (default: one per CPU)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing wasmcheck.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
