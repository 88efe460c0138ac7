pub mod case;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod init;
pub mod output;
pub mod report;
pub mod runtime;
pub mod verbose;
pub mod verify;

pub use case::{ArtifactLayout, Invocation, VerificationCase};
pub use cli::{CheckArgs, Cli, Command, InitArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use report::{CaseResult, Failure, Outcome, VerificationReport};
pub use runtime::{LoadedModule, Runtime, RuntimeError, WasmiRuntime};
pub use verify::{Verifier, verify_all, verify_one};

#[cfg(test)]
pub mod test_utils;
