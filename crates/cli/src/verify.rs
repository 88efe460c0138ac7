// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact verifier.
//!
//! Runs one case per flavor in parallel using rayon. Cases share nothing:
//! each reads its own artifact and owns its module instance, so one
//! failing flavor never prevents the others from being attempted.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use crate::case::{ArtifactLayout, Invocation, VerificationCase, build_cases};
use crate::error::{Error, Result};
use crate::report::{CaseResult, Failure, Outcome, VerificationReport};
use crate::runtime::{Runtime, RuntimeError};

impl From<RuntimeError> for Failure {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::Load(message) => Failure::LoadError { message },
            RuntimeError::Execution(message) => Failure::ExecutionError { message },
        }
    }
}

/// Verify a single case.
///
/// The artifact bytes and module instance live only for the duration of
/// this call.
pub fn verify_one(runtime: &dyn Runtime, case: &VerificationCase) -> Outcome {
    let bytes = match read_artifact(&case.artifact) {
        Ok(bytes) => bytes,
        Err(failure) => return failure.into(),
    };

    let mut module = match runtime.load(&bytes) {
        Ok(module) => module,
        Err(err) => return Failure::from(err).into(),
    };

    let invocation = &case.invocation;
    let actual = match module.call(&invocation.export, invocation.input) {
        Ok(value) => value,
        Err(err) => return Failure::from(err).into(),
    };

    if actual == invocation.expected {
        Outcome::Passed
    } else {
        Failure::AssertionFailed {
            actual,
            expected: invocation.expected,
        }
        .into()
    }
}

fn read_artifact(path: &Path) -> std::result::Result<Vec<u8>, Failure> {
    let not_found = |message: String| Failure::ArtifactNotFound { message };

    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(not_found(format!("{} is not a file", path.display()))),
        Err(e) => return Err(not_found(format!("{}: {}", path.display(), e))),
    }

    std::fs::read(path).map_err(|e| not_found(format!("{}: {}", path.display(), e)))
}

/// Verify every flavor and aggregate the results in input order.
///
/// Fails only if the flavor list itself is invalid; per-case problems are
/// recorded in the report.
pub fn verify_all(
    runtime: &dyn Runtime,
    layout: &ArtifactLayout,
    flavors: &[String],
    invocation: &Invocation,
) -> Result<VerificationReport> {
    let cases = build_cases(layout, flavors, invocation)?;
    Ok(run_cases(runtime, &cases))
}

/// Run prepared cases in parallel and join them into a report.
pub fn run_cases(runtime: &dyn Runtime, cases: &[VerificationCase]) -> VerificationReport {
    let results: Vec<CaseResult> = cases
        .par_iter()
        .map(|case| {
            tracing::debug!("verifying {} ({})", case.flavor, case.artifact.display());

            let start = Instant::now();
            let outcome = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                verify_one(runtime, case)
            })) {
                Ok(outcome) => outcome,
                Err(_) => Failure::ExecutionError {
                    message: "internal error: verification panicked".to_string(),
                }
                .into(),
            };
            let elapsed = start.elapsed().as_millis() as u64;

            match outcome.failure() {
                None => tracing::debug!("{}: passed in {}ms", case.flavor, elapsed),
                Some(failure) => tracing::debug!(
                    "{}: {} in {}ms: {}",
                    case.flavor,
                    failure.kind(),
                    elapsed,
                    failure.detail()
                ),
            }

            CaseResult::new(case.flavor.clone(), case.artifact.clone(), outcome)
                .with_duration_ms(elapsed)
        })
        .collect();

    VerificationReport::now(results)
}

/// Verifier with an optional dedicated thread pool.
pub struct Verifier<'a> {
    runtime: &'a dyn Runtime,
    jobs: Option<usize>,
}

impl<'a> Verifier<'a> {
    pub fn new(runtime: &'a dyn Runtime) -> Self {
        Self {
            runtime,
            jobs: None,
        }
    }

    /// Limit parallelism to `jobs` threads.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Run [`verify_all`] on the configured pool.
    pub fn run(
        &self,
        layout: &ArtifactLayout,
        flavors: &[String],
        invocation: &Invocation,
    ) -> Result<VerificationReport> {
        let Some(jobs) = self.jobs else {
            return verify_all(self.runtime, layout, flavors, invocation);
        };

        if jobs == 0 {
            return Err(Error::Argument("--jobs must be at least 1".to_string()));
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build thread pool: {}", e)))?;

        pool.install(|| verify_all(self.runtime, layout, flavors, invocation))
    }
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
