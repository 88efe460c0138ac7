// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verification outcomes and the aggregated run report.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::ExitCode;

/// Why a single case failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure {
    /// The artifact path does not exist or is unreadable.
    ArtifactNotFound { message: String },
    /// The bytes are not a loadable module.
    LoadError { message: String },
    /// Resolving or invoking the export faulted.
    ExecutionError { message: String },
    /// The export returned the wrong value.
    AssertionFailed { actual: i64, expected: i64 },
}

impl Failure {
    /// Stable identifier used in text and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::ArtifactNotFound { .. } => "artifact_not_found",
            Failure::LoadError { .. } => "load_error",
            Failure::ExecutionError { .. } => "execution_error",
            Failure::AssertionFailed { .. } => "assertion_failed",
        }
    }

    /// Human-readable detail line.
    pub fn detail(&self) -> String {
        match self {
            Failure::ArtifactNotFound { message }
            | Failure::LoadError { message }
            | Failure::ExecutionError { message } => message.clone(),
            Failure::AssertionFailed { actual, expected } => {
                format!("expected {}, got {}", expected, actual)
            }
        }
    }
}

/// Terminal state of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(Failure),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Passed => None,
            Outcome::Failed(failure) => Some(failure),
        }
    }
}

impl From<Failure> for Outcome {
    fn from(failure: Failure) -> Self {
        Outcome::Failed(failure)
    }
}

/// Result of verifying one flavor.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    /// Flavor name.
    pub flavor: String,

    /// Resolved artifact path.
    pub artifact: PathBuf,

    /// Whether the case passed.
    pub passed: bool,

    /// Failure reason (omitted on pass).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,

    /// Wall-clock time spent on this case.
    pub duration_ms: u64,
}

impl CaseResult {
    pub fn new(flavor: impl Into<String>, artifact: impl Into<PathBuf>, outcome: Outcome) -> Self {
        let failure = match outcome {
            Outcome::Passed => None,
            Outcome::Failed(failure) => Some(failure),
        };
        Self {
            flavor: flavor.into(),
            artifact: artifact.into(),
            passed: failure.is_none(),
            failure,
            duration_ms: 0,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn outcome(&self) -> Outcome {
        match &self.failure {
            None => Outcome::Passed,
            Some(failure) => Outcome::Failed(failure.clone()),
        }
    }
}

/// Aggregated results from all cases, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// ISO 8601 timestamp.
    pub timestamp: String,

    /// Whether every case passed.
    pub passed: bool,

    /// Results for each case.
    pub cases: Vec<CaseResult>,
}

impl VerificationReport {
    /// Create a report from case results.
    pub fn new(timestamp: String, cases: Vec<CaseResult>) -> Self {
        let passed = cases.iter().all(|c| c.passed);
        Self {
            timestamp,
            passed,
            cases,
        }
    }

    /// Create a report stamped with the current time.
    pub fn now(cases: Vec<CaseResult>) -> Self {
        Self::new(chrono::Utc::now().to_rfc3339(), cases)
    }

    pub fn passed_count(&self) -> usize {
        self.cases.iter().filter(|c| c.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.cases.len() - self.passed_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.cases.iter().filter(|c| !c.passed)
    }

    /// Process exit code for this run.
    pub fn exit_code(&self) -> ExitCode {
        if self.passed {
            ExitCode::Success
        } else {
            ExitCode::VerificationFailed
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
