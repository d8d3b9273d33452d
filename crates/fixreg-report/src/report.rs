// Dweve FIXREG - Fixture Data & Regression Baseline Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Accumulate run results and render them as reports.

use fixreg_baseline::MetricsSnapshot;
use fixreg_core::Config;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use thiserror::Error;

/// Report writing failures.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Creating the reports directory or writing a file failed.
    #[error("report I/O error at {path}: {message}")]
    Io {
        /// Report path involved.
        path: PathBuf,
        /// Underlying failure.
        message: String,
    },

    /// Serializing the JSON report failed.
    #[error("failed to serialize report: {0}")]
    Serialize(String),
}

/// Result alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// One measured test run's outcome.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    /// Name of the test.
    pub test_name: String,
    /// Metrics captured for the run.
    pub metrics: MetricsSnapshot,
    /// Caller-supplied timestamp string.
    pub timestamp: String,
    /// Whether the run passed.
    pub passed: bool,
    /// Optional free-form note (e.g. the regression summary).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    results: &'a [RunResult],
}

/// Seconds since the Unix epoch, rendered as a string.
///
/// A convenience for callers without a clock abstraction; anything more
/// structured (RFC 3339 and the like) is the caller's business.
pub fn unix_timestamp() -> String {
    match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs().to_string(),
        Err(_) => "0".to_string(),
    }
}

/// Collects run results and writes the JSON and text reports.
///
/// # Examples
///
/// ```no_run
/// use fixreg_baseline::SnapshotBuilder;
/// use fixreg_core::Config;
/// use fixreg_report::{unix_timestamp, Reporter};
///
/// let config = Config::default();
/// let mut reporter = Reporter::new(&config);
///
/// let metrics = SnapshotBuilder::new().load_complete(2.0).total_time(1.0).build();
/// reporter.add_result("login_perf", metrics, unix_timestamp(), true, None);
///
/// reporter.write_json_report("performance_report.json")?;
/// reporter.write_text_report("performance_report.txt")?;
/// # Ok::<(), fixreg_report::ReportError>(())
/// ```
#[derive(Debug)]
pub struct Reporter {
    report_dir: PathBuf,
    results: Vec<RunResult>,
}

impl Reporter {
    /// Reporter writing under the configured `reports` directory.
    ///
    /// Nothing is created until the first write.
    pub fn new(config: &Config) -> Self {
        Self {
            report_dir: config.reports_dir.clone(),
            results: Vec::new(),
        }
    }

    /// Record one run's outcome.
    pub fn add_result(
        &mut self,
        test_name: impl Into<String>,
        metrics: MetricsSnapshot,
        timestamp: impl Into<String>,
        passed: bool,
        message: Option<String>,
    ) {
        self.results.push(RunResult {
            test_name: test_name.into(),
            metrics,
            timestamp: timestamp.into(),
            passed,
            message,
        });
    }

    /// The accumulated results.
    pub fn results(&self) -> &[RunResult] {
        &self.results
    }

    /// Drop all accumulated results.
    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    fn summary(&self) -> Summary {
        let passed = self.results.iter().filter(|r| r.passed).count();
        Summary {
            total: self.results.len(),
            passed,
            failed: self.results.len() - passed,
        }
    }

    /// Write the machine-readable summary report.
    pub fn write_json_report(&self, filename: &str) -> ReportResult<()> {
        let report = JsonReport {
            summary: self.summary(),
            results: &self.results,
        };
        let content = serde_json::to_string_pretty(&report)
            .map_err(|err| ReportError::Serialize(err.to_string()))?;
        self.write_file(filename, &content)
    }

    /// Write the human-readable text report.
    pub fn write_text_report(&self, filename: &str) -> ReportResult<()> {
        let summary = self.summary();
        let mut report = String::new();

        report.push_str("Performance Test Report\n");
        report.push_str(&"=".repeat(50));
        report.push_str("\n\n");

        report.push_str("Summary:\n");
        let _ = writeln!(report, "  Total Tests: {}", summary.total);
        let _ = writeln!(report, "  Passed: {}", summary.passed);
        let _ = writeln!(report, "  Failed: {}", summary.failed);
        report.push('\n');

        report.push_str("Results:\n");
        report.push_str(&"-".repeat(50));
        report.push('\n');

        for result in &self.results {
            let _ = writeln!(report, "\nTest: {}", result.test_name);
            let _ = writeln!(
                report,
                "Status: {}",
                if result.passed { "PASSED" } else { "FAILED" }
            );
            let _ = writeln!(report, "Timestamp: {}", result.timestamp);
            if let Some(message) = &result.message {
                let _ = writeln!(report, "Message: {}", message);
            }

            report.push_str("\nMetrics:\n");
            let _ = writeln!(
                report,
                "  Page Load Time: {}",
                format_seconds(result.metrics.page_load.load_complete)
            );
            let _ = writeln!(
                report,
                "  Network Total Time: {}",
                format_seconds(result.metrics.network.total_time)
            );
            let _ = writeln!(report, "  DNS: {}", format_seconds(result.metrics.network.dns));
            let _ = writeln!(report, "  TCP: {}", format_seconds(result.metrics.network.tcp));
            let _ = writeln!(
                report,
                "  Response: {}",
                format_seconds(result.metrics.network.response)
            );
            if let Some(action_time) = result.metrics.action_time {
                let _ = writeln!(report, "  Action Time: {}", format_seconds(action_time));
            }
        }

        self.write_file(filename, &report)
    }

    fn write_file(&self, filename: &str, content: &str) -> ReportResult<()> {
        std::fs::create_dir_all(&self.report_dir).map_err(|err| ReportError::Io {
            path: self.report_dir.clone(),
            message: err.to_string(),
        })?;
        let path = self.report_dir.join(filename);
        std::fs::write(&path, content).map_err(|err| ReportError::Io {
            path,
            message: err.to_string(),
        })
    }
}

/// Two-decimal seconds; unknown timings render as `n/a`.
fn format_seconds(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.2}s", value)
    }
}
