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

//! # FIXREG - Fixture Data & Regression Baseline Toolkit
//!
//! FIXREG loads on-disk fixture files into normalized record sets for
//! parametrized test execution, and tracks performance baselines across
//! runs to flag regressions.
//!
//! ## Quick Start
//!
//! ```no_run
//! use fixreg::{load_delimited, BaselineStore, Config, SnapshotBuilder, Value};
//!
//! // Drive a parametrized suite from a delimited fixture.
//! let logins = load_delimited("fixtures/login.csv")?;
//! for params in logins.filter(&[("expected_result", Value::from("success"))]).parameter_sets() {
//!     // hand `params` to the test runner
//! }
//!
//! // Record or compare a performance snapshot.
//! let config = Config::default();
//! let mut store = BaselineStore::new(&config);
//! let fresh = SnapshotBuilder::new().load_complete(2.0).total_time(1.0).build();
//! if store.baseline_exists("login_perf").unwrap_or(false) {
//!     let _outcome = store.compare_with_baseline(
//!         "login_perf", &fresh, config.regression_threshold);
//! } else {
//!     let _ = store.save_baseline("login_perf", fresh);
//! }
//! # Ok::<(), fixreg::FixtureError>(())
//! ```
//!
//! ## Crates
//!
//! - [`fixreg_core`]: record model, queries, errors, configuration
//! - [`fixreg_csv`]: delimited fixture loader
//! - [`fixreg_json`]: structured fixture loader
//! - [`fixreg_baseline`]: snapshot store and comparator
//! - [`fixreg_report`]: run report writer

// Re-export the record model and configuration
pub use fixreg_core::{
    Config, FixtureError, FixtureErrorKind, FixtureResult, Record, RecordSet, StorePolicy, Value,
};

// Re-export the loaders
pub use fixreg_csv::{from_delimited_str, load_delimited, DelimitedConfig};
pub use fixreg_json::{from_structured_str, load_structured};

// Re-export baseline tracking
pub use fixreg_baseline::{
    compare_snapshots, BaselineError, BaselineResult, BaselineStore, ComparisonResult,
    MetricDelta, MetricsSnapshot, SnapshotBuilder, DEFAULT_REGRESSION_THRESHOLD,
    TRACKED_METRICS,
};

// Re-export reporting
pub use fixreg_report::{unix_timestamp, ReportError, Reporter, RunResult};

// Error handling extensions
mod error_ext;
pub use error_ext::FixtureResultExt;
