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

//! Run configuration shared by the store, reporter, and CLI.
//!
//! There is no process-wide singleton here: a [`Config`] is constructed
//! explicitly (from defaults or from the environment) and passed by
//! reference into whichever components need it, so each test case can
//! inject its own paths and policies.

use std::path::PathBuf;
use std::str::FromStr;

/// What to do when the baseline store file exists but cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorePolicy {
    /// Degrade to an empty store. Comparisons proceed as if no baseline
    /// had ever been recorded. Lossy but keeps a long run moving.
    #[default]
    TreatAsEmpty,
    /// Surface a corrupt-store error instead of masking it.
    Fail,
}

impl FromStr for StorePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "empty" | "treat-as-empty" => Ok(Self::TreatAsEmpty),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "unknown store policy '{}' (expected 'empty' or 'fail')",
                other
            )),
        }
    }
}

/// Toolkit configuration: directories, store policy, regression threshold.
///
/// Defaults are the fixed relative paths the on-disk contract specifies:
/// `fixtures/`, `baselines/performance_baseline.json`, and `reports/`.
///
/// # Examples
///
/// ```
/// use fixreg_core::Config;
///
/// let config = Config::default();
/// assert_eq!(config.baselines_dir.to_str(), Some("baselines"));
/// assert_eq!(config.baseline_file, "performance_baseline.json");
/// assert_eq!(config.regression_threshold, 15.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding fixture files.
    pub fixtures_dir: PathBuf,
    /// Directory holding the baseline store file.
    pub baselines_dir: PathBuf,
    /// File name of the baseline store inside `baselines_dir`.
    pub baseline_file: String,
    /// Directory run reports are written into.
    pub reports_dir: PathBuf,
    /// Policy for an unparseable baseline store file.
    pub store_policy: StorePolicy,
    /// Default regression threshold in percent.
    pub regression_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixtures_dir: PathBuf::from("fixtures"),
            baselines_dir: PathBuf::from("baselines"),
            baseline_file: "performance_baseline.json".to_string(),
            reports_dir: PathBuf::from("reports"),
            store_policy: StorePolicy::default(),
            regression_threshold: 15.0,
        }
    }
}

impl Config {
    /// Defaults overridden from the environment.
    ///
    /// Recognized variables: `FIXREG_FIXTURES_DIR`, `FIXREG_BASELINES_DIR`,
    /// `FIXREG_BASELINE_FILE`, `FIXREG_REPORTS_DIR`, `FIXREG_STORE_POLICY`
    /// (`empty`/`fail`) and `FIXREG_THRESHOLD`. Unset or unparseable
    /// variables fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("FIXREG_FIXTURES_DIR") {
            config.fixtures_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("FIXREG_BASELINES_DIR") {
            config.baselines_dir = PathBuf::from(dir);
        }
        if let Ok(file) = std::env::var("FIXREG_BASELINE_FILE") {
            config.baseline_file = file;
        }
        if let Ok(dir) = std::env::var("FIXREG_REPORTS_DIR") {
            config.reports_dir = PathBuf::from(dir);
        }
        if let Ok(policy) = std::env::var("FIXREG_STORE_POLICY") {
            if let Ok(policy) = policy.parse() {
                config.store_policy = policy;
            }
        }
        if let Ok(threshold) = std::env::var("FIXREG_THRESHOLD") {
            if let Ok(threshold) = threshold.parse() {
                config.regression_threshold = threshold;
            }
        }
        config
    }

    /// Full path of the baseline store file.
    pub fn baseline_path(&self) -> PathBuf {
        self.baselines_dir.join(&self.baseline_file)
    }
}
