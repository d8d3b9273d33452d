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

//! Compare command - regression check against a stored baseline

use super::{open_store, read_snapshot};
use colored::Colorize;
use fixreg_baseline::DEFAULT_REGRESSION_THRESHOLD;
use std::path::Path;

/// Compare a snapshot file against the stored baseline for `test`.
///
/// Prints one line per compared metric with its percent change. A
/// detected regression is data: the command succeeds unless
/// `fail_on_regression` is set.
///
/// # Output
///
/// ```text
/// pageLoad.loadComplete  2.00s -> 2.50s  +25.0%  REGRESSION
/// network.totalTime      1.00s -> 1.00s  +0.0%
/// ✗ regression past 15% detected for 'login_perf'
/// ```
pub fn compare(
    test: &str,
    metrics: &Path,
    threshold: Option<f64>,
    fail_on_regression: bool,
    dir: Option<&Path>,
) -> Result<(), String> {
    let current = read_snapshot(metrics)?;
    let mut store = open_store(dir);
    let threshold = threshold.unwrap_or(DEFAULT_REGRESSION_THRESHOLD);

    if !store.baseline_exists(test).map_err(|err| err.to_string())? {
        println!(
            "no baseline recorded for '{}'; run baseline-save to record one",
            test
        );
        return Ok(());
    }

    let result = store
        .compare_with_baseline(test, &current, threshold)
        .map_err(|err| err.to_string())?;

    for delta in &result.differences {
        let regressed = delta.percent_change > threshold;
        let line = format!(
            "{:<24} {:.2}s -> {:.2}s  {:+.1}%",
            delta.metric, delta.baseline, delta.current, delta.percent_change
        );
        if regressed {
            println!("{}  {}", line, "REGRESSION".red().bold());
        } else {
            println!("{}", line);
        }
    }

    if result.has_regression {
        println!(
            "{} regression past {}% detected for '{}'",
            "✗".red().bold(),
            threshold,
            test
        );
        if fail_on_regression {
            return Err(format!("performance regression detected for '{}'", test));
        }
    } else {
        println!(
            "{} no regression past {}% for '{}'",
            "✓".green().bold(),
            threshold,
            test
        );
    }
    Ok(())
}
