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

//! Regression comparison of metric snapshots.

use crate::metrics::MetricsSnapshot;
use serde::Serialize;

/// Default regression threshold, in percent.
pub const DEFAULT_REGRESSION_THRESHOLD: f64 = 15.0;

/// One tracked metric's movement against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    /// Dotted metric name, e.g. `pageLoad.loadComplete`.
    pub metric: String,
    /// Stored baseline value, seconds.
    pub baseline: f64,
    /// Freshly measured value, seconds.
    pub current: f64,
    /// `current - baseline`, seconds.
    pub difference: f64,
    /// `(current - baseline) / baseline * 100`.
    pub percent_change: f64,
}

/// Outcome of comparing a fresh snapshot against a stored baseline.
///
/// A detected regression is data, not an error: the calling test decides
/// whether to warn, fail, or ignore. Derived per run, never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// True iff some tracked metric worsened past the threshold.
    pub has_regression: bool,
    /// Per-metric movements, including zero and negative ones.
    pub differences: Vec<MetricDelta>,
}

/// Compare every tracked metric present in both snapshots.
///
/// A metric is skipped when either side is unknown (NaN) or when the
/// baseline value is exactly zero, where no meaningful percent change
/// exists. `has_regression` is true iff some computed percent change
/// strictly exceeds `threshold_percent`; improvements (negative change)
/// never count, regardless of magnitude.
///
/// # Examples
///
/// ```
/// use fixreg_baseline::{compare_snapshots, SnapshotBuilder};
///
/// let baseline = SnapshotBuilder::new().load_complete(2.0).total_time(1.0).build();
/// let current = SnapshotBuilder::new().load_complete(2.5).total_time(1.0).build();
///
/// let result = compare_snapshots(&baseline, &current, 15.0);
/// assert!(result.has_regression);
/// assert_eq!(result.differences[0].percent_change, 25.0);
/// ```
pub fn compare_snapshots(
    baseline: &MetricsSnapshot,
    current: &MetricsSnapshot,
    threshold_percent: f64,
) -> ComparisonResult {
    let mut differences = Vec::new();

    for (name, baseline_value) in baseline.tracked() {
        let current_value = match current.metric(name) {
            Some(value) => value,
            None => continue,
        };
        if baseline_value.is_nan() || current_value.is_nan() {
            // Unknown is not zero; nothing to compare.
            continue;
        }
        if baseline_value == 0.0 {
            continue;
        }
        let difference = current_value - baseline_value;
        differences.push(MetricDelta {
            metric: name.to_string(),
            baseline: baseline_value,
            current: current_value,
            difference,
            percent_change: difference / baseline_value * 100.0,
        });
    }

    let has_regression = differences
        .iter()
        .any(|delta| delta.percent_change > threshold_percent);

    ComparisonResult {
        has_regression,
        differences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SnapshotBuilder;

    fn snapshot(load_complete: f64, total_time: f64) -> MetricsSnapshot {
        SnapshotBuilder::new()
            .load_complete(load_complete)
            .total_time(total_time)
            .build()
    }

    // ==================== Threshold tests ====================

    #[test]
    fn test_equal_snapshots_have_no_regression() {
        let result = compare_snapshots(&snapshot(2.0, 1.0), &snapshot(2.0, 1.0), 15.0);
        assert!(!result.has_regression);
        assert!(result.differences.iter().all(|d| d.percent_change == 0.0));
    }

    #[test]
    fn test_twenty_percent_slower_exceeds_default_threshold() {
        let result = compare_snapshots(&snapshot(2.0, 1.0), &snapshot(2.4, 1.0), 15.0);
        assert!(result.has_regression);
    }

    #[test]
    fn test_ten_percent_slower_is_within_threshold() {
        let result = compare_snapshots(&snapshot(2.0, 1.0), &snapshot(2.2, 1.0), 15.0);
        assert!(!result.has_regression);
    }

    #[test]
    fn test_threshold_is_strictly_exceeded() {
        // Exactly 15% is not a regression at threshold 15.
        let result = compare_snapshots(&snapshot(2.0, 1.0), &snapshot(2.3, 1.0), 15.0);
        assert!(!result.has_regression);
    }

    #[test]
    fn test_improvement_never_counts_as_regression() {
        let result = compare_snapshots(&snapshot(2.0, 1.0), &snapshot(0.2, 0.1), 15.0);
        assert!(!result.has_regression);
        assert!(result.differences.iter().all(|d| d.percent_change < 0.0));
    }

    // ==================== Delta shape tests ====================

    #[test]
    fn test_login_perf_scenario() {
        let baseline = snapshot(2.0, 1.0);
        let current = snapshot(2.5, 1.0);
        let result = compare_snapshots(&baseline, &current, 15.0);

        assert!(result.has_regression);
        let delta = result
            .differences
            .iter()
            .find(|d| d.metric == "pageLoad.loadComplete")
            .unwrap();
        assert_eq!(delta.baseline, 2.0);
        assert_eq!(delta.current, 2.5);
        assert_eq!(delta.difference, 0.5);
        assert_eq!(delta.percent_change, 25.0);
    }

    #[test]
    fn test_all_computed_metrics_are_reported() {
        let result = compare_snapshots(&snapshot(2.0, 1.0), &snapshot(2.0, 1.1), 15.0);
        assert_eq!(result.differences.len(), 2);
    }

    // ==================== Skip-rule tests ====================

    #[test]
    fn test_unknown_metric_is_skipped() {
        let baseline = SnapshotBuilder::new().load_complete(2.0).build();
        let current = snapshot(2.6, 1.0);
        // network.totalTime is unknown in the baseline: skipped, not an
        // error, not a regression.
        let result = compare_snapshots(&baseline, &current, 15.0);
        assert_eq!(result.differences.len(), 1);
        assert_eq!(result.differences[0].metric, "pageLoad.loadComplete");
    }

    #[test]
    fn test_unknown_current_is_skipped() {
        let baseline = snapshot(2.0, 1.0);
        let current = SnapshotBuilder::new().total_time(1.0).build();
        let result = compare_snapshots(&baseline, &current, 15.0);
        assert_eq!(result.differences.len(), 1);
        assert_eq!(result.differences[0].metric, "network.totalTime");
    }

    #[test]
    fn test_zero_baseline_is_skipped() {
        let baseline = snapshot(0.0, 1.0);
        let current = snapshot(5.0, 1.0);
        let result = compare_snapshots(&baseline, &current, 15.0);
        assert!(result
            .differences
            .iter()
            .all(|d| d.metric != "pageLoad.loadComplete"));
        assert!(!result.has_regression);
    }

    #[test]
    fn test_empty_snapshots_compare_clean() {
        let result = compare_snapshots(
            &MetricsSnapshot::default(),
            &MetricsSnapshot::default(),
            15.0,
        );
        assert!(!result.has_regression);
        assert!(result.differences.is_empty());
    }
}
