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

//! Store persistence across process-like store instances.

use fixreg_baseline::{BaselineStore, SnapshotBuilder, DEFAULT_REGRESSION_THRESHOLD};
use fixreg_core::{Config, StorePolicy};
use tempfile::TempDir;

#[test]
fn saved_baseline_survives_a_new_store_instance() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("performance_baseline.json");

    let snapshot = SnapshotBuilder::new()
        .dom_content_loaded(1.2)
        .load_complete(2.0)
        .dom_interactive(1.0)
        .dom_complete(1.9)
        .dns(0.02)
        .tcp(0.05)
        .request(0.2)
        .response(0.4)
        .dom_processing(0.8)
        .total_time(1.0)
        .action_time(0.3)
        .resource("https://example.com/app.js", 0.4, 2048, "script")
        .build();

    let mut writer = BaselineStore::with_path(&path);
    writer.save_baseline("login_perf", snapshot.clone()).unwrap();

    // A fresh instance re-reads the file from disk.
    let mut reader = BaselineStore::with_path(&path);
    let loaded = reader.get_baseline("login_perf").unwrap().unwrap();
    assert_eq!(loaded, &snapshot);
}

#[test]
fn login_perf_regression_scenario_end_to_end() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        baselines_dir: dir.path().to_path_buf(),
        ..Config::default()
    };

    let mut store = BaselineStore::new(&config);
    assert!(!store.baseline_exists("login_perf").unwrap());

    let baseline = SnapshotBuilder::new().load_complete(2.0).total_time(1.0).build();
    store.save_baseline("login_perf", baseline).unwrap();

    let current = SnapshotBuilder::new().load_complete(2.5).total_time(1.0).build();
    let result = store
        .compare_with_baseline("login_perf", &current, DEFAULT_REGRESSION_THRESHOLD)
        .unwrap();

    assert!(result.has_regression);
    let delta = result
        .differences
        .iter()
        .find(|d| d.metric == "pageLoad.loadComplete")
        .unwrap();
    assert_eq!(delta.percent_change, 25.0);
    // totalTime held steady and is reported with zero change.
    let steady = result
        .differences
        .iter()
        .find(|d| d.metric == "network.totalTime")
        .unwrap();
    assert_eq!(steady.percent_change, 0.0);
}

#[test]
fn store_file_is_rewritten_whole() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let mut store = BaselineStore::with_path(&path);
    store
        .save_baseline("a", SnapshotBuilder::new().load_complete(1.0).build())
        .unwrap();
    store
        .save_baseline("b", SnapshotBuilder::new().load_complete(2.0).build())
        .unwrap();

    // The single file holds both entries, keyed by test name.
    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(parsed.get("a").is_some());
    assert!(parsed.get("b").is_some());
    assert_eq!(parsed["b"]["pageLoad"]["loadComplete"], 2.0);
}

#[test]
fn unknown_metrics_round_trip_as_null() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let mut store = BaselineStore::with_path(&path);
    store
        .save_baseline("t", SnapshotBuilder::new().load_complete(1.0).build())
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(parsed["t"]["network"]["totalTime"].is_null());

    let mut reader = BaselineStore::with_path(&path);
    let loaded = reader.get_baseline("t").unwrap().unwrap();
    assert!(loaded.network.total_time.is_nan());
}

#[test]
fn fail_policy_comes_from_config() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        baselines_dir: dir.path().to_path_buf(),
        store_policy: StorePolicy::Fail,
        ..Config::default()
    };
    std::fs::write(config.baseline_path(), "not json at all").unwrap();

    let mut store = BaselineStore::new(&config);
    assert!(store.baseline_exists("t").is_err());
}
