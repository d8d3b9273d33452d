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

//! The full fixture-and-regression pipeline through the facade:
//! load records, drive parametrized runs, capture metrics, persist and
//! compare, report.

use fixreg::{
    load_delimited, load_structured, BaselineStore, Config, Reporter, SnapshotBuilder, Value,
};
use fixreg_test::fixtures;
use tempfile::TempDir;

#[test]
fn fixture_to_regression_report_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        fixtures_dir: dir.path().join("fixtures"),
        baselines_dir: dir.path().join("baselines"),
        reports_dir: dir.path().join("reports"),
        ..Config::default()
    };
    std::fs::create_dir_all(&config.fixtures_dir).unwrap();

    // Load the fixture that drives the parametrized runs.
    let fixture_path = config.fixtures_dir.join("login.csv");
    std::fs::write(&fixture_path, fixtures::login_csv()).unwrap();
    let logins = load_delimited(&fixture_path).unwrap();
    assert!(logins.validate_required_fields(&["username", "password", "expected_result"]));

    let mut store = BaselineStore::new(&config);
    let mut reporter = Reporter::new(&config);

    // First run of each case records a baseline.
    for record in &logins {
        let test_name = format!("login_{}", record.get_str("username").unwrap());
        let metrics = SnapshotBuilder::new().load_complete(2.0).total_time(1.0).build();
        assert!(!store.baseline_exists(&test_name).unwrap());
        store.save_baseline(&test_name, metrics.clone()).unwrap();
        reporter.add_result(&test_name, metrics, "100", true, None);
    }

    // Second run: one case regressed past the threshold.
    let slower = SnapshotBuilder::new().load_complete(2.5).total_time(1.0).build();
    let outcome = store
        .compare_with_baseline("login_standard_user", &slower, config.regression_threshold)
        .unwrap();
    assert!(outcome.has_regression);

    let steady = SnapshotBuilder::new().load_complete(2.1).total_time(1.0).build();
    let outcome = store
        .compare_with_baseline("login_bad_user", &steady, config.regression_threshold)
        .unwrap();
    assert!(!outcome.has_regression);

    // The reporter writes both report shapes under reports/.
    reporter.add_result(
        "login_standard_user",
        slower,
        "200",
        false,
        Some("pageLoad.loadComplete +25%".into()),
    );
    reporter.write_json_report("performance_report.json").unwrap();
    reporter.write_text_report("performance_report.txt").unwrap();
    assert!(config.reports_dir.join("performance_report.json").exists());
    assert!(config.reports_dir.join("performance_report.txt").exists());
}

#[test]
fn both_fixture_formats_drive_the_same_filter() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("login.csv");
    let json_path = dir.path().join("login.json");
    std::fs::write(&csv_path, fixtures::login_csv()).unwrap();
    std::fs::write(&json_path, fixtures::login_json()).unwrap();

    let from_csv = load_delimited(&csv_path).unwrap();
    let from_json = load_structured(&json_path).unwrap();

    let predicate = [("expected_result", Value::from("success"))];
    let csv_hits = from_csv.filter(&predicate);
    let json_hits = from_json.filter(&predicate);

    assert_eq!(csv_hits.len(), 1);
    assert_eq!(json_hits.len(), 1);
    assert_eq!(
        csv_hits.records()[0].get_str("username"),
        json_hits.records()[0].get_str("username"),
    );
}
