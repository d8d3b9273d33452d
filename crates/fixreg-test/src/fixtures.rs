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

//! The canonical login fixture and snapshot samples.

use fixreg_baseline::{MetricsSnapshot, SnapshotBuilder};
use fixreg_core::{Record, RecordSet, Value};

/// The login fixture, delimited form: two attempts, one passing.
pub fn login_csv() -> &'static str {
    "username,password,expected_result\n\
     standard_user,secret_sauce,success\n\
     bad_user,bad_pass,failure\n"
}

/// The login fixture, structured form, with native types mixed in.
pub fn login_json() -> &'static str {
    r#"[
  {"username": "standard_user", "password": "secret_sauce", "expected_result": "success", "attempts": 1, "locked": false},
  {"username": "bad_user", "password": "bad_pass", "expected_result": "failure", "attempts": 3, "locked": true}
]"#
}

/// The login fixture as an already-normalized record set.
pub fn login_records() -> RecordSet {
    RecordSet::new(
        vec![
            "username".into(),
            "password".into(),
            "expected_result".into(),
        ],
        vec![
            Record::from_fields([
                ("username", Value::from("standard_user")),
                ("password", Value::from("secret_sauce")),
                ("expected_result", Value::from("success")),
            ]),
            Record::from_fields([
                ("username", Value::from("bad_user")),
                ("password", Value::from("bad_pass")),
                ("expected_result", Value::from("failure")),
            ]),
        ],
    )
}

/// A snapshot with just the tracked metrics set.
pub fn tracked_snapshot(load_complete: f64, total_time: f64) -> MetricsSnapshot {
    SnapshotBuilder::new()
        .load_complete(load_complete)
        .total_time(total_time)
        .build()
}

/// A snapshot with every timing measured, for round-trip equality tests.
pub fn full_snapshot() -> MetricsSnapshot {
    SnapshotBuilder::new()
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
        .resource("https://example.com/logo.png", 0.1, 512, "img")
        .build()
}
