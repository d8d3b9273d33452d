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

//! Check command - fixture validation

use super::load_fixture;
use colored::Colorize;

/// Validate a fixture file and report its shape.
///
/// Loads the fixture (delimited or structured, by extension) and prints
/// record and field counts. With `require`, every record must carry every
/// named field as a key.
///
/// # Errors
///
/// Returns `Err` if the file cannot be loaded, or if `require` names a
/// field some record is missing.
///
/// # Output
///
/// ```text
/// ✓ fixtures/login.csv
///   Records: 2
///   Fields: username, password, expected_result
/// ```
pub fn check(file: &str, require: &[String]) -> Result<(), String> {
    match load_fixture(file) {
        Ok(set) => {
            if !require.is_empty() {
                let required: Vec<&str> = require.iter().map(String::as_str).collect();
                if !set.validate_required_fields(&required) {
                    println!("{} {}", "✗".red().bold(), file);
                    return Err(format!(
                        "fixture does not satisfy required fields: {}",
                        require.join(", ")
                    ));
                }
            }
            println!("{} {}", "✓".green().bold(), file);
            println!("  Records: {}", set.len());
            println!("  Fields: {}", set.field_names().join(", "));
            if !require.is_empty() {
                println!("  Required fields present: {}", require.join(", "));
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(e)
        }
    }
}
