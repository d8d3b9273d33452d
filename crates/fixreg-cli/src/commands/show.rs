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

//! Show command - print fixture records

use super::load_fixture;
use colored::Colorize;

/// Print a fixture's records, optionally filtered.
///
/// Filters are `FIELD=VALUE` pairs; a record must match all of them.
/// Values compare textually against the record value's rendered form, so
/// `--filter locked=true` matches a native boolean as well as the string
/// `"true"`.
pub fn show(file: &str, filters: &[String]) -> Result<(), String> {
    let set = load_fixture(file)?;
    let filters = parse_filters(filters)?;

    let mut shown = 0usize;
    for (index, record) in set.iter().enumerate() {
        let matches = filters.iter().all(|(field, expected)| {
            record
                .get(field)
                .map(|value| value.to_string() == *expected)
                .unwrap_or(false)
        });
        if !matches {
            continue;
        }
        shown += 1;
        println!("{}", format!("record {}", index).bold());
        for name in set.field_names() {
            if let Some(value) = record.get(name) {
                println!("  {}: {}", name, value);
            }
        }
    }

    println!("{} {} of {} record(s)", "✓".green().bold(), shown, set.len());
    Ok(())
}

/// Split `FIELD=VALUE` arguments.
fn parse_filters(filters: &[String]) -> Result<Vec<(String, String)>, String> {
    filters
        .iter()
        .map(|raw| {
            raw.split_once('=')
                .map(|(field, value)| (field.to_string(), value.to_string()))
                .ok_or_else(|| format!("invalid filter '{}' (expected FIELD=VALUE)", raw))
        })
        .collect()
}
