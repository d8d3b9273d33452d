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

//! Baseline listing, display, and recording commands.

use super::{open_store, read_snapshot};
use colored::Colorize;
use std::path::Path;

/// List stored baseline test names.
pub fn baselines(dir: Option<&Path>) -> Result<(), String> {
    let mut store = open_store(dir);
    let names = store.test_names().map_err(|err| err.to_string())?;

    if names.is_empty() {
        println!("no baselines recorded at {}", store.path().display());
        return Ok(());
    }
    for name in &names {
        println!("{}", name);
    }
    println!("{} {} baseline(s)", "✓".green().bold(), names.len());
    Ok(())
}

/// Pretty-print one stored snapshot.
pub fn baseline_show(test: &str, dir: Option<&Path>) -> Result<(), String> {
    let mut store = open_store(dir);
    let snapshot = store
        .get_baseline(test)
        .map_err(|err| err.to_string())?
        .ok_or_else(|| format!("no baseline recorded for '{}'", test))?;

    let rendered = serde_json::to_string_pretty(snapshot)
        .map_err(|err| format!("failed to render snapshot: {}", err))?;
    println!("{}", rendered);
    Ok(())
}

/// Save a snapshot file as the baseline for a test.
pub fn baseline_save(test: &str, metrics: &Path, dir: Option<&Path>) -> Result<(), String> {
    let snapshot = read_snapshot(metrics)?;
    let mut store = open_store(dir);
    store
        .save_baseline(test, snapshot)
        .map_err(|err| err.to_string())?;

    println!(
        "{} saved baseline '{}' to {}",
        "✓".green().bold(),
        test,
        store.path().display()
    );
    Ok(())
}
