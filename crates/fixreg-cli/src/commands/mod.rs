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

//! Command implementations.

mod baseline_cmds;
mod check;
mod compare;
mod params;
mod show;

pub use baseline_cmds::{baseline_save, baseline_show, baselines};
pub use check::check;
pub use compare::compare;
pub use params::params;
pub use show::show;

use fixreg_baseline::{BaselineStore, MetricsSnapshot};
use fixreg_core::{Config, RecordSet};
use std::path::Path;

/// Load a fixture, choosing the loader by file extension.
pub(crate) fn load_fixture(file: &str) -> Result<RecordSet, String> {
    let path = Path::new(file);
    let loaded = match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") | Some("tsv") => fixreg_csv::load_delimited(path),
        Some("json") => fixreg_json::load_structured(path),
        _ => {
            return Err(format!(
                "unsupported fixture extension for '{}' (expected .csv, .tsv, or .json)",
                file
            ))
        }
    };
    loaded.map_err(|err| err.to_string())
}

/// Read a metrics snapshot from a JSON file.
pub(crate) fn read_snapshot(path: &Path) -> Result<MetricsSnapshot, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
    serde_json::from_str(&content)
        .map_err(|err| format!("invalid snapshot in {}: {}", path.display(), err))
}

/// Open the baseline store from the environment config, with an optional
/// directory override.
pub(crate) fn open_store(dir: Option<&Path>) -> BaselineStore {
    let mut config = Config::from_env();
    if let Some(dir) = dir {
        config.baselines_dir = dir.to_path_buf();
    }
    BaselineStore::new(&config)
}
