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

//! The file-backed baseline store.
//!
//! One JSON file maps test names to [`MetricsSnapshot`]s. The file is read
//! wholesale on first access and rewritten wholesale on every save; there
//! is no locking and no per-entry update. Single-process, single-run use
//! is assumed; parallel writers race at whole-file granularity
//! (last-write-wins).

use crate::compare::{compare_snapshots, ComparisonResult};
use crate::metrics::MetricsSnapshot;
use fixreg_core::{Config, StorePolicy};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Baseline store failures.
///
/// A missing store file is never an error (the first run of any test has
/// no baseline); `CorruptStore` is raised only under
/// [`StorePolicy::Fail`].
#[derive(Debug, Error)]
pub enum BaselineError {
    /// Reading or writing the store file failed.
    #[error("baseline store I/O error at {path}: {message}")]
    Io {
        /// Store file path.
        path: PathBuf,
        /// Underlying failure.
        message: String,
    },

    /// The store file exists but is not parseable.
    #[error("baseline store at {path} is corrupt: {message}")]
    CorruptStore {
        /// Store file path.
        path: PathBuf,
        /// Parser failure.
        message: String,
    },

    /// Serializing the store for writing failed.
    #[error("failed to serialize baseline store: {0}")]
    Serialize(String),
}

/// Result alias for store operations.
pub type BaselineResult<T> = Result<T, BaselineError>;

/// Persistent mapping from test name to its metrics snapshot.
///
/// The store loads lazily on first access per instance. At most one
/// snapshot exists per test name; saving overwrites without keeping a
/// backup.
///
/// # Examples
///
/// ```no_run
/// use fixreg_baseline::{BaselineStore, SnapshotBuilder, DEFAULT_REGRESSION_THRESHOLD};
/// use fixreg_core::Config;
///
/// let config = Config::default();
/// let mut store = BaselineStore::new(&config);
///
/// let fresh = SnapshotBuilder::new().load_complete(2.1).total_time(1.0).build();
/// if store.baseline_exists("login_perf")? {
///     let result = store.compare_with_baseline(
///         "login_perf", &fresh, DEFAULT_REGRESSION_THRESHOLD)?;
///     if result.has_regression {
///         eprintln!("login_perf regressed");
///     }
/// } else {
///     store.save_baseline("login_perf", fresh)?;
/// }
/// # Ok::<(), fixreg_baseline::BaselineError>(())
/// ```
#[derive(Debug)]
pub struct BaselineStore {
    path: PathBuf,
    policy: StorePolicy,
    entries: Option<BTreeMap<String, MetricsSnapshot>>,
}

impl BaselineStore {
    /// Store at the configured `baselines` path, with the configured
    /// corrupt-store policy.
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.baseline_path(),
            policy: config.store_policy,
            entries: None,
        }
    }

    /// Store at an explicit file path, defaulting to silent degradation.
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            policy: StorePolicy::default(),
            entries: None,
        }
    }

    /// Override the corrupt-store policy.
    pub fn with_policy(mut self, policy: StorePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The store file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load on first access; a missing file is an empty store.
    fn entries(&mut self) -> BaselineResult<&mut BTreeMap<String, MetricsSnapshot>> {
        if self.entries.is_none() {
            let loaded = self.load()?;
            self.entries = Some(loaded);
        }
        Ok(self.entries.get_or_insert_with(BTreeMap::new))
    }

    fn load(&self) -> BaselineResult<BTreeMap<String, MetricsSnapshot>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|err| BaselineError::Io {
            path: self.path.clone(),
            message: err.to_string(),
        })?;
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(err) => match self.policy {
                StorePolicy::TreatAsEmpty => Ok(BTreeMap::new()),
                StorePolicy::Fail => Err(BaselineError::CorruptStore {
                    path: self.path.clone(),
                    message: err.to_string(),
                }),
            },
        }
    }

    /// Whether a snapshot is stored for `test_name`.
    pub fn baseline_exists(&mut self, test_name: &str) -> BaselineResult<bool> {
        Ok(self.entries()?.contains_key(test_name))
    }

    /// The stored snapshot for `test_name`, if any.
    pub fn get_baseline(&mut self, test_name: &str) -> BaselineResult<Option<&MetricsSnapshot>> {
        Ok(self.entries()?.get(test_name))
    }

    /// Stored test names, sorted.
    pub fn test_names(&mut self) -> BaselineResult<Vec<String>> {
        Ok(self.entries()?.keys().cloned().collect())
    }

    /// Insert or overwrite the snapshot for `test_name` and rewrite the
    /// store file. No backup of a previous value is kept.
    pub fn save_baseline(
        &mut self,
        test_name: &str,
        snapshot: MetricsSnapshot,
    ) -> BaselineResult<()> {
        self.entries()?.insert(test_name.to_string(), snapshot);
        self.write()
    }

    /// Compare a fresh snapshot against the stored baseline.
    ///
    /// With no stored baseline the result is empty and carries no
    /// regression; the caller typically saves the fresh snapshot instead.
    pub fn compare_with_baseline(
        &mut self,
        test_name: &str,
        current: &MetricsSnapshot,
        threshold_percent: f64,
    ) -> BaselineResult<ComparisonResult> {
        match self.get_baseline(test_name)? {
            Some(baseline) => Ok(compare_snapshots(baseline, current, threshold_percent)),
            None => Ok(ComparisonResult::default()),
        }
    }

    /// Whole-file rewrite of the store.
    fn write(&mut self) -> BaselineResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(|err| BaselineError::Io {
                    path: self.path.clone(),
                    message: err.to_string(),
                })?;
            }
        }
        let entries = self.entries()?;
        let content = serde_json::to_string_pretty(entries)
            .map_err(|err| BaselineError::Serialize(err.to_string()))?;
        std::fs::write(&self.path, content).map_err(|err| BaselineError::Io {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SnapshotBuilder;
    use tempfile::TempDir;

    fn snapshot(load_complete: f64, total_time: f64) -> MetricsSnapshot {
        SnapshotBuilder::new()
            .load_complete(load_complete)
            .total_time(total_time)
            .build()
    }

    // ==================== Lazy-load tests ====================

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let mut store = BaselineStore::with_path(dir.path().join("none.json"));
        assert!(!store.baseline_exists("anything").unwrap());
        assert!(store.test_names().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty_by_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut store = BaselineStore::with_path(&path);
        assert!(!store.baseline_exists("login_perf").unwrap());
    }

    #[test]
    fn test_corrupt_file_fails_loudly_under_fail_policy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut store = BaselineStore::with_path(&path).with_policy(StorePolicy::Fail);
        let err = store.baseline_exists("login_perf").unwrap_err();
        assert!(matches!(err, BaselineError::CorruptStore { .. }));
        assert!(err.to_string().contains("store.json"));
    }

    // ==================== Save/get tests ====================

    #[test]
    fn test_save_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut store = BaselineStore::with_path(dir.path().join("store.json"));

        store.save_baseline("login_perf", snapshot(2.0, 1.0)).unwrap();
        let loaded = store.get_baseline("login_perf").unwrap().unwrap();
        assert_eq!(loaded.page_load.load_complete, 2.0);
        assert_eq!(loaded.network.total_time, 1.0);
    }

    #[test]
    fn test_save_creates_the_baselines_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("baselines").join("performance_baseline.json");
        let mut store = BaselineStore::with_path(&path);

        store.save_baseline("t", snapshot(1.0, 1.0)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_without_backup() {
        let dir = TempDir::new().unwrap();
        let mut store = BaselineStore::with_path(dir.path().join("store.json"));

        store.save_baseline("t", snapshot(2.0, 1.0)).unwrap();
        store.save_baseline("t", snapshot(3.0, 1.0)).unwrap();

        let loaded = store.get_baseline("t").unwrap().unwrap();
        assert_eq!(loaded.page_load.load_complete, 3.0);
        assert_eq!(store.test_names().unwrap().len(), 1);
    }

    #[test]
    fn test_save_keeps_other_entries() {
        let dir = TempDir::new().unwrap();
        let mut store = BaselineStore::with_path(dir.path().join("store.json"));

        store.save_baseline("a", snapshot(1.0, 1.0)).unwrap();
        store.save_baseline("b", snapshot(2.0, 2.0)).unwrap();
        assert_eq!(store.test_names().unwrap(), vec!["a", "b"]);
    }

    // ==================== Comparison tests ====================

    #[test]
    fn test_compare_without_baseline_is_clean() {
        let dir = TempDir::new().unwrap();
        let mut store = BaselineStore::with_path(dir.path().join("store.json"));

        let result = store
            .compare_with_baseline("new_test", &snapshot(9.0, 9.0), 15.0)
            .unwrap();
        assert!(!result.has_regression);
        assert!(result.differences.is_empty());
    }

    #[test]
    fn test_compare_against_saved_baseline() {
        let dir = TempDir::new().unwrap();
        let mut store = BaselineStore::with_path(dir.path().join("store.json"));

        store.save_baseline("login_perf", snapshot(2.0, 1.0)).unwrap();
        let result = store
            .compare_with_baseline("login_perf", &snapshot(2.5, 1.0), 15.0)
            .unwrap();
        assert!(result.has_regression);
    }
}
