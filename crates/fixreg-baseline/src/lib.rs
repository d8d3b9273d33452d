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

//! Performance baseline persistence and regression detection.
//!
//! A named [`MetricsSnapshot`] of a measured run is persisted into a
//! single-file [`BaselineStore`]; subsequent runs compare fresh snapshots
//! against the stored one and get back a [`ComparisonResult`] flagging any
//! tracked metric that worsened past a threshold.
//!
//! # Examples
//!
//! ```no_run
//! use fixreg_baseline::{BaselineStore, SnapshotBuilder};
//! use fixreg_core::Config;
//!
//! let config = Config::default();
//! let mut store = BaselineStore::new(&config);
//!
//! let fresh = SnapshotBuilder::new().load_complete(2.0).total_time(1.0).build();
//! if !store.baseline_exists("checkout_perf")? {
//!     store.save_baseline("checkout_perf", fresh)?;
//! }
//! # Ok::<(), fixreg_baseline::BaselineError>(())
//! ```

mod compare;
mod metrics;
mod store;

pub use compare::{
    compare_snapshots, ComparisonResult, MetricDelta, DEFAULT_REGRESSION_THRESHOLD,
};
pub use metrics::{
    MetricsSnapshot, NetworkTiming, PageLoadMetrics, ResourceTiming, SnapshotBuilder,
    TRACKED_METRICS,
};
pub use store::{BaselineError, BaselineResult, BaselineStore};
