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

//! The measured-run snapshot model.
//!
//! All timing values are in seconds. A value that could not be captured is
//! NaN ("unknown"), never zero; NaN round-trips through the JSON store as
//! `null`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Metric names the comparator tracks across runs.
///
/// Extending regression coverage to another timing is a matter of adding
/// its dotted name here and to [`MetricsSnapshot::metric`].
pub const TRACKED_METRICS: [&str; 2] = ["pageLoad.loadComplete", "network.totalTime"];

/// JSON adapter storing unknown (NaN) timings as `null`.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

fn unknown() -> f64 {
    f64::NAN
}

/// Page-load timings relative to navigation start, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLoadMetrics {
    #[serde(with = "nan_as_null", default = "unknown")]
    pub dom_content_loaded: f64,
    #[serde(with = "nan_as_null", default = "unknown")]
    pub load_complete: f64,
    #[serde(with = "nan_as_null", default = "unknown")]
    pub dom_interactive: f64,
    #[serde(with = "nan_as_null", default = "unknown")]
    pub dom_complete: f64,
}

impl Default for PageLoadMetrics {
    /// Every timing starts unknown, not zero.
    fn default() -> Self {
        Self {
            dom_content_loaded: f64::NAN,
            load_complete: f64::NAN,
            dom_interactive: f64::NAN,
            dom_complete: f64::NAN,
        }
    }
}

/// Network phase timings, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkTiming {
    #[serde(with = "nan_as_null", default = "unknown")]
    pub dns: f64,
    #[serde(with = "nan_as_null", default = "unknown")]
    pub tcp: f64,
    #[serde(with = "nan_as_null", default = "unknown")]
    pub request: f64,
    #[serde(with = "nan_as_null", default = "unknown")]
    pub response: f64,
    #[serde(with = "nan_as_null", default = "unknown")]
    pub dom_processing: f64,
    #[serde(with = "nan_as_null", default = "unknown")]
    pub total_time: f64,
}

impl Default for NetworkTiming {
    fn default() -> Self {
        Self {
            dns: f64::NAN,
            tcp: f64::NAN,
            request: f64::NAN,
            response: f64::NAN,
            dom_processing: f64::NAN,
            total_time: f64::NAN,
        }
    }
}

/// One fetched resource's timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceTiming {
    /// Resource URL.
    pub name: String,
    /// Fetch duration in seconds.
    #[serde(with = "nan_as_null", default = "unknown")]
    pub duration: f64,
    /// Transfer size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Initiator type ("script", "img", ...).
    #[serde(rename = "type")]
    pub kind: String,
}

/// One measured run's performance characteristics.
///
/// Created fresh after each measured run; either persisted as the first
/// baseline for a test name or compared against the stored one.
///
/// # Examples
///
/// ```
/// use fixreg_baseline::SnapshotBuilder;
///
/// let snapshot = SnapshotBuilder::new()
///     .load_complete(2.0)
///     .total_time(1.0)
///     .build();
///
/// assert_eq!(snapshot.metric("pageLoad.loadComplete"), Some(2.0));
/// // Unmeasured timings stay unknown.
/// assert!(snapshot.network.dns.is_nan());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    #[serde(default)]
    pub page_load: PageLoadMetrics,
    #[serde(default)]
    pub network: NetworkTiming,
    #[serde(default)]
    pub resources: Vec<ResourceTiming>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub action_time: Option<f64>,
}

impl MetricsSnapshot {
    /// Look up a timing by dotted metric name.
    ///
    /// `None` means the name is not a known metric; an unknown *value* is
    /// `Some(NaN)`.
    pub fn metric(&self, name: &str) -> Option<f64> {
        match name {
            "pageLoad.domContentLoaded" => Some(self.page_load.dom_content_loaded),
            "pageLoad.loadComplete" => Some(self.page_load.load_complete),
            "pageLoad.domInteractive" => Some(self.page_load.dom_interactive),
            "pageLoad.domComplete" => Some(self.page_load.dom_complete),
            "network.dns" => Some(self.network.dns),
            "network.tcp" => Some(self.network.tcp),
            "network.request" => Some(self.network.request),
            "network.response" => Some(self.network.response),
            "network.domProcessing" => Some(self.network.dom_processing),
            "network.totalTime" => Some(self.network.total_time),
            _ => None,
        }
    }

    /// Tracked metric names paired with this snapshot's values.
    pub fn tracked(&self) -> Vec<(&'static str, f64)> {
        TRACKED_METRICS
            .iter()
            .filter_map(|&name| self.metric(name).map(|value| (name, value)))
            .collect()
    }

    /// The `count` slowest resources, by duration. Resources with unknown
    /// duration sort last.
    pub fn slowest_resources(&self, count: usize) -> Vec<ResourceTiming> {
        let mut resources = self.resources.clone();
        resources.sort_by(|a, b| match (a.duration.is_nan(), b.duration.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b
                .duration
                .partial_cmp(&a.duration)
                .unwrap_or(Ordering::Equal),
        });
        resources.truncate(count);
        resources
    }
}

/// Fluent builder for snapshots.
///
/// Setters clamp negative timings to zero (a clock skew artifact, not a
/// meaningful measurement); NaN passes through as unknown.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    snapshot: MetricsSnapshot,
}

fn clamp(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dom_content_loaded(mut self, seconds: f64) -> Self {
        self.snapshot.page_load.dom_content_loaded = clamp(seconds);
        self
    }

    pub fn load_complete(mut self, seconds: f64) -> Self {
        self.snapshot.page_load.load_complete = clamp(seconds);
        self
    }

    pub fn dom_interactive(mut self, seconds: f64) -> Self {
        self.snapshot.page_load.dom_interactive = clamp(seconds);
        self
    }

    pub fn dom_complete(mut self, seconds: f64) -> Self {
        self.snapshot.page_load.dom_complete = clamp(seconds);
        self
    }

    pub fn dns(mut self, seconds: f64) -> Self {
        self.snapshot.network.dns = clamp(seconds);
        self
    }

    pub fn tcp(mut self, seconds: f64) -> Self {
        self.snapshot.network.tcp = clamp(seconds);
        self
    }

    pub fn request(mut self, seconds: f64) -> Self {
        self.snapshot.network.request = clamp(seconds);
        self
    }

    pub fn response(mut self, seconds: f64) -> Self {
        self.snapshot.network.response = clamp(seconds);
        self
    }

    pub fn dom_processing(mut self, seconds: f64) -> Self {
        self.snapshot.network.dom_processing = clamp(seconds);
        self
    }

    pub fn total_time(mut self, seconds: f64) -> Self {
        self.snapshot.network.total_time = clamp(seconds);
        self
    }

    pub fn action_time(mut self, seconds: f64) -> Self {
        self.snapshot.action_time = Some(clamp(seconds));
        self
    }

    pub fn resource(
        mut self,
        name: impl Into<String>,
        duration: f64,
        size: u64,
        kind: impl Into<String>,
    ) -> Self {
        self.snapshot.resources.push(ResourceTiming {
            name: name.into(),
            duration: clamp(duration),
            size,
            kind: kind.into(),
        });
        self
    }

    pub fn build(self) -> MetricsSnapshot {
        self.snapshot
    }
}
