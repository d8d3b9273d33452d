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

//! Core record model for FIXREG fixtures.
//!
//! This crate provides the shared building blocks of the toolkit:
//!
//! - [`Value`] and [`Record`]/[`RecordSet`]: the normalized row
//!   representation every loader produces, plus the filter/find/validate
//!   queries consumed by parametrized test generation
//! - [`FixtureError`]/[`FixtureResult`]: the loader error taxonomy, with
//!   file path and line context
//! - [`Config`]: explicitly constructed run configuration (directories,
//!   store policy, regression threshold), replacing any process-wide
//!   singleton

mod config;
mod error;
mod record;
mod value;

pub use config::{Config, StorePolicy};
pub use error::{FixtureError, FixtureErrorKind, FixtureResult};
pub use record::{Record, RecordSet};
pub use value::Value;
