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

//! Shared test fixtures for the FIXREG crates.
//!
//! Canonical fixture strings, record sets, and metric snapshots used
//! across loader, store, and CLI test suites, so the suites agree on one
//! well-known data set (the login scenario) instead of each inventing its
//! own.
//!
//! # Examples
//!
//! ```
//! use fixreg_test::fixtures;
//!
//! let set = fixtures::login_records();
//! assert_eq!(set.len(), 2);
//!
//! let csv = fixtures::login_csv();
//! assert!(csv.starts_with("username,"));
//! ```

pub mod fixtures;
