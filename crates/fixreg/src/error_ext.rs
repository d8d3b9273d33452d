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

//! Error context helpers for fixture results.
//!
//! Extension methods on `Result<T, FixtureError>` that append call-site
//! context as an error propagates, without losing the error's kind, path,
//! or line information.
//!
//! # Examples
//!
//! ```no_run
//! use fixreg::{load_delimited, FixtureResultExt, RecordSet};
//!
//! fn load_login_set(suite: &str) -> Result<RecordSet, fixreg::FixtureError> {
//!     load_delimited("fixtures/login.csv")
//!         .with_context(|| format!("while preparing suite {}", suite))
//! }
//! ```

use fixreg_core::FixtureError;

/// Context extensions for fixture results.
pub trait FixtureResultExt<T> {
    /// Append static context to the error message.
    fn context(self, context: impl AsRef<str>) -> Result<T, FixtureError>;

    /// Append lazily computed context to the error message.
    ///
    /// Use when the context is expensive to build; the closure only runs
    /// on the error path.
    fn with_context<C, F>(self, f: F) -> Result<T, FixtureError>
    where
        C: AsRef<str>,
        F: FnOnce() -> C;
}

impl<T> FixtureResultExt<T> for Result<T, FixtureError> {
    fn context(self, context: impl AsRef<str>) -> Result<T, FixtureError> {
        self.map_err(|err| err.with_context(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, FixtureError>
    where
        C: AsRef<str>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| err.with_context(f()))
    }
}
