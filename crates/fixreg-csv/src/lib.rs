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

//! Delimited-text fixture loader.
//!
//! Reads a delimited fixture file whose first line is a header row of field
//! names and yields a [`RecordSet`](fixreg_core::RecordSet) with one record
//! per data line. Every value is a string; the delimited format has no
//! native types, so callers coerce where needed.
//!
//! # Format rules
//!
//! - The header row is mandatory; empty or duplicate field names are parse
//!   errors.
//! - Every data row must have exactly the header's field count. A short or
//!   long row fails the whole fixture with a shape error naming the line;
//!   silently dropping or padding rows would desynchronize parametrized
//!   test counts from intended coverage.
//! - Values containing the delimiter, quotes, or newlines use RFC-4180
//!   quoting: the field is wrapped in double quotes and embedded quotes are
//!   doubled (`""`).
//!
//! # Examples
//!
//! ```
//! use fixreg_csv::from_delimited_str;
//! use fixreg_csv::DelimitedConfig;
//!
//! let csv_data = "username,password,expected_result\n\
//!                 standard_user,secret_sauce,success\n\
//!                 bad_user,bad_pass,failure";
//!
//! let set = from_delimited_str(csv_data, &DelimitedConfig::default()).unwrap();
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.field_names(), &["username", "password", "expected_result"]);
//! ```
//!
//! ## Tab-delimited input
//!
//! ```
//! use fixreg_csv::{from_delimited_str, DelimitedConfig};
//!
//! let tsv_data = "id\tname\n1\tAlice";
//! let config = DelimitedConfig {
//!     delimiter: b'\t',
//!     ..Default::default()
//! };
//! let set = from_delimited_str(tsv_data, &config).unwrap();
//! assert_eq!(set.records()[0].get_str("name"), Some("Alice"));
//! ```

mod reader;

pub use reader::{from_delimited_str, load_delimited, DelimitedConfig, DEFAULT_MAX_ROWS};
