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

//! Structured fixture loader.
//!
//! Reads a JSON fixture containing a top-level array of flat records (or a
//! single flat object, treated as a one-record set) into a
//! [`RecordSet`](fixreg_core::RecordSet).
//!
//! Unlike the delimited loader, scalar types pass through natively:
//! strings, booleans, nulls, and numbers become the corresponding
//! [`Value`](fixreg_core::Value) variants without coercion. The asymmetry
//! is intentional: the delimited format has no native types, the
//! structured one does.
//!
//! Records are flat; a nested object or array value is a parse error.
//! Records with differing key sets are normalized to the union of all
//! keys, missing fields becoming null.
//!
//! # Examples
//!
//! ```
//! use fixreg_core::Value;
//! use fixreg_json::from_structured_str;
//!
//! let json_data = r#"[
//!     {"username": "standard_user", "attempts": 3, "locked": false},
//!     {"username": "bad_user", "attempts": 1, "locked": true}
//! ]"#;
//!
//! let set = from_structured_str(json_data).unwrap();
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.records()[0].get("attempts"), Some(&Value::Int(3)));
//! assert_eq!(set.records()[1].get("locked"), Some(&Value::Bool(true)));
//! ```

mod reader;

pub use reader::{from_structured_str, load_structured};
