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

//! Normalized fixture records and the queries driving parametrized tests.

use crate::value::Value;
use std::collections::BTreeMap;

/// One normalized row of fixture data, exposed as a field→value mapping.
///
/// Records are constructed once by a loader (or a test builder) and are
/// immutable afterwards; they live only for the duration of a test run.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Build a record from field/value pairs.
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Get a field value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Get a field value as a string, when it is one.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Whether the field name is present as a key (the value may be null).
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterate over field names, in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A loaded fixture: an ordered field list plus its records.
///
/// The field list preserves declaration order (the header order of a
/// delimited fixture, or first-seen order of a structured one). Invariant:
/// every record exposes exactly this field set. The constructor enforces it
/// by normalizing missing fields to [`Value::Null`] and appending unlisted
/// keys, so downstream code can index any record by any known field without
/// existence checks.
///
/// # Examples
///
/// ```
/// use fixreg_core::{Record, RecordSet, Value};
///
/// let set = RecordSet::new(
///     vec!["username".into(), "expected_result".into()],
///     vec![
///         Record::from_fields([("username", Value::from("standard_user"))]),
///     ],
/// );
///
/// // The missing field was normalized, not omitted.
/// assert_eq!(set.records()[0].get("expected_result"), Some(&Value::Null));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    field_names: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    /// Build a record set, normalizing every record to the full field set.
    ///
    /// Fields listed in `field_names` but absent from a record become
    /// [`Value::Null`]. Record keys not listed in `field_names` are
    /// appended to the field list in first-encounter order.
    pub fn new(field_names: Vec<String>, records: Vec<Record>) -> Self {
        let mut field_names = field_names;
        for record in &records {
            for name in record.field_names() {
                if !field_names.iter().any(|f| f == name) {
                    field_names.push(name.to_string());
                }
            }
        }

        let records = records
            .into_iter()
            .map(|record| {
                let mut fields = record.fields;
                for name in &field_names {
                    fields.entry(name.clone()).or_insert(Value::Null);
                }
                Record { fields }
            })
            .collect();

        Self {
            field_names,
            records,
        }
    }

    /// An empty set carrying only a field list (e.g. a header-only fixture).
    pub fn empty(field_names: Vec<String>) -> Self {
        Self {
            field_names,
            records: Vec::new(),
        }
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// The normalized records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Keep the records whose listed fields all match exactly.
    ///
    /// Matching is typed equality on [`Value`]; there is no partial or
    /// fuzzy matching. The operation is idempotent: filtering an already
    /// filtered set with the same predicate returns the same records.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixreg_core::{Record, RecordSet, Value};
    ///
    /// let set = RecordSet::new(
    ///     vec!["user".into(), "expected_result".into()],
    ///     vec![
    ///         Record::from_fields([("user", Value::from("a")), ("expected_result", Value::from("success"))]),
    ///         Record::from_fields([("user", Value::from("b")), ("expected_result", Value::from("failure"))]),
    ///     ],
    /// );
    ///
    /// let passing = set.filter(&[("expected_result", Value::from("success"))]);
    /// assert_eq!(passing.len(), 1);
    /// assert_eq!(passing.records()[0].get_str("user"), Some("a"));
    /// ```
    pub fn filter(&self, predicate: &[(&str, Value)]) -> RecordSet {
        let records = self
            .records
            .iter()
            .filter(|record| {
                predicate
                    .iter()
                    .all(|(field, expected)| record.get(field) == Some(expected))
            })
            .cloned()
            .collect();

        Self {
            field_names: self.field_names.clone(),
            records,
        }
    }

    /// First record whose field equals `value`, or `None`.
    ///
    /// Absence is never an error; an unknown field name simply matches
    /// nothing.
    pub fn find_by_field(&self, field: &str, value: &Value) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.get(field) == Some(value))
    }

    /// True only if the set is non-empty and every record carries every
    /// required field name as a key (values may be null).
    ///
    /// Used to fail fast before running a long parametrized suite against
    /// malformed fixtures. An empty set validates as `false`: it cannot
    /// drive a suite.
    pub fn validate_required_fields(&self, required: &[&str]) -> bool {
        if self.records.is_empty() {
            return false;
        }
        self.records
            .iter()
            .all(|record| required.iter().all(|field| record.contains_field(field)))
    }

    /// Reshape into parameter tuples for a test runner, one per record,
    /// values in field-name order. Pure reshaping, no side effects.
    pub fn parameter_sets(&self) -> Vec<Vec<Value>> {
        self.records
            .iter()
            .map(|record| {
                self.field_names
                    .iter()
                    .map(|name| record.get(name).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
