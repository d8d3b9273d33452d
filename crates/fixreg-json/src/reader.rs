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

//! Parse structured fixture files into record sets.

use fixreg_core::{FixtureError, FixtureResult, Record, RecordSet, Value};
use serde_json::{Map, Value as JsonValue};
use std::path::Path;

/// Load a structured fixture file.
///
/// # Errors
///
/// - `NotFound` if `path` does not exist
/// - `Encoding` if the content is not valid UTF-8
/// - `Parse` if the content is not JSON, the top level is not an array of
///   flat objects (or one flat object), or a record value is nested
pub fn load_structured(path: impl AsRef<Path>) -> FixtureResult<RecordSet> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FixtureError::not_found(path));
    }
    let content = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::InvalidData {
            FixtureError::encoding("fixture is not valid UTF-8").with_path(path)
        } else {
            FixtureError::from(err).with_path(path)
        }
    })?;
    from_structured_str(&content).map_err(|err| err.with_path(path))
}

/// Parse structured fixture content.
///
/// Accepts a top-level array of flat objects, or a single flat object
/// (yielding a one-record set). Scalar types pass through natively.
pub fn from_structured_str(content: &str) -> FixtureResult<RecordSet> {
    let parsed: JsonValue = serde_json::from_str(content).map_err(|err| {
        FixtureError::parse(format!("invalid JSON: {}", err)).with_line(err.line())
    })?;

    let objects: Vec<&Map<String, JsonValue>> = match &parsed {
        JsonValue::Array(elements) => elements
            .iter()
            .enumerate()
            .map(|(index, element)| {
                element.as_object().ok_or_else(|| {
                    FixtureError::parse(format!(
                        "record {} is not an object",
                        index
                    ))
                })
            })
            .collect::<FixtureResult<_>>()?,
        JsonValue::Object(object) => vec![object],
        other => {
            return Err(FixtureError::parse(format!(
                "top level must be an array of records or a record, found {}",
                json_type_name(other)
            )))
        }
    };

    // Field order is first-seen across all records; RecordSet::new fills
    // the gaps with nulls.
    let mut field_names: Vec<String> = Vec::new();
    for object in &objects {
        for key in object.keys() {
            if !field_names.iter().any(|name| name == key) {
                field_names.push(key.clone());
            }
        }
    }

    let mut records = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter().enumerate() {
        let mut fields = Vec::with_capacity(object.len());
        for (key, value) in object.iter() {
            let value = scalar_value(value).ok_or_else(|| {
                FixtureError::parse(format!(
                    "field '{}' of record {} is not a flat scalar",
                    key, index
                ))
            })?;
            fields.push((key.clone(), value));
        }
        records.push(Record::from_fields(fields));
    }

    if records.is_empty() {
        return Ok(RecordSet::empty(field_names));
    }
    Ok(RecordSet::new(field_names, records))
}

/// Map a JSON scalar onto a record value; `None` for nested shapes.
fn scalar_value(value: &JsonValue) -> Option<Value> {
    match value {
        JsonValue::Null => Some(Value::Null),
        JsonValue::Bool(b) => Some(Value::Bool(*b)),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Some(Value::Int(i)),
            None => n.as_f64().map(Value::Float),
        },
        JsonValue::String(s) => Some(Value::String(s.clone())),
        JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixreg_core::FixtureErrorKind;

    // ==================== Native-type tests ====================

    #[test]
    fn test_scalars_pass_through_natively() {
        let set = from_structured_str(
            r#"[{"s": "x", "i": 7, "f": 1.5, "b": true, "n": null}]"#,
        )
        .unwrap();
        let record = &set.records()[0];
        assert_eq!(record.get("s"), Some(&Value::from("x")));
        assert_eq!(record.get("i"), Some(&Value::Int(7)));
        assert_eq!(record.get("f"), Some(&Value::Float(1.5)));
        assert_eq!(record.get("b"), Some(&Value::Bool(true)));
        assert_eq!(record.get("n"), Some(&Value::Null));
    }

    #[test]
    fn test_integral_numbers_are_ints_not_floats() {
        let set = from_structured_str(r#"[{"n": 3}]"#).unwrap();
        assert_eq!(set.records()[0].get("n"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_huge_number_falls_back_to_float() {
        let set = from_structured_str(r#"[{"n": 18446744073709551615}]"#).unwrap();
        assert_eq!(
            set.records()[0].get("n"),
            Some(&Value::Float(18446744073709551615.0))
        );
    }

    // ==================== Top-level shape tests ====================

    #[test]
    fn test_single_object_becomes_one_record_set() {
        let set = from_structured_str(r#"{"username": "admin"}"#).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].get_str("username"), Some("admin"));
    }

    #[test]
    fn test_empty_array_is_empty_set() {
        let set = from_structured_str("[]").unwrap();
        assert!(set.is_empty());
        assert!(set.field_names().is_empty());
    }

    #[test]
    fn test_top_level_scalar_is_parse_error() {
        let err = from_structured_str("42").unwrap_err();
        assert_eq!(err.kind, FixtureErrorKind::Parse);
        assert!(err.to_string().contains("found a number"));
    }

    #[test]
    fn test_non_object_element_is_parse_error() {
        let err = from_structured_str(r#"[{"a": 1}, 2]"#).unwrap_err();
        assert_eq!(err.kind, FixtureErrorKind::Parse);
        assert!(err.to_string().contains("record 1"));
    }

    // ==================== Flatness tests ====================

    #[test]
    fn test_nested_object_value_is_parse_error() {
        let err = from_structured_str(r#"[{"a": {"nested": 1}}]"#).unwrap_err();
        assert_eq!(err.kind, FixtureErrorKind::Parse);
        assert!(err.to_string().contains("field 'a'"));
    }

    #[test]
    fn test_array_value_is_parse_error() {
        let err = from_structured_str(r#"[{"a": [1, 2]}]"#).unwrap_err();
        assert_eq!(err.kind, FixtureErrorKind::Parse);
    }

    // ==================== Normalization tests ====================

    #[test]
    fn test_differing_key_sets_are_unioned() {
        let set = from_structured_str(
            r#"[{"a": 1, "b": 2}, {"a": 3, "c": 4}]"#,
        )
        .unwrap();
        assert_eq!(set.field_names(), &["a", "b", "c"]);
        assert_eq!(set.records()[0].get("c"), Some(&Value::Null));
        assert_eq!(set.records()[1].get("b"), Some(&Value::Null));
    }

    #[test]
    fn test_field_order_is_first_seen() {
        let set = from_structured_str(
            r#"[{"z": 1}, {"a": 2, "z": 3}]"#,
        )
        .unwrap();
        assert_eq!(set.field_names(), &["z", "a"]);
    }

    // ==================== Syntax-error tests ====================

    #[test]
    fn test_invalid_json_is_parse_error_with_line() {
        let err = from_structured_str("[\n  {\"a\": }\n]").unwrap_err();
        assert_eq!(err.kind, FixtureErrorKind::Parse);
        assert_eq!(err.line, Some(2));
    }
}
