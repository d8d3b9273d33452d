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

//! Parse delimited fixture files into record sets.

use fixreg_core::{FixtureError, FixtureResult, Record, RecordSet, Value};
use std::path::Path;

/// Default maximum number of data rows per fixture.
///
/// A fixture is loaded wholesale into memory; the cap bounds worst-case
/// allocation against runaway or malicious input files.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for delimited parsing.
///
/// # Examples
///
/// ```
/// # use fixreg_csv::DelimitedConfig;
/// let config = DelimitedConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
///
/// ## Semicolon-delimited input
///
/// ```
/// # use fixreg_csv::DelimitedConfig;
/// let config = DelimitedConfig {
///     delimiter: b';',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DelimitedConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,
    /// Whether to trim leading/trailing whitespace from headers and fields
    /// (default: `true`).
    pub trim: bool,
    /// Maximum number of data rows to parse (default: 1,000,000).
    pub max_rows: usize,
}

impl Default for DelimitedConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Load a delimited fixture file with the default configuration.
///
/// # Errors
///
/// - `NotFound` if `path` does not exist
/// - `Encoding` if the content is not valid UTF-8
/// - `Parse` for a missing or invalid header row
/// - `Shape` for a data row whose field count differs from the header,
///   naming the file and 1-based line
pub fn load_delimited(path: impl AsRef<Path>) -> FixtureResult<RecordSet> {
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
    from_delimited_str(&content, &DelimitedConfig::default())
        .map_err(|err| err.with_path(path))
}

/// Parse delimited fixture content.
///
/// The first row is the header; subsequent rows become records keyed by
/// the header fields, every value a [`Value::String`].
pub fn from_delimited_str(content: &str, config: &DelimitedConfig) -> FixtureResult<RecordSet> {
    if content.trim().is_empty() {
        return Err(FixtureError::parse("missing header row").with_line(1));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(false)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(content.as_bytes());

    let fields = parse_header(reader.headers().map_err(map_csv_error)?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(map_csv_error)?;
        if records.len() >= config.max_rows {
            return Err(FixtureError::parse(format!(
                "fixture exceeds maximum of {} rows",
                config.max_rows
            )));
        }
        records.push(Record::from_fields(
            fields
                .iter()
                .cloned()
                .zip(row.iter().map(Value::from)),
        ));
    }

    if records.is_empty() {
        return Ok(RecordSet::empty(fields));
    }
    Ok(RecordSet::new(fields, records))
}

/// Validate the header row: non-empty, no blank names, no duplicates.
fn parse_header(headers: &csv::StringRecord) -> FixtureResult<Vec<String>> {
    let fields: Vec<String> = headers.iter().map(str::to_string).collect();
    if fields.is_empty() || fields.iter().all(String::is_empty) {
        return Err(FixtureError::parse("missing header row").with_line(1));
    }
    for (position, name) in fields.iter().enumerate() {
        if name.is_empty() {
            return Err(FixtureError::parse(format!(
                "empty header name at position {}",
                position
            ))
            .with_line(1));
        }
        if fields[..position].contains(name) {
            return Err(FixtureError::parse(format!(
                "duplicate header name '{}'",
                name
            ))
            .with_line(1));
        }
    }
    Ok(fields)
}

/// Map csv-crate errors onto the fixture taxonomy, keeping line context.
fn map_csv_error(err: csv::Error) -> FixtureError {
    let line = err
        .position()
        .map(|pos| pos.line() as usize)
        .filter(|line| *line > 0);
    let mapped = match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => FixtureError::shape(format!(
            "expected {} fields, found {}",
            expected_len, len
        )),
        csv::ErrorKind::Utf8 { .. } => {
            FixtureError::encoding("fixture row is not valid UTF-8")
        }
        _ => FixtureError::parse(err.to_string()),
    };
    match line {
        Some(line) => mapped.with_line(line),
        None => mapped,
    }
}
