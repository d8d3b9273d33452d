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

//! Error types for fixture loading.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The kind of error that occurred while loading a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureErrorKind {
    /// Fixture path does not exist.
    NotFound,
    /// Fixture content is malformed.
    Parse,
    /// Row field count differs from the header.
    Shape,
    /// Content is not valid UTF-8.
    Encoding,
    /// Underlying filesystem failure.
    Io,
}

impl fmt::Display for FixtureErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "FixtureNotFound"),
            Self::Parse => write!(f, "FixtureParseError"),
            Self::Shape => write!(f, "FixtureShapeError"),
            Self::Encoding => write!(f, "FixtureEncodingError"),
            Self::Io => write!(f, "FixtureIoError"),
        }
    }
}

/// An error raised while loading or validating a fixture file.
///
/// Loader errors are local to the fixture and fatal for it: a single bad
/// row invalidates the whole file, so a parametrized suite never runs
/// against a silently truncated record list.
///
/// # Examples
///
/// ```
/// use fixreg_core::{FixtureError, FixtureErrorKind};
///
/// let err = FixtureError::shape("expected 3 fields, found 2")
///     .with_path("fixtures/login.csv")
///     .with_line(4);
///
/// assert_eq!(err.kind, FixtureErrorKind::Shape);
/// assert_eq!(
///     err.to_string(),
///     "FixtureShapeError in fixtures/login.csv at line 4: expected 3 fields, found 2"
/// );
/// ```
#[derive(Debug, Clone, Error)]
#[error("{}{}{}: {}", .kind, fmt_path(.path), fmt_line(.line), .message)]
pub struct FixtureError {
    /// The kind of error.
    pub kind: FixtureErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Fixture file the error refers to, when known.
    pub path: Option<PathBuf>,
    /// Line number (1-based) within the fixture, when known.
    pub line: Option<usize>,
}

fn fmt_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" in {}", p.display()),
        None => String::new(),
    }
}

fn fmt_line(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}

impl FixtureError {
    /// Create a new error.
    pub fn new(kind: FixtureErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
            line: None,
        }
    }

    /// Attach the fixture path.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Attach a 1-based line number.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Append call-site context to the message.
    pub fn with_context(mut self, context: impl AsRef<str>) -> Self {
        self.message = format!("{} ({})", self.message, context.as_ref());
        self
    }

    // Convenience constructors for each error kind

    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::new(FixtureErrorKind::NotFound, "fixture file not found").with_path(path)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(FixtureErrorKind::Parse, message)
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(FixtureErrorKind::Shape, message)
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(FixtureErrorKind::Encoding, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(FixtureErrorKind::Io, message)
    }
}

impl From<std::io::Error> for FixtureError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                Self::new(FixtureErrorKind::NotFound, "fixture file not found")
            }
            _ => Self::io(err.to_string()),
        }
    }
}

/// Result alias for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Display tests ====================

    #[test]
    fn test_display_minimal() {
        let err = FixtureError::parse("bad row");
        assert_eq!(err.to_string(), "FixtureParseError: bad row");
    }

    #[test]
    fn test_display_with_path_and_line() {
        let err = FixtureError::shape("expected 2 fields, found 3")
            .with_path("data.csv")
            .with_line(7);
        assert_eq!(
            err.to_string(),
            "FixtureShapeError in data.csv at line 7: expected 2 fields, found 3"
        );
    }

    #[test]
    fn test_not_found_carries_path() {
        let err = FixtureError::not_found("missing.csv");
        assert_eq!(err.kind, FixtureErrorKind::NotFound);
        assert_eq!(err.path.as_deref(), Some(std::path::Path::new("missing.csv")));
    }

    // ==================== Builder tests ====================

    #[test]
    fn test_with_context_appends() {
        let err = FixtureError::parse("trailing data").with_context("while loading login set");
        assert!(err.to_string().contains("trailing data"));
        assert!(err.to_string().contains("while loading login set"));
    }

    #[test]
    fn test_io_error_not_found_maps_to_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FixtureError::from(io);
        assert_eq!(err.kind, FixtureErrorKind::NotFound);
    }

    #[test]
    fn test_io_error_other_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = FixtureError::from(io);
        assert_eq!(err.kind, FixtureErrorKind::Io);
    }
}
