#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the slugify crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the slug pipeline, the configuration
/// loader, and the CLI.
///
/// Malformed HTML entities never produce an error; they are left in the text
/// as literals. The only failure of the core pipeline is
/// [`Error::InvalidInput`], raised when the input has no textual form.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Returned when the input value cannot be converted into text.
    #[error("expected a value with a textual representation, got {type_name}")]
    InvalidInput {
        /// Name of the rejected input type.
        type_name: &'static str
    },
    /// Wraps compilation failures of caller supplied patterns.
    #[error("invalid pattern: {source}")]
    Pattern {
        /// Underlying regex compilation error.
        source: regex::Error
    },
    /// Wraps I/O errors that occur while reading configuration files or
    /// input text.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// Location of the file, `<stdin>` for standard input.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when options or arguments violate invariants.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps I/O errors that occur while writing results.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps serialization errors when writing JSON output.
    #[error("failed to serialize output: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs an invalid input error naming the rejected type.
    pub fn invalid_input(type_name: &'static str) -> Self {
        Self::InvalidInput {
            type_name
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Output {
            source
        }
    }
}

impl From<regex::Error> for Error {
    fn from(source: regex::Error) -> Self {
        Self::Pattern {
            source
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn validation_constructor_populates_message() {
        let error = Error::validation("replacement source must not be empty");
        match error {
            Error::Validation {
                ref message
            } => {
                assert_eq!(message, "replacement source must not be empty");
            }
            other => panic!("expected validation error, got {other:?}")
        }
    }

    #[test]
    fn invalid_input_names_the_type() {
        let error = Error::invalid_input("None");
        assert_eq!(
            error.to_string(),
            "expected a value with a textual representation, got None"
        );
    }

    #[test]
    fn to_display_string_matches_display() {
        let error = Error::validation("display me");
        assert_eq!(error.to_string(), error.to_display_string());
    }

    #[test]
    fn io_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/slugify.yaml");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = super::io_error(path, io_error);

        match error {
            Error::Io {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}")
        }
    }

    #[test]
    fn io_conversion_maps_to_output_variant() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let mapped: Error = io_error.into();
        assert!(matches!(mapped, Error::Output { .. }));
    }

    #[test]
    fn regex_conversion_maps_to_pattern_variant() {
        let error = regex::Regex::new("(unclosed").unwrap_err();
        let mapped: Error = error.into();
        assert!(matches!(mapped, Error::Pattern { .. }));
    }

    #[test]
    fn serde_yaml_conversion_maps_to_parse_variant() {
        let error = serde_yaml::from_str::<usize>("not-a-number").unwrap_err();
        let mapped: Error = error.into();
        assert!(matches!(mapped, Error::Parse { .. }));
    }

    #[test]
    fn serde_json_conversion_maps_to_serialize_variant() {
        let invalid = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let mapped: Error = invalid.into();
        assert!(matches!(mapped, Error::Serialize { .. }));
    }
}
