// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use serde_json::Value;

/// The kind of a value in the generic key-value representation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a key-value map could not be turned into a props value.
#[derive(Clone, PartialEq, Debug)]
pub enum ShapeError {
    /// A required field is absent.
    MissingRequiredField {
        shape: &'static str,
        field: &'static str,
    },
    /// A field is present but holds the wrong kind of value.
    TypeMismatch {
        shape: &'static str,
        field: &'static str,
        expected: ValueKind,
        actual: ValueKind,
    },
    /// A label field holds a string outside its closed set.
    InvalidEnumValue {
        shape: &'static str,
        field: &'static str,
        value: String,
    },
}

impl ShapeError {
    pub fn field(&self) -> &'static str {
        match self {
            ShapeError::MissingRequiredField { field, .. } => *field,
            ShapeError::TypeMismatch { field, .. } => *field,
            ShapeError::InvalidEnumValue { field, .. } => *field,
        }
    }
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::MissingRequiredField { shape, field } => {
                write!(f, "{shape}: missing required field '{field}'")
            }
            ShapeError::TypeMismatch {
                shape,
                field,
                expected,
                actual,
            } => write!(
                f,
                "{shape}: field '{field}' should be a {expected}, found a {actual}"
            ),
            ShapeError::InvalidEnumValue {
                shape,
                field,
                value,
            } => write!(f, "{shape}: field '{field}' has invalid value '{value}'"),
        }
    }
}

impl Error for ShapeError {}

/// The error type of the command-line tool.
#[derive(Debug)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ErrorReport {}

impl From<ShapeError> for ErrorReport {
    fn from(value: ShapeError) -> Self {
        ErrorReport::new(&value.to_string())
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport::new(&format!("I/O error: {value}"))
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport::new(&format!("JSON error: {value}"))
    }
}

impl From<toml::de::Error> for ErrorReport {
    fn from(value: toml::de::Error) -> Self {
        ErrorReport::new(&format!("TOML parse error: {value}"))
    }
}

impl From<toml::ser::Error> for ErrorReport {
    fn from(value: toml::ser::Error) -> Self {
        ErrorReport::new(&format!("TOML serialization error: {value}"))
    }
}

impl From<walkdir::Error> for ErrorReport {
    fn from(value: walkdir::Error) -> Self {
        ErrorReport::new(&format!("directory walk error: {value}"))
    }
}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(message: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport {
        message: message.into(),
    })
}
