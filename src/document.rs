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

//! Props documents: files that hold lists of feedback and statistic entries.
//!
//! A document is an object with two optional array keys, `feedback` and
//! `statistic`. In TOML these are arrays of tables:
//!
//! ```toml
//! [[statistic]]
//! statText = "Users"
//! statNumber = 4200
//! bgColor = "#000"
//! ```

use std::fmt::Display;
use std::fmt::Formatter;
use std::fs::read_to_string;
use std::path::Path;

use clap::ValueEnum;
use serde_json::Value;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::ShapeError;
use crate::error::ValueKind;
use crate::error::fail;
use crate::shape::KeyValue;
use crate::shape::Shape;
use crate::types::feedback::FeedbackProps;
use crate::types::stat_number::NonFiniteNumber;
use crate::types::statistic::StatisticProps;

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Format {
    /// JSON.
    Json,
    /// TOML.
    Toml,
}

impl Format {
    pub fn from_path(path: &Path) -> Fallible<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => fail(format!(
                "{}: unknown document format, expected a .json or .toml file.",
                path.display()
            )),
        }
    }

    pub fn parse(&self, text: &str) -> Fallible<Value> {
        match self {
            Format::Json => Ok(serde_json::from_str(text)?),
            Format::Toml => {
                let table: toml::Table = toml::from_str(text)?;
                // JSON has no room for these, so they would come through as null.
                if let Some((path, number)) = find_non_finite(&table, "") {
                    return fail(format!("{path}: {}", NonFiniteNumber(number)));
                }
                Ok(serde_json::to_value(table)?)
            }
        }
    }

    pub fn render(&self, value: &Value) -> Fallible<String> {
        match self {
            Format::Json => Ok(serde_json::to_string_pretty(value)?),
            Format::Toml => Ok(toml::to_string_pretty(value)?),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Toml => write!(f, "toml"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Feedback,
    Statistic,
}

impl Section {
    pub fn key(&self) -> &'static str {
        match self {
            Section::Feedback => "feedback",
            Section::Statistic => "statistic",
        }
    }
}

/// Something wrong with a document.
#[derive(Clone, PartialEq, Debug)]
pub enum Problem {
    /// The document itself is not an object.
    NotAnObject(ValueKind),
    /// A section is present but is not an array.
    NotAnArray { section: Section, actual: ValueKind },
    /// An entry of a section is not a valid props value.
    Entry {
        section: Section,
        index: usize,
        error: ShapeError,
    },
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::NotAnObject(actual) => {
                write!(f, "document should be an object, found a {actual}")
            }
            Problem::NotAnArray { section, actual } => write!(
                f,
                "section '{}' should be an array, found a {actual}",
                section.key()
            ),
            Problem::Entry {
                section,
                index,
                error,
            } => write!(f, "{}[{index}]: {error}", section.key()),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Document {
    pub feedback: Vec<FeedbackProps>,
    pub statistic: Vec<StatisticProps>,
}

impl Document {
    /// Validates every entry, collecting all problems rather than stopping at
    /// the first.
    pub fn from_value(value: &Value) -> Result<Self, Vec<Problem>> {
        let map = match value {
            Value::Object(map) => map,
            other => return Err(vec![Problem::NotAnObject(ValueKind::of(other))]),
        };
        for key in map.keys() {
            if key != Section::Feedback.key() && key != Section::Statistic.key() {
                log::warn!("ignoring unknown document key '{key}'");
            }
        }
        let mut problems = Vec::new();
        let feedback = read_section(map, Section::Feedback, &mut problems);
        let statistic = read_section(map, Section::Statistic, &mut problems);
        if problems.is_empty() {
            Ok(Self {
                feedback,
                statistic,
            })
        } else {
            Err(problems)
        }
    }

    /// The normalized document. Empty sections are omitted.
    pub fn to_value(&self) -> Value {
        let mut map = KeyValue::new();
        if !self.feedback.is_empty() {
            map.insert(
                Section::Feedback.key().to_string(),
                self.feedback.iter().map(Shape::to_value).collect(),
            );
        }
        if !self.statistic.is_empty() {
            map.insert(
                Section::Statistic.key().to_string(),
                self.statistic.iter().map(Shape::to_value).collect(),
            );
        }
        Value::Object(map)
    }

    pub fn parse(text: &str, format: Format) -> Fallible<Self> {
        let value = format.parse(text)?;
        Self::from_value(&value).map_err(|problems| report(&problems))
    }

    pub fn load(path: &Path) -> Fallible<Self> {
        let format = Format::from_path(path)?;
        log::debug!("Loading {} as {format}", path.display());
        let text = read_to_string(path)?;
        Self::parse(&text, format)
            .map_err(|e| ErrorReport::new(&format!("{}: {e}", path.display())))
    }

    pub fn len(&self) -> usize {
        self.feedback.len() + self.statistic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn read_section<S: Shape>(
    map: &KeyValue,
    section: Section,
    problems: &mut Vec<Problem>,
) -> Vec<S> {
    let entries = match map.get(section.key()) {
        None => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            problems.push(Problem::NotAnArray {
                section,
                actual: ValueKind::of(other),
            });
            return Vec::new();
        }
    };
    let mut values = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        match S::from_value(entry) {
            Ok(value) => values.push(value),
            Err(error) => problems.push(Problem::Entry {
                section,
                index,
                error,
            }),
        }
    }
    values
}

/// The path of the first infinite or NaN float in a TOML table.
fn find_non_finite(table: &toml::Table, prefix: &str) -> Option<(String, f64)> {
    table.iter().find_map(|(key, value)| {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        non_finite_in(value, path)
    })
}

fn non_finite_in(value: &toml::Value, path: String) -> Option<(String, f64)> {
    match value {
        toml::Value::Float(number) if !number.is_finite() => Some((path, *number)),
        toml::Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(index, item)| non_finite_in(item, format!("{path}[{index}]"))),
        toml::Value::Table(table) => find_non_finite(table, &path),
        _ => None,
    }
}

fn report(problems: &[Problem]) -> ErrorReport {
    let lines: Vec<String> = problems.iter().map(|p| format!("  {p}")).collect();
    ErrorReport::new(&format!(
        "{} problem(s):\n{}",
        problems.len(),
        lines.join("\n")
    ))
}
