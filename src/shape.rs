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

//! The shape registry: field-level descriptions of the props shapes, and
//! validated conversion between shapes and a generic key-value map.

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::ShapeError;
use crate::error::ValueKind;
use crate::types::feedback::FeedbackProps;
use crate::types::position::StatisticNumberPosition;
use crate::types::stat_number::StatNumber;
use crate::types::statistic::StatisticProps;

/// The generic key-value representation of a props value.
pub type KeyValue = Map<String, Value>;

/// The declared type of a field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Boolean,
    String,
    Number,
    /// A label from [`StatisticNumberPosition`].
    Position,
}

impl FieldKind {
    /// The kind of value that encodes a field of this kind.
    pub fn value_kind(self) -> ValueKind {
        match self {
            FieldKind::Boolean => ValueKind::Boolean,
            FieldKind::String => ValueKind::String,
            FieldKind::Number => ValueKind::Number,
            FieldKind::Position => ValueKind::String,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// A props shape that can be validated from, and written to, a key-value map.
pub trait Shape: Sized {
    const NAME: &'static str;

    /// The shape's fields, in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Builds a value from a map, failing on the first invalid field in
    /// declaration order. Keys the shape doesn't declare are ignored.
    fn from_map(map: &KeyValue) -> Result<Self, ShapeError>;

    /// The inverse of [`Shape::from_map`]. Absent optional fields are omitted.
    fn to_map(&self) -> KeyValue;

    fn from_value(value: &Value) -> Result<Self, ShapeError> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(ShapeError::TypeMismatch {
                shape: Self::NAME,
                field: Self::NAME,
                expected: ValueKind::Object,
                actual: ValueKind::of(other),
            }),
        }
    }

    fn to_value(&self) -> Value {
        Value::Object(self.to_map())
    }

    fn describe() -> ShapeDescriptor {
        ShapeDescriptor {
            name: Self::NAME,
            fields: Self::FIELDS,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct ShapeDescriptor {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl ShapeDescriptor {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

/// Everything the crate declares: both shapes and the closed label set.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    pub statistic_number_positions: Vec<&'static str>,
    pub shapes: Vec<ShapeDescriptor>,
}

impl Registry {
    pub fn shape(&self, name: &str) -> Option<&ShapeDescriptor> {
        self.shapes.iter().find(|s| s.name == name)
    }
}

pub fn registry() -> Registry {
    Registry {
        statistic_number_positions: StatisticNumberPosition::labels(),
        shapes: vec![FeedbackProps::describe(), StatisticProps::describe()],
    }
}

/// Typed access to the fields of a key-value map on behalf of a shape.
pub(crate) struct FieldReader<'a> {
    shape: &'static str,
    map: &'a KeyValue,
}

impl<'a> FieldReader<'a> {
    pub fn new<S: Shape>(map: &'a KeyValue) -> Self {
        for key in map.keys() {
            if !S::FIELDS.iter().any(|f| f.name == key) {
                log::warn!("{}: ignoring unknown field '{key}'", S::NAME);
            }
        }
        Self {
            shape: S::NAME,
            map,
        }
    }

    fn required(&self, field: &'static str) -> Result<&'a Value, ShapeError> {
        self.map
            .get(field)
            .ok_or(ShapeError::MissingRequiredField {
                shape: self.shape,
                field,
            })
    }

    /// Null counts as absent.
    fn optional(&self, field: &'static str) -> Option<&'a Value> {
        self.map.get(field).filter(|v| !v.is_null())
    }

    fn mismatch(&self, field: &'static str, expected: FieldKind, value: &Value) -> ShapeError {
        ShapeError::TypeMismatch {
            shape: self.shape,
            field,
            expected: expected.value_kind(),
            actual: ValueKind::of(value),
        }
    }

    fn as_bool(&self, field: &'static str, value: &Value) -> Result<bool, ShapeError> {
        value
            .as_bool()
            .ok_or_else(|| self.mismatch(field, FieldKind::Boolean, value))
    }

    fn as_string(&self, field: &'static str, value: &Value) -> Result<String, ShapeError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.mismatch(field, FieldKind::String, value))
    }

    fn as_number(&self, field: &'static str, value: &Value) -> Result<StatNumber, ShapeError> {
        value
            .as_f64()
            .and_then(|n| StatNumber::try_from(n).ok())
            .ok_or_else(|| self.mismatch(field, FieldKind::Number, value))
    }

    fn as_position(
        &self,
        field: &'static str,
        value: &Value,
    ) -> Result<StatisticNumberPosition, ShapeError> {
        let label = value
            .as_str()
            .ok_or_else(|| self.mismatch(field, FieldKind::Position, value))?;
        label
            .parse()
            .map_err(|_| ShapeError::InvalidEnumValue {
                shape: self.shape,
                field,
                value: label.to_string(),
            })
    }

    pub fn boolean(&self, field: &'static str) -> Result<bool, ShapeError> {
        self.as_bool(field, self.required(field)?)
    }

    pub fn string(&self, field: &'static str) -> Result<String, ShapeError> {
        self.as_string(field, self.required(field)?)
    }

    pub fn number(&self, field: &'static str) -> Result<StatNumber, ShapeError> {
        self.as_number(field, self.required(field)?)
    }

    pub fn optional_boolean(&self, field: &'static str) -> Result<Option<bool>, ShapeError> {
        self.optional(field)
            .map(|v| self.as_bool(field, v))
            .transpose()
    }

    pub fn optional_string(&self, field: &'static str) -> Result<Option<String>, ShapeError> {
        self.optional(field)
            .map(|v| self.as_string(field, v))
            .transpose()
    }

    pub fn optional_position(
        &self,
        field: &'static str,
    ) -> Result<Option<StatisticNumberPosition>, ShapeError> {
        self.optional(field)
            .map(|v| self.as_position(field, v))
            .transpose()
    }
}

/// Writes fields into a key-value map, skipping absent optionals.
#[derive(Default)]
pub(crate) struct FieldWriter {
    map: KeyValue,
}

impl FieldWriter {
    pub fn put(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.map.insert(field.to_string(), value.into());
        self
    }

    pub fn put_opt<T: Into<Value>>(self, field: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.put(field, value),
            None => self,
        }
    }

    pub fn finish(self) -> KeyValue {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_both_shapes() {
        let registry = registry();
        let names: Vec<&str> = registry.shapes.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["FeedbackProps", "StatisticProps"]);
        assert_eq!(registry.statistic_number_positions.len(), 8);
    }

    #[test]
    fn test_feedback_descriptor() {
        let registry = registry();
        let feedback = registry.shape("FeedbackProps").unwrap();
        let required: Vec<&str> = feedback.required_fields().collect();
        assert_eq!(
            required,
            vec!["isVertical", "bgColor", "iconName", "title", "clickable"]
        );
        assert_eq!(feedback.fields.len(), 5);
        assert_eq!(feedback.field("clickable").unwrap().kind, FieldKind::Boolean);
    }

    #[test]
    fn test_statistic_descriptor() {
        let registry = registry();
        let statistic = registry.shape("StatisticProps").unwrap();
        let required: Vec<&str> = statistic.required_fields().collect();
        assert_eq!(required, vec!["statText", "statNumber", "bgColor"]);
        assert_eq!(statistic.fields.len(), 7);
        let position = statistic.field("statNumberPosition").unwrap();
        assert_eq!(position.kind, FieldKind::Position);
        assert!(!position.required);
        assert!(statistic.field("title").is_none());
    }

    #[test]
    fn test_unknown_shape() {
        assert!(registry().shape("ButtonProps").is_none());
    }

    #[test]
    fn test_registry_serializes() {
        let json = serde_json::to_value(registry()).unwrap();
        assert_eq!(json["statisticNumberPositions"][0], "topLeft");
        assert_eq!(json["shapes"][1]["name"], "StatisticProps");
        assert_eq!(json["shapes"][1]["fields"][3]["name"], "statNumberPosition");
        assert_eq!(json["shapes"][1]["fields"][3]["kind"], "position");
        assert_eq!(json["shapes"][1]["fields"][3]["required"], false);
    }

    #[test]
    fn test_from_value_requires_object() {
        let err = FeedbackProps::from_value(&Value::from("star")).unwrap_err();
        assert_eq!(
            err,
            ShapeError::TypeMismatch {
                shape: "FeedbackProps",
                field: "FeedbackProps",
                expected: ValueKind::Object,
                actual: ValueKind::String,
            }
        );
    }
}
