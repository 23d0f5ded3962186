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

use serde::Deserialize;
use serde::Serialize;

use crate::error::ShapeError;
use crate::shape::FieldKind;
use crate::shape::FieldReader;
use crate::shape::FieldSpec;
use crate::shape::FieldWriter;
use crate::shape::KeyValue;
use crate::shape::Shape;

/// Properties of a feedback card. Every field is required.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackProps {
    /// Lay the card out vertically.
    pub is_vertical: bool,
    /// Background color token or value.
    pub bg_color: String,
    /// The name of the icon to show.
    pub icon_name: String,
    pub title: String,
    /// Whether the card is interactive.
    pub clickable: bool,
}

impl FeedbackProps {
    pub fn new(
        is_vertical: bool,
        bg_color: impl Into<String>,
        icon_name: impl Into<String>,
        title: impl Into<String>,
        clickable: bool,
    ) -> Self {
        Self {
            is_vertical,
            bg_color: bg_color.into(),
            icon_name: icon_name.into(),
            title: title.into(),
            clickable,
        }
    }
}

impl Shape for FeedbackProps {
    const NAME: &'static str = "FeedbackProps";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("isVertical", FieldKind::Boolean),
        FieldSpec::required("bgColor", FieldKind::String),
        FieldSpec::required("iconName", FieldKind::String),
        FieldSpec::required("title", FieldKind::String),
        FieldSpec::required("clickable", FieldKind::Boolean),
    ];

    fn from_map(map: &KeyValue) -> Result<Self, ShapeError> {
        let reader = FieldReader::new::<Self>(map);
        Ok(Self {
            is_vertical: reader.boolean("isVertical")?,
            bg_color: reader.string("bgColor")?,
            icon_name: reader.string("iconName")?,
            title: reader.string("title")?,
            clickable: reader.boolean("clickable")?,
        })
    }

    fn to_map(&self) -> KeyValue {
        FieldWriter::default()
            .put("isVertical", self.is_vertical)
            .put("bgColor", self.bg_color.as_str())
            .put("iconName", self.icon_name.as_str())
            .put("title", self.title.as_str())
            .put("clickable", self.clickable)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use serde_json::json;

    use super::*;
    use crate::error::ValueKind;

    fn welcome() -> Value {
        json!({
            "isVertical": true,
            "bgColor": "#fff",
            "iconName": "star",
            "title": "Welcome",
            "clickable": false,
        })
    }

    #[test]
    fn test_valid_feedback() {
        let props = FeedbackProps::from_value(&welcome()).unwrap();
        assert_eq!(props, FeedbackProps::new(true, "#fff", "star", "Welcome", false));
    }

    #[test]
    fn test_missing_title() {
        let mut value = welcome();
        value.as_object_mut().unwrap().remove("title");
        let err = FeedbackProps::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ShapeError::MissingRequiredField {
                shape: "FeedbackProps",
                field: "title",
            }
        );
    }

    #[test]
    fn test_every_field_is_required() {
        for field in FeedbackProps::FIELDS {
            let mut value = welcome();
            value.as_object_mut().unwrap().remove(field.name);
            let err = FeedbackProps::from_value(&value).unwrap_err();
            assert_eq!(
                err,
                ShapeError::MissingRequiredField {
                    shape: "FeedbackProps",
                    field: field.name,
                }
            );
        }
    }

    #[test]
    fn test_null_is_not_a_value() {
        let mut value = welcome();
        value["clickable"] = Value::Null;
        let err = FeedbackProps::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ShapeError::TypeMismatch {
                shape: "FeedbackProps",
                field: "clickable",
                expected: ValueKind::Boolean,
                actual: ValueKind::Null,
            }
        );
    }

    #[test]
    fn test_wrong_types() {
        let mut value = welcome();
        value["isVertical"] = json!("yes");
        let err = FeedbackProps::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ShapeError::TypeMismatch {
                shape: "FeedbackProps",
                field: "isVertical",
                expected: ValueKind::Boolean,
                actual: ValueKind::String,
            }
        );

        let mut value = welcome();
        value["iconName"] = json!(3);
        let err = FeedbackProps::from_value(&value).unwrap_err();
        assert_eq!(
            err,
            ShapeError::TypeMismatch {
                shape: "FeedbackProps",
                field: "iconName",
                expected: ValueKind::String,
                actual: ValueKind::Number,
            }
        );
    }

    #[test]
    fn test_first_invalid_field_wins() {
        let value = json!({ "bgColor": 1 });
        let err = FeedbackProps::from_value(&value).unwrap_err();
        assert_eq!(err.field(), "isVertical");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut value = welcome();
        value["subtitle"] = json!("ignored");
        let props = FeedbackProps::from_value(&value).unwrap();
        assert_eq!(props.title, "Welcome");
        assert!(!props.to_map().contains_key("subtitle"));
    }

    #[test]
    fn test_round_trip() {
        let props = FeedbackProps::new(false, "var(--green)", "thumbs-up", "Thanks!", true);
        let map = props.to_map();
        assert_eq!(map.len(), 5);
        assert_eq!(FeedbackProps::from_map(&map).unwrap(), props);
    }

    #[test]
    fn test_map_agrees_with_serde() {
        let props = FeedbackProps::from_value(&welcome()).unwrap();
        assert_eq!(props.to_value(), serde_json::to_value(&props).unwrap());
        assert_eq!(props.to_value(), welcome());
    }
}
