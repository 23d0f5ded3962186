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
use crate::types::position::StatisticNumberPosition;
use crate::types::stat_number::StatNumber;

/// Properties of a statistic widget.
///
/// Only the text, the number and the background color are required. Absent
/// optional fields stay `None`: picking their defaults is up to whoever
/// renders the widget.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticProps {
    /// The label shown next to the number.
    pub stat_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_small_text: Option<bool>,
    pub stat_number: StatNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_number_position: Option<StatisticNumberPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_number_color: Option<String>,
    pub bg_color: String,
    /// The event the widget's button emits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_emit: Option<String>,
}

impl StatisticProps {
    pub fn new(
        stat_text: impl Into<String>,
        stat_number: impl Into<StatNumber>,
        bg_color: impl Into<String>,
    ) -> Self {
        Self {
            stat_text: stat_text.into(),
            is_small_text: None,
            stat_number: stat_number.into(),
            stat_number_position: None,
            stat_number_color: None,
            bg_color: bg_color.into(),
            button_emit: None,
        }
    }

    pub fn with_small_text(mut self, is_small_text: bool) -> Self {
        self.is_small_text = Some(is_small_text);
        self
    }

    pub fn with_position(mut self, position: StatisticNumberPosition) -> Self {
        self.stat_number_position = Some(position);
        self
    }

    pub fn with_number_color(mut self, color: impl Into<String>) -> Self {
        self.stat_number_color = Some(color.into());
        self
    }

    pub fn with_button_emit(mut self, event: impl Into<String>) -> Self {
        self.button_emit = Some(event.into());
        self
    }
}

impl Shape for StatisticProps {
    const NAME: &'static str = "StatisticProps";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("statText", FieldKind::String),
        FieldSpec::optional("isSmallText", FieldKind::Boolean),
        FieldSpec::required("statNumber", FieldKind::Number),
        FieldSpec::optional("statNumberPosition", FieldKind::Position),
        FieldSpec::optional("statNumberColor", FieldKind::String),
        FieldSpec::required("bgColor", FieldKind::String),
        FieldSpec::optional("buttonEmit", FieldKind::String),
    ];

    fn from_map(map: &KeyValue) -> Result<Self, ShapeError> {
        let reader = FieldReader::new::<Self>(map);
        Ok(Self {
            stat_text: reader.string("statText")?,
            is_small_text: reader.optional_boolean("isSmallText")?,
            stat_number: reader.number("statNumber")?,
            stat_number_position: reader.optional_position("statNumberPosition")?,
            stat_number_color: reader.optional_string("statNumberColor")?,
            bg_color: reader.string("bgColor")?,
            button_emit: reader.optional_string("buttonEmit")?,
        })
    }

    fn to_map(&self) -> KeyValue {
        FieldWriter::default()
            .put("statText", self.stat_text.as_str())
            .put_opt("isSmallText", self.is_small_text)
            .put("statNumber", self.stat_number.get())
            .put_opt(
                "statNumberPosition",
                self.stat_number_position.map(|p| p.as_str()),
            )
            .put_opt("statNumberColor", self.stat_number_color.as_deref())
            .put("bgColor", self.bg_color.as_str())
            .put_opt("buttonEmit", self.button_emit.as_deref())
            .finish()
    }
}
