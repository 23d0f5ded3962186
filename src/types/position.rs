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

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Where the number of a statistic card is anchored.
///
/// The `*Overlapping` labels sit on the same corner as their plain
/// counterparts, but the badge straddles the card's border instead of sitting
/// inside it. Discriminants are the ordinals consumers may persist, so the
/// declaration order is fixed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum StatisticNumberPosition {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
    TopLeftOverlapping = 4,
    TopRightOverlapping = 5,
    BottomLeftOverlapping = 6,
    BottomRightOverlapping = 7,
}

/// The corner of the card a number is anchored to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl StatisticNumberPosition {
    pub const ALL: [StatisticNumberPosition; 8] = [
        StatisticNumberPosition::TopLeft,
        StatisticNumberPosition::TopRight,
        StatisticNumberPosition::BottomLeft,
        StatisticNumberPosition::BottomRight,
        StatisticNumberPosition::TopLeftOverlapping,
        StatisticNumberPosition::TopRightOverlapping,
        StatisticNumberPosition::BottomLeftOverlapping,
        StatisticNumberPosition::BottomRightOverlapping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatisticNumberPosition::TopLeft => "topLeft",
            StatisticNumberPosition::TopRight => "topRight",
            StatisticNumberPosition::BottomLeft => "bottomLeft",
            StatisticNumberPosition::BottomRight => "bottomRight",
            StatisticNumberPosition::TopLeftOverlapping => "topLeftOverlapping",
            StatisticNumberPosition::TopRightOverlapping => "topRightOverlapping",
            StatisticNumberPosition::BottomLeftOverlapping => "bottomLeftOverlapping",
            StatisticNumberPosition::BottomRightOverlapping => "bottomRightOverlapping",
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn corner(self) -> Corner {
        match self {
            StatisticNumberPosition::TopLeft | StatisticNumberPosition::TopLeftOverlapping => {
                Corner::TopLeft
            }
            StatisticNumberPosition::TopRight | StatisticNumberPosition::TopRightOverlapping => {
                Corner::TopRight
            }
            StatisticNumberPosition::BottomLeft
            | StatisticNumberPosition::BottomLeftOverlapping => Corner::BottomLeft,
            StatisticNumberPosition::BottomRight
            | StatisticNumberPosition::BottomRightOverlapping => Corner::BottomRight,
        }
    }

    pub fn is_overlapping(self) -> bool {
        self.ordinal() >= StatisticNumberPosition::TopLeftOverlapping.ordinal()
    }

    /// The labels of the closed set, in ordinal order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.as_str()).collect()
    }
}

impl Display for StatisticNumberPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A label or ordinal that is not in the closed set.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnknownPosition(pub String);

impl Display for UnknownPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown statistic number position: {}", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for StatisticNumberPosition {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

impl TryFrom<&str> for StatisticNumberPosition {
    type Error = UnknownPosition;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<u8> for StatisticNumberPosition {
    type Error = UnknownPosition;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| UnknownPosition(value.to_string()))
    }
}
