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

use serde::Deserialize;
use serde::Serialize;

/// The value a statistic widget displays. Always finite, so it survives a
/// trip through JSON or TOML.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct StatNumber(f64);

impl StatNumber {
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Display for StatNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A float that is infinite or NaN.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NonFiniteNumber(pub f64);

impl Display for NonFiniteNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "numbers must be finite, found {}", self.0)
    }
}

impl std::error::Error for NonFiniteNumber {}

impl TryFrom<f64> for StatNumber {
    type Error = NonFiniteNumber;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() {
            Ok(StatNumber(value))
        } else {
            Err(NonFiniteNumber(value))
        }
    }
}

impl From<i32> for StatNumber {
    fn from(value: i32) -> Self {
        StatNumber(f64::from(value))
    }
}

impl From<u32> for StatNumber {
    fn from(value: u32) -> Self {
        StatNumber(f64::from(value))
    }
}

impl From<StatNumber> for f64 {
    fn from(value: StatNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_numbers() {
        assert_eq!(StatNumber::try_from(-1.5_f64).unwrap().get(), -1.5);
        assert_eq!(StatNumber::from(4200).get(), 4200.0);
        assert_eq!(StatNumber::from(7_u32).get(), 7.0);
        assert_eq!(f64::from(StatNumber::from(3)), 3.0);
    }

    #[test]
    fn test_reject_non_finite() {
        assert_eq!(
            StatNumber::try_from(f64::INFINITY),
            Err(NonFiniteNumber(f64::INFINITY))
        );
        assert!(StatNumber::try_from(f64::NEG_INFINITY).is_err());
        assert!(StatNumber::try_from(f64::NAN).is_err());
    }

    #[test]
    fn test_serde() {
        let number: StatNumber = serde_json::from_str("99").unwrap();
        assert_eq!(number, StatNumber::from(99));
        assert_eq!(serde_json::to_string(&number).unwrap(), "99.0");

        #[derive(Debug, Deserialize)]
        struct Row {
            #[allow(dead_code)]
            n: StatNumber,
        }
        assert!(toml::from_str::<Row>("n = 12").is_ok());
        assert!(toml::from_str::<Row>("n = inf").is_err());
        assert!(toml::from_str::<Row>("n = nan").is_err());
    }
}
