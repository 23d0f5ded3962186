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

//! Property contracts for feedback cards and statistic widgets.
//!
//! The crate declares two props shapes, [`FeedbackProps`] and
//! [`StatisticProps`], and the closed set of [`StatisticNumberPosition`]
//! labels. Values can be built directly in Rust, or validated from a generic
//! key-value map through the [`Shape`] trait.

pub mod cli;
mod cmd;
pub mod document;
pub mod error;
pub mod shape;
pub mod types;

pub use crate::error::ShapeError;
pub use crate::error::ValueKind;
pub use crate::shape::Shape;
pub use crate::shape::registry;
pub use crate::types::feedback::FeedbackProps;
pub use crate::types::position::StatisticNumberPosition;
pub use crate::types::stat_number::StatNumber;
pub use crate::types::statistic::StatisticProps;
