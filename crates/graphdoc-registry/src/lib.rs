// Copyright 2025 Graphtide Team
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

//! Metadata source adapters for graphdoc
//!
//! Each adapter turns one part of the product's documentable surface into the
//! uniform record shape from `graphdoc-core`:
//!
//! - [`settings::SettingsRegistry`] — configuration settings, registered
//!   explicitly via the builder API
//! - [`beans::BeanRegistry`] — management beans, addressed by name pattern
//! - [`metrics::MetricsRegistry`] — published metrics, grouped by section
//! - [`functions::FunctionSource`] — query-function signatures

pub mod beans;
pub mod functions;
pub mod metrics;
pub mod settings;

pub use beans::{BeanAttribute, BeanDescriptor, BeanRegistry, InMemoryBeanRegistry};
pub use functions::{FunctionRecord, FunctionSource, StaticFunctionSource};
pub use metrics::{Metric, MetricsRegistry};
pub use settings::{Setting, SettingBuilder, SettingsRegistry};
