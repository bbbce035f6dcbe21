// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Signal chain of an automatic climate control unit
//!
//! Temperature is mapped to a thermistor resistance through a calibration curve, the resistance to
//! an analog voltage through a voltage divider, and the temperature error to blower, air
//! distribution and recirculation commands.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_op_in_unsafe_fn)]

#[macro_use]
pub mod log;
pub mod actuator;
pub mod calibration;
pub mod divider;

pub use actuator::{AirDistribution, Recirculation};
pub use calibration::{CalPoint, CalibrationTable, NTC_TABLE};
pub use divider::VoltageDivider;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Input voltage is negative, NaN, or at/above the divider reference
    VoltageOutOfRange,
    /// A calibration table needs at least two points to interpolate
    TableTooShort,
    /// Point `index` does not increase over its predecessor on both axes
    NotMonotonic { index: usize },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::VoltageOutOfRange => write!(f, "input voltage outside of physical range"),
            Error::TableTooShort => write!(f, "calibration table has fewer than two points"),
            Error::NotMonotonic { index } => {
                write!(f, "calibration table is not strictly increasing at point {index}")
            }
        }
    }
}
