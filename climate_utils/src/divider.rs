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

use crate::Error;
use num_traits::Float;

/// Reference voltage of the sensor divider
// Puts the signal for the cabin range at roughly 10-17 V
pub const DEFAULT_V_REF: f64 = 20.0;
/// Series resistor of the sensor divider
pub const DEFAULT_R_FIXED: f64 = 1100.0;

/// Voltage divider with the sensor on the low side
///
/// v = v_ref * r / (r_fixed + r)
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VoltageDivider<F> {
    pub v_ref: F,
    pub r_fixed: F,
}

impl Default for VoltageDivider<f64> {
    fn default() -> Self {
        Self {
            v_ref: DEFAULT_V_REF,
            r_fixed: DEFAULT_R_FIXED,
        }
    }
}

impl<F: Float> VoltageDivider<F> {
    pub const fn new(v_ref: F, r_fixed: F) -> Self {
        Self { v_ref, r_fixed }
    }

    /// Signal voltage for a sensor resistance
    ///
    /// Valid for non-negative resistance. Approaches `v_ref` as the resistance grows.
    pub fn resistance_to_voltage(&self, resistance_ohm: F) -> F {
        self.v_ref * resistance_ohm / (self.r_fixed + resistance_ohm)
    }

    /// Sensor resistance for a signal voltage
    ///
    /// The divider can only produce voltages in `[0, v_ref)`; anything else has no physical
    /// resistance behind it.
    pub fn voltage_to_resistance(&self, voltage: F) -> Result<F, Error> {
        if !(voltage >= F::zero() && voltage < self.v_ref) {
            crate::warn!("Voltage outside divider range");
            return Err(Error::VoltageOutOfRange);
        }
        Ok(self.r_fixed * voltage / (self.v_ref - voltage))
    }
}
