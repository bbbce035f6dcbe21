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

//! Actuator commands derived from cabin temperature
//!
//! All thresholds are inclusive on the low side and exclusive on the high side.

/// Blower duty while the cabin is close to the setpoint
pub const BLOWER_IDLE_DUTY: f64 = 0.2;
/// Duty per °C of error inside the ramp
pub const BLOWER_RAMP_GAIN: f64 = 0.04;
/// Error where the blower leaves idle and starts ramping
pub const BLOWER_RAMP_START_C: f64 = 5.0;
/// Error where the blower jumps from the ramp to full speed
// The ramp tops out at 0.88, so the step to 1.0 here is intentional
pub const BLOWER_RAMP_END_C: f64 = 22.0;

pub const FEET_THRESHOLD_C: f64 = 20.0;
pub const DEFROST_THRESHOLD_C: f64 = 24.0;
pub const RECIRCULATION_THRESHOLD_C: f64 = 18.0;

/// Vent routing
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AirDistribution {
    Face = 0,
    Feet = 1,
    Defrost = 2,
}

impl AirDistribution {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AirDistribution::Face => "Face",
            AirDistribution::Feet => "Feet",
            AirDistribution::Defrost => "Defrost",
        }
    }
}

impl From<AirDistribution> for u8 {
    fn from(mode: AirDistribution) -> u8 {
        mode.code()
    }
}

/// Fresh or recirculated cabin air
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Recirculation {
    Off = 0,
    On = 1,
}

impl Recirculation {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Recirculation::On)
    }
}

impl From<Recirculation> for u8 {
    fn from(flag: Recirculation) -> u8 {
        flag.code()
    }
}

/// Blower duty in `[0, 1]` for an absolute temperature error in °C
pub fn blower_out(abs_temp_diff: f64) -> f64 {
    if abs_temp_diff < BLOWER_RAMP_START_C {
        BLOWER_IDLE_DUTY
    } else if abs_temp_diff < BLOWER_RAMP_END_C {
        BLOWER_RAMP_GAIN * abs_temp_diff
    } else {
        1.0
    }
}

pub fn air_distribution(internal_temp_c: f64) -> AirDistribution {
    if internal_temp_c < FEET_THRESHOLD_C {
        AirDistribution::Face
    } else if internal_temp_c < DEFROST_THRESHOLD_C {
        AirDistribution::Feet
    } else {
        AirDistribution::Defrost
    }
}

pub fn recirculation(internal_temp_c: f64) -> Recirculation {
    if internal_temp_c < RECIRCULATION_THRESHOLD_C {
        Recirculation::On
    } else {
        Recirculation::Off
    }
}
