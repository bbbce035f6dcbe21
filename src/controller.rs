// Copyright 2023 Google LLC
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

use climate_utils::actuator::{self, AirDistribution, Recirculation};
use climate_utils::{CalibrationTable, VoltageDivider};

#[derive(Copy, Clone, Debug, Default)]
pub struct Config {
    pub table: CalibrationTable<'static, f64>,
    pub divider: VoltageDivider<f64>,
}

/// Everything derived from one pair of input temperatures
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub external_temp_c: f64,
    pub setpoint_temp_c: f64,
    pub external_resistance_ohm: f64,
    pub setpoint_resistance_ohm: f64,
    /// Divider output for the setpoint resistance
    pub signal_voltage: f64,
    /// Temperature recovered from the external sensor resistance
    pub internal_temp_c: f64,
    /// Shown as entered
    pub display_temp_c: f64,
    pub abs_temp_diff: f64,
    pub blower_out: f64,
    pub air_distribution: AirDistribution,
    pub recirculation: Recirculation,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Controller {
    config: Config,
}

impl Controller {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the signal chain once
    pub fn run_cycle(&self, external_temp_c: f64, setpoint_temp_c: f64) -> SimulationResult {
        let Config { table, divider } = self.config;

        let external_resistance_ohm = table.temperature_to_resistance(external_temp_c);
        let setpoint_resistance_ohm = table.temperature_to_resistance(setpoint_temp_c);
        let signal_voltage = divider.resistance_to_voltage(setpoint_resistance_ohm);
        let internal_temp_c = table.resistance_to_temperature(external_resistance_ohm);
        let abs_temp_diff = (setpoint_temp_c - internal_temp_c).abs();

        let result = SimulationResult {
            external_temp_c,
            setpoint_temp_c,
            external_resistance_ohm,
            setpoint_resistance_ohm,
            signal_voltage,
            internal_temp_c,
            display_temp_c: setpoint_temp_c,
            abs_temp_diff,
            blower_out: actuator::blower_out(abs_temp_diff),
            air_distribution: actuator::air_distribution(internal_temp_c),
            recirculation: actuator::recirculation(internal_temp_c),
        };
        log::debug!(
            "Cycle ext={} set={} -> {:.4} V, blower {}, {:?}, recirculation {:?}",
            external_temp_c,
            setpoint_temp_c,
            signal_voltage,
            result.blower_out,
            result.air_distribution,
            result.recirculation
        );
        result
    }
}
