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

//! Piecewise-linear thermistor calibration
//!
//! Lookups scan from the low end of the table for the first sample at or above the input and
//! interpolate against its predecessor. Inputs below the first sample therefore extrapolate along
//! the first segment, while inputs above the last sample hold the last sample's value.

mod table;

use crate::Error;
use num_traits::Float;
pub use table::NTC_TABLE;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalPoint<F> {
    pub temperature_c: F,
    pub resistance_ohm: F,
}

/// Calibration curve with both columns strictly increasing
#[derive(Copy, Clone, Debug)]
pub struct CalibrationTable<'a, F> {
    points: &'a [CalPoint<F>],
}

impl CalibrationTable<'static, f64> {
    /// The built-in cabin thermistor curve
    pub const fn ntc() -> Self {
        Self {
            points: &NTC_TABLE,
        }
    }
}

impl Default for CalibrationTable<'static, f64> {
    fn default() -> Self {
        Self::ntc()
    }
}

impl<'a, F: Float> CalibrationTable<'a, F> {
    pub fn new(points: &'a [CalPoint<F>]) -> Result<Self, Error> {
        if points.len() < 2 {
            crate::warn!("Calibration table has {} points", points.len());
            return Err(Error::TableTooShort);
        }
        for (i, pair) in points.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            // Negated so that NaN fails too
            if !(prev.temperature_c < next.temperature_c && prev.resistance_ohm < next.resistance_ohm)
            {
                crate::warn!("Calibration table not increasing at point {}", i + 1);
                return Err(Error::NotMonotonic { index: i + 1 });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &'a [CalPoint<F>] {
        self.points
    }

    /// Sensor resistance for a temperature
    pub fn temperature_to_resistance(&self, temperature_c: F) -> F {
        lookup(self.points, temperature_c, |p| (p.temperature_c, p.resistance_ohm))
    }

    /// Temperature for a sensor resistance
    pub fn resistance_to_temperature(&self, resistance_ohm: F) -> F {
        lookup(self.points, resistance_ohm, |p| (p.resistance_ohm, p.temperature_c))
    }
}

fn lookup<F, A>(points: &[CalPoint<F>], x: F, axes: A) -> F
where
    F: Float,
    A: Fn(&CalPoint<F>) -> (F, F),
{
    for pair in points.windows(2) {
        let upper = axes(&pair[1]);
        if x <= upper.0 {
            return linear_map(axes(&pair[0]), upper, x);
        }
    }
    crate::trace!("Lookup above calibration range");
    match points.last() {
        Some(last) => axes(last).1,
        None => F::nan(),
    }
}

fn linear_map<F: Float>((x0, y0): (F, F), (x1, y1): (F, F), x: F) -> F {
    y0 + (x - x0) / (x1 - x0) * (y1 - y0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-3;

    #[test]
    fn builtin_table_is_valid() {
        let table = CalibrationTable::new(&NTC_TABLE).unwrap();
        assert_eq!(table.points().len(), 51);
        assert_eq!(table.points()[0].temperature_c, 0.0);
        assert_eq!(table.points()[50].temperature_c, 50.0);
    }

    #[test]
    fn recalls_table_points() {
        let table = CalibrationTable::ntc();
        for point in NTC_TABLE {
            let resistance = table.temperature_to_resistance(point.temperature_c);
            assert!((resistance - point.resistance_ohm).abs() < TOLERANCE);
            let temperature = table.resistance_to_temperature(point.resistance_ohm);
            assert!((temperature - point.temperature_c).abs() < TOLERANCE);
        }
    }

    #[test]
    fn interpolates_between_points() {
        let table = CalibrationTable::ntc();
        let resistance = table.temperature_to_resistance(22.5);
        assert!((resistance - 2020.115).abs() < TOLERANCE);
        let temperature = table.resistance_to_temperature(2020.115);
        assert!((temperature - 22.5).abs() < TOLERANCE);
    }

    #[test]
    fn round_trip_within_range() {
        let table = CalibrationTable::ntc();
        for step in 0..=200 {
            let temperature = step as f64 * 0.25;
            let recovered =
                table.resistance_to_temperature(table.temperature_to_resistance(temperature));
            assert!(
                (recovered - temperature).abs() < 1e-2,
                "{temperature} -> {recovered}"
            );
        }
    }

    #[test]
    fn holds_last_point_above_range() {
        let table = CalibrationTable::ntc();
        assert_eq!(
            table.temperature_to_resistance(100.0),
            table.temperature_to_resistance(50.0)
        );
        assert_eq!(table.temperature_to_resistance(100.0), 7373.0);
        assert_eq!(table.resistance_to_temperature(1.0e9), 50.0);
    }

    #[test]
    fn extrapolates_below_range() {
        let table = CalibrationTable::ntc();
        // Slope of the first segment is 31.49 ohm/°C
        let resistance = table.temperature_to_resistance(-1.0);
        assert!((resistance - 780.01).abs() < TOLERANCE);
        let temperature = table.resistance_to_temperature(800.0);
        assert!((temperature - -0.365195).abs() < TOLERANCE);
    }

    #[test]
    fn rejects_short_table() {
        let points = [CalPoint {
            temperature_c: 0.0,
            resistance_ohm: 100.0,
        }];
        assert_eq!(
            CalibrationTable::new(&points).unwrap_err(),
            Error::TableTooShort
        );
        assert_eq!(
            CalibrationTable::<f64>::new(&[]).unwrap_err(),
            Error::TableTooShort
        );
    }

    #[test]
    fn rejects_non_monotonic_table() {
        let mut points = NTC_TABLE;
        points[10].resistance_ohm = points[9].resistance_ohm;
        assert_eq!(
            CalibrationTable::new(&points).unwrap_err(),
            Error::NotMonotonic { index: 10 }
        );

        let mut points = NTC_TABLE;
        points[3].temperature_c = f64::NAN;
        assert_eq!(
            CalibrationTable::new(&points).unwrap_err(),
            Error::NotMonotonic { index: 3 }
        );
    }

    #[test]
    fn single_precision_table() {
        let points = [
            CalPoint {
                temperature_c: 10.0f32,
                resistance_ohm: 1000.0,
            },
            CalPoint {
                temperature_c: 20.0,
                resistance_ohm: 2000.0,
            },
        ];
        let table = CalibrationTable::new(&points).unwrap();
        assert_eq!(table.temperature_to_resistance(15.0), 1500.0);
        assert_eq!(table.resistance_to_temperature(1250.0), 12.5);
        assert_eq!(table.temperature_to_resistance(30.0), 2000.0);
        assert_eq!(table.temperature_to_resistance(0.0), 0.0);
    }
}
