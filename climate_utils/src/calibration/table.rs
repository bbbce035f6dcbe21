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

use super::CalPoint;

const fn point(temperature_c: f64, resistance_ohm: f64) -> CalPoint<f64> {
    CalPoint {
        temperature_c,
        resistance_ohm,
    }
}

/// Cabin thermistor response, 0 °C to 50 °C in 1 °C steps
pub const NTC_TABLE: [CalPoint<f64>; 51] = [
    point(0.0, 811.5),
    point(1.0, 842.99),
    point(2.0, 875.89),
    point(3.0, 910.27),
    point(4.0, 946.21),
    point(5.0, 983.78),
    point(6.0, 1023.08),
    point(7.0, 1064.18),
    point(8.0, 1107.19),
    point(9.0, 1152.19),
    point(10.0, 1199.3),
    point(11.0, 1248.63),
    point(12.0, 1300.29),
    point(13.0, 1354.41),
    point(14.0, 1411.11),
    point(15.0, 1470.54),
    point(16.0, 1532.85),
    point(17.0, 1598.18),
    point(18.0, 1666.71),
    point(19.0, 1738.61),
    point(20.0, 1814.07),
    point(21.0, 1893.27),
    point(22.0, 1976.44),
    point(23.0, 2063.79),
    point(24.0, 2155.56),
    point(25.0, 2252.0),
    point(26.0, 2353.37),
    point(27.0, 2459.96),
    point(28.0, 2572.07),
    point(29.0, 2690.01),
    point(30.0, 2814.12),
    point(31.0, 2944.77),
    point(32.0, 3082.34),
    point(33.0, 3227.24),
    point(34.0, 3379.91),
    point(35.0, 3540.8),
    point(36.0, 3710.42),
    point(37.0, 3889.29),
    point(38.0, 4077.97),
    point(39.0, 4277.07),
    point(40.0, 4487.22),
    point(41.0, 4709.11),
    point(42.0, 4943.46),
    point(43.0, 5191.06),
    point(44.0, 5452.74),
    point(45.0, 5729.4),
    point(46.0, 6021.97),
    point(47.0, 6331.49),
    point(48.0, 6659.04),
    point(49.0, 7005.8),
    point(50.0, 7373.0),
];
