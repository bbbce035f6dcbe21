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

use climate_control::console::Session;
use climate_control::{Config, Controller};
use climate_utils::{CalibrationTable, VoltageDivider};
use std::io;

fn config() -> Config {
    Config {
        table: CalibrationTable::ntc(),
        divider: VoltageDivider::default(),
    }
}

fn main() -> anyhow::Result<()> {
    // Level is fixed here; the session reads no environment
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let stdin = io::stdin();
    let mut session = Session::new(Controller::new(config()), stdin.lock(), io::stdout());
    session.run()?;
    Ok(())
}
