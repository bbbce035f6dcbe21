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

//! Interactive test session
//!
//! Prompts for an external and a setpoint temperature, prints the controller output, and asks
//! whether to run another case.

use crate::controller::{Controller, SimulationResult};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

enum Reply {
    Line(String),
    Closed,
}

#[derive(Copy, Clone)]
enum Entry {
    Value(f64),
    Invalid,
    Closed,
}

pub struct Session<R, W> {
    controller: Controller,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(controller: Controller, input: R, output: W) -> Self {
        Self {
            controller,
            input,
            output,
        }
    }

    /// Runs cycles until the user declines another one or input runs out
    ///
    /// Returns the number of completed cycles.
    pub fn run(&mut self) -> Result<usize> {
        log::info!("Session started");
        let mut completed = 0;
        loop {
            match self.cycle()? {
                Some(true) => completed += 1,
                Some(false) => (),
                None => break,
            }
            if !self.ask_again()? {
                break;
            }
        }
        log::info!("Session ended after {} cycles", completed);
        Ok(completed)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` when input closed, `Some(false)` when the cycle was aborted on bad input
    fn cycle(&mut self) -> Result<Option<bool>> {
        writeln!(
            self.output,
            "\n========= Automatic Climate Control System ========="
        )?;
        let external = self.read_temperature("Enter External Temperature (°C): ")?;
        if let Entry::Closed = external {
            return Ok(None);
        }
        let setpoint = self.read_temperature("Enter User Setpoint Temperature (°C): ")?;
        let (external, setpoint) = match (external, setpoint) {
            (_, Entry::Closed) => return Ok(None),
            (Entry::Value(external), Entry::Value(setpoint)) => (external, setpoint),
            _ => return Ok(Some(false)),
        };

        let result = self.controller.run_cycle(external, setpoint);
        write_report(&mut self.output, &result)?;
        Ok(Some(true))
    }

    fn read_temperature(&mut self, prompt: &str) -> Result<Entry> {
        let text = match self.prompt(prompt)? {
            Reply::Line(text) => text,
            Reply::Closed => return Ok(Entry::Closed),
        };
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Entry::Value(value)),
            _ => {
                log::warn!("Rejected temperature input {:?}", text);
                writeln!(self.output, "Invalid temperature: '{text}'")?;
                Ok(Entry::Invalid)
            }
        }
    }

    fn ask_again(&mut self) -> Result<bool> {
        match self.prompt("\nWould you like to run another test case? (y/n): ")? {
            Reply::Line(answer) => Ok(matches!(answer.chars().next(), Some('y' | 'Y'))),
            Reply::Closed => Ok(false),
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<Reply> {
        write!(self.output, "{prompt}")?;
        self.output.flush().context("Failed to flush prompt")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(Reply::Closed);
        }
        Ok(Reply::Line(line.trim().to_owned()))
    }
}

pub fn write_report<W: Write>(out: &mut W, result: &SimulationResult) -> Result<()> {
    writeln!(
        out,
        "\n==================== Controller Output ===================="
    )?;
    writeln!(out, "External Temp: {:.4} °C", result.external_temp_c)?;
    writeln!(out, "Setpoint Temp: {:.4} °C", result.setpoint_temp_c)?;
    writeln!(out, "Voltage I/O Signal: {:.4} V", result.signal_voltage)?;
    writeln!(
        out,
        "Resistance to Temperature Output: {:.4} °C",
        result.internal_temp_c
    )?;
    writeln!(out, "Thermometer Display: {:.4} °C", result.display_temp_c)?;
    writeln!(out, "\n---- Stateflow Outputs ----")?;
    writeln!(out, "BlowerOut: {:.6}", result.blower_out)?;
    writeln!(
        out,
        "AirDistV (0-Face, 1-Feet, 2-Defrost): {}",
        result.air_distribution.code()
    )?;
    writeln!(
        out,
        "RecycAirV (1=Recyc_On, 0=Recyc_Off): {}",
        result.recirculation.code()
    )?;
    writeln!(
        out,
        "==========================================================="
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> (usize, String) {
        let mut session = Session::new(
            Controller::default(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
        );
        let completed = session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (completed, output)
    }

    #[test]
    fn single_cycle() {
        let (completed, output) = run_session("25\n25\nn\n");
        assert_eq!(completed, 1);
        assert!(output.contains("External Temp: 25.0000 °C"));
        assert!(output.contains("Setpoint Temp: 25.0000 °C"));
        assert!(output.contains("Voltage I/O Signal: 13.4368 V"));
        assert!(output.contains("Resistance to Temperature Output: 25.0000 °C"));
        assert!(output.contains("Thermometer Display: 25.0000 °C"));
        assert!(output.contains("BlowerOut: 0.200000"));
        assert!(output.contains("AirDistV (0-Face, 1-Feet, 2-Defrost): 2"));
        assert!(output.contains("RecycAirV (1=Recyc_On, 0=Recyc_Off): 0"));
    }

    #[test]
    fn repeats_while_confirmed() {
        let (completed, output) = run_session("25\n25\ny\n0\n50\nY\n20\n21\nno\n");
        assert_eq!(completed, 3);
        assert!(output.contains("Voltage I/O Signal: 17.4035 V"));
        assert!(output.contains("BlowerOut: 1.000000"));
        assert_eq!(output.matches("Controller Output").count(), 3);
    }

    #[test]
    fn invalid_input_only_aborts_cycle() {
        let (completed, output) = run_session("warm\n25\ny\n25\n25\nn\n");
        assert_eq!(completed, 1);
        assert!(output.contains("Invalid temperature: 'warm'"));
        assert_eq!(output.matches("Controller Output").count(), 1);
        assert!(output.contains("Resistance to Temperature Output: 25.0000 °C"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (completed, output) = run_session("25\n");
        assert_eq!(completed, 0);
        assert!(!output.contains("Controller Output"));

        let (completed, _) = run_session("25\n25\n");
        assert_eq!(completed, 1);
    }
}
