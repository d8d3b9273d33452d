// Dweve FIXREG - Fixture Data & Regression Baseline Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! FIXREG Command Line Interface

use clap::Parser;
use fixreg_cli::cli::Commands;
use std::process::ExitCode;

/// FIXREG - fixture data and regression baseline toolkit
///
/// Inspect and validate fixture files, and manage performance baselines
/// from the command line.
///
/// # Examples
///
/// ```bash
/// # Validate a fixture and enforce required fields
/// fixreg check fixtures/login.csv --require username,password
///
/// # Print the records a filter selects
/// fixreg show fixtures/login.csv --filter expected_result=success
///
/// # Record a baseline, then compare a later run against it
/// fixreg baseline-save login_perf --metrics run1.json
/// fixreg compare login_perf --metrics run2.json --threshold 15
/// ```
#[derive(Parser)]
#[command(name = "fixreg")]
#[command(author, version, about = "FIXREG - fixture data and regression baseline toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
