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

//! CLI command definitions and argument parsing.
//!
//! Commands come in two categories, flattened to appear at the top level:
//!
//! - [`fixture`]: fixture inspection (check, show, params)
//! - [`baseline`]: baseline management (baselines, baseline-show,
//!   baseline-save, compare)

mod baseline;
mod fixture;

use clap::Subcommand;

pub use baseline::BaselineCommands;
pub use fixture::FixtureCommands;

/// Top-level CLI commands enum.
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Fixture(FixtureCommands),

    #[command(flatten)]
    Baseline(BaselineCommands),
}

impl Commands {
    /// Execute the selected command.
    pub fn execute(&self) -> Result<(), String> {
        match self {
            Commands::Fixture(cmd) => cmd.execute(),
            Commands::Baseline(cmd) => cmd.execute(),
        }
    }
}
