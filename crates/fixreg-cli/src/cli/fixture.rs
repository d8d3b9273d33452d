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

//! Fixture inspection commands.

use crate::commands;
use clap::Subcommand;

/// Fixture inspection commands (check, show, params).
#[derive(Subcommand)]
pub enum FixtureCommands {
    /// Validate a fixture file and report its shape
    Check {
        /// Path to the fixture file (.csv or .json)
        file: String,

        /// Required field names, comma-separated
        #[arg(long, value_delimiter = ',')]
        require: Vec<String>,
    },

    /// Print a fixture's records
    Show {
        /// Path to the fixture file (.csv or .json)
        file: String,

        /// Keep only records matching FIELD=VALUE (repeatable)
        #[arg(long = "filter", value_name = "FIELD=VALUE")]
        filters: Vec<String>,
    },

    /// Print parameter sets, one tab-separated line per record
    Params {
        /// Path to the fixture file (.csv or .json)
        file: String,
    },
}

impl FixtureCommands {
    /// Execute the selected fixture command.
    pub fn execute(&self) -> Result<(), String> {
        match self {
            FixtureCommands::Check { file, require } => commands::check(file, require),
            FixtureCommands::Show { file, filters } => commands::show(file, filters),
            FixtureCommands::Params { file } => commands::params(file),
        }
    }
}
