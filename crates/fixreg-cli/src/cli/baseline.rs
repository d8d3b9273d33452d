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

//! Baseline management commands.

use crate::commands;
use clap::Subcommand;
use std::path::PathBuf;

/// Baseline management commands.
///
/// All of them honor the `FIXREG_*` environment overrides; `--dir` wins
/// over both the environment and the default `baselines` directory.
#[derive(Subcommand)]
pub enum BaselineCommands {
    /// List stored baseline test names
    Baselines {
        /// Baselines directory override
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Pretty-print one stored baseline snapshot
    BaselineShow {
        /// Test name the snapshot is stored under
        test: String,

        /// Baselines directory override
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Save a metrics snapshot as the baseline for a test
    BaselineSave {
        /// Test name to store the snapshot under
        test: String,

        /// Path to a snapshot JSON file
        #[arg(long)]
        metrics: PathBuf,

        /// Baselines directory override
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Compare a metrics snapshot against the stored baseline
    Compare {
        /// Test name whose baseline to compare against
        test: String,

        /// Path to a snapshot JSON file for the current run
        #[arg(long)]
        metrics: PathBuf,

        /// Regression threshold in percent
        #[arg(long)]
        threshold: Option<f64>,

        /// Exit with failure when a regression is detected
        #[arg(long)]
        fail_on_regression: bool,

        /// Baselines directory override
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

impl BaselineCommands {
    /// Execute the selected baseline command.
    pub fn execute(&self) -> Result<(), String> {
        match self {
            BaselineCommands::Baselines { dir } => commands::baselines(dir.as_deref()),
            BaselineCommands::BaselineShow { test, dir } => {
                commands::baseline_show(test, dir.as_deref())
            }
            BaselineCommands::BaselineSave { test, metrics, dir } => {
                commands::baseline_save(test, metrics, dir.as_deref())
            }
            BaselineCommands::Compare {
                test,
                metrics,
                threshold,
                fail_on_regression,
                dir,
            } => commands::compare(test, metrics, *threshold, *fail_on_regression, dir.as_deref()),
        }
    }
}
