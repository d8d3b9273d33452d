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

//! Params command - emit parameter sets

use super::load_fixture;

/// Print parameter sets, one tab-separated line per record.
///
/// The first line is the header (the fixture's field names); each
/// following line is one record's values in the same order, ready to be
/// piped into a parametrized runner.
pub fn params(file: &str) -> Result<(), String> {
    let set = load_fixture(file)?;

    println!("{}", set.field_names().join("\t"));
    for tuple in set.parameter_sets() {
        let line: Vec<String> = tuple.iter().map(ToString::to_string).collect();
        println!("{}", line.join("\t"));
    }
    Ok(())
}
