// (C) Copyright IBM Corp. 2025.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeMap;

use log::debug;

use crate::errors::{Error, Result};

pub const CC: &str = "CC";
pub const CFLAGS: &str = "CFLAGS";
pub const PY_FILES: &str = "PY_FILES";
pub const PYTHON: &str = "PYTHON";
pub const LINTER: &str = "LINTER";

/// Names and default values of every variable the recipes read.
const DEFAULTS: [(&str, &str); 5] = [
    (CC, "cc"),
    (CFLAGS, "-Wall -Wextra"),
    (PY_FILES, "*.py"),
    (PYTHON, "python3"),
    (LINTER, "pylint"),
];

/// Variables used to expand the recipes into command lines.
///
/// Values are layered: the built-in defaults, then the process environment
/// (see [`Variables::from_env`]) and finally explicit assignments made with
/// [`Variables::set`] or [`Variables::apply_assignment`], which typically come
/// from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variables {
    values: BTreeMap<String, String>,
}

impl Default for Variables {
    fn default() -> Self {
        Self {
            values: DEFAULTS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl Variables {
    /// Default values overridden by the ones found in the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut variables = Self::default();
        for (name, _) in DEFAULTS {
            if let Some(value) = lookup(name) {
                debug!("Variable {name} taken from the environment: '{value}'");
                variables.set(name, value);
            }
        }
        variables
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Applies an assignment written as `NAME=VALUE`.
    ///
    /// The value may be empty (`CFLAGS=`) and may itself contain `=`.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let (name, value) = parse_assignment(assignment)?;
        debug!("Variable {name} overridden: '{value}'");
        self.set(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Splits the value of a variable into words, the way the shell would
    /// split an unquoted expansion. Unknown variables expand to nothing.
    pub fn words(&self, name: &str) -> Vec<String> {
        self.get(name)
            .map(|value| value.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    match assignment.split_once('=') {
        Some((name, value)) if is_valid_name(name) => Ok((name.trim(), value)),
        _ => Err(Error::InvalidAssignment(assignment.to_string())),
    }
}

fn is_valid_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
