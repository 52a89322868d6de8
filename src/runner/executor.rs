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

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::ProcessRunner;
use crate::errors::{Error, Result};
use crate::models::{Action, Buildfile, Target};
use crate::plan::{Freshness, Plan};
use crate::variables::Variables;

/// What happened during a successful [`Executor::run`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    /// Targets whose recipe ran a command or removed files, in order.
    pub executed: Vec<String>,

    /// File targets that were already up to date.
    pub up_to_date: Vec<String>,
}

impl Report {
    pub fn nothing_done(&self) -> bool {
        self.executed.is_empty()
    }
}

/// Runs the targets of a [`Buildfile`] one after the other.
pub struct Executor<'a, R: ProcessRunner> {
    buildfile: &'a Buildfile,
    variables: &'a Variables,
    runner: R,
    directory: PathBuf,
}

impl<'a, R: ProcessRunner> Executor<'a, R> {
    pub fn new(
        buildfile: &'a Buildfile,
        variables: &'a Variables,
        runner: R,
        directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            buildfile,
            variables,
            runner,
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Brings `goals` (or the default goal if empty) up to date.
    ///
    /// Targets run in dependency order and each one blocks until its process
    /// exits. The first failure stops the whole run: no later target is
    /// started and the error is returned. A process exiting with a non-zero
    /// code becomes [`Error::ActionFailed`].
    pub fn run(&self, goals: &[&str]) -> Result<Report> {
        let plan = Plan::resolve(self.buildfile, goals)?;
        let mut report = Report::default();

        for target in plan.steps() {
            let freshness = Freshness::check(target, self.buildfile, &self.directory)?;
            if !freshness.needs_run() {
                debug!("'{}' is up to date", target.name);
                report.up_to_date.push(target.name.clone());
                continue;
            }
            debug!("'{}' needs to run: {freshness:?}", target.name);
            if self.execute(target)? {
                report.executed.push(target.name.clone());
            }
        }
        Ok(report)
    }

    /// Returns whether the recipe did anything at all.
    fn execute(&self, target: &Target) -> Result<bool> {
        match target.recipe.action(self.variables, &self.directory)? {
            Action::Nothing => Ok(false),
            Action::Run(command) => {
                info!("[{}] {command}", target.name);
                match self.runner.run(&command, &self.directory)? {
                    Some(0) => Ok(true),
                    code => Err(Error::ActionFailed {
                        target: target.name.clone(),
                        code,
                    }),
                }
            }
            Action::Remove(paths) => {
                for path in paths {
                    info!("[{}] removing '{}'", target.name, path.display());
                    self.runner.remove(&path)?;
                }
                Ok(true)
            }
        }
    }
}
