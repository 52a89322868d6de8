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

use std::path::Path;
use std::time::SystemTime;

use log::debug;

use crate::errors::{Error, Result};
use crate::models::{Buildfile, Target};

/// Whether a target has to run, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    /// Phony targets always run.
    Phony,

    /// The file the target produces does not exist.
    Missing,

    /// The prerequisite is newer than the file the target produces, or it is
    /// a phony target.
    Outdated { prerequisite: String },

    UpToDate,
}

impl Freshness {
    /// Compares the file produced by `target` against its prerequisites,
    /// all of them relative to `directory`.
    ///
    /// Prerequisites that are neither a target of `buildfile` nor an
    /// existing file are an error: there is no way to make them.
    pub fn check(target: &Target, buildfile: &Buildfile, directory: &Path) -> Result<Self> {
        let mut prerequisites = Vec::with_capacity(target.prerequisites.len());
        for prerequisite in &target.prerequisites {
            let rule = buildfile.find(prerequisite);
            let modified = modified(&directory.join(prerequisite))?;
            if rule.is_none() && modified.is_none() {
                return Err(Error::NoRule {
                    prerequisite: prerequisite.clone(),
                    needed_by: target.name.clone(),
                });
            }
            prerequisites.push((prerequisite, rule.is_some_and(|r| r.phony), modified));
        }

        if target.phony {
            return Ok(Freshness::Phony);
        }
        let Some(target_modified) = modified(&directory.join(&target.name))? else {
            return Ok(Freshness::Missing);
        };

        for (prerequisite, phony, modified) in prerequisites {
            let outdated = match modified {
                _ if phony => true,
                Some(modified) => modified > target_modified,
                // Only reachable when the prerequisite has a rule that did not produce its file
                None => true,
            };
            if outdated {
                debug!("'{}' is older than '{prerequisite}'", target.name);
                return Ok(Freshness::Outdated {
                    prerequisite: prerequisite.clone(),
                });
            }
        }
        Ok(Freshness::UpToDate)
    }

    pub fn needs_run(&self) -> bool {
        !matches!(self, Freshness::UpToDate)
    }
}

fn modified(path: &Path) -> Result<Option<SystemTime>> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata.modified()?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
